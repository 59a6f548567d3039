use bson::oid::ObjectId;
use serde::Deserialize;

///
/// Active device token as read for a dispatch. The provider token
/// is addressed with `token`; `id` identifies the registry document
/// when a delivery failure has to be reconciled back into it.
///
#[derive(Debug, Clone, Deserialize)]
pub struct ActiveToken {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub token: String,
}
