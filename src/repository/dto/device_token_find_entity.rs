use bson::oid::ObjectId;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct DeviceTokenFindEntity {
    pub _id: ObjectId,
}
