use crate::service::push_provider::FailureReason;
use bson::oid::ObjectId;

/// Failed delivery attempt of one registered device token
#[derive(Debug, Clone)]
pub struct TokenFailure {
    pub token_id: ObjectId,
    pub reason: FailureReason,
}
