use crate::dto::NotificationType;
use bson::oid::ObjectId;
use time::OffsetDateTime;

pub struct Notification {
    pub id: ObjectId,
    pub notification_type: NotificationType,
    pub title: String,
    pub body: String,
    pub link: Option<String>,
    pub read: bool,
    pub created_at: OffsetDateTime,
}
