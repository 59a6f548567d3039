use crate::dto::NotificationType;
use bson::oid::ObjectId;
use time::OffsetDateTime;
use uuid::Uuid;

pub struct InsertedNotification {
    pub id: ObjectId,
    pub user_id: Uuid,
    pub notification_type: NotificationType,
    pub title: String,
    pub body: String,
    pub link: Option<String>,
    pub read: bool,
    pub created_at: OffsetDateTime,
}
