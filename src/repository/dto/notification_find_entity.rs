use super::Notification;
use crate::dto::NotificationType;
use bson::{oid::ObjectId, DateTime};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct NotificationFindEntity {
    pub _id: ObjectId,
    pub notification_type: NotificationType,
    pub title: String,
    pub body: String,
    pub link: Option<String>,
    pub read: bool,
    pub created_at: DateTime,
}

impl From<NotificationFindEntity> for Notification {
    fn from(entity: NotificationFindEntity) -> Self {
        Self {
            id: entity._id,
            notification_type: entity.notification_type,
            title: entity.title,
            body: entity.body,
            link: entity.link,
            read: entity.read,
            created_at: entity.created_at.into(),
        }
    }
}
