use crate::dto::NotificationType;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Notification {
    pub notification_type: NotificationType,
    pub title: String,
    pub body: String,
    pub link: Option<String>,
}
