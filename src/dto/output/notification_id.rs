use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct NotificationId {
    pub id: String,
}
