use crate::{dto::NotificationType, repository};
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: String,
    pub notification_type: NotificationType,
    pub title: String,
    pub body: String,
    pub link: Option<String>,
    pub read: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<repository::Notification> for Notification {
    fn from(notification: repository::Notification) -> Self {
        Self {
            id: notification.id.to_hex(),
            notification_type: notification.notification_type,
            title: notification.title,
            body: notification.body,
            link: notification.link,
            read: notification.read,
            created_at: notification.created_at,
        }
    }
}

impl From<repository::InsertedNotification> for Notification {
    fn from(notification: repository::InsertedNotification) -> Self {
        Self {
            id: notification.id.to_hex(),
            notification_type: notification.notification_type,
            title: notification.title,
            body: notification.body,
            link: notification.link,
            read: notification.read,
            created_at: notification.created_at,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bson::oid::ObjectId;
    use serde_json::Value;

    #[test]
    fn notification_json_serialize_ok() {
        let id = ObjectId::new();
        let notification = Notification::from(repository::InsertedNotification {
            id,
            user_id: uuid::Uuid::new_v4(),
            notification_type: NotificationType::NewMessage,
            title: "Nová zpráva".to_string(),
            body: "Máte novou zprávu".to_string(),
            link: Some("/messages/42".to_string()),
            read: false,
            created_at: OffsetDateTime::now_utc(),
        });

        let json = serde_json::to_string(&notification).unwrap();

        let object = serde_json::from_str::<Value>(&json).unwrap();
        let object = object.as_object().unwrap();
        assert_eq!(object.get("id").unwrap().as_str().unwrap(), id.to_hex());
        assert_eq!(
            object.get("notification_type").unwrap().as_str().unwrap(),
            "NEW_MESSAGE"
        );
        assert_eq!(object.get("read").unwrap().as_bool().unwrap(), false);
        assert_eq!(
            object.get("link").unwrap().as_str().unwrap(),
            "/messages/42"
        );
    }
}
