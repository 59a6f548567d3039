use crate::dto::NotificationType;
use bson::{DateTime, Uuid};
use serde::Serialize;

#[derive(Serialize)]
pub struct NotificationInsertEntity {
    pub user_id: Uuid,
    pub notification_type: NotificationType,
    pub title: String,
    pub body: String,
    pub link: Option<String>,
    pub read: bool,
    pub created_at: DateTime,
}

#[cfg(test)]
mod test {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn serialize_to_document_ok() {
        let entity = NotificationInsertEntity {
            user_id: Uuid::from(uuid::Uuid::from_u128(48120938012)),
            notification_type: NotificationType::RequestApproved,
            title: "Žádost schválena".to_string(),
            body: "Vaše žádost o dovolenou byla schválena".to_string(),
            link: None,
            read: false,
            created_at: DateTime::from(datetime!(2024-03-11 08:30:00 UTC)),
        };

        let document = bson::to_document(&entity).unwrap();

        assert_eq!(
            document.get_str("notification_type").unwrap(),
            "REQUEST_APPROVED"
        );
        assert_eq!(document.get_bool("read").unwrap(), false);
        let link = document.get("link").unwrap().as_null();
        assert!(matches!(link, Some(())));
        assert!(document.get_datetime("created_at").is_ok());
    }
}
