use serde::{Deserialize, Serialize};
use strum::AsRefStr;

/// Closed set of notification types the portal raises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    NewMessage,
    RequestApproved,
    RequestRejected,
    NewPost,
    NewPoll,
    NewJobPosting,
    NewMarketplaceItem,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn serialize_screaming_snake_case() {
        let json = serde_json::to_string(&NotificationType::NewMessage).unwrap();

        assert_eq!(json, r#""NEW_MESSAGE""#);
    }

    #[test]
    fn deserialize_screaming_snake_case() {
        let notification_type: NotificationType =
            serde_json::from_str(r#""REQUEST_APPROVED""#).unwrap();

        assert_eq!(notification_type, NotificationType::RequestApproved);
    }

    #[test]
    fn as_ref_matches_serde_name() {
        assert_eq!(NotificationType::NewJobPosting.as_ref(), "NEW_JOB_POSTING");
    }
}
