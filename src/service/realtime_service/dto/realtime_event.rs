use crate::dto::output;
use serde::Serialize;
use strum::AsRefStr;
use uuid::Uuid;

///
/// Instant signal for connected clients, consumed by the portal's
/// websocket gateway. Clients that miss it recover the state through
/// their own polling fallback, so delivery is best-effort.
///
#[derive(Debug, Clone, Serialize)]
pub struct RealtimeEvent {
    pub event: RealtimeEventKind,

    ///
    /// Addressed users; empty means every connected user
    ///
    pub user_ids: Vec<Uuid>,

    pub payload: RealtimePayload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RealtimeEventKind {
    NotificationCreated,
    Announcement,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RealtimePayload {
    Notification(output::Notification),
    Announcement(output::Announcement),
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::Value;

    #[test]
    fn event_json_shape_ok() {
        let user_id = Uuid::new_v4();
        let event = RealtimeEvent {
            event: RealtimeEventKind::Announcement,
            user_ids: vec![user_id],
            payload: RealtimePayload::Announcement(output::Announcement {
                title: "Odstávka systému".to_string(),
                body: "V sobotu od 8:00".to_string(),
                link: None,
            }),
        };

        let json = serde_json::to_string(&event).unwrap();

        let object = serde_json::from_str::<Value>(&json).unwrap();
        let object = object.as_object().unwrap();
        assert_eq!(object.get("event").unwrap().as_str().unwrap(), "ANNOUNCEMENT");
        assert_eq!(
            object.get("user_ids").unwrap().as_array().unwrap()[0]
                .as_str()
                .unwrap(),
            user_id.to_string()
        );
        // untagged payload serializes flat
        let payload = object.get("payload").unwrap().as_object().unwrap();
        assert_eq!(
            payload.get("title").unwrap().as_str().unwrap(),
            "Odstávka systému"
        );
    }

    #[test]
    fn event_kind_routing_key_names() {
        assert_eq!(
            RealtimeEventKind::NotificationCreated.as_ref(),
            "NOTIFICATION_CREATED"
        );
        assert_eq!(RealtimeEventKind::Announcement.as_ref(), "ANNOUNCEMENT");
    }
}
