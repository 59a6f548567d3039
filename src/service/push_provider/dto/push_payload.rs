use std::collections::HashMap;

///
/// Content of one push delivery.
///
/// `tag` coalesces deliveries of the same logical notification: every
/// device of the audience receives the same tag, so a client showing
/// the notification replaces any earlier rendering with the same tag
/// instead of stacking a duplicate.
///
#[derive(Debug, Clone)]
pub struct PushPayload {
    pub title: String,
    pub body: String,
    pub link: Option<String>,
    pub tag: String,
    pub icon: Option<String>,
    pub badge: Option<String>,
}

impl PushPayload {
    ///
    /// Flat key/value envelope transmitted as the provider's data payload.
    /// Optional fields are omitted rather than sent empty.
    ///
    pub fn to_data(&self) -> HashMap<String, String> {
        let mut data = HashMap::from([
            ("title".to_string(), self.title.clone()),
            ("body".to_string(), self.body.clone()),
            ("tag".to_string(), self.tag.clone()),
        ]);
        if let Some(link) = &self.link {
            data.insert("link".to_string(), link.clone());
        }
        if let Some(icon) = &self.icon {
            data.insert("icon".to_string(), icon.clone());
        }
        if let Some(badge) = &self.badge {
            data.insert("badge".to_string(), badge.clone());
        }

        data
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn to_data_contains_required_keys() {
        let payload = PushPayload {
            title: "Nová zpráva".to_string(),
            body: "Máte novou zprávu".to_string(),
            link: None,
            tag: "66b1f0a2".to_string(),
            icon: None,
            badge: None,
        };

        let data = payload.to_data();

        assert_eq!(data.get("title").unwrap(), "Nová zpráva");
        assert_eq!(data.get("body").unwrap(), "Máte novou zprávu");
        assert_eq!(data.get("tag").unwrap(), "66b1f0a2");
        assert!(!data.contains_key("link"));
        assert!(!data.contains_key("icon"));
        assert!(!data.contains_key("badge"));
    }

    #[test]
    fn to_data_contains_optional_keys_when_set() {
        let payload = PushPayload {
            title: "Nový inzerát".to_string(),
            body: "CNC operátor".to_string(),
            link: Some("/jobs".to_string()),
            tag: "broadcast-1722950400000".to_string(),
            icon: Some("/icons/icon-192.png".to_string()),
            badge: Some("/icons/badge-72.png".to_string()),
        };

        let data = payload.to_data();

        assert_eq!(data.get("link").unwrap(), "/jobs");
        assert_eq!(data.get("icon").unwrap(), "/icons/icon-192.png");
        assert_eq!(data.get("badge").unwrap(), "/icons/badge-72.png");
    }
}
