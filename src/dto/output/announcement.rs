use crate::dto::input;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Announcement {
    pub title: String,
    pub body: String,
    pub link: Option<String>,
}

impl From<input::Announcement> for Announcement {
    fn from(announcement: input::Announcement) -> Self {
        Self {
            title: announcement.title,
            body: announcement.body,
            link: announcement.link,
        }
    }
}
