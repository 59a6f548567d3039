use serde::Deserialize;

///
/// All-user announcement. Delivered through push only,
/// no per-user notification record is created for it.
///
#[derive(Debug, Clone, Deserialize)]
pub struct Announcement {
    pub title: String,
    pub body: String,
    pub link: Option<String>,
}
