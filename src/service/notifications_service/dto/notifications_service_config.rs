#[derive(Debug, Clone)]
pub struct NotificationsServiceConfig {
    ///
    /// Rendering hints attached to every push payload.
    /// The receiving client decides whether to use them.
    ///
    pub push_icon: Option<String>,
    pub push_badge: Option<String>,
}
