use crate::{
    dto::{input, output},
    error::Error,
};
use async_trait::async_trait;
use uuid::Uuid;

///
/// Entry point of the delivery engine for business actions.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsService: Send + Sync {
    ///
    /// Raises a notification for one user: persists the in-app record,
    /// fans the push payload out to the user's active devices and signals
    /// the realtime bus.
    ///
    /// The durable record is the only guaranteed side effect. Push and
    /// realtime delivery are best-effort; their failures are logged and
    /// never surface here.
    ///
    /// ### Errors
    /// - [Error::Database] when persisting the record fails; no other
    /// channel is attempted then
    ///
    async fn notify(
        &self,
        user_id: Uuid,
        notification: input::Notification,
    ) -> Result<output::NotificationId, Error>;

    ///
    /// Pushes an announcement to every active device in the system and
    /// signals the realtime bus with the all-audience. No notification
    /// record is created. Failures are logged, never returned.
    ///
    async fn broadcast(&self, announcement: input::Announcement);
}
