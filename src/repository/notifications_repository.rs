use super::{dto::InsertedNotification, dto::Notification, error::Error};
use crate::dto::{input, NotificationType};
use async_trait::async_trait;
use bson::oid::ObjectId;
use time::OffsetDateTime;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsRepository: Send + Sync {
    ///
    /// Inserts new notification for the user. Record starts unread.
    ///
    async fn insert(
        &self,
        user_id: Uuid,
        notification_type: NotificationType,
        title: String,
        body: String,
        link: Option<String>,
        created_at: OffsetDateTime,
    ) -> Result<InsertedNotification, Error>;

    ///
    /// Updates notification read flag.
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when
    ///     - notification does not exist
    ///     - notification belongs to another user
    ///
    async fn update_read(&self, id: ObjectId, user_id: Uuid, read: bool) -> Result<(), Error>;

    ///
    /// Finds user's notifications sorted descending by creation date.
    ///
    async fn find_many(
        &self,
        user_id: Uuid,
        pagination: input::Pagination,
    ) -> Result<Vec<Notification>, Error>;
}
