use super::{dto::ActiveToken, error::Error};
use crate::dto::DeviceClass;
use async_trait::async_trait;
use bson::oid::ObjectId;
use time::OffsetDateTime;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeviceTokensRepository: Send + Sync {
    ///
    /// Registers a device token or refreshes an existing registration.
    /// Registrations are keyed by the provider token; re-registering
    /// an existing token reactivates it and bumps `last_seen_at`.
    ///
    /// ### Errors
    /// - [Error::InsertUniqueViolation] when two registrations of the
    /// same token race each other
    ///
    async fn upsert(
        &self,
        user_id: Uuid,
        token: String,
        device_class: DeviceClass,
        label: Option<String>,
        last_seen_at: OffsetDateTime,
    ) -> Result<ObjectId, Error>;

    ///
    /// Finds user's active device tokens.
    ///
    async fn find_active(&self, user_id: Uuid) -> Result<Vec<ActiveToken>, Error>;

    ///
    /// Finds every active device token in the system.
    ///
    async fn find_all_active(&self) -> Result<Vec<ActiveToken>, Error>;

    ///
    /// Marks device token inactive. Deactivating a token that is
    /// already inactive succeeds without modifying anything.
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when token does not exist
    ///
    async fn deactivate(&self, id: ObjectId) -> Result<(), Error>;
}
