use super::{dto::RealtimeEvent, error::Error};
use async_trait::async_trait;

///
/// Producer side of the realtime event bus
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RealtimeService: Send + Sync {
    async fn emit(&self, event: RealtimeEvent) -> Result<(), Error>;
}
