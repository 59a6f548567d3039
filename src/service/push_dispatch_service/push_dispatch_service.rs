use super::dto::BatchResult;
use crate::{repository::ActiveToken, service::push_provider::PushPayload};
use async_trait::async_trait;

///
/// Fans one push payload out to a set of active device tokens,
/// splitting the set into provider-size-bounded multicasts.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PushDispatchService: Send + Sync {
    ///
    /// Dispatches `payload` to every token in `tokens`. Never fails;
    /// an empty audience or a missing provider yields an empty result
    /// and per-chunk delivery failures are reported inside it.
    ///
    async fn dispatch(&self, tokens: Vec<ActiveToken>, payload: PushPayload) -> BatchResult;
}
