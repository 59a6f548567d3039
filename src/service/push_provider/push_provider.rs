use super::{dto::PushPayload, dto::SendOutcome, error::Error};
use async_trait::async_trait;

///
/// External push provider as a capability. A deployment without push
/// configuration still carries an implementation, it just reports
/// itself unavailable so callers can short-circuit cleanly.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PushProvider: Send + Sync {
    ///
    /// Whether the provider is configured and able to accept sends
    ///
    fn available(&self) -> bool;

    ///
    /// Sends one multicast addressing every token in `tokens`.
    /// Returned outcomes correspond to `tokens` by index.
    ///
    /// ### Errors
    /// - [Error::Unavailable] when the provider is not configured
    /// - transport and authorization errors fail the whole call;
    /// per-token failures are reported inside the outcomes instead
    ///
    async fn send_multicast(
        &self,
        tokens: &[String],
        payload: &PushPayload,
    ) -> Result<Vec<SendOutcome>, Error>;
}
