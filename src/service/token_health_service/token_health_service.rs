use super::dto::TokenFailure;
use async_trait::async_trait;

///
/// Retires device tokens the provider reported as permanently dead.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenHealthService: Send + Sync {
    ///
    /// Deactivates the token of every permanent failure; transient
    /// failures are logged and left untouched. Reconciling the same
    /// permanent failure twice is not an error.
    ///
    async fn reconcile_failures(&self, failures: Vec<TokenFailure>);
}
