use super::{dto::TokenFailure, TokenHealthService};
use crate::repository::{self, DeviceTokensRepository};
use async_trait::async_trait;
use std::sync::Arc;

pub struct TokenHealthServiceImpl {
    device_tokens_repository: Arc<dyn DeviceTokensRepository>,
}

impl TokenHealthServiceImpl {
    pub fn new(device_tokens_repository: Arc<dyn DeviceTokensRepository>) -> Self {
        Self {
            device_tokens_repository,
        }
    }

    async fn deactivate(&self, failure: &TokenFailure) {
        let deactivate_result = self
            .device_tokens_repository
            .deactivate(failure.token_id)
            .await;

        match deactivate_result {
            Ok(()) => {
                tracing::info!(
                    token_id = %failure.token_id,
                    reason = failure.reason.as_ref(),
                    "deactivated device token"
                );
            }
            Err(repository::Error::NoDocumentUpdated) => {
                tracing::warn!(
                    token_id = %failure.token_id,
                    "device token to deactivate not found"
                );
            }
            Err(err) => {
                tracing::error!(
                    %err,
                    token_id = %failure.token_id,
                    "deactivating device token failed"
                );
            }
        }
    }
}

#[async_trait]
impl TokenHealthService for TokenHealthServiceImpl {
    async fn reconcile_failures(&self, failures: Vec<TokenFailure>) {
        for failure in failures {
            if failure.reason.is_permanent() {
                self.deactivate(&failure).await;
            } else {
                tracing::debug!(
                    token_id = %failure.token_id,
                    reason = failure.reason.as_ref(),
                    "transient push failure, token left active"
                );
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{repository::MockDeviceTokensRepository, service::push_provider::FailureReason};
    use bson::oid::ObjectId;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn reconcile_failures_permanent_failure_deactivates_token() {
        let token_id = ObjectId::new();

        let mut repository = MockDeviceTokensRepository::new();
        repository
            .expect_deactivate()
            .with(eq(token_id))
            .times(1)
            .returning(|_| Ok(()));
        let service = TokenHealthServiceImpl::new(Arc::new(repository));

        service
            .reconcile_failures(vec![TokenFailure {
                token_id,
                reason: FailureReason::Unregistered,
            }])
            .await;
    }

    #[tokio::test]
    async fn reconcile_failures_malformed_token_deactivated() {
        let mut repository = MockDeviceTokensRepository::new();
        repository
            .expect_deactivate()
            .times(1)
            .returning(|_| Ok(()));
        let service = TokenHealthServiceImpl::new(Arc::new(repository));

        service
            .reconcile_failures(vec![TokenFailure {
                token_id: ObjectId::new(),
                reason: FailureReason::InvalidToken,
            }])
            .await;
    }

    #[tokio::test]
    async fn reconcile_failures_transient_failures_leave_tokens_active() {
        let mut repository = MockDeviceTokensRepository::new();
        repository.expect_deactivate().never();
        let service = TokenHealthServiceImpl::new(Arc::new(repository));

        let failures = [
            FailureReason::QuotaExceeded,
            FailureReason::Unavailable,
            FailureReason::Internal,
            FailureReason::Unknown,
        ]
        .into_iter()
        .map(|reason| TokenFailure {
            token_id: ObjectId::new(),
            reason,
        })
        .collect();

        service.reconcile_failures(failures).await;
    }

    #[tokio::test]
    async fn reconcile_failures_same_failure_twice_idempotent() {
        let token_id = ObjectId::new();

        let mut repository = MockDeviceTokensRepository::new();
        repository
            .expect_deactivate()
            .with(eq(token_id))
            .times(2)
            .returning(|_| Ok(()));
        let service = TokenHealthServiceImpl::new(Arc::new(repository));

        let failure = TokenFailure {
            token_id,
            reason: FailureReason::Unregistered,
        };

        service.reconcile_failures(vec![failure.clone()]).await;
        service.reconcile_failures(vec![failure]).await;
    }

    #[tokio::test]
    async fn reconcile_failures_missing_token_not_an_error() {
        let mut repository = MockDeviceTokensRepository::new();
        repository
            .expect_deactivate()
            .returning(|_| Err(repository::Error::NoDocumentUpdated));
        let service = TokenHealthServiceImpl::new(Arc::new(repository));

        service
            .reconcile_failures(vec![TokenFailure {
                token_id: ObjectId::new(),
                reason: FailureReason::Unregistered,
            }])
            .await;
    }
}
