use super::{
    dto::{BatchResult, ChunkOutcome, PushDispatchServiceConfig},
    PushDispatchService,
};
use crate::{
    repository::ActiveToken,
    service::{
        push_provider::{PushPayload, PushProvider},
        token_health_service::{TokenFailure, TokenHealthService},
    },
};
use async_trait::async_trait;
use futures_util::future;
use std::sync::Arc;

pub struct PushDispatchServiceImpl {
    config: PushDispatchServiceConfig,
    push_provider: Arc<dyn PushProvider>,
    token_health_service: Arc<dyn TokenHealthService>,
}

impl PushDispatchServiceImpl {
    pub fn new(
        config: PushDispatchServiceConfig,
        push_provider: Arc<dyn PushProvider>,
        token_health_service: Arc<dyn TokenHealthService>,
    ) -> Self {
        Self {
            config,
            push_provider,
            token_health_service,
        }
    }

    async fn dispatch_chunk(&self, chunk: &[ActiveToken], payload: &PushPayload) -> ChunkOutcome {
        let tokens = chunk
            .iter()
            .map(|active_token| active_token.token.clone())
            .collect::<Vec<_>>();

        let outcomes = match self.push_provider.send_multicast(&tokens, payload).await {
            Ok(outcomes) => outcomes,
            Err(err) => {
                tracing::warn!(%err, size = chunk.len(), "multicast call failed");
                return ChunkOutcome {
                    success_count: 0,
                    failure_count: chunk.len(),
                    failures: Vec::new(),
                };
            }
        };

        let mut success_count = 0;
        let mut failures = Vec::new();
        for (active_token, outcome) in chunk.iter().zip(outcomes) {
            match outcome.error {
                None => success_count += 1,
                Some(reason) => failures.push(TokenFailure {
                    token_id: active_token.id,
                    reason,
                }),
            }
        }

        ChunkOutcome {
            success_count,
            failure_count: chunk.len() - success_count,
            failures,
        }
    }
}

#[async_trait]
impl PushDispatchService for PushDispatchServiceImpl {
    #[tracing::instrument(
        name = "Push Dispatch",
        skip_all,
        fields(tokens = tokens.len(), tag = %payload.tag)
    )]
    async fn dispatch(&self, tokens: Vec<ActiveToken>, payload: PushPayload) -> BatchResult {
        if tokens.is_empty() {
            tracing::debug!("audience has no reachable device");
            return BatchResult::default();
        }
        if !self.push_provider.available() {
            tracing::warn!("push provider not configured, skipping push delivery");
            return BatchResult::default();
        }

        // chunks() panics on 0
        let batch_limit = self.config.batch_limit.max(1);

        let dispatches = tokens
            .chunks(batch_limit)
            .map(|chunk| self.dispatch_chunk(chunk, &payload));
        let chunks = future::join_all(dispatches).await;

        let result = BatchResult { chunks };
        tracing::info!(
            multicasts = result.chunks.len(),
            success = result.success_count(),
            failure = result.failure_count(),
            "push dispatch finished"
        );

        let failures = result.failures();
        if !failures.is_empty() {
            self.token_health_service.reconcile_failures(failures).await;
        }

        result
    }
}
