use crate::service::token_health_service::TokenFailure;

///
/// Result of one dispatch call, one entry per issued multicast.
/// An empty result means no multicast was issued at all (empty
/// audience or unavailable provider).
///
#[derive(Debug, Default)]
pub struct BatchResult {
    pub chunks: Vec<ChunkOutcome>,
}

impl BatchResult {
    pub fn success_count(&self) -> usize {
        self.chunks.iter().map(|chunk| chunk.success_count).sum()
    }

    pub fn failure_count(&self) -> usize {
        self.chunks.iter().map(|chunk| chunk.failure_count).sum()
    }

    pub fn attempts(&self) -> usize {
        self.success_count() + self.failure_count()
    }

    pub fn failures(&self) -> Vec<TokenFailure> {
        self.chunks
            .iter()
            .flat_map(|chunk| chunk.failures.iter())
            .cloned()
            .collect()
    }
}

#[derive(Debug)]
pub struct ChunkOutcome {
    pub success_count: usize,
    pub failure_count: usize,

    ///
    /// Classified failures of the chunk. Empty when the whole
    /// multicast call failed before any per-token result existed.
    ///
    pub failures: Vec<TokenFailure>,
}
