#[derive(Debug, Clone)]
pub struct PushDispatchServiceConfig {
    ///
    /// Hard multicast size limit of the push provider.
    /// Observed provider limit is 500 tokens per call.
    ///
    pub batch_limit: usize,
}
