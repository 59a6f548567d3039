#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serializing event failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("publishing event failed: {0}")]
    Publish(#[from] amqprs::error::Error),
}
