use crate::repository;

///
/// Errors observable by callers of the engine.
///
/// Push and realtime outcomes never surface here; the durable
/// record is the only channel whose failure fails the call.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] repository::Error),
}
