mod disabled_push_provider;
mod dto;
mod error;
mod fcm_push_provider;
mod push_provider;

pub use disabled_push_provider::*;
pub use dto::*;
pub use error::*;
pub use fcm_push_provider::*;
pub use push_provider::*;
