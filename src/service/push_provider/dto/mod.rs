mod failure_reason;
mod fcm_models;
mod push_payload;
mod send_outcome;
mod service_account_key;

pub use failure_reason::*;
pub use fcm_models::*;
pub use push_payload::*;
pub use send_outcome::*;
pub use service_account_key::*;
