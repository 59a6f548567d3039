mod dto;
mod error;
mod rabbitmq_realtime_service;
mod realtime_service;

pub use dto::*;
pub use error::*;
pub use rabbitmq_realtime_service::*;
pub use realtime_service::*;
