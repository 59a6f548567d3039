mod rabbitmq_realtime_service_config;
mod realtime_event;

pub use rabbitmq_realtime_service_config::*;
pub use realtime_event::*;
