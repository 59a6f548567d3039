mod batch_result;
mod push_dispatch_service_config;

pub use batch_result::*;
pub use push_dispatch_service_config::*;
