pub mod notifications_service;
pub mod push_dispatch_service;
pub mod push_provider;
pub mod realtime_service;
pub mod token_health_service;
