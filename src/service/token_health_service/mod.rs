mod dto;
mod token_health_service;
mod token_health_service_impl;

pub use dto::*;
pub use token_health_service::*;
pub use token_health_service_impl::*;
