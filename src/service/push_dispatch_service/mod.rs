mod dto;
mod push_dispatch_service;
mod push_dispatch_service_impl;

pub use dto::*;
pub use push_dispatch_service::*;
pub use push_dispatch_service_impl::*;
