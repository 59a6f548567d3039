mod device_tokens_repository;
mod device_tokens_repository_impl;
mod dto;
mod entity;
mod error;
mod notifications_repository;
mod notifications_repository_impl;

pub use device_tokens_repository::*;
pub use device_tokens_repository_impl::*;
pub use dto::*;
pub use error::*;
pub use notifications_repository::*;
pub use notifications_repository_impl::*;
