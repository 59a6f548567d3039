//!
//! Notification fan-out and delivery engine of the internal portal.
//!
//! Business actions call [`service::notifications_service::NotificationsService`]
//! to raise notifications; the engine persists the in-app record, fans the
//! push payload out to the user's registered devices and signals connected
//! clients through the realtime event bus.
//!

pub mod application;
pub mod dto;
pub mod error;
pub mod repository;
pub mod service;
