//!
//! Module with all dtos that are passed between the engine and its callers
//!

pub mod input;
pub mod output;

mod device_class;
mod notification_type;

pub use device_class::*;
pub use notification_type::*;
