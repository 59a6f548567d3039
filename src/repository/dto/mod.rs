mod active_token;
mod device_token_find_entity;
mod inserted_notification;
mod notification;
mod notification_find_entity;

pub use active_token::*;
pub use device_token_find_entity::*;
pub use inserted_notification::*;
pub use notification::*;
pub use notification_find_entity::*;
