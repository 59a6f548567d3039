mod announcement;
mod notification;
mod notification_id;

pub use announcement::*;
pub use notification::*;
pub use notification_id::*;
