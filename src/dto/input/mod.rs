mod announcement;
mod notification;
mod pagination;

pub use announcement::*;
pub use notification::*;
pub use pagination::*;
