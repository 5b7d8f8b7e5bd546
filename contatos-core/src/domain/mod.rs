//! Core domain entities
//!
//! Pure data structures and the search filter - no I/O.

mod contact;
mod notification;
pub mod result;
pub mod search;

pub use contact::Contact;
pub use notification::{Notification, NotificationKind};
pub use search::filter_contacts;
