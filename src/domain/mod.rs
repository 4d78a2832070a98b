//! Normalized domain entities for the TaskClass client.

pub mod accounts;
pub mod posts;
pub mod types;

pub use accounts::{Student, Teacher};
pub use posts::Post;
pub use types::{ListEntry, Role};
