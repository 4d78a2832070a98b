//! Application services: the list synchronization protocol and the session
//! capability consumed by its callers.

pub mod lists;
pub mod session;
