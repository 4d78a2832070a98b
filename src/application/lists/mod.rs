//! List synchronization: one reusable pagination/search protocol shared by
//! every resource list (posts, teachers, students).
//!
//! The protocol is split the same way the rest of the crate is layered: a
//! pure state machine (`machine`) that owns the list state and decides
//! which requests to issue, an async driver (`controller`) that runs those
//! requests against a `ResourceSource` and owns the search debounce timer,
//! and the capability seam (`source`) the infra adapters implement.

mod controller;
mod machine;
mod source;

pub use controller::{ListController, ListOptions};
pub use machine::{ListCommand, ListEvent, ListMachine, ListSnapshot};
pub use source::{PageWindow, ResourceSource, SourceError};
