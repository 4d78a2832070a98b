//! Shared domain vocabulary.

pub use taskclass_api_types::Role;

/// Anything that can live in a synchronized list.
///
/// The identifier is opaque, remote-assigned, and immutable; list
/// synchronizers use it for local delete mutation only and never interpret
/// its contents.
pub trait ListEntry {
    fn entry_id(&self) -> &str;
}
