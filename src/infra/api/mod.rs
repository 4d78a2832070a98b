//! HTTP clients for the TaskClass API, one per resource kind.
//!
//! Each client translates page windows and free-text queries into requests
//! against the remote and normalizes wire records into domain entities.
//! The clients hold no list state; they are freely shared across screens.

mod auth;
mod client;
mod error;
mod posts;
mod students;
mod teachers;

pub use auth::AuthApi;
pub use client::ApiClient;
pub use error::ApiError;
pub use posts::PostsApi;
pub use students::StudentsApi;
pub use teachers::{AccountPage, TeachersApi};

use serde::Serialize;
use tracing::warn;

pub(crate) fn to_body<T: Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|err| ApiError::InvalidInput(err.to_string()))
}

/// Normalize a batch of wire records, skipping any the remote served
/// without an identifier rather than failing the whole page.
pub(crate) fn collect_valid<R, T>(
    records: Vec<R>,
    kind: &'static str,
    convert: impl Fn(R) -> Option<T>,
) -> Vec<T> {
    let mut items = Vec::with_capacity(records.len());
    for record in records {
        match convert(record) {
            Some(item) => items.push(item),
            None => warn!(
                target: "taskclass::api",
                kind,
                "dropping record without identifier"
            ),
        }
    }
    items
}
