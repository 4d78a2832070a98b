//! Capability seam between list synchronizers and a remote catalog.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::ListEntry;

/// One paginated fetch request. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u32,
    pub limit: u32,
}

impl PageWindow {
    pub fn new(page: u32, limit: u32) -> Self {
        debug_assert!(page >= 1, "pages are 1-based");
        Self { page, limit }
    }

    pub fn first(limit: u32) -> Self {
        Self::new(1, limit)
    }
}

/// Failure kinds a resource source surfaces to a synchronizer.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    /// Network or HTTP failure (offline, timeout, non-2xx status).
    #[error("transport failure: {0}")]
    Transport(String),
    /// The response could not be mapped to the normalized item shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// The remote refused a privileged mutation.
    #[error("operation rejected as unauthorized")]
    Unauthorized,
}

/// Fetches pages, searches, and deletes for one resource kind.
///
/// Implementations hold no list state and are freely shared across
/// screens; all state lives in the synchronizer that consumes them.
#[async_trait]
pub trait ResourceSource: Send + Sync {
    type Item: ListEntry + Clone + Send + Sync + 'static;

    /// Fetch one page of the collection in server-defined order.
    async fn fetch_page(&self, window: PageWindow) -> Result<Vec<Self::Item>, SourceError>;

    /// Fetch the flat, unpaginated result set matching `query`.
    async fn search(&self, query: &str) -> Result<Vec<Self::Item>, SourceError>;

    /// Delete a single item by identifier.
    async fn delete(&self, id: &str) -> Result<(), SourceError>;
}
