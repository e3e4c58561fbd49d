//! # Catalog Source Boundary
//!
//! The seam between the store and whatever supplies product data.
//!
//! The store does not care about transport, retries or timeouts; those are
//! the source's problem. The store triggers a fetch and reacts to exactly
//! one settlement per trigger: a product list or a failure message.

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use shopfront_core::Product;

/// The future a catalog source returns from [`CatalogSource::fetch`].
///
/// Boxed so the trait stays object-safe: the store holds sources as
/// `Arc<dyn CatalogSource>` injected by the host.
pub type SourceFuture = Pin<Box<dyn Future<Output = Result<Vec<Product>, SourceError>> + Send>>;

/// An asynchronous supplier of the product list.
///
/// Implemented by the host: an HTTP client in production, a seeded in-memory
/// source in the demo shell, stubs in tests.
pub trait CatalogSource: Send + Sync {
    /// Starts one fetch. Resolves to the full product list or a failure.
    fn fetch(&self) -> SourceFuture;
}

/// Failure of a catalog fetch.
///
/// The one error kind in the system. Its message is what lands in
/// `Catalog.error` and what the product screen shows next to the retry
/// button; keep it human-readable.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct SourceError {
    /// Human-readable description, e.g. `"Network error"`.
    pub message: String,
}

impl SourceError {
    /// Creates a source error from any displayable message.
    pub fn new(message: impl Into<String>) -> Self {
        SourceError {
            message: message.into(),
        }
    }
}

impl From<String> for SourceError {
    fn from(message: String) -> Self {
        SourceError { message }
    }
}

impl From<&str> for SourceError {
    fn from(message: &str) -> Self {
        SourceError::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error_display() {
        let err = SourceError::new("Network error");
        assert_eq!(err.to_string(), "Network error");
    }
}
