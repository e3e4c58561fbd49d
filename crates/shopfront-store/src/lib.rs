//! # shopfront-store: The State Store Aggregator
//!
//! Owns the one [`AppState`](shopfront_core::AppState) tree and exposes the
//! three capabilities the presentation layer gets:
//!
//! 1. **Read**: [`Store::snapshot`] - the current composed state
//! 2. **Write**: [`Store::dispatch`] - submit one operation, get the new
//!    snapshot; plus [`Store::fetch_products`] to trigger the async catalog
//!    fetch
//! 3. **Observe**: [`Store::subscribe`] / [`Store::unsubscribe`] - change
//!    notification after every applied operation
//!
//! ## Concurrency Model
//! All mutations are synchronous and atomic with respect to observers. The
//! catalog fetch is the only asynchronous operation: it runs on tokio and
//! posts its settlement back through `dispatch`, so arbitrary cart
//! operations interleave freely with an in-flight fetch without either side
//! blocking the other.
//!
//! ## Modules
//!
//! - [`store`] - the `Store` aggregator and fetch driver
//! - [`source`] - the `CatalogSource` boundary and `SourceError`

pub mod source;
pub mod store;

pub use source::{CatalogSource, SourceError, SourceFuture};
pub use store::{FetchHandle, Store, SubscriptionId};
