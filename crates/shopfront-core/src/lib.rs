//! # shopfront-core: Pure State Logic for Shopfront
//!
//! This crate is the **heart** of the Shopfront mobile shop. It contains the
//! whole client-side state model as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Shopfront Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation Layer (mobile UI)                  │   │
//! │  │    Product list ──► Cart screen ──► Checkout confirmation       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ snapshots / dispatch / subscribe       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  shopfront-store (aggregator)                   │   │
//! │  │    Store, CatalogSource, fetch driver                           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shopfront-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  catalog  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  Catalog  │  │   │
//! │  │   │ ProductId │  │  totals   │  │ LineItem  │  │ FetchPhase│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE REDUCERS                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog domain types (Product, ProductId)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart reducer and derived totals
//! - [`catalog`] - Catalog fetch state machine
//! - [`state`] - Composed state tree and the closed action set
//!
//! ## Design Principles
//!
//! 1. **Pure Reducers**: every transition is a function of (state, action)
//! 2. **No I/O**: network, rendering and dialogs are FORBIDDEN here
//! 3. **Integer Money**: all monetary values are cents (i64), never floats
//! 4. **Total Operations**: cart inputs are normalized, never rejected

pub mod cart;
pub mod catalog;
pub mod money;
pub mod state;
pub mod types;

// Re-exports for convenience: `use shopfront_core::Cart` instead of
// `use shopfront_core::cart::Cart`.
pub use cart::{Cart, CartAction, CartTotals, LineItem};
pub use catalog::{Catalog, CatalogEvent, FetchPhase};
pub use money::Money;
pub use state::{Action, AppState};
pub use types::{Product, ProductId};
