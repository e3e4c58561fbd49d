//! # Domain Types
//!
//! Read-only catalog types supplied by the external product source.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────────────────────────┐    │
//! │  │    Product      │        │  ProductId                          │    │
//! │  │  ─────────────  │        │  ─────────────────────────────────  │    │
//! │  │  id (ProductId) │        │  i64 newtype; the upstream catalog  │    │
//! │  │  title          │        │  hands out stable integer ids, and  │    │
//! │  │  price_cents    │        │  the cart keys line items by it     │    │
//! │  │  description    │        └─────────────────────────────────────┘    │
//! │  │  image          │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product Id
// =============================================================================

/// Stable integer identity of a product.
///
/// The catalog source owns id allocation; the state core only ever compares
/// ids for equality (cart merge, removal, quantity updates).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct ProductId(i64);

impl ProductId {
    /// Creates a product id from its raw integer value.
    #[inline]
    pub const fn new(id: i64) -> Self {
        ProductId(id)
    }

    /// Returns the raw integer value.
    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        ProductId(id)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available in the catalog.
///
/// Products are read-only from the state core's perspective: they arrive from
/// the catalog source and are never mutated, only replaced wholesale when a
/// fetch settles successfully.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique, stable identifier.
    pub id: ProductId,

    /// Display name shown in the product list and cart.
    pub title: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Marketing description for the product detail card.
    pub description: String,

    /// Image URI for the product card.
    pub image: String,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
