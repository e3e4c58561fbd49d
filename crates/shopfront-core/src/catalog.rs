//! # Catalog State
//!
//! The product catalog reducer: an explicit state machine for the
//! asynchronous fetch lifecycle.
//!
//! ## Fetch Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Fetch Lifecycle                              │
//! │                                                                         │
//! │            Started { gen }                                              │
//! │  ┌──────┐ ───────────────► ┌─────────┐                                 │
//! │  │ Idle │                  │ Pending │◄──────────────┐                 │
//! │  └──────┘                  └────┬────┘               │                 │
//! │                                 │                    │ Started         │
//! │            Succeeded { gen } ◄──┴──► Failed { gen }  │ (refresh)       │
//! │                     │                      │         │                 │
//! │               ┌─────▼─────┐          ┌─────▼────┐    │                 │
//! │               │ Succeeded │          │  Failed  │────┘                 │
//! │               └───────────┘          └──────────┘                      │
//! │                                                                         │
//! │  STALENESS: every settlement carries the generation of the fetch that  │
//! │  produced it. A settlement older than the latest Started is dropped,   │
//! │  so a slow first fetch can never overwrite a faster refresh.           │
//! │                                                                         │
//! │  Items survive Started and Failed transitions: the product list keeps  │
//! │  showing stale data during a pull-to-refresh and after an error.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Product;

// =============================================================================
// Fetch Phase
// =============================================================================

/// The phase of the catalog's asynchronous fetch state machine.
///
/// Richer than a bare `loading: bool` flag; `is_loading()` and `error()`
/// on [`Catalog`] give the product screen the surface it renders from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FetchPhase {
    /// No fetch has ever been triggered.
    Idle,
    /// A fetch is in flight.
    Pending,
    /// The latest fetch settled with a product list.
    Succeeded,
    /// The latest fetch settled with an error.
    Failed,
}

impl Default for FetchPhase {
    fn default() -> Self {
        FetchPhase::Idle
    }
}

// =============================================================================
// Catalog Events
// =============================================================================

/// Events produced by the fetch driver and consumed by the catalog reducer.
///
/// The generation ties a settlement back to the Started that opened it; the
/// fetch driver allocates generations monotonically.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEvent {
    /// A fetch was triggered.
    Started { generation: u64 },

    /// A fetch settled with the full product list (possibly empty).
    Succeeded {
        generation: u64,
        products: Vec<Product>,
    },

    /// A fetch settled with a human-readable failure message.
    Failed { generation: u64, message: String },
}

impl CatalogEvent {
    /// Returns the generation of the fetch this event belongs to.
    pub fn generation(&self) -> u64 {
        match self {
            CatalogEvent::Started { generation }
            | CatalogEvent::Succeeded { generation, .. }
            | CatalogEvent::Failed { generation, .. } => *generation,
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The product catalog branch of the state tree.
///
/// ## Invariants
/// Exactly one of the following holds at any observation point:
/// - `Pending` with no error (fetch in flight, stale items still visible)
/// - `Idle`/`Succeeded` with no error (items possibly empty)
/// - `Failed` with an error message, items left at their pre-fetch value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Catalog {
    /// Products from the last successful fetch, in source order.
    pub items: Vec<Product>,

    /// Current phase of the fetch state machine.
    pub phase: FetchPhase,

    /// Failure message from the latest settled fetch, if it failed.
    pub error: Option<String>,

    /// Generation of the most recently started fetch.
    pub generation: u64,
}

impl Catalog {
    /// Creates an empty, settled catalog (the initial app state).
    pub fn new() -> Self {
        Catalog {
            items: Vec::new(),
            phase: FetchPhase::Idle,
            error: None,
            generation: 0,
        }
    }

    /// Applies a catalog event, mutating the catalog in place.
    ///
    /// Returns `false` when the event was dropped as stale (its generation
    /// predates the latest started fetch); callers can log that.
    pub fn apply(&mut self, event: CatalogEvent) -> bool {
        match event {
            CatalogEvent::Started { generation } => {
                if generation < self.generation {
                    return false;
                }
                self.generation = generation;
                self.phase = FetchPhase::Pending;
                // Items are deliberately kept: stale data stays on screen
                // during a reload (pull-to-refresh).
                self.error = None;
                true
            }
            CatalogEvent::Succeeded {
                generation,
                products,
            } => {
                if generation < self.generation {
                    return false;
                }
                self.phase = FetchPhase::Succeeded;
                self.items = products;
                self.error = None;
                true
            }
            CatalogEvent::Failed {
                generation,
                message,
            } => {
                if generation < self.generation {
                    return false;
                }
                self.phase = FetchPhase::Failed;
                self.error = Some(message);
                true
            }
        }
    }

    /// Whether a fetch is currently in flight.
    #[inline]
    pub fn is_loading(&self) -> bool {
        self.phase == FetchPhase::Pending
    }

    /// Failure message of the latest settled fetch, if any.
    #[inline]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
