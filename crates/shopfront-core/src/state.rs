//! # Composed App State
//!
//! The single state tree and the closed action set routed over it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        AppState                                         │
//! │                                                                         │
//! │   Action::Cart(..) ────────────► cart: Cart                            │
//! │                                    items, totals                        │
//! │                                                                         │
//! │   Action::Catalog(..) ─────────► catalog: Catalog                      │
//! │                                    items, phase, error                  │
//! │                                                                         │
//! │  Each action touches exactly one branch; no derived value spans both.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::{Cart, CartAction};
use crate::catalog::{Catalog, CatalogEvent};

/// The single composed state tree.
///
/// Both branches are independently owned and mutated only through their own
/// reducer; observers always see a fully applied state, never a partial one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AppState {
    /// Shopping cart branch.
    pub cart: Cart,

    /// Product catalog branch.
    pub catalog: Catalog,
}

/// The closed set of state operations.
///
/// Routing is an exhaustive match over this sum type, so an unhandled
/// operation is a compile error, not a silently ignored string.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A cart mutation.
    Cart(CartAction),

    /// A catalog fetch lifecycle event.
    Catalog(CatalogEvent),
}

impl From<CartAction> for Action {
    fn from(action: CartAction) -> Self {
        Action::Cart(action)
    }
}

impl From<CatalogEvent> for Action {
    fn from(event: CatalogEvent) -> Self {
        Action::Catalog(event)
    }
}

impl AppState {
    /// Creates the initial state: empty cart, settled empty catalog.
    pub fn new() -> Self {
        AppState {
            cart: Cart::new(),
            catalog: Catalog::new(),
        }
    }

    /// Routes an action to exactly one branch reducer.
    ///
    /// Returns `false` when the action was dropped (a stale catalog
    /// settlement); cart actions always apply.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Cart(action) => {
                self.cart.apply(action);
                true
            }
            Action::Catalog(event) => self.catalog.apply(event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Product, ProductId};

    fn test_product(id: i64, price_cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {}", id),
            price_cents,
            description: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn test_actions_route_to_their_own_branch() {
        let mut state = AppState::new();

        state.apply(Action::Cart(CartAction::Add(test_product(1, 999))));
        assert_eq!(state.cart.item_count(), 1);
        assert!(state.catalog.items.is_empty()); // Catalog untouched

        state.apply(Action::Catalog(CatalogEvent::Started { generation: 1 }));
        assert!(state.catalog.is_loading());
        assert_eq!(state.cart.item_count(), 1); // Cart untouched
    }

    #[test]
    fn test_stale_catalog_event_reports_dropped() {
        let mut state = AppState::new();
        state.apply(Action::Catalog(CatalogEvent::Started { generation: 2 }));

        let applied = state.apply(Action::Catalog(CatalogEvent::Failed {
            generation: 1,
            message: "late".to_string(),
        }));

        assert!(!applied);
        assert!(state.catalog.is_loading());
    }

    #[test]
    fn test_state_snapshot_serializes_camel_case() {
        let state = AppState::new();
        let json = serde_json::to_value(&state).expect("serialize");

        assert!(json["cart"]["items"].is_array());
        assert!(json["catalog"]["items"].is_array());
        assert_eq!(json["catalog"]["phase"], "idle");
    }
}
