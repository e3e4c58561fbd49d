//! # Cart State
//!
//! The shopping cart reducer and its derived values.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Frontend Action          CartAction              Cart State Change     │
//! │  ───────────────          ──────────              ─────────────────     │
//! │                                                                         │
//! │  Tap "Add to Cart" ──────► Add(product) ────────► merge or push line   │
//! │                                                                         │
//! │  Change quantity ────────► UpdateQuantity ──────► set qty / remove     │
//! │                                                                         │
//! │  Tap remove ─────────────► Remove(id) ──────────► drop the line        │
//! │                                                                         │
//! │  Clear / checkout ───────► Clear ───────────────► items.clear()        │
//! │                                                                         │
//! │  NOTE: No cart operation can fail. Inputs that would produce an        │
//! │        invalid cart (unknown id, qty <= 0) are normalized instead.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, ProductId};

// =============================================================================
// Line Item
// =============================================================================

/// One line in the shopping cart.
///
/// ## Design Notes
/// - `product_id`: Reference to the catalog product
/// - `title` / `unit_price_cents`: Frozen copies of product data at the time
///   of adding. The cart displays consistent data even if the catalog is
///   refreshed with new prices while items sit in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    /// Product this line refers to.
    pub product_id: ProductId,

    /// Product title at time of adding (frozen).
    pub title: String,

    /// Price in cents at time of adding (frozen).
    /// This is critical: we lock in the price when added to cart.
    pub unit_price_cents: i64,

    /// Quantity in cart. Always >= 1 while the line exists.
    pub quantity: i64,

    /// When this line was first added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Creates a new line item from a product with quantity 1.
    ///
    /// ## Price Freezing
    /// The price is captured at this moment. A later catalog refresh does
    /// not reach back into existing lines.
    pub fn from_product(product: &Product) -> Self {
        LineItem {
            product_id: product.id,
            title: product.title.clone(),
            unit_price_cents: product.price_cents,
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Returns the frozen unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart Actions
// =============================================================================

/// The closed set of cart mutations.
///
/// A sum type rather than action-type strings, so every reducer match is
/// checked at compile time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", tag = "type", content = "payload")]
#[ts(export)]
pub enum CartAction {
    /// Add one unit of a product, merging into an existing line if present.
    Add(Product),

    /// Remove the line with this id entirely. No-op when absent.
    Remove(ProductId),

    /// Set a line's quantity exactly. `quantity <= 0` behaves as `Remove`.
    UpdateQuantity { id: ProductId, quantity: i64 },

    /// Empty the cart. Checkout confirmation dispatches this after the
    /// presentation layer's dialog; there is no separate checkout state.
    Clear,
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `product_id` (adding the same product merges)
/// - A stored quantity is always >= 1 (non-positive updates remove the line)
/// - Lines keep the insertion order of their first add; quantity updates
///   never reorder them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    /// Lines in the cart, in first-add order.
    pub items: Vec<LineItem>,

    /// When the cart was created/last cleared.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Applies a cart action, mutating the cart in place.
    ///
    /// Cart operations are total: every input maps to a valid cart, so this
    /// returns nothing. User-visible confirmations (the "added to cart"
    /// toast) belong to the presentation layer, never to the reducer.
    pub fn apply(&mut self, action: CartAction) {
        match action {
            CartAction::Add(product) => self.add_item(&product),
            CartAction::Remove(id) => self.remove_item(id),
            CartAction::UpdateQuantity { id, quantity } => self.update_quantity(id, quantity),
            CartAction::Clear => self.clear(),
        }
    }

    /// Adds one unit of a product to the cart.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity increases by 1, snapshot untouched
    /// - Product not in cart: appended as a new line with quantity 1
    fn add_item(&mut self, product: &Product) {
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product.id)
        {
            item.quantity = item.quantity.saturating_add(1);
            return;
        }

        self.items.push(LineItem::from_product(product));
    }

    /// Removes a line from the cart by product id. No-op when absent.
    fn remove_item(&mut self, id: ProductId) {
        self.items.retain(|i| i.product_id != id);
    }

    /// Sets the quantity of a line exactly.
    ///
    /// ## Behavior
    /// - Quantity <= 0: identical to `remove_item` (the interactive stepper
    ///   refuses to go below 1, but the operation itself normalizes)
    /// - Id not in cart: no-op
    fn update_quantity(&mut self, id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == id) {
            item.quantity = quantity;
        }
    }

    /// Clears all lines from the cart.
    fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Returns the total quantity across all lines (0 for an empty cart).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Returns the number of distinct lines in the cart.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Calculates the cart total (Σ unit price × quantity).
    pub fn total(&self) -> Money {
        self.items.iter().map(|i| i.line_total()).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Derived cart summary for the presentation layer.
///
/// Recomputed on demand from the cart; never stored or independently
/// mutated. The `total` field carries the two-decimal rendering the cart
/// screen shows next to the checkout button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub line_count: usize,
    pub item_count: i64,
    pub total_cents: i64,
    /// Total formatted with exactly two decimal places, e.g. `"$25.50"`.
    pub total: String,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        let total = cart.total();
        CartTotals {
            line_count: cart.line_count(),
            item_count: cart.item_count(),
            total_cents: total.cents(),
            total: total.to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: i64, price_cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {}", id),
            price_cents,
            description: format!("Description {}", id),
            image: "https://via.placeholder.com/150".to_string(),
        }
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        cart.apply(CartAction::Add(test_product(1, 999)));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items[0].quantity, 1);
    }

    #[test]
    fn test_add_same_product_merges_into_one_line() {
        let mut cart = Cart::new();
        cart.apply(CartAction::Add(test_product(1, 999)));
        cart.apply(CartAction::Add(test_product(1, 999)));

        assert_eq!(cart.line_count(), 1); // Still one unique line
        assert_eq!(cart.items[0].quantity, 2);
    }

    #[test]
    fn test_add_keeps_price_snapshot() {
        let mut cart = Cart::new();
        cart.apply(CartAction::Add(test_product(1, 999)));

        // Catalog price changed between the two adds
        let mut repriced = test_product(1, 1299);
        repriced.title = "Renamed".to_string();
        cart.apply(CartAction::Add(repriced));

        // First-add snapshot wins
        assert_eq!(cart.items[0].unit_price_cents, 999);
        assert_eq!(cart.items[0].title, "Product 1");
        assert_eq!(cart.items[0].quantity, 2);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        cart.apply(CartAction::Add(test_product(1, 999)));
        cart.apply(CartAction::Remove(ProductId::new(1)));

        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.apply(CartAction::Add(test_product(1, 999)));

        let before = cart.clone();
        cart.apply(CartAction::Remove(ProductId::new(99)));

        assert_eq!(cart, before); // Structurally unchanged
    }

    #[test]
    fn test_update_quantity_sets_exact_value() {
        let mut cart = Cart::new();
        cart.apply(CartAction::Add(test_product(1, 999)));
        cart.apply(CartAction::UpdateQuantity {
            id: ProductId::new(1),
            quantity: 7,
        });

        assert_eq!(cart.items[0].quantity, 7);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.apply(CartAction::Add(test_product(1, 999)));
        cart.apply(CartAction::UpdateQuantity {
            id: ProductId::new(1),
            quantity: 0,
        });

        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_negative_removes() {
        let mut cart = Cart::new();
        cart.apply(CartAction::Add(test_product(1, 999)));
        cart.apply(CartAction::UpdateQuantity {
            id: ProductId::new(1),
            quantity: -5,
        });

        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.apply(CartAction::Add(test_product(1, 999)));

        let before = cart.clone();
        cart.apply(CartAction::UpdateQuantity {
            id: ProductId::new(99),
            quantity: 5,
        });

        assert_eq!(cart, before);
    }

    #[test]
    fn test_totals() {
        // [{price: 10.00, qty: 2}, {price: 5.50, qty: 1}] => $25.50, 3 items
        let mut cart = Cart::new();
        cart.apply(CartAction::Add(test_product(1, 1000)));
        cart.apply(CartAction::UpdateQuantity {
            id: ProductId::new(1),
            quantity: 2,
        });
        cart.apply(CartAction::Add(test_product(2, 550)));

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total(), Money::from_cents(2550));

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.line_count, 2);
        assert_eq!(totals.item_count, 3);
        assert_eq!(totals.total, "$25.50");
    }

    #[test]
    fn test_insertion_order_survives_updates() {
        let mut cart = Cart::new();
        cart.apply(CartAction::Add(test_product(1, 100)));
        cart.apply(CartAction::Add(test_product(2, 200)));
        cart.apply(CartAction::Add(test_product(3, 300)));

        // Bump the middle line; order must not change
        cart.apply(CartAction::UpdateQuantity {
            id: ProductId::new(2),
            quantity: 9,
        });

        let ids: Vec<i64> = cart.items.iter().map(|i| i.product_id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut cart = Cart::new();
        cart.apply(CartAction::Add(test_product(1, 999)));

        cart.apply(CartAction::Clear);
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);

        cart.apply(CartAction::Clear);
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }
}
