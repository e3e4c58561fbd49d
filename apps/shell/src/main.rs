//! # Shopfront Shell
//!
//! Headless demo host for the Shopfront state store.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: INFO, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Load Configuration ───────────────────────────────────────────────► │
//! │     • SHOPFRONT_FETCH_DELAY_MS, SHOPFRONT_SIMULATE_FAILURE              │
//! │                                                                         │
//! │  3. Build the Store ──────────────────────────────────────────────────► │
//! │     • Arc<Store>, subscribed logging observer                           │
//! │                                                                         │
//! │  4. Run a Scripted Session ───────────────────────────────────────────► │
//! │     • fetch catalog, add/update/remove items, checkout                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;

use std::sync::Arc;

use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use shopfront_core::{CartAction, CartTotals};
use shopfront_store::Store;

use crate::catalog::DemoCatalog;
use crate::config::ShellConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Shopfront shell");

    let config = ShellConfig::load()?;
    info!(
        fetch_delay_ms = config.fetch_delay.as_millis() as u64,
        simulate_failure = config.simulate_failure,
        "Configuration loaded"
    );

    let store = Arc::new(Store::new());

    // The observer plays the role of the UI's re-render-on-change hook.
    store.subscribe(|state| {
        debug!(
            cart_items = state.cart.item_count(),
            catalog_phase = ?state.catalog.phase,
            "state changed"
        );
    });

    // Load the catalog, as the product list screen does on mount.
    let source = Arc::new(DemoCatalog::new(config.fetch_delay, config.simulate_failure));
    let fetch = store.fetch_products(Arc::clone(&source) as _);
    info!(generation = fetch.generation, "Catalog fetch started");
    fetch.task.await?;

    let state = store.snapshot();
    if let Some(message) = state.catalog.error() {
        // The product screen would show this next to a retry button; the
        // retry is just another fetch_products call.
        warn!(error = message, "Catalog fetch failed, retrying once");
        let retry = store.fetch_products(source);
        retry.task.await?;
    }

    let state = store.snapshot();
    if state.catalog.items.is_empty() {
        warn!("No products available, nothing to shop for");
        return Ok(());
    }
    info!(count = state.catalog.items.len(), "Catalog loaded");

    // Scripted shopping session: the taps a user would make on the screens.
    let smartphone = state.catalog.items[0].clone();
    let headphones = state.catalog.items[2].clone();

    store.dispatch(CartAction::Add(smartphone.clone()));
    store.dispatch(CartAction::Add(smartphone.clone())); // merges, qty 2
    store.dispatch(CartAction::Add(headphones.clone()));
    store.dispatch(CartAction::UpdateQuantity {
        id: headphones.id,
        quantity: 3,
    });
    store.dispatch(CartAction::Remove(smartphone.id));

    let totals = CartTotals::from(&store.snapshot().cart);
    info!(
        lines = totals.line_count,
        items = totals.item_count,
        total = %totals.total,
        "Cart ready for checkout"
    );

    // Checkout is a confirmation followed by clearing local cart state; no
    // order or payment protocol exists.
    info!("Order placed successfully! Your total was {}", totals.total);
    store.dispatch(CartAction::Clear);

    let state = store.snapshot();
    debug_assert!(state.cart.is_empty());
    info!("Session complete");

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - show every dispatch and state change
/// - `RUST_LOG=shopfront=trace` - trace for shopfront crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shopfront=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
