//! # Store Aggregator
//!
//! Composes the cart and catalog branches under one addressable root and
//! routes every operation through a single dispatch entry point.
//!
//! ## Dispatch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Store Dispatch Flow                              │
//! │                                                                         │
//! │  UI / fetch task                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.dispatch(action)                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  1. Acquire the store lock (one mutation at a time)              │  │
//! │  │  2. Route to the cart or catalog reducer (exhaustive match)      │  │
//! │  │  3. Snapshot the new tree                                        │  │
//! │  │  4. Notify every subscriber synchronously, in order              │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  new snapshot returned to the caller                                   │
//! │                                                                         │
//! │  ORDERING: because steps 1-4 happen under one lock, observers see      │
//! │  dispatches exactly in submission order and never a half-applied       │
//! │  state. Subscriber callbacks therefore MUST NOT call back into the     │
//! │  store; re-entrant dispatch would deadlock.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use shopfront_core::{Action, AppState, CatalogEvent};

use crate::source::CatalogSource;

// =============================================================================
// Subscriptions
// =============================================================================

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A change observer: called with the new snapshot after every applied
/// operation.
type Subscriber = Box<dyn Fn(&AppState) + Send + Sync>;

// =============================================================================
// Store
// =============================================================================

/// State and subscribers live behind one mutex so that reduction and
/// notification are a single atomic step.
struct StoreInner {
    state: AppState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

/// The central state store.
///
/// Explicitly owned and injected: hosts construct a `Store` (usually inside
/// an `Arc`) and hand it to the screens and the fetch driver. There is no
/// global instance.
pub struct Store {
    inner: Mutex<StoreInner>,

    /// Monotonic fetch generation counter. Settlements carrying an old
    /// generation are dropped by the catalog reducer.
    fetch_generation: AtomicU64,
}

impl Store {
    /// Creates a store with the initial state: empty cart, idle catalog.
    pub fn new() -> Self {
        Store::with_state(AppState::new())
    }

    /// Creates a store seeded with an explicit state (tests, restoring a
    /// navigation scenario).
    pub fn with_state(state: AppState) -> Self {
        Store {
            inner: Mutex::new(StoreInner {
                state,
                subscribers: Vec::new(),
                next_subscription: 0,
            }),
            fetch_generation: AtomicU64::new(0),
        }
    }

    /// Returns a snapshot of the current composed state.
    pub fn snapshot(&self) -> AppState {
        let inner = self.inner.lock().expect("Store mutex poisoned");
        inner.state.clone()
    }

    /// Applies one operation and returns the resulting snapshot.
    ///
    /// Operations are applied in submission order; subscribers are notified
    /// synchronously with the new snapshot before `dispatch` returns.
    pub fn dispatch(&self, action: impl Into<Action>) -> AppState {
        let action = action.into();
        debug!(?action, "dispatch");

        let inner = &mut *self.inner.lock().expect("Store mutex poisoned");
        let applied = inner.state.apply(action);
        if !applied {
            debug!("stale catalog settlement dropped");
        }

        let snapshot = inner.state.clone();
        for (_, subscriber) in &inner.subscribers {
            subscriber(&snapshot);
        }
        snapshot
    }

    /// Registers a change observer.
    ///
    /// The callback runs on the dispatching thread after every applied
    /// operation and must not call back into the store.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&AppState) + Send + Sync + 'static,
    {
        let inner = &mut *self.inner.lock().expect("Store mutex poisoned");
        inner.next_subscription += 1;
        let id = SubscriptionId(inner.next_subscription);
        inner.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a change observer. No-op for an already removed id.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        let inner = &mut *self.inner.lock().expect("Store mutex poisoned");
        inner.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    /// Triggers one catalog fetch.
    ///
    /// Dispatches `Started` immediately, then spawns a tokio task that
    /// awaits the source and dispatches the matching settlement. There is
    /// no cancellation: an overlapping refresh simply claims a newer
    /// generation, and the older fetch's settlement is dropped when it
    /// eventually arrives.
    pub fn fetch_products(self: &Arc<Self>, source: Arc<dyn CatalogSource>) -> FetchHandle {
        let generation = self.fetch_generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.dispatch(CatalogEvent::Started { generation });

        let store = Arc::clone(self);
        let task = tokio::spawn(async move {
            match source.fetch().await {
                Ok(products) => {
                    debug!(generation, count = products.len(), "catalog fetch succeeded");
                    store.dispatch(CatalogEvent::Succeeded {
                        generation,
                        products,
                    });
                }
                Err(err) => {
                    warn!(generation, error = %err, "catalog fetch failed");
                    store.dispatch(CatalogEvent::Failed {
                        generation,
                        message: err.to_string(),
                    });
                }
            }
        });

        FetchHandle { generation, task }
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::new()
    }
}

/// Handle for one in-flight fetch.
///
/// The task completes when the settlement has been dispatched (whether the
/// reducer applied or dropped it). Hosts normally ignore the handle; tests
/// await it to observe settled state deterministically.
pub struct FetchHandle {
    /// Generation claimed by this fetch.
    pub generation: u64,

    /// The spawned driver task.
    pub task: JoinHandle<()>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use shopfront_core::{CartAction, FetchPhase, Product, ProductId};

    use super::*;
    use crate::source::{SourceError, SourceFuture};

    fn test_product(id: i64, price_cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {}", id),
            price_cents,
            description: String::new(),
            image: String::new(),
        }
    }

    /// Source that resolves with a fixed list after an optional delay.
    struct StubSource {
        products: Vec<Product>,
        delay: Duration,
    }

    impl CatalogSource for StubSource {
        fn fetch(&self) -> SourceFuture {
            let products = self.products.clone();
            let delay = self.delay;
            Box::pin(async move {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                Ok(products)
            })
        }
    }

    /// Source that always fails with a fixed message.
    struct FailingSource;

    impl CatalogSource for FailingSource {
        fn fetch(&self) -> SourceFuture {
            Box::pin(async { Err(SourceError::new("Network error")) })
        }
    }

    #[test]
    fn test_dispatch_returns_new_snapshot() {
        let store = Store::new();
        let snapshot = store.dispatch(CartAction::Add(test_product(1, 999)));

        assert_eq!(snapshot.cart.item_count(), 1);
        assert_eq!(store.snapshot(), snapshot);
    }

    #[test]
    fn test_subscribers_notified_in_dispatch_order() {
        let store = Store::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_clone = Arc::clone(&seen);
        store.subscribe(move |state| {
            seen_clone
                .lock()
                .expect("test mutex")
                .push(state.cart.item_count());
        });

        store.dispatch(CartAction::Add(test_product(1, 100)));
        store.dispatch(CartAction::Add(test_product(1, 100)));
        store.dispatch(CartAction::Clear);

        assert_eq!(*seen.lock().expect("test mutex"), vec![1, 2, 0]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let store = Store::new();
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = Arc::clone(&count);
        let id = store.subscribe(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        store.dispatch(CartAction::Add(test_product(1, 100)));
        store.unsubscribe(id);
        store.dispatch(CartAction::Clear);

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fetch_success_lifecycle() {
        let store = Arc::new(Store::new());
        let products = vec![test_product(1, 100), test_product(2, 200)];
        let source = Arc::new(StubSource {
            products: products.clone(),
            delay: Duration::from_millis(10),
        });

        let handle = store.fetch_products(source);

        // Before settlement: loading, no error
        let pending = store.snapshot();
        assert!(pending.catalog.is_loading());
        assert!(pending.catalog.error().is_none());

        handle.task.await.expect("fetch task");

        let settled = store.snapshot();
        assert_eq!(settled.catalog.phase, FetchPhase::Succeeded);
        assert_eq!(settled.catalog.items, products);
        assert!(settled.catalog.error().is_none());
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_prior_items() {
        let store = Arc::new(Store::new());

        // First fetch succeeds and fills the catalog
        let handle = store.fetch_products(Arc::new(StubSource {
            products: vec![test_product(1, 100)],
            delay: Duration::ZERO,
        }));
        handle.task.await.expect("fetch task");

        // Second fetch fails
        let handle = store.fetch_products(Arc::new(FailingSource));
        handle.task.await.expect("fetch task");

        let settled = store.snapshot();
        assert_eq!(settled.catalog.phase, FetchPhase::Failed);
        assert_eq!(settled.catalog.error(), Some("Network error"));
        assert_eq!(settled.catalog.items.len(), 1); // Pre-fetch items survive
    }

    #[tokio::test]
    async fn test_overlapping_fetches_newest_generation_wins() {
        let store = Arc::new(Store::new());

        // Slow fetch started first
        let slow = store.fetch_products(Arc::new(StubSource {
            products: vec![test_product(1, 100)],
            delay: Duration::from_millis(50),
        }));

        // Fast refresh started second
        let fast = store.fetch_products(Arc::new(StubSource {
            products: vec![test_product(2, 200)],
            delay: Duration::ZERO,
        }));
        assert!(fast.generation > slow.generation);

        fast.task.await.expect("fetch task");
        slow.task.await.expect("fetch task");

        // The slow fetch settled last but its generation is stale
        let settled = store.snapshot();
        assert_eq!(settled.catalog.items, vec![test_product(2, 200)]);
        assert_eq!(settled.catalog.phase, FetchPhase::Succeeded);
    }

    #[tokio::test]
    async fn test_cart_mutations_while_fetch_in_flight() {
        let store = Arc::new(Store::new());
        let handle = store.fetch_products(Arc::new(StubSource {
            products: vec![test_product(1, 100)],
            delay: Duration::from_millis(20),
        }));

        // Cart operations do not block on, and are not blocked by, the fetch
        store.dispatch(CartAction::Add(test_product(9, 999)));
        assert_eq!(store.snapshot().cart.item_count(), 1);
        assert!(store.snapshot().catalog.is_loading());

        handle.task.await.expect("fetch task");
        let settled = store.snapshot();
        assert_eq!(settled.cart.item_count(), 1);
        assert_eq!(settled.catalog.items.len(), 1);
    }
}
