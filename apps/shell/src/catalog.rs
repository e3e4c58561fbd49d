//! Demo catalog source.
//!
//! Serves five placeholder products after a simulated network delay. Real
//! deployments swap this for an HTTP-backed `CatalogSource`; the store
//! cannot tell the difference.

use std::time::Duration;

use shopfront_core::{Product, ProductId};
use shopfront_store::{CatalogSource, SourceError, SourceFuture};

/// In-memory catalog source with a simulated network delay.
pub struct DemoCatalog {
    delay: Duration,
    fail: bool,
}

impl DemoCatalog {
    /// Creates a demo source.
    ///
    /// With `fail` set, every fetch settles with a network error instead of
    /// the product list, which exercises the error/retry path end to end.
    pub fn new(delay: Duration, fail: bool) -> Self {
        DemoCatalog { delay, fail }
    }
}

impl CatalogSource for DemoCatalog {
    fn fetch(&self) -> SourceFuture {
        let delay = self.delay;
        let fail = self.fail;
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            if fail {
                return Err(SourceError::new("Network error"));
            }
            Ok(seed_products())
        })
    }
}

/// The placeholder product list served by the demo source.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            title: "Smartphone".to_string(),
            price_cents: 69999,
            description: "Latest model with 5G".to_string(),
            image: "https://via.placeholder.com/150".to_string(),
        },
        Product {
            id: ProductId::new(2),
            title: "Laptop".to_string(),
            price_cents: 129999,
            description: "Powerful laptop for professionals".to_string(),
            image: "https://via.placeholder.com/150".to_string(),
        },
        Product {
            id: ProductId::new(3),
            title: "Headphones".to_string(),
            price_cents: 19999,
            description: "Noise-cancelling wireless headphones".to_string(),
            image: "https://via.placeholder.com/150".to_string(),
        },
        Product {
            id: ProductId::new(4),
            title: "Smart Watch".to_string(),
            price_cents: 39999,
            description: "Track your fitness and stay connected".to_string(),
            image: "https://via.placeholder.com/150".to_string(),
        },
        Product {
            id: ProductId::new(5),
            title: "Tablet".to_string(),
            price_cents: 54999,
            description: "10-inch display with stylus support".to_string(),
            image: "https://via.placeholder.com/150".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_demo_catalog_serves_seed_products() {
        let source = Arc::new(DemoCatalog::new(Duration::ZERO, false));
        let products = source.fetch().await.expect("demo fetch");

        assert_eq!(products.len(), 5);
        assert_eq!(products[0].title, "Smartphone");
        assert_eq!(products[0].price().to_string(), "$699.99");
    }

    #[tokio::test]
    async fn test_demo_catalog_failure_mode() {
        let source = DemoCatalog::new(Duration::ZERO, true);
        let err = source.fetch().await.expect_err("should fail");

        assert_eq!(err.to_string(), "Network error");
    }
}
