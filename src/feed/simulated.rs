use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::time::sleep;

use crate::config::FeedConfig;
use crate::domain::order::{LineItem, Order, OrderStatus, OrderStore};

use super::{FetchError, OrderFeed};

// ============================================================================
// Simulated Order Feed
// ============================================================================
//
// Stands in for a remote order service: waits `fetch_delay`, then delivers
// two fixed orders. Ids are taken from the store length after the wait.
//
// ============================================================================

#[derive(Clone, Debug, Default)]
pub struct SimulatedOrderFeed {
    config: FeedConfig,
}

impl SimulatedOrderFeed {
    pub fn new(config: FeedConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    fn incoming() -> Vec<(&'static str, Vec<LineItem>, OrderStatus)> {
        vec![
            (
                "Kurt",
                vec![
                    LineItem::new("Smart Watch", 1, Decimal::new(19999, 2)),
                    LineItem::new("Charger", 1, Decimal::new(2999, 2)),
                ],
                OrderStatus::Pending,
            ),
            (
                "Rodel",
                vec![
                    LineItem::new("Camera", 1, Decimal::new(59999, 2)),
                    LineItem::new("Memory Card", 2, Decimal::new(4999, 2)),
                    LineItem::new("Camera Bag", 1, Decimal::new(7999, 2)),
                ],
                OrderStatus::Completed,
            ),
        ]
    }
}

#[async_trait]
impl OrderFeed for SimulatedOrderFeed {
    async fn fetch_new_orders(&self, store: &mut OrderStore) -> Result<Vec<Order>, FetchError> {
        tracing::info!(
            delay_ms = self.config.fetch_delay.as_millis(),
            "Fetching new orders"
        );

        sleep(self.config.fetch_delay).await;

        let fetched: Vec<Order> = Self::incoming()
            .into_iter()
            .map(|(customer, items, status)| store.push_new(customer, items, status).clone())
            .collect();

        tracing::info!(
            count = fetched.len(),
            first_id = ?fetched.first().map(|o| o.id),
            store_size = store.len(),
            "New orders fetched"
        );

        Ok(fetched)
    }
}
