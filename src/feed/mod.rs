// ============================================================================
// Order Feeds - Deferred sources of new orders
// ============================================================================
//
// A feed suspends once, then appends whatever it produced to the store and
// hands the new records back. The store is borrowed mutably for the whole
// call, so nothing else can insert while a fetch is in flight.
//
// ============================================================================

mod errors;
mod simulated;

use async_trait::async_trait;

use crate::domain::order::{Order, OrderStore};

pub use errors::FetchError;
pub use simulated::SimulatedOrderFeed;

/// Source of orders that arrive after the store was created
#[async_trait]
pub trait OrderFeed: Send + Sync {
    /// Fetch new orders, append them to `store`, and return copies of them
    async fn fetch_new_orders(&self, store: &mut OrderStore) -> Result<Vec<Order>, FetchError>;
}
