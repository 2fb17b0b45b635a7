// ============================================================================
// order_reports
// ============================================================================
//
// In-memory purchase order store with revenue and status reports, plus a
// simulated asynchronous feed that delivers more orders after a delay.
//
// - domain/  - Order, LineItem, OrderStatus, OrderStore
// - reports/ - Read-only aggregations over the store
// - feed/    - Deferred order sources (OrderFeed trait, simulated feed)
// - demo/    - Text rendering and the demo sequence
//
// ============================================================================

pub mod config;
pub mod demo;
pub mod domain;
pub mod feed;
pub mod reports;

pub use config::FeedConfig;
pub use domain::order::{LineItem, Order, OrderStatus, OrderStore};
pub use feed::{FetchError, OrderFeed, SimulatedOrderFeed};
