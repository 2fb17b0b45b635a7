// ============================================================================
// Order Domain
// ============================================================================
//
// - Value objects (LineItem, OrderStatus, money formatting)
// - Order record
// - OrderStore (append-only collection, status updates, lookups)
//
// ============================================================================

pub mod value_objects;
pub mod aggregate;
pub mod store;

// Re-export for convenience
pub use value_objects::*;
pub use aggregate::*;
pub use store::*;
