// ============================================================================
// Reports - Read-only aggregations over the order store
// ============================================================================
//
// Every function here takes `&OrderStore` and borrows from it; nothing in
// this module mutates orders. Monetary results are rendered with exactly two
// decimals.
//
// ============================================================================

mod aggregations;
mod types;

pub use aggregations::*;
pub use types::*;
