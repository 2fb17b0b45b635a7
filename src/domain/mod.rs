// ============================================================================
// Domain Layer
// ============================================================================
//
// Order records, their value objects, and the owned store that holds them.
// Reporting and fetching live outside this layer and only borrow the store.
//
// ============================================================================

pub mod order;
