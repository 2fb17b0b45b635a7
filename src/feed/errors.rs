// ============================================================================
// Feed Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Order source unavailable: {0}")]
    Unavailable(String),
}
