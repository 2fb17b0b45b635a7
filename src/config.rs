use std::time::Duration;

// ============================================================================
// Feed Configuration
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct FeedConfig {
    /// Latency of the simulated upstream before new orders arrive
    pub fetch_delay: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            fetch_delay: Duration::from_millis(2000),
        }
    }
}

impl FeedConfig {
    /// No waiting at all; used by tests
    pub fn immediate() -> Self {
        Self {
            fetch_delay: Duration::ZERO,
        }
    }

    pub fn with_delay(fetch_delay: Duration) -> Self {
        Self { fetch_delay }
    }
}
