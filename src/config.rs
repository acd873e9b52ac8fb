//! Sort configuration

use crate::sort::OrderingKey;

/// Configuration for a reorder run
#[derive(Debug, Clone, Default)]
pub struct SortConfig {
    /// Ordering to apply
    pub key: OrderingKey,

    /// Select the first item after sorting
    pub reset_position: bool,

    /// Current position of the snapshot before sorting (None = keep as loaded)
    pub current: Option<usize>,
}

impl SortConfig {
    /// Create a new sort configuration
    pub fn new(key: OrderingKey) -> Self {
        Self {
            key,
            reset_position: false,
            current: None,
        }
    }

    /// Request a reset to the first item
    pub fn with_reset_position(mut self, reset: bool) -> Self {
        self.reset_position = reset;
        self
    }

    /// Set the current position of the snapshot
    pub fn with_current(mut self, current: Option<usize>) -> Self {
        self.current = current;
        self
    }
}
