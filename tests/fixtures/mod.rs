//! Shared helpers for integration tests

use fxm::index::Value;

/// Values in ascending order, for order-insensitive comparisons
pub fn sorted(mut values: Vec<Value>) -> Vec<Value> {
    values.sort_unstable();
    values
}
