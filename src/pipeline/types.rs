//! Core data structures for the range-query pipeline
//!
//! Wire format (input):
//! ```json
//! {
//!   "token": "...",
//!   "data": [1, 2, 3, 4],
//!   "query": [
//!     { "type": "1", "range": [0, 3] },
//!     { "type": "2", "range": [1, 2] }
//!   ]
//! }
//! ```
//! Type tag "1" is a plain range sum, "2" is a parity-signed sum. The output
//! body is `{ "result": [..] }`, one number per query, input order preserved.

use serde::{Deserialize, Serialize};

/// Maximum dataset length accepted by validation
pub const MAX_DATASET_LEN: usize = 100_000;

/// A single range query over the dataset
///
/// Indices are 0-based and inclusive on both ends. Invariant (enforced by
/// validation, assumed by the evaluator): `low <= high < dataset.len()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// Sum of `dataset[low..=high]` (wire type tag "1")
    RangeSum { low: usize, high: usize },

    /// Alternating sum of `dataset[low..=high]` where each element is signed
    /// by its absolute dataset index: `+` when the index is even, `-` when
    /// odd (wire type tag "2")
    ParitySignedSum { low: usize, high: usize },
}

impl Query {
    /// Inclusive `(low, high)` bounds of this query
    pub fn bounds(&self) -> (usize, usize) {
        match *self {
            Self::RangeSum { low, high } | Self::ParitySignedSum { low, high } => (low, high),
        }
    }
}

/// A payload that passed every validation rule
///
/// Owned by a single pipeline run; the dataset is immutable from here on.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidPayload {
    /// Bearer credential for result delivery, taken from the input payload
    pub token: String,

    /// Non-negative values, length in `[1, MAX_DATASET_LEN]`
    pub data: Vec<f64>,

    /// Queries in input order; may be empty
    pub queries: Vec<Query>,
}

/// Ordered results, one per input query
///
/// Serializes to the output wire body `{ "result": [..] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultBatch {
    pub result: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_bounds() {
        assert_eq!(Query::RangeSum { low: 1, high: 3 }.bounds(), (1, 3));
        assert_eq!(Query::ParitySignedSum { low: 0, high: 0 }.bounds(), (0, 0));
    }

    #[test]
    fn test_result_batch_wire_shape() {
        // Test: Output body serializes as { "result": [..] }
        let batch = ResultBatch {
            result: vec![10.0, -2.0],
        };
        let value = serde_json::to_value(&batch).unwrap();
        assert_eq!(value, serde_json::json!({ "result": [10.0, -2.0] }));
    }
}
