//! Query evaluation against precomputed prefix tables
//!
//! Pure, O(1) per query, no side effects. The evaluator assumes validated,
//! in-bounds indices and performs no bounds checks of its own: a violated
//! precondition is a programming-contract failure, not a recoverable runtime
//! error (debug assertions document the contract).

use crate::pipeline::prefix::PrefixTables;
use crate::pipeline::types::Query;

/// Answer one range query in O(1) via prefix subtraction
///
/// `RangeSum` subtracts the prefix just before `low` from the prefix at
/// `high`. `ParitySignedSum` does the same on the even- and odd-position
/// tables separately and returns `even_sum - odd_sum`: the alternating sum of
/// the range with each element signed by its absolute index parity, not by
/// its position relative to `low`.
pub fn evaluate(query: Query, tables: &PrefixTables) -> f64 {
    let (low, high) = query.bounds();
    debug_assert!(low <= high && high < tables.len());

    match query {
        Query::RangeSum { low, high } => {
            let before = if low > 0 { tables.total_at(low - 1) } else { 0.0 };
            tables.total_at(high) - before
        }
        Query::ParitySignedSum { low, high } => {
            let (even_before, odd_before) = if low > 0 {
                (tables.even_at(low - 1), tables.odd_at(low - 1))
            } else {
                (0.0, 0.0)
            };
            let even_sum = tables.even_at(high) - even_before;
            let odd_sum = tables.odd_at(high) - odd_before;
            even_sum - odd_sum
        }
    }
}
