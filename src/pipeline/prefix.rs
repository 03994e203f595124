//! Prefix-sum tables over a validated dataset
//!
//! Three parallel running aggregates, filled in one linear pass:
//! - `total[i]` - sum of `data[0..=i]`
//! - `even_position[i]` - sum of `data[j]` for `j <= i` with `j` even
//! - `odd_position[i]` - sum of `data[j]` for `j <= i` with `j` odd
//!
//! Parity is the absolute dataset index, never the position relative to a
//! query's `low` bound; that choice decides which elements a parity-signed
//! query adds and which it subtracts. Invariant at every index:
//! `total[i] == even_position[i] + odd_position[i]`, and all three tables
//! are monotonically non-decreasing (values are non-negative).

/// Precomputed running aggregates enabling O(1) range answers
///
/// Built once per run, immutable afterwards; the evaluator only reads.
#[derive(Debug, Clone)]
pub struct PrefixTables {
    total: Vec<f64>,
    even_position: Vec<f64>,
    odd_position: Vec<f64>,
}

impl PrefixTables {
    /// Build all three tables in a single O(n) pass
    ///
    /// Index 0 seeds the total and even tables with `data[0]` and the odd
    /// table with 0 (index 0 is even). Each later index extends the total
    /// unconditionally and exactly one of the parity tables, carrying the
    /// other forward unchanged.
    pub fn build(data: &[f64]) -> Self {
        let n = data.len();
        let mut total = Vec::with_capacity(n);
        let mut even_position = Vec::with_capacity(n);
        let mut odd_position = Vec::with_capacity(n);

        if n > 0 {
            total.push(data[0]);
            even_position.push(data[0]);
            odd_position.push(0.0);
        }
        for i in 1..n {
            total.push(total[i - 1] + data[i]);
            even_position.push(even_position[i - 1] + if i % 2 == 0 { data[i] } else { 0.0 });
            odd_position.push(odd_position[i - 1] + if i % 2 == 1 { data[i] } else { 0.0 });
        }

        Self {
            total,
            even_position,
            odd_position,
        }
    }

    /// Number of table entries (= dataset length)
    pub fn len(&self) -> usize {
        self.total.len()
    }

    /// True when built from an empty slice (cannot happen post-validation)
    pub fn is_empty(&self) -> bool {
        self.total.is_empty()
    }

    /// `data[0] + .. + data[i]`
    pub(crate) fn total_at(&self, i: usize) -> f64 {
        self.total[i]
    }

    /// Sum of even-indexed values through index `i`
    pub(crate) fn even_at(&self, i: usize) -> f64 {
        self.even_position[i]
    }

    /// Sum of odd-indexed values through index `i`
    pub(crate) fn odd_at(&self, i: usize) -> f64 {
        self.odd_position[i]
    }
}
