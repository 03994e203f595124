//! # Range-query pipeline
//!
//! Validation, aggregation and evaluation for one payload:
//! 1. [`validator`] checks shape and numeric constraints, atomically
//! 2. [`prefix`] builds three prefix-sum tables in one linear pass
//! 3. [`evaluator`] answers each query in O(1) by range subtraction
//! 4. [`engine`] sequences the steps and maps failures to explicit outcomes
//!
//! Data flows one direction: raw payload -> validated payload -> prefix
//! tables -> per-query results -> result batch. The tables are derived once
//! and read-only afterwards; results keep the input query order end to end.
//!
//! ## Module organization
//!
//! - `types` - Query, ValidPayload, ResultBatch, size limit
//! - `validator` - payload validation (atomic accept/reject)
//! - `prefix` - PrefixTables construction
//! - `evaluator` - pure O(1) query evaluation
//! - `engine` - run orchestration and state machine

pub mod engine;
pub mod evaluator;
pub mod prefix;
pub mod types;
pub mod validator;

// Re-export commonly used types
pub use engine::{PipelineEngine, PipelineReport, PipelineState};
pub use evaluator::evaluate;
pub use prefix::PrefixTables;
pub use types::{Query, ResultBatch, ValidPayload, MAX_DATASET_LEN};
pub use validator::validate;
