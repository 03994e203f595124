//! # rangeflow
//!
//! Offline batch range-query pipeline:
//! 1. Fetch a payload (`token`, dataset, query batch) from a remote endpoint
//! 2. Validate shape and numeric constraints (atomic accept/reject)
//! 3. Build prefix-sum tables in one linear pass
//! 4. Answer every range query in O(1) via range subtraction
//! 5. Deliver the ordered result batch, authenticated with the payload token
//!
//! Computation is wholly synchronous; the pipeline suspends only at the two
//! network boundaries (input fetch, result delivery). Each run owns its
//! dataset and tables, so there is no shared state between runs.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod transport;

// Re-export main types
pub use config::Config;
pub use error::{DeliveryError, FetchError, PipelineError, ValidationError};
pub use pipeline::{
    evaluate, validate, PipelineEngine, PipelineReport, PipelineState, PrefixTables, Query,
    ResultBatch, ValidPayload, MAX_DATASET_LEN,
};
pub use transport::{HttpTransport, PayloadTransport};
