//! Error types for the range-query pipeline
//!
//! Three concerns, reported distinctly so a caller can tell "computation
//! failed" apart from "computation succeeded but reporting failed":
//! - [`FetchError`] - the input payload could not be obtained or parsed
//! - [`ValidationError`] - the payload violated a structural or numeric rule
//! - [`DeliveryError`] - the computed results could not be sent
//!
//! Fetch and validation errors abort the run atomically (nothing is sent).
//! Delivery errors do not discard the computation; the engine still exposes
//! the result batch in its report.

use thiserror::Error;

/// The input payload could not be obtained from the transport
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level request failure (connect, timeout, TLS)
    #[error("input request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Input endpoint answered with a non-success status
    #[error("input endpoint returned status {0}")]
    Status(reqwest::StatusCode),

    /// Response body was not well-formed JSON
    #[error("input payload is not valid JSON: {0}")]
    Malformed(String),
}

/// The payload failed a structural or numeric constraint
///
/// One variant per rule class; validation short-circuits on the first
/// violation and rejects the whole payload (no partial acceptance).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// `token` field missing or not a string
    #[error("payload has no usable token")]
    MissingToken,

    /// `data` field missing or not an array
    #[error("dataset is missing or not a sequence")]
    MissingDataset,

    /// Dataset array is empty
    #[error("dataset is empty")]
    EmptyDataset,

    /// Dataset exceeds the enforced size limit
    #[error("dataset has {len} values, limit is {limit}")]
    DatasetTooLarge { len: usize, limit: usize },

    /// Dataset element is not a finite number
    #[error("dataset value at index {index} is not numeric")]
    NonNumericValue { index: usize },

    /// Dataset element is negative
    #[error("dataset value at index {index} is negative ({value})")]
    NegativeValue { index: usize, value: f64 },

    /// `query` field missing or not an array
    #[error("query list is missing or not a sequence")]
    MissingQueryList,

    /// Query type tag is not one of the recognized kinds
    #[error("query {index} has unknown type tag {tag:?}")]
    UnknownQueryKind { index: usize, tag: String },

    /// Query range is not a two-element array of non-negative integers
    #[error("query {index} has a malformed range")]
    MalformedRange { index: usize },

    /// Query range has low > high
    #[error("query {index} range is inverted ({low} > {high})")]
    InvertedRange { index: usize, low: usize, high: usize },

    /// Query range reaches past the end of the dataset
    #[error("query {index} range end {high} is out of bounds (dataset length {len})")]
    RangeOutOfBounds { index: usize, high: usize, len: usize },
}

/// The computed results could not be sent to the output endpoint
///
/// Not retried by the pipeline; retry policy, if any, belongs to the caller.
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// Transport-level request failure
    #[error("delivery request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Output endpoint answered with a non-success status
    #[error("output endpoint returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Fatal pipeline failure: no result batch was produced
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Fetch failed
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Validation rejected the payload
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}
