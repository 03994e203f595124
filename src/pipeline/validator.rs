//! Payload validation
//!
//! Checks run in a fixed order and short-circuit on the first violation:
//! 1. Token present and a string
//! 2. Dataset present, a sequence, non-empty, length <= MAX_DATASET_LEN
//! 3. Every dataset element numeric and >= 0
//! 4. Query list present and a sequence (empty is valid)
//! 5. Per query: recognized type tag, range a two-element pair of
//!    non-negative integers, low <= high, high < dataset length
//!
//! Rejection is atomic: one bad value or one bad query rejects the whole
//! payload. No side effects; the only outputs are the validated structure or
//! a [`ValidationError`] naming the failing rule.

use crate::error::ValidationError;
use crate::pipeline::types::{Query, ValidPayload, MAX_DATASET_LEN};
use serde_json::Value;

/// Validate a raw payload and extract the typed structure
pub fn validate(raw: &Value) -> Result<ValidPayload, ValidationError> {
    let token = raw
        .get("token")
        .and_then(Value::as_str)
        .ok_or(ValidationError::MissingToken)?
        .to_string();

    let data = validate_dataset(raw)?;
    let queries = validate_queries(raw, data.len())?;

    Ok(ValidPayload {
        token,
        data,
        queries,
    })
}

fn validate_dataset(raw: &Value) -> Result<Vec<f64>, ValidationError> {
    let values = raw
        .get("data")
        .and_then(Value::as_array)
        .ok_or(ValidationError::MissingDataset)?;

    if values.is_empty() {
        return Err(ValidationError::EmptyDataset);
    }
    if values.len() > MAX_DATASET_LEN {
        return Err(ValidationError::DatasetTooLarge {
            len: values.len(),
            limit: MAX_DATASET_LEN,
        });
    }

    let mut data = Vec::with_capacity(values.len());
    for (index, value) in values.iter().enumerate() {
        let number = value
            .as_f64()
            .filter(|n| n.is_finite())
            .ok_or(ValidationError::NonNumericValue { index })?;
        if number < 0.0 {
            return Err(ValidationError::NegativeValue {
                index,
                value: number,
            });
        }
        data.push(number);
    }

    Ok(data)
}

fn validate_queries(raw: &Value, dataset_len: usize) -> Result<Vec<Query>, ValidationError> {
    let entries = raw
        .get("query")
        .and_then(Value::as_array)
        .ok_or(ValidationError::MissingQueryList)?;

    let mut queries = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        // Tag first, then range, matching the documented rule order
        let tag = entry.get("type").and_then(Value::as_str);
        let signed = match tag {
            Some("1") => false,
            Some("2") => true,
            other => {
                return Err(ValidationError::UnknownQueryKind {
                    index,
                    tag: other.map_or_else(|| "<missing>".to_string(), str::to_string),
                })
            }
        };

        let (low, high) = validate_range(entry, index, dataset_len)?;
        queries.push(if signed {
            Query::ParitySignedSum { low, high }
        } else {
            Query::RangeSum { low, high }
        });
    }

    Ok(queries)
}

/// Check one query's range: a two-element pair of non-negative integers with
/// `low <= high < dataset_len`
///
/// `as_u64` rejects negatives and fractional indices in one step; both are
/// malformed ranges, not merely out-of-bounds ones.
fn validate_range(
    entry: &Value,
    index: usize,
    dataset_len: usize,
) -> Result<(usize, usize), ValidationError> {
    let range = entry
        .get("range")
        .and_then(Value::as_array)
        .filter(|pair| pair.len() == 2)
        .ok_or(ValidationError::MalformedRange { index })?;

    let low = range[0]
        .as_u64()
        .ok_or(ValidationError::MalformedRange { index })? as usize;
    let high = range[1]
        .as_u64()
        .ok_or(ValidationError::MalformedRange { index })? as usize;

    if low > high {
        return Err(ValidationError::InvertedRange { index, low, high });
    }
    if high >= dataset_len {
        return Err(ValidationError::RangeOutOfBounds {
            index,
            high,
            len: dataset_len,
        });
    }

    Ok((low, high))
}
