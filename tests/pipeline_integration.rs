//! End-to-end pipeline runs against a scripted transport double
//!
//! The transport is the only external collaborator, so substituting it turns
//! a full run (fetch -> validate -> aggregate -> evaluate -> deliver) into a
//! deterministic test. Scenarios cover the success path, atomic validation
//! rejection, and delivery failure with the computation preserved.

use async_trait::async_trait;
use rangeflow::{
    DeliveryError, FetchError, PayloadTransport, PipelineEngine, PipelineError, PipelineState,
    ResultBatch, ValidationError,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// What the double should hand the engine, and how delivery should behave
struct ScriptedTransport {
    fetch: Result<Value, String>,
    accept_delivery: bool,
    delivered: Mutex<Vec<(String, Value)>>,
}

impl ScriptedTransport {
    fn new(payload: Value) -> Arc<Self> {
        Arc::new(Self {
            fetch: Ok(payload),
            accept_delivery: true,
            delivered: Mutex::new(Vec::new()),
        })
    }

    fn with_broken_fetch(reason: &str) -> Arc<Self> {
        Arc::new(Self {
            fetch: Err(reason.to_string()),
            accept_delivery: true,
            delivered: Mutex::new(Vec::new()),
        })
    }

    fn with_broken_delivery(payload: Value) -> Arc<Self> {
        Arc::new(Self {
            fetch: Ok(payload),
            accept_delivery: false,
            delivered: Mutex::new(Vec::new()),
        })
    }

    /// (token, wire body) pairs the engine delivered
    fn delivered(&self) -> Vec<(String, Value)> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait]
impl PayloadTransport for ScriptedTransport {
    async fn fetch_payload(&self) -> Result<Value, FetchError> {
        self.fetch
            .clone()
            .map_err(FetchError::Malformed)
    }

    async fn deliver_results(
        &self,
        token: &str,
        results: &ResultBatch,
    ) -> Result<(), DeliveryError> {
        if !self.accept_delivery {
            return Err(DeliveryError::Status(reqwest::StatusCode::BAD_GATEWAY));
        }
        // Record the exact wire body, not the in-memory type
        let body = serde_json::to_value(results).unwrap();
        self.delivered
            .lock()
            .unwrap()
            .push((token.to_string(), body));
        Ok(())
    }
}

#[tokio::test]
async fn test_full_run_delivers_expected_wire_body() {
    let transport = ScriptedTransport::new(json!({
        "token": "bearer-xyz",
        "data": [1, 2, 3, 4],
        "query": [
            { "type": "1", "range": [0, 3] },
            { "type": "1", "range": [1, 2] },
            { "type": "2", "range": [0, 3] },
            { "type": "2", "range": [1, 1] }
        ]
    }));

    let mut engine = PipelineEngine::new(transport.clone());
    let report = engine.run().await.unwrap();

    assert_eq!(engine.state(), PipelineState::Done);
    assert_eq!(report.results.result, vec![10.0, 5.0, -2.0, -2.0]);

    let delivered = transport.delivered();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].0, "bearer-xyz");
    assert_eq!(delivered[0].1, json!({ "result": [10.0, 5.0, -2.0, -2.0] }));
}

#[tokio::test]
async fn test_length_one_dataset_boundary() {
    // One element, one query of each kind: the element itself, then the
    // element signed by index 0 (even, so positive)
    let transport = ScriptedTransport::new(json!({
        "token": "t",
        "data": [42],
        "query": [
            { "type": "1", "range": [0, 0] },
            { "type": "2", "range": [0, 0] }
        ]
    }));

    let report = PipelineEngine::new(transport).run().await.unwrap();
    assert_eq!(report.results.result, vec![42.0, 42.0]);
}

#[tokio::test]
async fn test_fetch_failure_is_fatal() {
    let transport = ScriptedTransport::with_broken_fetch("connection reset");

    let mut engine = PipelineEngine::new(transport.clone());
    let err = engine.run().await.unwrap_err();

    assert_eq!(engine.state(), PipelineState::Failed);
    assert!(matches!(err, PipelineError::Fetch(FetchError::Malformed(_))));
    assert!(transport.delivered().is_empty());
}

#[tokio::test]
async fn test_invalid_payload_rejected_before_delivery() {
    // Out-of-bounds range: the payload is rejected atomically even though
    // the first query is fine, and nothing reaches the output endpoint
    let transport = ScriptedTransport::new(json!({
        "token": "t",
        "data": [1, 2, 3],
        "query": [
            { "type": "1", "range": [0, 2] },
            { "type": "2", "range": [1, 3] }
        ]
    }));

    let mut engine = PipelineEngine::new(transport.clone());
    let err = engine.run().await.unwrap_err();

    assert_eq!(engine.state(), PipelineState::Failed);
    assert!(matches!(
        err,
        PipelineError::Validation(ValidationError::RangeOutOfBounds {
            index: 1,
            high: 3,
            len: 3,
        })
    ));
    assert!(transport.delivered().is_empty());
}

#[tokio::test]
async fn test_delivery_failure_keeps_computation() {
    let transport = ScriptedTransport::with_broken_delivery(json!({
        "token": "t",
        "data": [1, 2, 3, 4],
        "query": [{ "type": "1", "range": [0, 3] }]
    }));

    let mut engine = PipelineEngine::new(transport.clone());
    let report = engine.run().await.unwrap();

    // Distinguishable outcome: computation Ok, delivery Err, batch intact
    assert_eq!(engine.state(), PipelineState::Failed);
    assert!(matches!(
        report.delivery,
        Err(DeliveryError::Status(status)) if status == reqwest::StatusCode::BAD_GATEWAY
    ));
    assert_eq!(report.results.result, vec![10.0]);
    assert!(transport.delivered().is_empty());
}
