//! Pipeline engine - orchestrates one validation-through-delivery run
//!
//! ```text
//! Idle -> Fetching -> Validating -> Aggregating -> Evaluating
//!      -> Delivering -> Done
//! ```
//!
//! `Failed` is reachable from any non-terminal state. Fetch and delivery go
//! through the [`PayloadTransport`] collaborator and are the only points that
//! suspend; aggregation and evaluation are synchronous and CPU-bound. One
//! engine drives one run: the dataset and tables it builds are dropped when
//! the run ends, and nothing is shared with the next run.

use crate::error::{DeliveryError, PipelineError};
use crate::pipeline::evaluator::evaluate;
use crate::pipeline::prefix::PrefixTables;
use crate::pipeline::types::ResultBatch;
use crate::pipeline::validator::validate;
use crate::transport::PayloadTransport;
use std::sync::Arc;
use std::time::Instant;

/// Lifecycle of a pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Fetching,
    Validating,
    Aggregating,
    Evaluating,
    Delivering,
    /// Terminal success: results computed and delivered
    Done,
    /// Terminal failure at whichever state was active
    Failed,
}

/// Outcome of a run whose computation succeeded
///
/// Delivery is reported separately so a caller can distinguish "computation
/// failed" from "computation succeeded but reporting failed". The batch is
/// exposed either way; the engine never retries delivery.
#[derive(Debug)]
pub struct PipelineReport {
    /// One result per input query, input order preserved
    pub results: ResultBatch,

    /// Whether the batch reached the output endpoint
    pub delivery: Result<(), DeliveryError>,
}

/// Drives one payload through fetch, validation, aggregation, evaluation and
/// delivery
pub struct PipelineEngine {
    transport: Arc<dyn PayloadTransport>,
    state: PipelineState,
}

impl PipelineEngine {
    pub fn new(transport: Arc<dyn PayloadTransport>) -> Self {
        Self {
            transport,
            state: PipelineState::Idle,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Execute one full run
    ///
    /// Returns `Err` only when no result batch was produced (fetch or
    /// validation failure); a delivery failure still returns `Ok` with the
    /// batch and the error inside the report.
    pub async fn run(&mut self) -> Result<PipelineReport, PipelineError> {
        let started = Instant::now();

        self.transition(PipelineState::Fetching);
        let raw = match self.transport.fetch_payload().await {
            Ok(raw) => raw,
            Err(e) => {
                self.fail(&format!("fetch failed: {e}"));
                return Err(e.into());
            }
        };

        self.transition(PipelineState::Validating);
        let payload = match validate(&raw) {
            Ok(payload) => payload,
            Err(e) => {
                self.fail(&format!("payload rejected: {e}"));
                return Err(e.into());
            }
        };
        log::info!(
            "payload validated: {} values, {} queries",
            payload.data.len(),
            payload.queries.len()
        );

        // Cannot fail on a validated dataset; always runs, even for an empty
        // query list (O(n) and it keeps the state machine uniform).
        self.transition(PipelineState::Aggregating);
        let tables = PrefixTables::build(&payload.data);

        self.transition(PipelineState::Evaluating);
        let results = ResultBatch {
            result: payload
                .queries
                .iter()
                .map(|&query| evaluate(query, &tables))
                .collect(),
        };

        self.transition(PipelineState::Delivering);
        let delivery = self
            .transport
            .deliver_results(&payload.token, &results)
            .await;
        match &delivery {
            Ok(()) => {
                self.transition(PipelineState::Done);
                log::info!(
                    "run complete: {} results delivered in {}ms",
                    results.result.len(),
                    started.elapsed().as_millis()
                );
            }
            Err(e) => {
                // Computation is not lost; the report carries the batch
                self.fail(&format!("delivery failed: {e}"));
            }
        }

        Ok(PipelineReport { results, delivery })
    }

    fn transition(&mut self, next: PipelineState) {
        log::debug!("pipeline state: {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    fn fail(&mut self, reason: &str) {
        log::error!("pipeline failed while {:?}: {reason}", self.state);
        self.state = PipelineState::Failed;
    }
}
