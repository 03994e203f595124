//! External transport collaborator
//!
//! The pipeline treats the network as an opaque request/response interface:
//! one read yielding the raw payload, one write delivering the result batch.
//! [`PayloadTransport`] is the seam; [`HttpTransport`] is the production
//! implementation (GET the input, POST the results with the payload token as
//! a bearer credential). Tests substitute scripted doubles.

use crate::config::Config;
use crate::error::{DeliveryError, FetchError};
use crate::pipeline::types::ResultBatch;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Fetches the input payload and delivers the result batch
///
/// Both calls are the only suspension points of a pipeline run. Neither side
/// retries; retry policy belongs to whoever owns the endpoints.
#[async_trait]
pub trait PayloadTransport: Send + Sync {
    /// Obtain the raw input payload
    ///
    /// Returns the parsed JSON document without interpreting it; shape and
    /// value constraints are the validator's job.
    async fn fetch_payload(&self) -> Result<Value, FetchError>;

    /// Deliver the result batch, authenticated with the payload token
    async fn deliver_results(
        &self,
        token: &str,
        results: &ResultBatch,
    ) -> Result<(), DeliveryError>;
}

/// HTTP transport backed by reqwest
pub struct HttpTransport {
    client: reqwest::Client,
    input_url: String,
    output_url: String,
}

impl HttpTransport {
    /// Build a transport from config; the timeout covers both calls
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            input_url: config.input_url.clone(),
            output_url: config.output_url.clone(),
        })
    }
}

#[async_trait]
impl PayloadTransport for HttpTransport {
    async fn fetch_payload(&self) -> Result<Value, FetchError> {
        log::debug!("fetching input payload from {}", self.input_url);
        let response = self.client.get(&self.input_url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        // Parse from text so a garbled body maps to Malformed, not to a
        // transport error
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FetchError::Malformed(e.to_string()))
    }

    async fn deliver_results(
        &self,
        token: &str,
        results: &ResultBatch,
    ) -> Result<(), DeliveryError> {
        log::debug!(
            "delivering {} results to {}",
            results.result.len(),
            self.output_url
        );
        let response = self
            .client
            .post(&self.output_url)
            .bearer_auth(token)
            .json(results)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DeliveryError::Status(response.status()));
        }
        Ok(())
    }
}
