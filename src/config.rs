use std::env;

/// Configuration loaded from environment variables
///
/// Only the transport endpoints and the HTTP timeout are configurable;
/// everything else (size limits, query semantics) is fixed by the pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    /// URL the input payload is fetched from (GET)
    pub input_url: String,

    /// URL the result batch is posted to (POST, bearer auth)
    pub output_url: String,

    /// Timeout applied to both HTTP calls, in seconds
    pub http_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `RANGEFLOW_INPUT_URL` (default: the shared test input endpoint)
    /// - `RANGEFLOW_OUTPUT_URL` (default: the shared test output endpoint)
    /// - `RANGEFLOW_HTTP_TIMEOUT_SECS` (default: 10)
    pub fn from_env() -> Self {
        Self {
            input_url: env::var("RANGEFLOW_INPUT_URL").unwrap_or_else(|_| {
                "https://test-share.shub.edu.vn/api/intern-test/input".to_string()
            }),

            output_url: env::var("RANGEFLOW_OUTPUT_URL").unwrap_or_else(|_| {
                "https://test-share.shub.edu.vn/api/intern-test/output".to_string()
            }),

            http_timeout_secs: env::var("RANGEFLOW_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        }
    }
}
