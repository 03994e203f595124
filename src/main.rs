use rangeflow::{Config, HttpTransport, PipelineEngine};
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    // Default to info so state transitions and the run summary are visible
    // without any RUST_LOG setup
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    log::info!("input:  {}", config.input_url);
    log::info!("output: {}", config.output_url);

    let transport = match HttpTransport::new(&config) {
        Ok(transport) => Arc::new(transport),
        Err(e) => {
            log::error!("failed to build HTTP client: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut engine = PipelineEngine::new(transport);
    match engine.run().await {
        Ok(report) => match report.delivery {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                // Computation succeeded; surface the batch so it is not lost
                log::error!("results computed but not delivered: {e}");
                log::warn!("undelivered results: {:?}", report.results.result);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            log::error!("pipeline failed: {e}");
            ExitCode::FAILURE
        }
    }
}
