//! Review client CLI entrypoint.

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use review_client::{OperationMode, ReviewClient, ReviewClientConfig, ReviewError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ReviewError> {
    let config = load_config()?;
    let client = ReviewClient::new(config.client_config()?)?;

    match config.operation_mode()? {
        OperationMode::History => cli::history::run(&client).await,
        OperationMode::Analysis => cli::analysis::run(&client, config.require_title()?).await,
        OperationMode::Stream => cli::stream::run(&client, config.require_title()?).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ReviewError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<ReviewClientConfig, ReviewError> {
    ReviewClientConfig::load().map_err(|error| ReviewError::Configuration {
        message: error.to_string(),
    })
}

/// Installs a stderr log subscriber filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .compact();

    let _ignored = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
