//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – `http://localhost:8080/api` with a 150 second timeout
//! 2. **Configuration file** – `.review-client.toml` in current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `REVIEW_CLIENT_BASE_URL`,
//!    `REVIEW_CLIENT_TIMEOUT_SECS`, `REVIEW_CLIENT_TITLE`
//! 4. **Command-line arguments** – `--base-url`/`-b`, `--timeout-secs`/`-T`,
//!    `--title`/`-t`, `--stream`/`-s`
//!
//! # Configuration File
//!
//! ```toml
//! base_url = "http://localhost:8080/api"
//! timeout_secs = 150
//! title = "The Left Hand of Darkness"
//! stream = true
//! ```

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::review::{ClientConfig, DEFAULT_BASE_ADDRESS, DEFAULT_TIMEOUT, ReviewError};

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Print the review history.
    History,
    /// Print analysis and statistics for one title.
    Analysis,
    /// Follow the live analysis stream for one title.
    Stream,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use review_client::ReviewClientConfig;
///
/// let config = ReviewClientConfig::load().expect("failed to load configuration");
/// let client_config = config.client_config().expect("invalid client settings");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "REVIEW_CLIENT",
    discovery(
        dotfile_name = ".review-client.toml",
        config_file_name = "review-client.toml",
        app_name = "review-client"
    )
)]
pub struct ReviewClientConfig {
    /// Base address of the review service.
    ///
    /// Can be provided via:
    /// - CLI: `--base-url <URL>` or `-b <URL>`
    /// - Environment: `REVIEW_CLIENT_BASE_URL`
    /// - Config file: `base_url = "..."`
    #[ortho_config(cli_short = 'b')]
    pub base_url: String,

    /// Timeout for non-streaming requests, in seconds.
    ///
    /// Can be provided via:
    /// - CLI: `--timeout-secs <SECONDS>` or `-T <SECONDS>`
    /// - Environment: `REVIEW_CLIENT_TIMEOUT_SECS`
    /// - Config file: `timeout_secs = 150`
    #[ortho_config(cli_short = 'T')]
    pub timeout_secs: u64,

    /// Review title to analyse. Without a title the history is printed.
    ///
    /// Can be provided via:
    /// - CLI: `--title <TITLE>` or `-t <TITLE>`
    /// - Environment: `REVIEW_CLIENT_TITLE`
    /// - Config file: `title = "..."`
    #[ortho_config(cli_short = 't')]
    pub title: Option<String>,

    /// Follows the live analysis stream instead of fetching a snapshot.
    ///
    /// Can be provided via:
    /// - CLI: `--stream` / `-s`
    /// - Config file: `stream = true`
    ///
    /// Note: `ortho_config` does not load boolean values from the environment.
    #[ortho_config(cli_short = 's')]
    pub stream: bool,
}

impl Default for ReviewClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_ADDRESS.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            title: None,
            stream: false,
        }
    }
}

impl ReviewClientConfig {
    /// Determines the operation mode based on provided configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Configuration`] when streaming is requested
    /// without a title.
    pub fn operation_mode(&self) -> Result<OperationMode, ReviewError> {
        match (self.title.is_some(), self.stream) {
            (true, true) => Ok(OperationMode::Stream),
            (true, false) => Ok(OperationMode::Analysis),
            (false, false) => Ok(OperationMode::History),
            (false, true) => Err(ReviewError::Configuration {
                message: "a review title is required to follow the analysis stream \
                          (use --title or -t)"
                    .to_owned(),
            }),
        }
    }

    /// Returns the title or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Configuration`] when no title is configured.
    pub fn require_title(&self) -> Result<&str, ReviewError> {
        self.title
            .as_deref()
            .ok_or_else(|| ReviewError::Configuration {
                message: "review title is required (use --title or -t)".to_owned(),
            })
    }

    /// Builds the client configuration described by these settings.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Configuration`] for a zero timeout and
    /// [`ReviewError::InvalidBaseAddress`] for an unusable base URL.
    pub fn client_config(&self) -> Result<ClientConfig, ReviewError> {
        if self.timeout_secs == 0 {
            return Err(ReviewError::Configuration {
                message: "timeout_secs must be greater than zero".to_owned(),
            });
        }

        Ok(ClientConfig::new(&self.base_url)?.with_timeout(Duration::from_secs(self.timeout_secs)))
    }
}

#[cfg(test)]
mod tests;
