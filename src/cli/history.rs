//! Review history listing operation.

use std::io::{self, Write};

use review_client::{ReviewError, ReviewGateway, ReviewSession};

use super::output::write_history;

/// Prints the review history to stdout, one JSON record per line.
///
/// # Errors
///
/// Returns [`ReviewError::Transport`] or [`ReviewError::Status`] if the
/// request fails, and [`ReviewError::Io`] if stdout cannot be written.
pub async fn run<G: ReviewGateway>(gateway: &G) -> Result<(), ReviewError> {
    run_with_writer(gateway, &mut io::stdout()).await
}

/// Prints the review history to `writer`.
///
/// # Errors
///
/// See [`run`].
pub async fn run_with_writer<G, W>(gateway: &G, writer: &mut W) -> Result<(), ReviewError>
where
    G: ReviewGateway,
    W: Write + Send,
{
    let records = ReviewSession::new(gateway).history().await?;
    tracing::debug!(count = records.len(), "loaded review history");
    write_history(writer, &records)
}
