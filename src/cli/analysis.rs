//! Single title analysis operation.

use std::io::{self, Write};

use review_client::{ReviewError, ReviewGateway, ReviewSession};

use super::output::write_analysis;

/// Prints the analysis and statistics for `title` as pretty JSON.
///
/// # Errors
///
/// Returns [`ReviewError::Transport`] or [`ReviewError::Status`] if the
/// request fails, and [`ReviewError::Io`] if stdout cannot be written.
pub async fn run<G: ReviewGateway>(gateway: &G, title: &str) -> Result<(), ReviewError> {
    run_with_writer(gateway, title, &mut io::stdout()).await
}

/// Prints the analysis for `title` to `writer`.
///
/// # Errors
///
/// See [`run`].
pub async fn run_with_writer<G, W>(
    gateway: &G,
    title: &str,
    writer: &mut W,
) -> Result<(), ReviewError>
where
    G: ReviewGateway,
    W: Write + Send,
{
    let result = ReviewSession::new(gateway).analysis(title).await?;
    write_analysis(writer, &result)
}
