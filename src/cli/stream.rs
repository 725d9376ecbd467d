//! Live analysis stream operation.

use std::io::{self, Write};

use review_client::{ReviewError, ReviewGateway, ReviewSession};

use super::output::write_stream_message;

/// Follows the analysis stream for `title`, printing each message as it
/// arrives, until the server closes the connection.
///
/// # Errors
///
/// Returns the first error delivered on the stream, or [`ReviewError::Io`]
/// if stdout cannot be written.
pub async fn run<G: ReviewGateway>(gateway: &G, title: &str) -> Result<(), ReviewError> {
    run_with_writer(gateway, title, &mut io::stdout()).await
}

/// Follows the analysis stream for `title`, writing messages to `writer`.
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
    let summary = ReviewSession::new(gateway)
        .follow_analysis(title, |message| write_stream_message(writer, message))
        .await?;

    tracing::info!(
        title,
        messages = summary.messages,
        "analysis stream closed by server"
    );
    Ok(())
}
