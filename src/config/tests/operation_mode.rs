//! Tests for operation mode determination.

use rstest::rstest;

use crate::config::OperationMode;
use crate::review::ReviewError;
use crate::ReviewClientConfig;

#[rstest]
#[case::history(None, false, OperationMode::History)]
#[case::analysis(Some("Dune"), false, OperationMode::Analysis)]
#[case::stream(Some("Dune"), true, OperationMode::Stream)]
fn selects_mode_from_title_and_stream_flag(
    #[case] title: Option<&str>,
    #[case] stream: bool,
    #[case] expected: OperationMode,
) {
    let config = ReviewClientConfig {
        title: title.map(ToOwned::to_owned),
        stream,
        ..Default::default()
    };

    assert_eq!(
        config.operation_mode().ok(),
        Some(expected),
        "unexpected mode for title {title:?} and stream {stream}"
    );
}

#[rstest]
fn stream_without_title_is_a_configuration_error() {
    let config = ReviewClientConfig {
        stream: true,
        ..Default::default()
    };

    let result = config.operation_mode();

    assert!(
        matches!(result, Err(ReviewError::Configuration { .. })),
        "expected Configuration error, got {result:?}"
    );
}

#[rstest]
fn require_title_returns_value_when_present() {
    let config = ReviewClientConfig {
        title: Some("Dune".to_owned()),
        ..Default::default()
    };

    assert_eq!(config.require_title().ok(), Some("Dune"));
}

#[rstest]
fn require_title_fails_when_missing() {
    let config = ReviewClientConfig::default();

    assert!(config.require_title().is_err(), "title should be required");
}
