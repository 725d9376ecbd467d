//! Tests for configuration layer precedence.

use rstest::rstest;
use serde_json::{Value, json};

use super::helpers::{Source, compose};
use crate::ReviewClientConfig;

#[rstest]
#[case::file_overrides_defaults(
    vec![(Source::File, json!({"base_url": "http://file/api"}))],
    Some("http://file/api"),
    None
)]
#[case::environment_overrides_file(
    vec![(Source::File, json!({"title": "file-title"})), (Source::Environment, json!({"title": "env-title"}))],
    None,
    Some("env-title")
)]
#[case::cli_overrides_environment(
    vec![
        (Source::Environment, json!({"base_url": "http://env/api", "title": "env"})),
        (Source::Cli, json!({"base_url": "http://cli/api"})),
    ],
    Some("http://cli/api"),
    Some("env")
)]
fn later_sources_win(
    #[case] layers: Vec<(Source, Value)>,
    #[case] base_url: Option<&str>,
    #[case] title: Option<&str>,
) {
    let config = compose(&layers);

    assert_eq!(
        config.base_url,
        base_url.unwrap_or("http://localhost:8080/api")
    );
    assert_eq!(config.title.as_deref(), title);
}

#[rstest]
fn defaults_point_at_local_service() {
    let config = compose(&[]);

    assert_eq!(config.base_url, "http://localhost:8080/api");
    assert_eq!(config.timeout_secs, 150);
    assert!(config.title.is_none(), "title should be None");
    assert!(!config.stream, "stream should be off");
}

#[rstest]
fn composed_defaults_match_default_impl() {
    let composed = compose(&[]);
    let direct = ReviewClientConfig::default();

    assert_eq!(composed.base_url, direct.base_url);
    assert_eq!(composed.timeout_secs, direct.timeout_secs);
    assert_eq!(composed.title, direct.title);
    assert_eq!(composed.stream, direct.stream);
}

#[rstest]
fn full_precedence_chain() {
    let config = compose(&[
        (Source::File, json!({"timeout_secs": 130, "title": "file"})),
        (Source::Environment, json!({"title": "env"})),
        (Source::Cli, json!({"title": "cli", "stream": true})),
    ]);

    assert_eq!(config.title.as_deref(), Some("cli"), "CLI wins for title");
    assert_eq!(
        config.timeout_secs, 130,
        "file wins for timeout (no env/cli override)"
    );
    assert!(config.stream, "CLI flag should enable streaming");
}
