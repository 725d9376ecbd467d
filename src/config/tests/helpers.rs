//! Shared test helpers for configuration tests.

use ortho_config::MergeComposer;
use serde_json::Value;

use crate::ReviewClientConfig;

/// Configuration source, ordered from lowest to highest precedence.
#[derive(Debug, Clone, Copy)]
pub enum Source {
    File,
    Environment,
    Cli,
}

/// Composes a [`ReviewClientConfig`] from `layers` on top of the serialised
/// defaults, so every merge starts from a complete document.
pub fn compose(layers: &[(Source, Value)]) -> ReviewClientConfig {
    let mut composer = MergeComposer::new();
    composer.push_defaults(
        serde_json::to_value(ReviewClientConfig::default()).expect("defaults should serialise"),
    );

    for (source, value) in layers {
        match source {
            Source::File => composer.push_file(value.clone(), None),
            Source::Environment => composer.push_environment(value.clone()),
            Source::Cli => composer.push_cli(value.clone()),
        }
    }

    ReviewClientConfig::merge_from_layers(composer.layers()).expect("merge should succeed")
}
