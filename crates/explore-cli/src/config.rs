//! Loading codec defaults from a JSON file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use explore_model::ExploreDefaults;

/// Parses a defaults document. Missing fields keep their built-in values.
pub fn parse_defaults(text: &str) -> Result<ExploreDefaults> {
    serde_json::from_str(text).context("parse explore defaults")
}

/// Loads defaults from `path`, or returns the built-in defaults when no path
/// is given.
pub fn load_defaults(path: Option<&Path>) -> Result<ExploreDefaults> {
    let Some(path) = path else {
        return Ok(ExploreDefaults::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("read config file {}", path.display()))?;
    let defaults =
        parse_defaults(&text).with_context(|| format!("load config file {}", path.display()))?;
    debug!(path = %path.display(), ?defaults, "loaded explore defaults");
    Ok(defaults)
}

#[cfg(test)]
mod tests {
    use super::*;
    use explore_model::{AnalysisMode, HostSelector, LocationSelector, SamplingStrategy};

    #[test]
    fn partial_document_keeps_other_defaults() {
        let defaults = parse_defaults(
            r#"{ "samplingStrategy": "Surveillance", "host": ["Human", "Bat"] }"#,
        )
        .unwrap();
        assert_eq!(defaults.sampling_strategy, SamplingStrategy::Surveillance);
        assert_eq!(defaults.host, HostSelector::new(["Bat", "Human"]));
        assert_eq!(defaults.location, LocationSelector::World);
        assert_eq!(defaults.analysis_mode, AnalysisMode::Single);
    }

    #[test]
    fn missing_path_gives_builtin_defaults() {
        assert_eq!(load_defaults(None).unwrap(), ExploreDefaults::default());
    }

    #[test]
    fn invalid_document_is_an_error() {
        let err = parse_defaults("{ not json").unwrap_err();
        assert_eq!(err.to_string(), "parse explore defaults");
    }
}
