//! Closed enumerations that travel through the explore URL.
//!
//! Both enums parse from their URL spelling only. Unlike free-text
//! metadata, a URL segment is machine-written, so matching is exact and
//! case-sensitive.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Which subset of submitted samples is included in the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SamplingStrategy {
    /// Every submitted sequence.
    #[default]
    AllSamples,
    /// Only sequences from representative surveillance sampling.
    Surveillance,
}

impl SamplingStrategy {
    pub const ALL: [SamplingStrategy; 2] =
        [SamplingStrategy::AllSamples, SamplingStrategy::Surveillance];

    /// Returns the name used in the URL path.
    pub fn as_str(&self) -> &'static str {
        match self {
            SamplingStrategy::AllSamples => "AllSamples",
            SamplingStrategy::Surveillance => "Surveillance",
        }
    }
}

impl fmt::Display for SamplingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SamplingStrategy {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| ModelError::unknown("sampling strategy", s))
    }
}

/// Distinguishes the single-variant view from the comparison views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AnalysisMode {
    /// One variant, compared against all sequences.
    #[default]
    Single,
    /// Several variants side by side, each on equal footing.
    CompareEquals,
    /// Several variants, each compared against the first one.
    CompareToBaseline,
}

impl AnalysisMode {
    pub const ALL: [AnalysisMode; 3] = [
        AnalysisMode::Single,
        AnalysisMode::CompareEquals,
        AnalysisMode::CompareToBaseline,
    ];

    /// Returns the name used in the `analysisMode` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::Single => "Single",
            AnalysisMode::CompareEquals => "CompareEquals",
            AnalysisMode::CompareToBaseline => "CompareToBaseline",
        }
    }

    /// Returns true for the modes that show several variant groups.
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            AnalysisMode::CompareEquals | AnalysisMode::CompareToBaseline
        )
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ModelError::unknown("analysis mode", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampling_strategy_from_str() {
        assert_eq!(
            "AllSamples".parse::<SamplingStrategy>().unwrap(),
            SamplingStrategy::AllSamples
        );
        assert_eq!(
            "Surveillance".parse::<SamplingStrategy>().unwrap(),
            SamplingStrategy::Surveillance
        );
        assert!("allsamples".parse::<SamplingStrategy>().is_err());
        assert!("bogusStrategy".parse::<SamplingStrategy>().is_err());
    }

    #[test]
    fn test_analysis_mode_from_str() {
        for mode in AnalysisMode::ALL {
            assert_eq!(mode.as_str().parse::<AnalysisMode>().unwrap(), mode);
        }
        assert!("Compare".parse::<AnalysisMode>().is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(SamplingStrategy::default(), SamplingStrategy::AllSamples);
        assert_eq!(AnalysisMode::default(), AnalysisMode::Single);
        assert!(!AnalysisMode::Single.is_comparison());
        assert!(AnalysisMode::CompareToBaseline.is_comparison());
    }
}
