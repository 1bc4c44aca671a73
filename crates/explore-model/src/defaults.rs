//! Fallback values used when a URL leaves a slice out.

use serde::{Deserialize, Serialize};

use crate::date_range::DateRangeSelector;
use crate::enums::{AnalysisMode, SamplingStrategy};
use crate::host::HostSelector;
use crate::location::LocationSelector;

/// Defaults for the explore URL.
///
/// Query slices equal to their default are left out of encoded URLs; path
/// slices fall back to these values when a redirect completes a partial path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExploreDefaults {
    /// Location used when the URL names none.
    pub location: LocationSelector,
    pub sampling_strategy: SamplingStrategy,
    pub date_range: DateRangeSelector,
    pub analysis_mode: AnalysisMode,
    /// Host filter that is elided from URLs.
    pub host: HostSelector,
}

impl Default for ExploreDefaults {
    fn default() -> Self {
        Self {
            location: LocationSelector::World,
            sampling_strategy: SamplingStrategy::AllSamples,
            date_range: DateRangeSelector::default(),
            analysis_mode: AnalysisMode::Single,
            host: HostSelector::human(),
        }
    }
}

impl ExploreDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_location(mut self, location: LocationSelector) -> Self {
        self.location = location;
        self
    }

    #[must_use]
    pub fn with_sampling_strategy(mut self, strategy: SamplingStrategy) -> Self {
        self.sampling_strategy = strategy;
        self
    }

    #[must_use]
    pub fn with_date_range(mut self, date_range: DateRangeSelector) -> Self {
        self.date_range = date_range;
        self
    }

    #[must_use]
    pub fn with_analysis_mode(mut self, mode: AnalysisMode) -> Self {
        self.analysis_mode = mode;
        self
    }

    #[must_use]
    pub fn with_host(mut self, host: HostSelector) -> Self {
        self.host = host;
        self
    }
}
