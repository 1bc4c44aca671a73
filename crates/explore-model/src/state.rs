use serde::{Deserialize, Serialize};

use crate::date_range::DateRangeSelector;
use crate::enums::{AnalysisMode, SamplingStrategy};
use crate::host::HostSelector;
use crate::location::LocationSelector;
use crate::qc::QcSelector;
use crate::variant::VariantSelector;

/// Everything the explore view shows, as carried by its URL.
///
/// `variant` and `variants` are only present on the variant pages. `variant`
/// is read from the unindexed parameters, `variants` holds every variant
/// group of a comparison view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploreState {
    pub location: LocationSelector,
    pub date_range: DateRangeSelector,
    pub sampling_strategy: SamplingStrategy,
    pub analysis_mode: AnalysisMode,
    pub host: HostSelector,
    pub qc: QcSelector,
    pub variant: Option<VariantSelector>,
    pub variants: Option<Vec<VariantSelector>>,
}

impl ExploreState {
    /// Returns true if the state addresses a variant page.
    pub fn has_variants(&self) -> bool {
        self.variant.is_some() || self.variants.is_some()
    }
}
