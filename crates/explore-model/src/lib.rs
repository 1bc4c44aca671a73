//! Typed state values of the variant explore dashboard.
//!
//! These types describe *what* the explore view shows. How they are written
//! to and read from URLs lives in the `explore-url` crate.

pub mod date_range;
pub mod defaults;
pub mod enums;
pub mod error;
pub mod host;
pub mod location;
pub mod qc;
pub mod state;
pub mod variant;

pub use date_range::{DateBounds, DateRangePreset, DateRangeSelector, parse_date};
pub use defaults::ExploreDefaults;
pub use enums::{AnalysisMode, SamplingStrategy};
pub use error::{ModelError, Result};
pub use host::{HUMAN, HostSelector};
pub use location::{LocationSelector, Region};
pub use qc::{BoundSide, QcBounds, QcMetric, QcSelector, parse_bound};
pub use state::ExploreState;
pub use variant::VariantSelector;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_matches_defaults() {
        let state = ExploreState::default();
        let defaults = ExploreDefaults::default();
        assert_eq!(state.location, defaults.location);
        assert_eq!(state.date_range, defaults.date_range);
        assert_eq!(state.sampling_strategy, defaults.sampling_strategy);
        assert_eq!(state.analysis_mode, defaults.analysis_mode);
        assert!(state.host.is_default());
        assert!(!state.has_variants());
    }

    #[test]
    fn state_serializes() {
        let state = ExploreState {
            location: LocationSelector::country("Switzerland").expect("valid country"),
            variant: Some(VariantSelector::pango_lineage("B.1.1.7")),
            ..ExploreState::default()
        };
        let json = serde_json::to_string(&state).expect("serialize state");
        let round: ExploreState = serde_json::from_str(&json).expect("deserialize state");
        assert_eq!(round, state);
    }
}
