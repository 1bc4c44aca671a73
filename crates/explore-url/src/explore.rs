//! Mapping between [`ExploreState`] and explore locations.
//!
//! Decoding a location yields one of three outcomes:
//!
//! - [`DecodeResult::Valid`]: all three path segments are present and valid.
//!   Query parameters never invalidate a URL; malformed values fall back to
//!   their defaults.
//! - [`DecodeResult::Redirect`]: the path is an explore path but incomplete or
//!   has one invalid segment. The target replaces only what is missing or
//!   invalid and keeps the rest of the path and the query string.
//! - [`DecodeResult::NoMatch`]: the path is not an explore path at all.
//!
//! The setters produce a new location from the current one and push it onto
//! the navigator, so going back restores the previous value.

use explore_model::{
    AnalysisMode, DateRangeSelector, ExploreDefaults, ExploreState, HostSelector,
    LocationSelector, QcSelector, SamplingStrategy, VariantSelector,
};
use tracing::{debug, error};

use crate::codec::{
    AnalysisModeCodec, DateRangeCodec, HostCodec, LocationCodec, QcCodec, QueryCodec,
    SamplingStrategyCodec, SegmentCodec, VariantCodec, VariantListCodec,
};
use crate::error::{ExploreUrlError, Result};
use crate::navigation::Navigator;
use crate::query::QueryParams;
use crate::route::{ExploreRoute, ExploreSegments, Location, VARIANTS_SEGMENT, explore_prefix};

/// Redirects followed by [`ExploreStateCodec::resolve`] before giving up.
/// A partial path needs at most three to become valid.
const MAX_REDIRECTS: usize = 4;

/// Outcome of decoding a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeResult {
    Valid(ExploreUrl),
    Redirect(Location),
    NoMatch,
}

impl DecodeResult {
    pub fn valid(self) -> Option<ExploreUrl> {
        match self {
            Self::Valid(url) => Some(url),
            Self::Redirect(_) | Self::NoMatch => None,
        }
    }
}

/// A decoded explore location: the state plus the links derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExploreUrl {
    pub state: ExploreState,
    location: Location,
    prefix: String,
}

impl ExploreUrl {
    /// The location this state was decoded from.
    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn into_state(self) -> ExploreState {
        self.state
    }

    /// Variant overview page, keeping the current query.
    pub fn overview_page_url(&self) -> String {
        format!("{}/{VARIANTS_SEGMENT}{}", self.prefix, self.location.search())
    }

    /// Explore page of the current location, sampling and date range.
    pub fn explore_page_url(&self) -> String {
        self.prefix.clone()
    }

    /// A sub-page of the explore page, e.g. `/sequencing-coverage`.
    pub fn deep_explore_page_url(&self, page_path: &str) -> String {
        format!("{}{page_path}{}", self.prefix, self.location.search())
    }

    /// A sub-page of the variant page, e.g. `/chen-2021-fitness`.
    pub fn deep_focus_page_url(&self, page_path: &str) -> String {
        format!(
            "{}/{VARIANTS_SEGMENT}{page_path}{}",
            self.prefix,
            self.location.search()
        )
    }

    /// Key that changes whenever the focused view changes.
    pub fn focus_key(&self) -> String {
        self.location.to_string()
    }
}

/// Bidirectional codec between [`ExploreState`] and explore locations.
#[derive(Debug, Clone)]
pub struct ExploreStateCodec {
    defaults: ExploreDefaults,
    location: LocationCodec,
    sampling_strategy: SamplingStrategyCodec,
    date_range: DateRangeCodec,
    analysis_mode: AnalysisModeCodec,
    host: HostCodec,
    qc: QcCodec,
}

impl Default for ExploreStateCodec {
    fn default() -> Self {
        Self::new(ExploreDefaults::default())
    }
}

impl ExploreStateCodec {
    pub fn new(defaults: ExploreDefaults) -> Self {
        Self {
            location: LocationCodec,
            sampling_strategy: SamplingStrategyCodec,
            date_range: DateRangeCodec,
            analysis_mode: AnalysisModeCodec::new(defaults.analysis_mode),
            host: HostCodec::new(defaults.host.clone()),
            qc: QcCodec,
            defaults,
        }
    }

    pub fn defaults(&self) -> &ExploreDefaults {
        &self.defaults
    }

    // ------------------------------------------------------------------
    // Decoding
    // ------------------------------------------------------------------

    pub fn decode(&self, location: &Location) -> DecodeResult {
        let Some(route) = ExploreRoute::parse(&location.pathname) else {
            return DecodeResult::NoMatch;
        };
        let segments = match route {
            ExploreRoute::Root => {
                let target = explore_prefix(
                    &self.location.encode(&self.defaults.location),
                    &self.default_sampling_strategy(),
                    &self.default_date_range(),
                );
                return self.redirect(location, target, "no location");
            }
            ExploreRoute::Location { location: place } => {
                let target = explore_prefix(
                    place,
                    &self.default_sampling_strategy(),
                    &self.default_date_range(),
                );
                return self.redirect(location, target, "no sampling strategy");
            }
            ExploreRoute::LocationSampling {
                location: place,
                sampling_strategy,
            } => {
                let sampling_strategy = match self.sampling_strategy.decode(sampling_strategy) {
                    Some(_) => sampling_strategy.to_string(),
                    None => self.default_sampling_strategy(),
                };
                let target =
                    explore_prefix(place, &sampling_strategy, &self.default_date_range());
                return self.redirect(location, target, "no date range");
            }
            ExploreRoute::Complete(segments) => segments,
        };

        let Some(sampling_strategy) = self.sampling_strategy.decode(segments.sampling_strategy)
        else {
            let target = explore_prefix(
                segments.location,
                &self.default_sampling_strategy(),
                segments.date_range,
            );
            return self.redirect(
                location,
                format!("{target}{}", segments.rest),
                "invalid sampling strategy",
            );
        };
        let Some(date_range) = self.date_range.decode(segments.date_range) else {
            let target = explore_prefix(
                segments.location,
                segments.sampling_strategy,
                &self.default_date_range(),
            );
            return self.redirect(
                location,
                format!("{target}{}", segments.rest),
                "invalid date range",
            );
        };

        let params = QueryParams::parse(&location.query);
        let (variant, variants) = if segments.is_variants_page() {
            (
                Some(VariantCodec::unindexed().read(&params)),
                Some(VariantListCodec.read(&params)),
            )
        } else {
            (None, None)
        };
        let state = ExploreState {
            location: self.location.decode_segment(segments.location),
            date_range,
            sampling_strategy,
            analysis_mode: self.analysis_mode.read(&params),
            host: self.host.read(&params),
            qc: self.qc.read(&params),
            variant,
            variants,
        };
        DecodeResult::Valid(ExploreUrl {
            state,
            location: location.clone(),
            prefix: segments.prefix(),
        })
    }

    /// Decodes the navigator's current location.
    pub fn decode_current<N: Navigator>(&self, navigator: &N) -> DecodeResult {
        self.decode(&navigator.current())
    }

    /// Decodes the current location, pushing redirect targets until the
    /// location is valid or not an explore path.
    pub fn resolve<N: Navigator>(&self, navigator: &mut N) -> DecodeResult {
        let mut result = self.decode_current(navigator);
        for _ in 0..MAX_REDIRECTS {
            match result {
                DecodeResult::Redirect(target) => {
                    navigator.push(target);
                    result = self.decode_current(navigator);
                }
                DecodeResult::Valid(_) | DecodeResult::NoMatch => return result,
            }
        }
        result
    }

    fn redirect(&self, current: &Location, pathname: String, reason: &'static str) -> DecodeResult {
        let target = Location::new(pathname, current.query.clone());
        debug!(from = %current, to = %target, reason, "redirecting explore location");
        DecodeResult::Redirect(target)
    }

    fn default_sampling_strategy(&self) -> String {
        self.sampling_strategy
            .encode(&self.defaults.sampling_strategy)
    }

    fn default_date_range(&self) -> String {
        self.date_range.encode(&self.defaults.date_range)
    }

    // ------------------------------------------------------------------
    // Encoding
    // ------------------------------------------------------------------

    /// Encodes a complete state. Default host and analysis mode and unset
    /// QC bounds are left out; `/variants` is added when the state carries
    /// variant selectors.
    pub fn encode(&self, state: &ExploreState) -> Location {
        let mut pathname = explore_prefix(
            &self.location.encode(&state.location),
            &self.sampling_strategy.encode(&state.sampling_strategy),
            &self.date_range.encode(&state.date_range),
        );
        let mut params = QueryParams::new();
        if state.has_variants() {
            pathname.push('/');
            pathname.push_str(VARIANTS_SEGMENT);
            write_variants(state, &mut params);
        }
        self.analysis_mode.write(&state.analysis_mode, &mut params);
        self.host.write(&state.host, &mut params);
        self.qc.write(&state.qc, &mut params);
        Location::new(pathname, params.to_string())
    }

    /// Replaces the location segment, keeping everything after it.
    pub fn with_location(&self, current: &Location, location: &LocationSelector) -> Result<Location> {
        let segments = complete_segments(current, "setLocation")?;
        let pathname = explore_prefix(
            &self.location.encode(location),
            segments.sampling_strategy,
            segments.date_range,
        );
        Ok(Location::new(
            format!("{pathname}{}", segments.rest),
            current.query.clone(),
        ))
    }

    /// Replaces the sampling strategy segment, keeping everything else.
    pub fn with_sampling_strategy(
        &self,
        current: &Location,
        sampling_strategy: SamplingStrategy,
    ) -> Result<Location> {
        let segments = complete_segments(current, "setSamplingStrategy")?;
        let pathname = explore_prefix(
            segments.location,
            &self.sampling_strategy.encode(&sampling_strategy),
            segments.date_range,
        );
        Ok(Location::new(
            format!("{pathname}{}", segments.rest),
            current.query.clone(),
        ))
    }

    /// Replaces the date range segment, keeping everything else.
    pub fn with_date_range(
        &self,
        current: &Location,
        date_range: &DateRangeSelector,
    ) -> Result<Location> {
        let segments = complete_segments(current, "setDateRange")?;
        let pathname = explore_prefix(
            segments.location,
            segments.sampling_strategy,
            &self.date_range.encode(date_range),
        );
        Ok(Location::new(
            format!("{pathname}{}", segments.rest),
            current.query.clone(),
        ))
    }

    /// Moves to the variant page with `variants` replacing every variant
    /// parameter. Unconstrained selectors are dropped from the list. The
    /// analysis mode is rewritten only when one is given.
    pub fn with_variants(
        &self,
        current: &Location,
        variants: &[VariantSelector],
        analysis_mode: Option<AnalysisMode>,
    ) -> Result<Location> {
        let segments = complete_segments(current, "setVariants")?;
        let mut params = QueryParams::parse(&current.query);
        VariantListCodec.write_all(variants, &mut params);
        if let Some(mode) = analysis_mode {
            self.analysis_mode.write(&mode, &mut params);
        }
        Ok(variants_page(&segments, &params))
    }

    /// Moves to the variant page with a new analysis mode.
    pub fn with_analysis_mode(
        &self,
        current: &Location,
        analysis_mode: AnalysisMode,
    ) -> Result<Location> {
        let segments = complete_segments(current, "setAnalysisMode")?;
        let mut params = QueryParams::parse(&current.query);
        self.analysis_mode.write(&analysis_mode, &mut params);
        Ok(variants_page(&segments, &params))
    }

    /// Merges host and QC filters into the current query. `None` leaves that
    /// filter untouched.
    pub fn with_host_and_qc(
        &self,
        current: &Location,
        host: Option<&HostSelector>,
        qc: Option<&QcSelector>,
    ) -> Location {
        let mut params = QueryParams::parse(&current.query);
        if let Some(host) = host {
            self.host.write(host, &mut params);
        }
        if let Some(qc) = qc {
            self.qc.write(qc, &mut params);
        }
        Location::new(current.pathname.clone(), format!("{params}&"))
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn set_location<N: Navigator>(
        &self,
        navigator: &mut N,
        location: &LocationSelector,
    ) -> Result<Location> {
        let next = self.with_location(&navigator.current(), location)?;
        Ok(push(navigator, next))
    }

    pub fn set_sampling_strategy<N: Navigator>(
        &self,
        navigator: &mut N,
        sampling_strategy: SamplingStrategy,
    ) -> Result<Location> {
        let next = self.with_sampling_strategy(&navigator.current(), sampling_strategy)?;
        Ok(push(navigator, next))
    }

    pub fn set_date_range<N: Navigator>(
        &self,
        navigator: &mut N,
        date_range: &DateRangeSelector,
    ) -> Result<Location> {
        let next = self.with_date_range(&navigator.current(), date_range)?;
        Ok(push(navigator, next))
    }

    pub fn set_variants<N: Navigator>(
        &self,
        navigator: &mut N,
        variants: &[VariantSelector],
        analysis_mode: Option<AnalysisMode>,
    ) -> Result<Location> {
        let next = self.with_variants(&navigator.current(), variants, analysis_mode)?;
        Ok(push(navigator, next))
    }

    pub fn set_analysis_mode<N: Navigator>(
        &self,
        navigator: &mut N,
        analysis_mode: AnalysisMode,
    ) -> Result<Location> {
        let next = self.with_analysis_mode(&navigator.current(), analysis_mode)?;
        Ok(push(navigator, next))
    }

    pub fn set_host_and_qc<N: Navigator>(
        &self,
        navigator: &mut N,
        host: Option<&HostSelector>,
        qc: Option<&QcSelector>,
    ) -> Location {
        let next = self.with_host_and_qc(&navigator.current(), host, qc);
        push(navigator, next)
    }
}

fn push<N: Navigator>(navigator: &mut N, next: Location) -> Location {
    debug!(to = %next, "pushing explore location");
    navigator.push(next.clone());
    next
}

/// Segments of `current`, which must be a complete explore path.
fn complete_segments<'a>(current: &'a Location, setter: &'static str) -> Result<ExploreSegments<'a>> {
    match ExploreRoute::parse(&current.pathname) {
        Some(ExploreRoute::Complete(segments)) => Ok(segments),
        _ => {
            error!(setter, location = %current, "setter called outside a complete explore path");
            Err(ExploreUrlError::precondition(
                "an /explore/<location>/<samplingStrategy>/<dateRange> path",
                current.to_string(),
            ))
        }
    }
}

/// `<prefix>/variants?<params>&`. The trailing `&` keeps the query from
/// ending mid-token when nested pages append to it.
fn variants_page(segments: &ExploreSegments<'_>, params: &QueryParams) -> Location {
    Location::new(
        format!("{}/{VARIANTS_SEGMENT}", segments.prefix()),
        format!("{params}&"),
    )
}

/// Writes the variant selectors of `state` so that decoding gives back the
/// same `variant` and `variants` pair.
fn write_variants(state: &ExploreState, params: &mut QueryParams) {
    match (&state.variant, &state.variants) {
        (Some(primary), Some(list)) if list.len() == 1 && primary != &list[0] => {
            VariantListCodec.write_indexed(list, params);
        }
        (_, Some(list)) => VariantListCodec.write_all(list, params),
        (Some(primary), None) => VariantCodec::unindexed().write(primary, params),
        (None, None) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::MemoryHistory;

    fn loc(path: &str) -> Location {
        Location::parse(path).unwrap()
    }

    #[test]
    fn test_non_explore_paths_do_not_match() {
        let codec = ExploreStateCodec::default();
        assert_eq!(codec.decode(&loc("/about")), DecodeResult::NoMatch);
        assert_eq!(codec.decode(&loc("/")), DecodeResult::NoMatch);
    }

    #[test]
    fn test_redirect_replaces_invalid_sampling_strategy() {
        let codec = ExploreStateCodec::default();
        assert_eq!(
            codec.decode(&loc("/explore/Switzerland/bogusStrategy/Past6M")),
            DecodeResult::Redirect(loc("/explore/Switzerland/AllSamples/Past6M"))
        );
    }

    #[test]
    fn test_redirect_keeps_suffix_and_query() {
        let codec = ExploreStateCodec::default();
        assert_eq!(
            codec.decode(&loc("/explore/Switzerland/Surveillance/Past9Y/variants?pangoLineage=B.1")),
            DecodeResult::Redirect(loc(
                "/explore/Switzerland/Surveillance/Past6M/variants?pangoLineage=B.1"
            ))
        );
    }

    #[test]
    fn test_resolve_completes_partial_path() {
        let codec = ExploreStateCodec::default();
        let mut history = MemoryHistory::new(loc("/explore/"));
        let url = codec.resolve(&mut history).valid().unwrap();
        assert_eq!(url.explore_page_url(), "/explore/World/AllSamples/Past6M");
        assert_eq!(history.entries().len(), 2);
    }

    #[test]
    fn test_setter_requires_complete_path() {
        let codec = ExploreStateCodec::default();
        let mut history = MemoryHistory::new(loc("/explore/Germany"));
        let result = codec.set_sampling_strategy(&mut history, SamplingStrategy::Surveillance);
        assert!(matches!(
            result,
            Err(ExploreUrlError::PreconditionViolated { .. })
        ));
        assert_eq!(history.entries().len(), 1);
    }

    #[test]
    fn test_links() {
        let codec = ExploreStateCodec::default();
        let url = codec
            .decode(&loc("/explore/Germany/AllSamples/Past3M/variants?pangoLineage=B.1.1.7"))
            .valid()
            .unwrap();
        assert_eq!(
            url.overview_page_url(),
            "/explore/Germany/AllSamples/Past3M/variants?pangoLineage=B.1.1.7"
        );
        assert_eq!(url.explore_page_url(), "/explore/Germany/AllSamples/Past3M");
        assert_eq!(
            url.deep_explore_page_url("/sequencing-coverage"),
            "/explore/Germany/AllSamples/Past3M/sequencing-coverage?pangoLineage=B.1.1.7"
        );
        assert_eq!(
            url.deep_focus_page_url("/chen-2021-fitness"),
            "/explore/Germany/AllSamples/Past3M/variants/chen-2021-fitness?pangoLineage=B.1.1.7"
        );
        assert_eq!(
            url.focus_key(),
            "/explore/Germany/AllSamples/Past3M/variants?pangoLineage=B.1.1.7"
        );
    }
}
