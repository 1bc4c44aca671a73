//! Applying a sequence of setters to a starting URL.

use anyhow::{Context, Result, bail};
use tracing::info_span;

use explore_model::{
    AnalysisMode, BoundSide, DateRangeSelector, HostSelector, LocationSelector, QcSelector,
    SamplingStrategy, VariantSelector,
};
use explore_url::{DecodeResult, ExploreStateCodec, ExploreUrl, Location, MemoryHistory};

use crate::values::QcFilter;

/// Slices to change. Unset fields are left as they are.
#[derive(Debug, Clone, Default)]
pub struct NavigateRequest {
    pub location: Option<LocationSelector>,
    pub sampling_strategy: Option<SamplingStrategy>,
    pub date_range: Option<DateRangeSelector>,
    pub variants: Vec<VariantSelector>,
    pub analysis_mode: Option<AnalysisMode>,
    pub host: Option<HostSelector>,
    pub qc: Vec<QcFilter>,
}

/// Final URL and the history that led to it.
#[derive(Debug, Clone)]
pub struct NavigateOutcome {
    pub url: ExploreUrl,
    pub history: MemoryHistory,
}

/// Starts a history at `start`, follows redirects, then applies the
/// requested setters in path order: location, sampling strategy, date range,
/// variants and analysis mode, then host and QC.
pub fn navigate(
    codec: &ExploreStateCodec,
    start: Location,
    request: &NavigateRequest,
) -> Result<NavigateOutcome> {
    let span = info_span!("navigate", start = %start);
    let _guard = span.enter();

    let mut history = MemoryHistory::new(start);
    let current = resolve_valid(codec, &mut history)?;

    if let Some(location) = &request.location {
        codec
            .set_location(&mut history, location)
            .context("set location")?;
    }
    if let Some(strategy) = request.sampling_strategy {
        codec
            .set_sampling_strategy(&mut history, strategy)
            .context("set sampling strategy")?;
    }
    if let Some(date_range) = &request.date_range {
        codec
            .set_date_range(&mut history, date_range)
            .context("set date range")?;
    }
    if !request.variants.is_empty() {
        codec
            .set_variants(&mut history, &request.variants, request.analysis_mode)
            .context("set variants")?;
    } else if let Some(mode) = request.analysis_mode {
        codec
            .set_analysis_mode(&mut history, mode)
            .context("set analysis mode")?;
    }
    if request.host.is_some() || !request.qc.is_empty() {
        let qc = (!request.qc.is_empty()).then(|| merge_qc(current.state.qc, &request.qc));
        codec.set_host_and_qc(&mut history, request.host.as_ref(), qc.as_ref());
    }

    let url = match codec.decode_current(&history) {
        DecodeResult::Valid(url) => url,
        other => bail!("navigation ended on an unusable location: {other:?}"),
    };
    Ok(NavigateOutcome { url, history })
}

fn resolve_valid(codec: &ExploreStateCodec, history: &mut MemoryHistory) -> Result<ExploreUrl> {
    match codec.resolve(history) {
        DecodeResult::Valid(url) => Ok(url),
        DecodeResult::Redirect(target) => bail!("too many redirects, last target {target}"),
        DecodeResult::NoMatch => bail!("not an explore URL"),
    }
}

/// Applies `filters` on top of the bounds already in the URL.
fn merge_qc(mut qc: QcSelector, filters: &[QcFilter]) -> QcSelector {
    for filter in filters {
        qc.set_bound(filter.metric, BoundSide::From, filter.from);
        qc.set_bound(filter.metric, BoundSide::To, filter.to);
    }
    qc
}

#[cfg(test)]
mod tests {
    use super::*;
    use explore_model::QcMetric;

    #[test]
    fn merge_qc_replaces_both_sides() {
        let qc = merge_qc(
            QcSelector::good(),
            &[QcFilter {
                metric: QcMetric::OverallScore,
                from: Some(100),
                to: None,
            }],
        );
        assert_eq!(qc, QcSelector::only_bad());
    }
}
