//! Parsers for command line values.
//!
//! Each returns `Result<T, String>` so it can be used directly as a clap
//! `value_parser`.

use explore_model::location::{DIVISION_SEPARATOR, WORLD};
use explore_model::{
    DateRangeSelector, LocationSelector, QcMetric, Region, VariantSelector, parse_bound,
};
use explore_url::QueryParams;
use explore_url::codec::{DateRangeCodec, QueryCodec, SegmentCodec, VariantCodec};

/// A `--qc METRIC=FROM:TO` filter. Either side may be left empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QcFilter {
    pub metric: QcMetric,
    pub from: Option<i32>,
    pub to: Option<i32>,
}

/// `World`, a region name, a country, or `country--division`.
pub fn parse_location(value: &str) -> Result<LocationSelector, String> {
    if value == WORLD {
        return Ok(LocationSelector::World);
    }
    if let Ok(region) = value.parse::<Region>() {
        return Ok(LocationSelector::region(region));
    }
    let selector = match value.split_once(DIVISION_SEPARATOR) {
        Some((country, division)) => LocationSelector::division(country, division),
        None => LocationSelector::country(value),
    };
    selector.map_err(|err| err.to_string())
}

/// A preset such as `Past6M` or an explicit `YYYY-MM-DD--YYYY-MM-DD` range.
pub fn parse_date_range(value: &str) -> Result<DateRangeSelector, String> {
    DateRangeCodec.decode(value).ok_or_else(|| {
        format!("invalid date range '{value}': expected a preset such as Past6M or YYYY-MM-DD--YYYY-MM-DD")
    })
}

/// Variant fields in query form, e.g. `pangoLineage=B.1.1.7&aaMutations=S:E484K`.
pub fn parse_variant(value: &str) -> Result<VariantSelector, String> {
    let params = QueryParams::parse(value);
    let codec = VariantCodec::unindexed();
    if !codec.is_present(&params) {
        return Err(format!(
            "invalid variant '{value}': expected fields such as pangoLineage=B.1.1.7"
        ));
    }
    Ok(codec.read(&params))
}

/// `METRIC=FROM:TO`, where `METRIC` is a QC metric name with or without the
/// `nextcladeQc` prefix.
pub fn parse_qc_filter(value: &str) -> Result<QcFilter, String> {
    let (metric, range) = value
        .split_once('=')
        .ok_or_else(|| format!("invalid QC filter '{value}': expected METRIC=FROM:TO"))?;
    let metric: QcMetric = metric.trim().parse().map_err(|err| format!("{err}"))?;
    let (from, to) = range
        .split_once(':')
        .ok_or_else(|| format!("invalid QC range '{range}': expected FROM:TO"))?;
    Ok(QcFilter {
        metric,
        from: parse_optional_bound(from)?,
        to: parse_optional_bound(to)?,
    })
}

fn parse_optional_bound(text: &str) -> Result<Option<i32>, String> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    parse_bound(text)
        .map(Some)
        .ok_or_else(|| format!("invalid QC bound '{text}': expected an integer"))
}
