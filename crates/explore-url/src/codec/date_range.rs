use explore_model::date_range::DATE_FORMAT;
use explore_model::{DateRangePreset, DateRangeSelector, parse_date};

use super::SegmentCodec;

/// Separator between the two dates of an explicit range.
pub const EXPLICIT_RANGE_SEPARATOR: &str = "--";

/// Maps a date range to a path segment: a preset name such as `Past6M`, or
/// `YYYY-MM-DD--YYYY-MM-DD` for an explicit range.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRangeCodec;

impl SegmentCodec for DateRangeCodec {
    type Value = DateRangeSelector;

    fn decode(&self, segment: &str) -> Option<DateRangeSelector> {
        if let Ok(preset) = segment.parse::<DateRangePreset>() {
            return Some(DateRangeSelector::Preset(preset));
        }
        let (from, to) = segment.split_once(EXPLICIT_RANGE_SEPARATOR)?;
        let from = parse_date(from).ok()?;
        let to = parse_date(to).ok()?;
        DateRangeSelector::explicit(from, to).ok()
    }

    fn encode(&self, value: &DateRangeSelector) -> String {
        match value {
            DateRangeSelector::Preset(preset) => preset.as_str().to_string(),
            DateRangeSelector::Explicit { from, to } => format!(
                "{}{EXPLICIT_RANGE_SEPARATOR}{}",
                from.format(DATE_FORMAT),
                to.format(DATE_FORMAT)
            ),
        }
    }
}
