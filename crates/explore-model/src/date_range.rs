//! Date ranges: named presets relative to today, or explicit bounds.

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ModelError, Result};

/// Format of a single date inside an explicit range.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Named date ranges offered by the date picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateRangePreset {
    AllTimes,
    Y2020,
    Y2021,
    Y2022,
    Past2W,
    Past1M,
    Past2M,
    Past3M,
    Past6M,
}

impl DateRangePreset {
    pub const ALL: [DateRangePreset; 9] = [
        DateRangePreset::AllTimes,
        DateRangePreset::Y2020,
        DateRangePreset::Y2021,
        DateRangePreset::Y2022,
        DateRangePreset::Past2W,
        DateRangePreset::Past1M,
        DateRangePreset::Past2M,
        DateRangePreset::Past3M,
        DateRangePreset::Past6M,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DateRangePreset::AllTimes => "AllTimes",
            DateRangePreset::Y2020 => "Y2020",
            DateRangePreset::Y2021 => "Y2021",
            DateRangePreset::Y2022 => "Y2022",
            DateRangePreset::Past2W => "Past2W",
            DateRangePreset::Past1M => "Past1M",
            DateRangePreset::Past2M => "Past2M",
            DateRangePreset::Past3M => "Past3M",
            DateRangePreset::Past6M => "Past6M",
        }
    }

    /// Label shown in the date picker.
    pub fn label(&self) -> &'static str {
        match self {
            DateRangePreset::AllTimes => "All times",
            DateRangePreset::Y2020 => "2020",
            DateRangePreset::Y2021 => "2021",
            DateRangePreset::Y2022 => "2022",
            DateRangePreset::Past2W => "Past 2 weeks",
            DateRangePreset::Past1M => "Past month",
            DateRangePreset::Past2M => "Past 2 months",
            DateRangePreset::Past3M => "Past 3 months",
            DateRangePreset::Past6M => "Past 6 months",
        }
    }

    /// Concrete bounds of this preset as seen on `today`.
    pub fn resolve(&self, today: NaiveDate) -> DateBounds {
        match self {
            DateRangePreset::AllTimes => DateBounds::default(),
            DateRangePreset::Y2020 => DateBounds::calendar_year(2020),
            DateRangePreset::Y2021 => DateBounds::calendar_year(2021),
            DateRangePreset::Y2022 => DateBounds::calendar_year(2022),
            DateRangePreset::Past2W => DateBounds::until(today.checked_sub_days(Days::new(14)), today),
            DateRangePreset::Past1M => DateBounds::until(today.checked_sub_months(Months::new(1)), today),
            DateRangePreset::Past2M => DateBounds::until(today.checked_sub_months(Months::new(2)), today),
            DateRangePreset::Past3M => DateBounds::until(today.checked_sub_months(Months::new(3)), today),
            DateRangePreset::Past6M => DateBounds::until(today.checked_sub_months(Months::new(6)), today),
        }
    }
}

impl fmt::Display for DateRangePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateRangePreset {
    type Err = ModelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.as_str() == s)
            .ok_or_else(|| ModelError::unknown("date range preset", s))
    }
}

/// Inclusive date bounds; `None` leaves that side open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateBounds {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateBounds {
    fn calendar_year(year: i32) -> Self {
        Self {
            from: NaiveDate::from_ymd_opt(year, 1, 1),
            to: NaiveDate::from_ymd_opt(year, 12, 31),
        }
    }

    fn until(from: Option<NaiveDate>, to: NaiveDate) -> Self {
        Self { from, to: Some(to) }
    }

    /// Returns true if `date` lies within the bounds.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| from <= date) && self.to.is_none_or(|to| date <= to)
    }
}

/// Either a named preset or an explicit inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateRangeSelector {
    Preset(DateRangePreset),
    Explicit { from: NaiveDate, to: NaiveDate },
}

impl DateRangeSelector {
    pub fn explicit(from: NaiveDate, to: NaiveDate) -> Result<Self> {
        if from > to {
            return Err(ModelError::InvertedDateRange {
                from: from.format(DATE_FORMAT).to_string(),
                to: to.format(DATE_FORMAT).to_string(),
            });
        }
        Ok(Self::Explicit { from, to })
    }

    pub fn resolve(&self, today: NaiveDate) -> DateBounds {
        match self {
            Self::Preset(preset) => preset.resolve(today),
            Self::Explicit { from, to } => DateBounds {
                from: Some(*from),
                to: Some(*to),
            },
        }
    }
}

impl Default for DateRangeSelector {
    fn default() -> Self {
        Self::Preset(DateRangePreset::Past6M)
    }
}

impl From<DateRangePreset> for DateRangeSelector {
    fn from(preset: DateRangePreset) -> Self {
        Self::Preset(preset)
    }
}

/// Parses a single `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ModelError::InvalidDate {
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_resolve_past_presets() {
        let today = date(2021, 8, 31);
        let bounds = DateRangePreset::Past6M.resolve(today);
        assert_eq!(bounds.from, Some(date(2021, 2, 28)));
        assert_eq!(bounds.to, Some(today));

        let bounds = DateRangePreset::Past2W.resolve(today);
        assert_eq!(bounds.from, Some(date(2021, 8, 17)));
    }

    #[test]
    fn test_resolve_fixed_presets() {
        let today = date(2023, 1, 1);
        assert_eq!(
            DateRangePreset::Y2021.resolve(today),
            DateBounds {
                from: Some(date(2021, 1, 1)),
                to: Some(date(2021, 12, 31)),
            }
        );
        let all = DateRangePreset::AllTimes.resolve(today);
        assert!(all.contains(date(1900, 1, 1)));
        assert!(all.contains(date(2100, 1, 1)));
    }

    #[test]
    fn test_explicit_rejects_inverted_range() {
        let err = DateRangeSelector::explicit(date(2021, 6, 1), date(2021, 1, 1)).unwrap_err();
        assert_eq!(err.to_string(), "date range starts after it ends: 2021-06-01 > 2021-01-01");
        assert!(DateRangeSelector::explicit(date(2021, 1, 1), date(2021, 1, 1)).is_ok());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2021-03-04").unwrap(), date(2021, 3, 4));
        assert!(parse_date("2021-13-01").is_err());
        assert!(parse_date("yesterday").is_err());
    }
}
