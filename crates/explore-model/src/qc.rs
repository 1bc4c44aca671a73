//! Nextclade quality-control filters.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Quality-control scores computed by Nextclade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QcMetric {
    OverallScore,
    MissingDataScore,
    MixedSitesScore,
    PrivateMutationsScore,
    SnpClustersScore,
    FrameShiftsScore,
    StopCodonsScore,
}

impl QcMetric {
    pub const ALL: [QcMetric; 7] = [
        QcMetric::OverallScore,
        QcMetric::MissingDataScore,
        QcMetric::MixedSitesScore,
        QcMetric::PrivateMutationsScore,
        QcMetric::SnpClustersScore,
        QcMetric::FrameShiftsScore,
        QcMetric::StopCodonsScore,
    ];

    /// Stem of the `<stem>From` / `<stem>To` query parameters.
    pub fn field_stem(&self) -> &'static str {
        match self {
            QcMetric::OverallScore => "nextcladeQcOverallScore",
            QcMetric::MissingDataScore => "nextcladeQcMissingDataScore",
            QcMetric::MixedSitesScore => "nextcladeQcMixedSitesScore",
            QcMetric::PrivateMutationsScore => "nextcladeQcPrivateMutationsScore",
            QcMetric::SnpClustersScore => "nextcladeQcSnpClustersScore",
            QcMetric::FrameShiftsScore => "nextcladeQcFrameShiftsScore",
            QcMetric::StopCodonsScore => "nextcladeQcStopCodonsScore",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QcMetric::OverallScore => "Overall score",
            QcMetric::MissingDataScore => "Missing data score",
            QcMetric::MixedSitesScore => "Mixed sites score",
            QcMetric::PrivateMutationsScore => "Private mutations score",
            QcMetric::SnpClustersScore => "SNP clusters score",
            QcMetric::FrameShiftsScore => "Frame shifts score",
            QcMetric::StopCodonsScore => "Stop codons score",
        }
    }

    /// Query parameter name for one side of the range.
    pub fn field_name(&self, side: BoundSide) -> String {
        format!("{}{}", self.field_stem(), side.suffix())
    }
}

impl fmt::Display for QcMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_stem())
    }
}

impl FromStr for QcMetric {
    type Err = ModelError;

    /// Accepts the parameter stem (`nextcladeQcOverallScore`) or the short
    /// form without the `nextcladeQc` prefix (`OverallScore`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|metric| {
                let stem = metric.field_stem();
                stem == s || stem.strip_prefix("nextcladeQc") == Some(s)
            })
            .ok_or_else(|| ModelError::unknown("QC metric", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundSide {
    From,
    To,
}

impl BoundSide {
    pub fn suffix(&self) -> &'static str {
        match self {
            BoundSide::From => "From",
            BoundSide::To => "To",
        }
    }
}

/// Inclusive bounds on one QC score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QcBounds {
    pub from: Option<i32>,
    pub to: Option<i32>,
}

impl QcBounds {
    pub fn is_unset(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn get(&self, side: BoundSide) -> Option<i32> {
        match side {
            BoundSide::From => self.from,
            BoundSide::To => self.to,
        }
    }

    pub fn set(&mut self, side: BoundSide, value: Option<i32>) {
        match side {
            BoundSide::From => self.from = value,
            BoundSide::To => self.to = value,
        }
    }
}

/// QC bounds per metric. Metrics without any bound are not stored, so two
/// selectors that filter the same way compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QcSelector {
    bounds: BTreeMap<QcMetric, QcBounds>,
}

impl QcSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only sequences Nextclade rates as good (overall score up to 29).
    pub fn good() -> Self {
        Self::new().with_bound(QcMetric::OverallScore, BoundSide::To, Some(29))
    }

    /// Good and mediocre sequences (overall score up to 99).
    pub fn good_and_mediocre() -> Self {
        Self::new().with_bound(QcMetric::OverallScore, BoundSide::To, Some(99))
    }

    /// Only sequences rated bad (overall score 100 or more).
    pub fn only_bad() -> Self {
        Self::new().with_bound(QcMetric::OverallScore, BoundSide::From, Some(100))
    }

    #[must_use]
    pub fn with_bound(mut self, metric: QcMetric, side: BoundSide, value: Option<i32>) -> Self {
        self.set_bound(metric, side, value);
        self
    }

    pub fn bounds(&self, metric: QcMetric) -> QcBounds {
        self.bounds.get(&metric).copied().unwrap_or_default()
    }

    pub fn set_bound(&mut self, metric: QcMetric, side: BoundSide, value: Option<i32>) {
        let mut bounds = self.bounds(metric);
        bounds.set(side, value);
        if bounds.is_unset() {
            self.bounds.remove(&metric);
        } else {
            self.bounds.insert(metric, bounds);
        }
    }

    /// Sets a bound from user input. Blank or non-integer text clears it.
    pub fn set_bound_from_str(&mut self, metric: QcMetric, side: BoundSide, text: &str) {
        self.set_bound(metric, side, parse_bound(text));
    }

    /// Metrics that carry at least one bound, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (QcMetric, QcBounds)> + '_ {
        self.bounds.iter().map(|(metric, bounds)| (*metric, *bounds))
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }
}

/// Parses a QC bound, returning `None` for anything but an integer.
pub fn parse_bound(text: &str) -> Option<i32> {
    text.trim().parse().ok()
}
