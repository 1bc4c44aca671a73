use explore_model::{BoundSide, QcMetric, QcSelector, parse_bound};
use tracing::trace;

use super::QueryCodec;
use crate::query::QueryParams;

const SIDES: [BoundSide; 2] = [BoundSide::From, BoundSide::To];

/// Reads and writes one `<metric>From` / `<metric>To` pair per QC metric.
/// Unset bounds are left out of the URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct QcCodec;

impl QueryCodec for QcCodec {
    type Value = QcSelector;

    fn read(&self, params: &QueryParams) -> QcSelector {
        let mut qc = QcSelector::new();
        for metric in QcMetric::ALL {
            for side in SIDES {
                let field = metric.field_name(side);
                let Some(raw) = params.get(&field) else {
                    continue;
                };
                let bound = parse_bound(raw);
                if bound.is_none() {
                    trace!(field = %field, value = raw, "ignoring malformed QC bound");
                }
                qc.set_bound(metric, side, bound);
            }
        }
        qc
    }

    fn write(&self, value: &QcSelector, params: &mut QueryParams) {
        for metric in QcMetric::ALL {
            let bounds = value.bounds(metric);
            for side in SIDES {
                let field = metric.field_name(side);
                params.delete(&field);
                if let Some(bound) = bounds.get(side) {
                    params.set(&field, bound.to_string());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_bounds_are_omitted() {
        let mut qc = QcSelector::good();
        qc.set_bound_from_str(QcMetric::MixedSitesScore, BoundSide::From, "");
        let mut params = QueryParams::new();
        QcCodec.write(&qc, &mut params);
        assert_eq!(params.to_string(), "nextcladeQcOverallScoreTo=29");
    }

    #[test]
    fn test_write_replaces_previous_bounds() {
        let mut params =
            QueryParams::parse("nextcladeQcOverallScoreTo=29&host=Bat&nextcladeQcStopCodonsScoreFrom=1");
        QcCodec.write(&QcSelector::only_bad(), &mut params);
        assert_eq!(params.to_string(), "host=Bat&nextcladeQcOverallScoreFrom=100");
    }

    #[test]
    fn test_malformed_bound_is_ignored() {
        let params = QueryParams::parse("nextcladeQcOverallScoreFrom=abc&nextcladeQcOverallScoreTo=50");
        let qc = QcCodec.read(&params);
        assert_eq!(qc.bounds(QcMetric::OverallScore).from, None);
        assert_eq!(qc.bounds(QcMetric::OverallScore).to, Some(50));
    }
}
