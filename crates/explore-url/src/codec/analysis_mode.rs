use explore_model::AnalysisMode;
use tracing::trace;

use super::QueryCodec;
use crate::query::QueryParams;

pub const ANALYSIS_MODE_PARAM: &str = "analysisMode";

/// Reads and writes `analysisMode`, leaving the default out of the URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisModeCodec {
    default: AnalysisMode,
}

impl AnalysisModeCodec {
    pub fn new(default: AnalysisMode) -> Self {
        Self { default }
    }
}

impl QueryCodec for AnalysisModeCodec {
    type Value = AnalysisMode;

    fn read(&self, params: &QueryParams) -> AnalysisMode {
        match params.get(ANALYSIS_MODE_PARAM) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                trace!(value = raw, "unknown analysis mode, using default");
                self.default
            }),
            None => self.default,
        }
    }

    fn write(&self, value: &AnalysisMode, params: &mut QueryParams) {
        params.delete(ANALYSIS_MODE_PARAM);
        if *value != self.default {
            params.set(ANALYSIS_MODE_PARAM, value.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_elided() {
        let codec = AnalysisModeCodec::default();
        let mut params = QueryParams::parse("analysisMode=CompareEquals&a=1");
        codec.write(&AnalysisMode::Single, &mut params);
        assert_eq!(params.to_string(), "a=1");
        assert_eq!(codec.read(&params), AnalysisMode::Single);

        codec.write(&AnalysisMode::CompareToBaseline, &mut params);
        assert_eq!(params.to_string(), "a=1&analysisMode=CompareToBaseline");
        assert_eq!(codec.read(&params), AnalysisMode::CompareToBaseline);
    }

    #[test]
    fn unknown_mode_falls_back() {
        let codec = AnalysisModeCodec::default();
        let params = QueryParams::parse("analysisMode=Sideways");
        assert_eq!(codec.read(&params), AnalysisMode::Single);
    }
}
