use explore_model::SamplingStrategy;

use super::SegmentCodec;

#[derive(Debug, Clone, Copy, Default)]
pub struct SamplingStrategyCodec;

impl SegmentCodec for SamplingStrategyCodec {
    type Value = SamplingStrategy;

    fn decode(&self, segment: &str) -> Option<SamplingStrategy> {
        segment.parse().ok()
    }

    fn encode(&self, value: &SamplingStrategy) -> String {
        value.as_str().to_string()
    }
}
