//! Sub-codecs for the individual slices of the explore state.
//!
//! Path slices implement [`SegmentCodec`]: one URL path segment maps to one
//! value. Query slices implement [`QueryCodec`]: a value is read from and
//! written into a shared [`QueryParams`] bag, touching only its own
//! parameters so the slices stay isolated from each other.

mod analysis_mode;
mod date_range;
mod host;
mod location;
mod qc;
mod sampling;
mod variant;

pub use analysis_mode::{ANALYSIS_MODE_PARAM, AnalysisModeCodec};
pub use date_range::{DateRangeCodec, EXPLICIT_RANGE_SEPARATOR};
pub use host::{HOST_PARAM, HostCodec};
pub use location::LocationCodec;
pub use qc::QcCodec;
pub use sampling::SamplingStrategyCodec;
pub use variant::{VARIANT_FIELDS, VariantCodec, VariantListCodec, is_variant_param};

use crate::query::QueryParams;

/// Two-way mapping between a value and a single path segment.
pub trait SegmentCodec {
    type Value;

    /// Returns `None` if the segment does not encode a valid value.
    fn decode(&self, segment: &str) -> Option<Self::Value>;

    fn encode(&self, value: &Self::Value) -> String;
}

/// Two-way mapping between a value and a group of query parameters.
pub trait QueryCodec {
    type Value;

    /// Reads the value. Missing or malformed parameters yield the slice's
    /// default rather than an error.
    fn read(&self, params: &QueryParams) -> Self::Value;

    /// Replaces this slice's parameters with the encoding of `value`,
    /// leaving all other parameters untouched.
    fn write(&self, value: &Self::Value, params: &mut QueryParams);
}
