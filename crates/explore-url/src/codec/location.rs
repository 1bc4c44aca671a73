use std::borrow::Cow;

use explore_model::location::{DIVISION_SEPARATOR, WORLD};
use explore_model::{LocationSelector, Region};
use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

use super::SegmentCodec;

/// Characters escaped inside a path segment. Non-ASCII is always escaped.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Maps a place to one path segment: `World`, a region name, a country name,
/// or `<country>--<division>`.
///
/// Decoding never fails. Text that is not a well-formed division is taken as
/// a country name, so decoding an encoded value always gives it back.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationCodec;

impl LocationCodec {
    /// Total form of [`SegmentCodec::decode`].
    pub fn decode_segment(&self, segment: &str) -> LocationSelector {
        let text = percent_decode_str(segment)
            .decode_utf8()
            .unwrap_or(Cow::Borrowed(segment));
        Self::decode_text(&text)
    }

    fn decode_text(text: &str) -> LocationSelector {
        if text == WORLD {
            return LocationSelector::World;
        }
        if let Ok(region) = text.parse::<Region>() {
            return LocationSelector::Region(region);
        }
        if let Some((country, division)) = text.split_once(DIVISION_SEPARATOR)
            && let Ok(selector) = LocationSelector::division(country, division)
        {
            return selector;
        }
        LocationSelector::Country(text.to_string())
    }
}

impl SegmentCodec for LocationCodec {
    type Value = LocationSelector;

    fn decode(&self, segment: &str) -> Option<LocationSelector> {
        Some(self.decode_segment(segment))
    }

    fn encode(&self, value: &LocationSelector) -> String {
        let text = match value {
            LocationSelector::World => Cow::Borrowed(WORLD),
            LocationSelector::Region(region) => Cow::Borrowed(region.as_str()),
            LocationSelector::Country(country) => Cow::Borrowed(country.as_str()),
            LocationSelector::Division { country, division } => {
                Cow::Owned(format!("{country}{DIVISION_SEPARATOR}{division}"))
            }
        };
        utf8_percent_encode(&text, SEGMENT).to_string()
    }
}
