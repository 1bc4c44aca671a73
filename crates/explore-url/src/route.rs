//! Locations and explore route matching.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ExploreUrlError, Result};

/// Root of the explore route family.
pub const EXPLORE_ROOT: &str = "/explore";

/// Path segment that marks the variant pages.
pub const VARIANTS_SEGMENT: &str = "variants";

/// A navigable location: path plus raw query string (without `?`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Location {
    pub pathname: String,
    pub query: String,
}

impl Location {
    pub fn new(pathname: impl Into<String>, query: impl Into<String>) -> Self {
        let query = query.into();
        let query = match query.strip_prefix('?') {
            Some(stripped) => stripped.to_string(),
            None => query,
        };
        Self {
            pathname: pathname.into(),
            query,
        }
    }

    /// Parses a path such as `/explore/World?host=Bat` or an absolute URL.
    /// Fragments are dropped.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.starts_with('/') {
            let without_fragment = input.split_once('#').map_or(input, |(head, _)| head);
            return Ok(match without_fragment.split_once('?') {
                Some((pathname, query)) => Self::new(pathname, query),
                None => Self::new(without_fragment, ""),
            });
        }
        let url = Url::parse(input).map_err(|err| ExploreUrlError::invalid_url(input, err.to_string()))?;
        Ok(Self::new(url.path(), url.query().unwrap_or_default()))
    }

    /// The query string with its leading `?`, or empty if there is none.
    pub fn search(&self) -> String {
        if self.query.is_empty() {
            String::new()
        } else {
            format!("?{}", self.query)
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pathname, self.search())
    }
}

impl FromStr for Location {
    type Err = ExploreUrlError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Raw, undecoded path segments of a complete explore path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExploreSegments<'a> {
    pub location: &'a str,
    pub sampling_strategy: &'a str,
    pub date_range: &'a str,
    /// Everything after the date range segment, verbatim (e.g. `/variants/foo`).
    pub rest: &'a str,
}

impl ExploreSegments<'_> {
    /// `/explore/<location>/<samplingStrategy>/<dateRange>`.
    pub fn prefix(&self) -> String {
        explore_prefix(self.location, self.sampling_strategy, self.date_range)
    }

    /// Returns true if the path continues with the `variants` segment.
    pub fn is_variants_page(&self) -> bool {
        self.rest
            .strip_prefix('/')
            .and_then(|rest| rest.strip_prefix(VARIANTS_SEGMENT))
            .is_some_and(|after| after.is_empty() || after.starts_with('/'))
    }
}

/// Which explore route pattern a path matches, from least to most specific.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExploreRoute<'a> {
    /// `/explore/`
    Root,
    /// `/explore/<location>`
    Location { location: &'a str },
    /// `/explore/<location>/<samplingStrategy>`
    LocationSampling {
        location: &'a str,
        sampling_strategy: &'a str,
    },
    /// `/explore/<location>/<samplingStrategy>/<dateRange>...`
    Complete(ExploreSegments<'a>),
}

impl<'a> ExploreRoute<'a> {
    /// Matches `pathname` against the explore routes. Returns `None` for
    /// paths outside `/explore`.
    ///
    /// Patterns match as prefixes: anything after the date range is kept in
    /// [`ExploreSegments::rest`]. An empty segment ends the match.
    pub fn parse(pathname: &'a str) -> Option<Self> {
        let tail = pathname.strip_prefix(EXPLORE_ROOT)?;
        if !(tail.is_empty() || tail.starts_with('/')) {
            return None;
        }

        let mut remaining = tail;
        let mut segments: Vec<&'a str> = Vec::with_capacity(3);
        while segments.len() < 3 {
            let Some(after_slash) = remaining.strip_prefix('/') else {
                break;
            };
            let end = after_slash.find('/').unwrap_or(after_slash.len());
            let segment = &after_slash[..end];
            if segment.is_empty() {
                break;
            }
            segments.push(segment);
            remaining = &after_slash[end..];
        }

        Some(match segments[..] {
            [] => Self::Root,
            [location] => Self::Location { location },
            [location, sampling_strategy] => Self::LocationSampling {
                location,
                sampling_strategy,
            },
            [location, sampling_strategy, date_range, ..] => Self::Complete(ExploreSegments {
                location,
                sampling_strategy,
                date_range,
                rest: remaining,
            }),
        })
    }
}

/// Builds `/explore/<location>/<samplingStrategy>/<dateRange>`.
pub fn explore_prefix(location: &str, sampling_strategy: &str, date_range: &str) -> String {
    format!("{EXPLORE_ROOT}/{location}/{sampling_strategy}/{date_range}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_parse() {
        let location = Location::parse("/explore/World/AllSamples/Past6M?host=Bat#top").unwrap();
        assert_eq!(location.pathname, "/explore/World/AllSamples/Past6M");
        assert_eq!(location.query, "host=Bat");
        assert_eq!(location.to_string(), "/explore/World/AllSamples/Past6M?host=Bat");

        let location =
            Location::parse("https://example.org/explore/Switzerland/AllSamples/Past6M").unwrap();
        assert_eq!(location.pathname, "/explore/Switzerland/AllSamples/Past6M");
        assert_eq!(location.search(), "");

        assert!(Location::parse("not a url").is_err());
    }

    #[test]
    fn test_route_levels() {
        assert_eq!(ExploreRoute::parse("/explore"), Some(ExploreRoute::Root));
        assert_eq!(ExploreRoute::parse("/explore/"), Some(ExploreRoute::Root));
        assert_eq!(
            ExploreRoute::parse("/explore/Germany/"),
            Some(ExploreRoute::Location {
                location: "Germany"
            })
        );
        assert_eq!(
            ExploreRoute::parse("/explore/Germany/Surveillance"),
            Some(ExploreRoute::LocationSampling {
                location: "Germany",
                sampling_strategy: "Surveillance"
            })
        );
        assert_eq!(ExploreRoute::parse("/explorer/Germany"), None);
        assert_eq!(ExploreRoute::parse("/about"), None);
    }

    #[test]
    fn test_complete_route_keeps_rest() {
        let Some(ExploreRoute::Complete(segments)) =
            ExploreRoute::parse("/explore/Germany/AllSamples/Past3M/variants/chen-2021-fitness")
        else {
            panic!("expected a complete route");
        };
        assert_eq!(segments.location, "Germany");
        assert_eq!(segments.date_range, "Past3M");
        assert_eq!(segments.rest, "/variants/chen-2021-fitness");
        assert!(segments.is_variants_page());
        assert_eq!(segments.prefix(), "/explore/Germany/AllSamples/Past3M");
    }

    #[test]
    fn test_variants_suffix_must_be_a_whole_segment() {
        let Some(ExploreRoute::Complete(segments)) =
            ExploreRoute::parse("/explore/Germany/AllSamples/Past3M/variantsfoo")
        else {
            panic!("expected a complete route");
        };
        assert!(!segments.is_variants_page());
    }
}
