//! URL state codec for the variant explore dashboard.
//!
//! The explore view keeps all of its state in the URL:
//!
//! ```text
//! /explore/<location>/<samplingStrategy>/<dateRange>[/variants][/<page>]?<params>
//! ```
//!
//! [`ExploreStateCodec`] decodes such locations into an
//! [`ExploreState`](explore_model::ExploreState), encodes states back into
//! canonical locations, and performs partial updates through a
//! [`Navigator`] so each change becomes a new history entry.

pub mod codec;
pub mod error;
pub mod explore;
pub mod navigation;
pub mod query;
pub mod route;

pub use error::{ExploreUrlError, Result};
pub use explore::{DecodeResult, ExploreStateCodec, ExploreUrl};
pub use navigation::{MemoryHistory, Navigator};
pub use query::QueryParams;
pub use route::{EXPLORE_ROOT, ExploreRoute, ExploreSegments, Location, VARIANTS_SEGMENT};
