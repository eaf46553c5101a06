//! Nearby Place Recommendation
//!
//! Turns a device coordinate and a category ("정형외과", "약국", ...) into a
//! list of nearby places:
//!
//! 1. reverse geocode the coordinate to its administrative regions
//! 2. search the local index for "{regions} {category}"
//! 3. attach a representative photo to every candidate, concurrently
//!
//! Steps 1 and 2 abort the request on failure. Step 3 never does: a failed
//! photo lookup leaves `photo_url` empty and keeps the place.
//!
//! The providers sit behind the traits in [`provider`] so the pipeline can be
//! driven by the real HTTP clients ([`providers`]) or by test doubles.

pub mod error;
pub mod map_link;
pub mod markup;
mod pipeline;
pub mod provider;
pub mod providers;
mod session;
mod types;

pub use error::{PhotoLookupError, RecommendError, Result};
pub use map_link::MapLinks;
pub use pipeline::{enrich_candidate, Recommender};
pub use session::SessionContext;
pub use types::{
    Address, Coordinate, PipelineState, PlaceCandidate, RecommendRequest, Recommendation,
};
