//! Provider seams of the pipeline
//!
//! One trait per external provider. The real HTTP-backed implementations live
//! in [`crate::providers`].

use async_trait::async_trait;

use crate::error::{PhotoLookupError, Result};
use crate::session::SessionContext;
use crate::types::{Address, Coordinate, PlaceCandidate};

/// Resolves a coordinate to the regions containing it
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    /// Fails with `NoAddressFound` or `Geocoding`; never retried
    async fn resolve(&self, ctx: &SessionContext, coordinate: Coordinate) -> Result<Address>;
}

/// Finds candidate places for an address and category
#[async_trait]
pub trait PlaceSearcher: Send + Sync {
    /// Candidates in provider order with markup-free titles and no photos.
    /// No results is `Ok(vec![])`.
    async fn search(
        &self,
        ctx: &SessionContext,
        address: &Address,
        category: &str,
    ) -> Result<Vec<PlaceCandidate>>;
}

/// Looks up a representative photo for a place near a coordinate
#[async_trait]
pub trait PhotoLookup: Send + Sync {
    /// `Ok(None)` when the place has no photo
    async fn find_photo(
        &self,
        ctx: &SessionContext,
        title: &str,
        near: Coordinate,
    ) -> std::result::Result<Option<String>, PhotoLookupError>;
}
