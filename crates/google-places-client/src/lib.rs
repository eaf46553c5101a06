//! Google Places Photo Client
//!
//! Finds a representative photo for a named place near a coordinate using the
//! Places API (New): a biased text search followed by a photo media lookup.
//! Successful lookups are kept in a moka async cache; failures are not.

mod client;
mod error;
mod types;

pub use client::{PhotoOptions, PlacePhotoClient};
pub use error::{PlacesError, Result};
