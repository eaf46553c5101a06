//! Error types for the recommendation pipeline

use std::fmt;

use google_places_client::PlacesError;
use naver_geocode_client::GeocodeError;
use naver_local_search_client::LocalSearchError;

/// Failures that abort a recommendation request
#[derive(Debug)]
pub enum RecommendError {
    /// Latitude or longitude is NaN or infinite
    InvalidCoordinate(f64, f64),
    /// The geocoder has no region for the coordinate
    NoAddressFound,
    /// Transport or provider failure while geocoding, with the raw status if any
    Geocoding {
        status: Option<String>,
        message: String,
    },
    /// Transport or auth failure while searching
    SearchProvider(String),
}

impl RecommendError {
    /// Stable machine-readable tag
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidCoordinate(..) => "invalid_request",
            Self::NoAddressFound => "no_address_found",
            Self::Geocoding { .. } => "geocoding_error",
            Self::SearchProvider(_) => "search_provider_error",
        }
    }

    /// Single human-readable message for the end user
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidCoordinate(..) => "Your location could not be read. Please try again.",
            Self::NoAddressFound => "We couldn't find an address for your current location.",
            Self::Geocoding { .. } => {
                "We couldn't look up your current address. Please try again later."
            }
            Self::SearchProvider(_) => {
                "We couldn't search for nearby places. Please try again later."
            }
        }
    }
}

impl fmt::Display for RecommendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate(lat, lng) => write!(f, "Invalid coordinate: {lat}, {lng}"),
            Self::NoAddressFound => write!(f, "No address found"),
            Self::Geocoding {
                status: Some(status),
                message,
            } => write!(f, "Geocoding error ({status}): {message}"),
            Self::Geocoding {
                status: None,
                message,
            } => write!(f, "Geocoding error: {message}"),
            Self::SearchProvider(msg) => write!(f, "Search provider error: {msg}"),
        }
    }
}

impl std::error::Error for RecommendError {}

impl From<GeocodeError> for RecommendError {
    fn from(err: GeocodeError) -> Self {
        match err {
            GeocodeError::InvalidCoordinates(lat, lng) => Self::InvalidCoordinate(lat, lng),
            GeocodeError::NoAddressFound => Self::NoAddressFound,
            GeocodeError::Status(code) => Self::Geocoding {
                status: Some(code.to_string()),
                message: err.to_string(),
            },
            GeocodeError::Provider { code, ref message } => Self::Geocoding {
                status: Some(code.to_string()),
                message: message.clone(),
            },
            GeocodeError::Http(ref e) => Self::Geocoding {
                status: e.status().map(|s| s.as_u16().to_string()),
                message: err.to_string(),
            },
        }
    }
}

impl From<LocalSearchError> for RecommendError {
    fn from(err: LocalSearchError) -> Self {
        Self::SearchProvider(err.to_string())
    }
}

/// A photo lookup that failed; always absorbed by the pipeline
#[derive(Debug)]
pub struct PhotoLookupError(pub String);

impl fmt::Display for PhotoLookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Photo lookup failed: {}", self.0)
    }
}

impl std::error::Error for PhotoLookupError {}

impl From<PlacesError> for PhotoLookupError {
    fn from(err: PlacesError) -> Self {
        Self(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RecommendError>;
