use std::fmt;

/// Errors from the Google Places photo client
#[derive(Debug)]
pub enum PlacesError {
    Http(reqwest::Error),
    Status(u16),
    /// The provider returned a photo URI that is not an absolute http(s) URL
    InvalidPhotoUrl(String),
}

impl fmt::Display for PlacesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "HTTP error: {e}"),
            Self::Status(code) => write!(f, "Places API returned status {code}"),
            Self::InvalidPhotoUrl(uri) => write!(f, "Invalid photo URL: {uri}"),
        }
    }
}

impl std::error::Error for PlacesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for PlacesError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

pub type Result<T> = std::result::Result<T, PlacesError>;
