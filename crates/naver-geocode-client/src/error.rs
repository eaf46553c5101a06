use std::fmt;

/// Errors from the Naver reverse geocoding client
#[derive(Debug)]
pub enum GeocodeError {
    InvalidCoordinates(f64, f64),
    /// The provider answered but had no region for the coordinate
    NoAddressFound,
    Http(reqwest::Error),
    Status(u16),
    /// Non-zero status code reported in the response body
    Provider { code: i32, message: String },
}

impl fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinates(lat, lng) => {
                write!(f, "Invalid coordinates: {lat}, {lng}")
            }
            Self::NoAddressFound => write!(f, "No address found for coordinates"),
            Self::Http(e) => write!(f, "HTTP error: {e}"),
            Self::Status(code) => write!(f, "Geocoder returned status {code}"),
            Self::Provider { code, message } => {
                write!(f, "Geocoder error {code}: {message}")
            }
        }
    }
}

impl std::error::Error for GeocodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GeocodeError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

pub type Result<T> = std::result::Result<T, GeocodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_display() {
        let err = GeocodeError::Provider {
            code: 100,
            message: "Bad Request Exception".to_string(),
        };
        assert_eq!(err.to_string(), "Geocoder error 100: Bad Request Exception");
    }

    #[test]
    fn test_invalid_coordinates_display() {
        let err = GeocodeError::InvalidCoordinates(f64::NAN, 127.0);
        assert!(err.to_string().starts_with("Invalid coordinates: NaN"));
    }
}
