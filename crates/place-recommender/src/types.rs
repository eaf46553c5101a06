use serde::{Deserialize, Serialize};

/// Device location supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// Administrative regions containing a coordinate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub region1: String,
    pub region2: String,
    pub region3: String,
}

impl Address {
    /// Local search query: "{region1} {region2} {region3} {category}"
    pub fn search_query(&self, category: &str) -> String {
        format!(
            "{} {} {} {}",
            self.region1, self.region2, self.region3, category
        )
    }
}

/// A recommended place
///
/// Created by the search step with `photo_url: None`, then passed through
/// exactly one enrichment attempt before being returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceCandidate {
    /// Display name with provider markup already stripped
    pub title: String,
    /// External page for the place, may be empty
    pub link: String,
    pub road_address: String,
    /// Lot-number address
    pub address: String,
    pub category: String,
    pub telephone: String,
    /// Absolute http(s) photo URL, or null when no photo could be found
    pub photo_url: Option<String>,
}

/// Input to a recommendation run
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendRequest {
    pub coordinate: Coordinate,
    pub category: String,
}

impl RecommendRequest {
    pub fn new(latitude: f64, longitude: f64, category: impl Into<String>) -> Self {
        Self {
            coordinate: Coordinate::new(latitude, longitude),
            category: category.into(),
        }
    }
}

/// Per-request pipeline states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineState {
    Idle,
    ResolvingAddress,
    Searching,
    Enriching,
    Done,
    Failed,
}

impl PipelineState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    /// Whether `next` is a legal successor of this state
    pub fn can_transition_to(&self, next: PipelineState) -> bool {
        use PipelineState::*;
        matches!(
            (self, next),
            (Idle, ResolvingAddress)
                | (Idle, Failed)
                | (ResolvingAddress, Searching)
                | (ResolvingAddress, Failed)
                | (Searching, Enriching)
                | (Searching, Done)
                | (Searching, Failed)
                | (Enriching, Done)
        )
    }
}

/// Successful outcome of a recommendation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub state: PipelineState,
    pub places: Vec<PlaceCandidate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query() {
        let address = Address {
            region1: "서울".to_string(),
            region2: "강남구".to_string(),
            region3: "역삼동".to_string(),
        };
        assert_eq!(address.search_query("정형외과"), "서울 강남구 역삼동 정형외과");
    }

    #[test]
    fn test_terminal_states_have_no_successors() {
        use PipelineState::*;
        for state in [Done, Failed] {
            assert!(state.is_terminal());
            for next in [Idle, ResolvingAddress, Searching, Enriching, Done, Failed] {
                assert!(!state.can_transition_to(next));
            }
        }
    }

    #[test]
    fn test_enriching_cannot_fail() {
        assert!(!PipelineState::Enriching.can_transition_to(PipelineState::Failed));
        assert!(PipelineState::Enriching.can_transition_to(PipelineState::Done));
    }

    #[test]
    fn test_candidate_serializes_null_photo() {
        let candidate = PlaceCandidate {
            title: "Clinic".to_string(),
            link: String::new(),
            road_address: "테헤란로 1".to_string(),
            address: String::new(),
            category: "병원,의원".to_string(),
            telephone: String::new(),
            photo_url: None,
        };
        let json = serde_json::to_value(&candidate).unwrap();
        assert!(json["photoUrl"].is_null());
        assert_eq!(json["roadAddress"], "테헤란로 1");
    }
}
