//! Recommendation orchestrator
//!
//! Each call to [`Recommender::recommend`] drives a fresh state machine:
//!
//! ```text
//! Idle -> ResolvingAddress -> Searching -> Enriching -> Done
//!              |                  |  \
//!              v                  v   `-> Done (no results)
//!            Failed             Failed
//! ```

use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};
use tracing::{debug, info, warn};

use crate::error::{RecommendError, Result};
use crate::provider::{PhotoLookup, PlaceSearcher, ReverseGeocoder};
use crate::session::SessionContext;
use crate::types::{Coordinate, PipelineState, PlaceCandidate, RecommendRequest, Recommendation};

/// Sequences geocode, search and photo enrichment
#[derive(Clone)]
pub struct Recommender {
    geocoder: Arc<dyn ReverseGeocoder>,
    searcher: Arc<dyn PlaceSearcher>,
    photos: Arc<dyn PhotoLookup>,
}

impl Recommender {
    pub fn new(
        geocoder: Arc<dyn ReverseGeocoder>,
        searcher: Arc<dyn PlaceSearcher>,
        photos: Arc<dyn PhotoLookup>,
    ) -> Self {
        Self {
            geocoder,
            searcher,
            photos,
        }
    }

    /// Recommend places of `request.category` near `request.coordinate`
    ///
    /// Geocoding and search failures abort the request. An empty search is a
    /// successful `Done` with no places. Photo failures never abort.
    pub async fn recommend(
        &self,
        ctx: &SessionContext,
        request: &RecommendRequest,
    ) -> Result<Recommendation> {
        let mut run = Run::new(ctx);
        let result = run.drive(self, request).await;

        match &result {
            Ok(recommendation) => info!(
                request_id = %ctx.request_id,
                user_id = %ctx.user_id,
                category = %request.category,
                count = recommendation.places.len(),
                "Recommendation completed"
            ),
            Err(e) => {
                run.transition(PipelineState::Failed);
                warn!(
                    request_id = %ctx.request_id,
                    user_id = %ctx.user_id,
                    category = %request.category,
                    kind = e.kind(),
                    error = %e,
                    "Recommendation failed"
                );
            }
        }

        result
    }
}

/// State of one in-flight request
struct Run<'a> {
    ctx: &'a SessionContext,
    state: PipelineState,
}

impl<'a> Run<'a> {
    fn new(ctx: &'a SessionContext) -> Self {
        Self {
            ctx,
            state: PipelineState::Idle,
        }
    }

    fn transition(&mut self, next: PipelineState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal transition {:?} -> {:?}",
            self.state,
            next
        );
        debug!(request_id = %self.ctx.request_id, from = ?self.state, to = ?next, "Pipeline transition");
        self.state = next;
    }

    async fn drive(
        &mut self,
        recommender: &Recommender,
        request: &RecommendRequest,
    ) -> Result<Recommendation> {
        let origin = request.coordinate;
        if !origin.is_finite() {
            return Err(RecommendError::InvalidCoordinate(
                origin.latitude,
                origin.longitude,
            ));
        }

        self.transition(PipelineState::ResolvingAddress);
        let address = recommender.geocoder.resolve(self.ctx, origin).await?;

        self.transition(PipelineState::Searching);
        let candidates = recommender
            .searcher
            .search(self.ctx, &address, &request.category)
            .await?;

        if candidates.is_empty() {
            debug!(request_id = %self.ctx.request_id, "No places found");
            self.transition(PipelineState::Done);
            return Ok(Recommendation {
                state: self.state,
                places: Vec::new(),
            });
        }

        self.transition(PipelineState::Enriching);
        let places = enrich_all(recommender.photos.as_ref(), self.ctx, candidates, origin).await;

        self.transition(PipelineState::Done);
        Ok(Recommendation {
            state: self.state,
            places,
        })
    }
}

/// Attempt a photo lookup for one candidate
///
/// Always returns the candidate; on failure or when no photo exists the
/// `photo_url` stays `None`.
pub async fn enrich_candidate(
    photos: &dyn PhotoLookup,
    ctx: &SessionContext,
    mut candidate: PlaceCandidate,
    near: Coordinate,
) -> PlaceCandidate {
    candidate.photo_url = match photos.find_photo(ctx, &candidate.title, near).await {
        Ok(photo) => photo,
        Err(e) => {
            warn!(request_id = %ctx.request_id, title = %candidate.title, error = %e, "Photo enrichment failed");
            None
        }
    };
    candidate
}

/// Enrich every candidate concurrently, returning them in their original order
async fn enrich_all(
    photos: &dyn PhotoLookup,
    ctx: &SessionContext,
    candidates: Vec<PlaceCandidate>,
    near: Coordinate,
) -> Vec<PlaceCandidate> {
    let mut slots: Vec<Option<PlaceCandidate>> = vec![None; candidates.len()];

    let mut pending: FuturesUnordered<_> = candidates
        .into_iter()
        .enumerate()
        .map(|(index, candidate)| async move {
            (index, enrich_candidate(photos, ctx, candidate, near).await)
        })
        .collect();

    // Completion order is arbitrary; re-associate by index
    while let Some((index, candidate)) = pending.next().await {
        slots[index] = Some(candidate);
    }

    slots.into_iter().flatten().collect()
}
