//! Recommendation source abstraction
//!
//! The ranking itself happens in an external service; this seam lets the HTTP
//! layer and tests swap the real client for a stand-in.

use crate::{
    error::AppResult,
    models::{RecommendResponse, RecommendationRequest},
};

pub mod rec_movie;

pub use rec_movie::RecMovieProvider;

/// Trait for recommendation providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationProvider: Send + Sync {
    /// Ask for a ranked list of movies matching the request
    ///
    /// An empty `recommended_movies` list is a valid answer, not an error.
    async fn recommend(&self, request: &RecommendationRequest) -> AppResult<RecommendResponse>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
