use crate::{
    error::{AppError, AppResult},
    models::{RecommendationBatch, RecommendationRequest},
    parser::{movie::UNKNOWN_TITLE, parse_movie},
    services::providers::RecommendationProvider,
};

const NO_MATCHES: &str = "No movies match these preferences";

/// Fetches recommendations and parses them into movie records
///
/// Upstream order is kept (most recommended first). An empty upstream list is
/// reported as [`AppError::NotFound`], carrying the upstream reason when one is given.
pub async fn get_recommendations(
    provider: &dyn RecommendationProvider,
    request: RecommendationRequest,
) -> AppResult<RecommendationBatch> {
    tracing::info!(
        mood = ?request.mood,
        genres = ?request.selected_genres,
        preferred_length = ?request.preferred_length,
        previous = request.previous_ids.len(),
        provider = provider.name(),
        "Requesting recommendations"
    );

    let response = provider.recommend(&request).await?;

    if response.recommended_movies.is_empty() {
        let reason = response.error.unwrap_or_else(|| NO_MATCHES.to_string());
        tracing::warn!(reason = %reason, "No recommendations returned");
        return Err(AppError::NotFound(reason));
    }

    let movies: Vec<_> = response
        .recommended_movies
        .iter()
        .map(|raw| parse_movie(&raw.content, raw.id))
        .collect();

    let untitled = movies
        .iter()
        .filter(|movie| movie.title == UNKNOWN_TITLE)
        .count();
    if untitled > 0 {
        tracing::warn!(untitled, total = movies.len(), "Recommendations without a parseable title");
    }

    Ok(RecommendationBatch::new(movies, &request.previous_ids))
}
