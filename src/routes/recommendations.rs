use axum::{extract::State, Json};

use crate::{
    api::AppState,
    error::AppResult,
    models::{PreferencesForm, RecommendationBatch},
    services::recommendations,
};

/// Handler for recommendations endpoint
pub async fn recommend(
    State(state): State<AppState>,
    Json(form): Json<PreferencesForm>,
) -> AppResult<Json<RecommendationBatch>> {
    let request = form.into_request()?;
    let batch = recommendations::get_recommendations(state.provider.as_ref(), request).await?;
    Ok(Json(batch))
}
