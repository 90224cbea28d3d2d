//! Client for the rec-movie recommendation service
//!
//! The service filters its catalog by the questionnaire answers, has a language
//! model rank the candidates, and answers with one free-text description per movie:
//!
//! `POST {base}/recommend` → `{"recommended_movies": [{"content": "...", "id": 274}]}`

use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{RecommendResponse, RecommendationRequest},
    services::providers::RecommendationProvider,
};

#[derive(Clone)]
pub struct RecMovieProvider {
    http_client: HttpClient,
    api_url: String,
}

impl RecMovieProvider {
    /// Creates a provider for the service at `api_url`
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(
            config.recommender_url.as_str(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    fn recommend_url(&self) -> String {
        format!("{}/recommend", self.api_url)
    }
}

#[async_trait::async_trait]
impl RecommendationProvider for RecMovieProvider {
    async fn recommend(&self, request: &RecommendationRequest) -> AppResult<RecommendResponse> {
        let url = self.recommend_url();

        let response = self.http_client.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Recommendation service returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await?;
        tracing::debug!(response = %response_text, "Raw recommendation response");

        let parsed: RecommendResponse = serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                response = %response_text,
                "Failed to deserialize recommendation response"
            );
            AppError::ExternalApi(format!("Failed to parse recommendation response: {}", e))
        })?;

        tracing::info!(
            requested = request.number_recommended,
            returned = parsed.recommended_movies.len(),
            provider = self.name(),
            "Recommendations fetched"
        );

        Ok(parsed)
    }

    fn name(&self) -> &'static str {
        "rec-movie"
    }
}
