use std::sync::Arc;

use crate::config::Config;
use crate::error::AppResult;
use crate::services::{RecMovieProvider, RecommendationProvider};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn RecommendationProvider>,
}

impl AppState {
    /// Creates state around an existing provider
    pub fn new(provider: Arc<dyn RecommendationProvider>) -> Self {
        Self { provider }
    }

    /// Creates state backed by the HTTP recommendation service named in `config`
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let provider = RecMovieProvider::from_config(config)?;
        Ok(Self::new(Arc::new(provider)))
    }
}
