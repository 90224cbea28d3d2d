use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::MovieRecord;

/// Release-period filter understood by the recommendation service
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Era {
    /// Released in or before 1990
    Old,
    /// 1991 through 2020
    Actual,
    /// After 2020
    New,
}

impl Era {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "old" => Some(Era::Old),
            "actual" => Some(Era::Actual),
            "new" => Some(Era::New),
            _ => None,
        }
    }
}

/// Body of `POST /recommend` on the recommendation service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationRequest {
    pub mood: Option<String>,
    /// Desired runtime in minutes
    pub preferred_length: Option<u32>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub era: Option<Era>,
    /// `true` for mainstream, `false` for indie, unset for either
    pub popularity: Option<bool>,
    pub selected_genres: Vec<String>,
    pub number_recommended: u32,
    pub previous_ids: Vec<i64>,
}

/// One ranked movie as returned upstream: free text plus the catalog id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawRecommendation {
    pub content: String,
    pub id: i64,
}

/// Raw response from the recommendation service
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecommendResponse {
    #[serde(default)]
    pub recommended_movies: Vec<RawRecommendation>,
    /// Set when the service could not produce recommendations
    #[serde(default)]
    pub error: Option<String>,
}

/// Parsed recommendations returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationBatch {
    pub movies: Vec<MovieRecord>,
    /// Every id the client has now been shown; send back as `previousIds` to get new titles
    pub seen_ids: Vec<i64>,
    pub fetched_at: DateTime<Utc>,
}

impl RecommendationBatch {
    pub fn new(movies: Vec<MovieRecord>, previous_ids: &[i64]) -> Self {
        let mut seen = HashSet::new();
        let seen_ids = previous_ids
            .iter()
            .copied()
            .chain(movies.iter().map(|movie| movie.id))
            .filter(|id| seen.insert(*id))
            .collect();

        Self {
            movies,
            seen_ids,
            fetched_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_movie;

    #[test]
    fn test_era_parse() {
        assert_eq!(Era::parse("old"), Some(Era::Old));
        assert_eq!(Era::parse(" Actual "), Some(Era::Actual));
        assert_eq!(Era::parse("NEW"), Some(Era::New));
        assert_eq!(Era::parse("ancient"), None);
    }

    #[test]
    fn test_request_wire_format() {
        let request = RecommendationRequest {
            mood: Some("excited".to_string()),
            preferred_length: Some(90),
            language: None,
            country: None,
            era: Some(Era::Actual),
            popularity: Some(true),
            selected_genres: vec!["Fantasy".to_string()],
            number_recommended: 5,
            previous_ids: vec![25, 227],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "mood": "excited",
                "preferred_length": 90,
                "language": null,
                "country": null,
                "era": "actual",
                "popularity": true,
                "selected_genres": ["Fantasy"],
                "number_recommended": 5,
                "previous_ids": [25, 227]
            })
        );
    }

    #[test]
    fn test_response_without_movies() {
        let response: RecommendResponse =
            serde_json::from_str(r#"{"error": "No matching movies.", "recommended_movies": []}"#)
                .unwrap();
        assert!(response.recommended_movies.is_empty());
        assert_eq!(response.error.as_deref(), Some("No matching movies."));

        let bare: RecommendResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(bare, RecommendResponse::default());
    }

    #[test]
    fn test_seen_ids_append_without_duplicates() {
        let movies = vec![parse_movie("Title: A.", 3), parse_movie("Title: B.", 1)];
        let batch = RecommendationBatch::new(movies, &[1, 2]);

        assert_eq!(batch.seen_ids, vec![1, 2, 3]);
        assert_eq!(batch.movies.len(), 2);
    }
}
