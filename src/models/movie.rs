use serde::{Deserialize, Serialize};

/// A movie as rendered by the client, derived from one recommendation content string
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieRecord {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub genres: Vec<String>,
    pub year: Option<i32>,
    /// Runtime in minutes
    pub duration: Option<f64>,
    /// ISO 639-1 code, empty when unknown
    pub language: String,
    pub popularity: Option<f64>,
    pub rating: Option<f64>,
    /// Poster URL, empty when absent
    pub poster: String,
    pub director: String,
    pub countries: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(language: &str) -> MovieRecord {
        MovieRecord {
            id: 1,
            title: "Amélie".to_string(),
            description: String::new(),
            genres: vec!["Comedy".to_string(), "Romance".to_string()],
            year: Some(2001),
            duration: Some(122.0),
            language: language.to_string(),
            popularity: Some(12.5),
            rating: Some(7.8),
            poster: String::new(),
            director: "Jean-Pierre Jeunet".to_string(),
            countries: vec!["France".to_string()],
        }
    }

    #[test]
    fn test_serializes_absent_numbers_as_null() {
        let movie = MovieRecord {
            year: None,
            rating: None,
            ..record("fr")
        };
        let json = serde_json::to_value(&movie).unwrap();

        assert_eq!(json["year"], serde_json::Value::Null);
        assert_eq!(json["rating"], serde_json::Value::Null);
        assert_eq!(json["duration"], 122.0);
        assert_eq!(json["genres"], serde_json::json!(["Comedy", "Romance"]));
    }
}
