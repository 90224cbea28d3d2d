use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Field name → first failing rule for that field
    #[error("Invalid preferences: {}", join_fields(.0))]
    Validation(BTreeMap<String, String>),

    #[error("External API error: {0}")]
    ExternalApi(String),
}

fn join_fields(fields: &BTreeMap<String, String>) -> String {
    fields
        .iter()
        .map(|(field, message)| format!("{}: {}", field, message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(fields) => {
                let body = Json(json!({
                    "error": self.to_string(),
                    "fields": fields,
                }));
                return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
            }
            AppError::ExternalApi(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AppError::HttpClient(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_every_field() {
        let mut fields = BTreeMap::new();
        fields.insert("selectedMood".to_string(), "Select one mood.".to_string());
        fields.insert("genres".to_string(), "Select at least one genre.".to_string());

        let err = AppError::Validation(fields);
        assert_eq!(
            err.to_string(),
            "Invalid preferences: genres: Select at least one genre.; selectedMood: Select one mood."
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::NotFound("x".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::ExternalApi("x".into()).into_response().status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::Validation(BTreeMap::new()).into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
