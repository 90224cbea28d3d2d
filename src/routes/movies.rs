use axum::Json;

use crate::{
    models::{MovieRecord, RawRecommendation},
    parser::parse_movie,
};

/// Parses one upstream content string, for clients holding raw recommendations
pub async fn parse(Json(raw): Json<RawRecommendation>) -> Json<MovieRecord> {
    Json(parse_movie(&raw.content, raw.id))
}
