use axum::{extract::Path, Json};

use crate::{
    error::{AppError, AppResult},
    models::{all_languages, find_language, Language},
};

/// All language codes the catalog uses
pub async fn list() -> Json<Vec<Language>> {
    Json(all_languages())
}

/// Display name for one language code
pub async fn get(Path(code): Path<String>) -> AppResult<Json<Language>> {
    find_language(&code)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Unknown language code: {}", code)))
}
