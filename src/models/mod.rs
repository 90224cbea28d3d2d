pub mod language;
pub mod movie;
pub mod recommendation;
pub mod user_preferences;

pub use language::{all_languages, find_language, Language};
pub use movie::MovieRecord;
pub use recommendation::{
    Era, RawRecommendation, RecommendResponse, RecommendationBatch, RecommendationRequest,
};
pub use user_preferences::PreferencesForm;
