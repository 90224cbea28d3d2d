use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::{Era, RecommendationRequest};
use crate::error::{AppError, AppResult};

/// Most movies a single questionnaire may ask for
pub const MAX_MOVIE_COUNT: u32 = 20;

/// Used when the questionnaire leaves the movie count blank
///
/// The browser form never sends a blank count (it coerces blank to 0 and
/// rejects it with "At least 1 movie."); other clients get the recommendation
/// service's own default instead.
pub const DEFAULT_MOVIE_COUNT: u32 = 3;

/// Questionnaire answers as the client submits them
///
/// Choice fields use `"any"` (or an empty string) for "no constraint". Numeric
/// answers arrive as text from form inputs, but plain JSON numbers are accepted too.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferencesForm {
    pub selected_mood: String,
    pub custom_mood: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub free_time: String,
    pub language: String,
    pub country: String,
    pub era: String,
    /// `mainstream`, `indie` or `any`
    pub popularity: String,
    pub genres: Vec<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub movie_count: String,
    /// Movies already shown to this user, excluded upstream
    pub previous_ids: Vec<i64>,
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Loose::deserialize(deserializer)? {
        Loose::Text(text) => text,
        Loose::Number(number) => number.to_string(),
    })
}

impl PreferencesForm {
    /// Mood to send upstream: the picked mood, else the free-text one
    pub fn mood(&self) -> Option<String> {
        std::iter::once(self.selected_mood.as_str())
            .chain(self.custom_mood.as_deref())
            .map(str::trim)
            .find(|mood| !mood.is_empty())
            .map(str::to_lowercase)
    }

    /// Validates every answer and builds the upstream request
    ///
    /// All failing fields are reported together, one message per field.
    pub fn into_request(self) -> AppResult<RecommendationRequest> {
        let mut errors = FieldErrors::default();

        let mood = self.mood();
        if mood.is_none() {
            errors.add("selectedMood", "Select one mood.");
        }

        let selected_genres: Vec<String> = self
            .genres
            .iter()
            .map(|genre| genre.trim())
            .filter(|genre| !genre.is_empty())
            .map(str::to_string)
            .collect();
        if selected_genres.is_empty() {
            errors.add("genres", "Select at least one genre.");
        }

        let number_recommended = match parse_movie_count(&self.movie_count) {
            Ok(count) => count,
            Err(message) => {
                errors.add("movieCount", message);
                DEFAULT_MOVIE_COUNT
            }
        };

        let preferred_length = match parse_minutes(&self.free_time) {
            Ok(minutes) => minutes,
            Err(message) => {
                errors.add("freeTime", message);
                None
            }
        };

        let era = match choice(&self.era) {
            None => None,
            Some(value) => {
                let era = Era::parse(value);
                if era.is_none() {
                    errors.add("era", "Era must be old, actual or new.");
                }
                era
            }
        };

        let popularity = match choice(&self.popularity).map(str::to_lowercase).as_deref() {
            Some("mainstream") => Some(true),
            Some("indie") => Some(false),
            _ => None,
        };

        errors.into_result()?;

        Ok(RecommendationRequest {
            mood,
            preferred_length,
            language: choice(&self.language).map(str::to_string),
            country: choice(&self.country).map(str::to_string),
            era,
            popularity,
            selected_genres,
            number_recommended,
            previous_ids: self.previous_ids,
        })
    }
}

/// First failure per field, keyed by the client's field name
#[derive(Default)]
struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    fn into_result(self) -> AppResult<()> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.0))
        }
    }
}

/// `None` for blank or `any`
fn choice(value: &str) -> Option<&str> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("any") {
        None
    } else {
        Some(value)
    }
}

fn parse_movie_count(value: &str) -> Result<u32, &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(DEFAULT_MOVIE_COUNT);
    }

    let count: i64 = value
        .parse()
        .map_err(|_| "Movie count must be a whole number.")?;

    match count {
        c if c < 1 => Err("At least 1 movie."),
        c if c > i64::from(MAX_MOVIE_COUNT) => Err("Maximum 20 movies."),
        c => Ok(c as u32),
    }
}

fn parse_minutes(value: &str) -> Result<Option<u32>, &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    value
        .parse()
        .map(Some)
        .map_err(|_| "Free time must be a whole number of minutes.")
}
