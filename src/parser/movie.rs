use crate::models::MovieRecord;
use crate::parser::list_literal::decode_list;
use regex::Regex;
use std::sync::OnceLock;

/// Title used when the content carries no usable `Title:` label
pub const UNKNOWN_TITLE: &str = "Unknown";

/// Extracts a [`MovieRecord`] from one recommendation content string.
///
/// Every field is matched independently and falls back to its default when
/// the label is missing or malformed, so any input (including `""`) produces
/// a record. `id` is passed through unchanged.
#[must_use]
pub fn parse_movie(content: &str, id: i64) -> MovieRecord {
    MovieRecord {
        id,
        title: extract_title(content),
        description: extract_overview(content),
        genres: extract_list(content, genres_literal(), genres_clause()),
        year: extract_year(content),
        duration: extract_number(content, runtime()),
        language: extract_language(content),
        popularity: extract_number(content, popularity()),
        rating: extract_number(content, rating()),
        poster: extract_poster(content),
        director: extract_clause(content, director()).unwrap_or_default(),
        countries: extract_list(content, countries_literal(), countries_clause()),
    }
}

fn get_regex(re: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    re.get_or_init(|| Regex::new(pattern).expect("Invalid regex pattern defined in code"))
}

macro_rules! pattern {
    ($name:ident, $re:literal) => {
        fn $name() -> &'static Regex {
            static RE: OnceLock<Regex> = OnceLock::new();
            get_regex(&RE, $re)
        }
    };
}

// Sentence clauses run up to the next period
pattern!(title, r"(?s)Title:\s*(.*?)\.");
pattern!(director, r"(?s)Director:\s*(.*?)\.");
pattern!(genres_clause, r"(?s)Genres:\s*(.*?)\.");
pattern!(countries_clause, r"(?s)Countries:\s*(.*?)\.");
// A literal ends at the first `]` that closes its sentence, so nested lists stay whole
pattern!(genres_literal, r"Genres:\s*(\[.*?\])\s*(?:\.|$)");
pattern!(countries_literal, r"Countries:\s*(\[.*?\])\s*(?:\.|$)");
pattern!(overview, r"(?s)Overview:\s*(.*?)\s*Genres:");
pattern!(year, r"Year:\s*(\d{4})");
// A sentence-ending period is never part of the number
pattern!(runtime, r"Runtime:\s*(\d+(?:\.\d+)?)");
pattern!(popularity, r"Popularity:\s*(\d+(?:\.\d+)?)");
pattern!(rating, r"Rating:\s*(\d+(?:\.\d+)?)");
// ASCII word characters only; anything else is not a language code
pattern!(language, r"Language:\s*((?-u:\w){2})");
pattern!(poster, r"(?m)Poster:\s*(https://.*)$");

fn first_group<'a>(re: &Regex, content: &'a str) -> Option<&'a str> {
    re.captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn extract_clause(content: &str, re: &Regex) -> Option<String> {
    first_group(re, content).map(|s| s.trim().to_string())
}

fn extract_title(content: &str) -> String {
    extract_clause(content, title())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string())
}

fn extract_overview(content: &str) -> String {
    extract_clause(content, overview()).unwrap_or_default()
}

/// A bracketed literal right after the label wins over the sentence clause,
/// so periods inside quoted items do not truncate the list.
fn extract_list(content: &str, literal: &Regex, clause: &Regex) -> Vec<String> {
    match first_group(literal, content) {
        Some(list) => decode_list(Some(list)),
        None => decode_list(first_group(clause, content)),
    }
}

fn extract_year(content: &str) -> Option<i32> {
    first_group(year(), content).and_then(|y| y.parse().ok())
}

fn extract_number(content: &str, re: &Regex) -> Option<f64> {
    first_group(re, content)
        .and_then(|n| n.parse().ok())
        .filter(|n: &f64| n.is_finite())
}

fn extract_language(content: &str) -> String {
    first_group(language(), content)
        .unwrap_or_default()
        .to_string()
}

fn extract_poster(content: &str) -> String {
    first_group(poster(), content)
        .map(|url| url.trim_end().to_string())
        .unwrap_or_default()
}
