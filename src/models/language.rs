use serde::Serialize;

/// ISO 639-1 codes found in the movie catalog, with display names
const LANGUAGES: &[(&str, &str)] = &[
    ("fi", "Finnish"),
    ("en", "English"),
    ("fr", "French"),
    ("de", "German"),
    ("he", "Hebrew"),
    ("es", "Spanish"),
    ("zh", "Chinese"),
    ("ja", "Japanese"),
    ("da", "Danish"),
    ("ko", "Korean"),
    ("pl", "Polish"),
    ("sv", "Swedish"),
    ("it", "Italian"),
    ("bs", "Bosnian"),
    ("hi", "Hindi"),
    ("ru", "Russian"),
    ("no", "Norwegian"),
    ("pt", "Portuguese"),
    ("nl", "Dutch"),
    ("el", "Greek"),
    ("cs", "Czech"),
    ("bn", "Bengali"),
    ("cn", "Chinese (Old Code)"),
    ("tn", "Tswana"),
    ("sr", "Serbian"),
    ("mn", "Mongolian"),
    ("et", "Estonian"),
    ("uk", "Ukrainian"),
    ("is", "Icelandic"),
    ("ca", "Catalan"),
    ("ro", "Romanian"),
    ("se", "Northern Sami"),
    ("ps", "Pashto"),
    ("th", "Thai"),
    ("hu", "Hungarian"),
    ("xx", "Unknown"),
    ("tr", "Turkish"),
    ("vi", "Vietnamese"),
    ("sh", "Serbo-Croatian"),
    ("fa", "Persian"),
    ("ht", "Haitian Creole"),
    ("bg", "Bulgarian"),
    ("zu", "Zulu"),
    ("ar", "Arabic"),
    ("mr", "Marathi"),
    ("ku", "Kurdish"),
    ("bo", "Tibetan"),
    ("ta", "Tamil"),
    ("tl", "Tagalog"),
    ("kk", "Kazakh"),
];

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

/// Looks up a language by code (case-insensitive)
pub fn find_language(code: &str) -> Option<Language> {
    let code = code.trim();
    LANGUAGES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|&(code, name)| Language { code, name })
}

/// Every known language, in catalog order
pub fn all_languages() -> Vec<Language> {
    LANGUAGES
        .iter()
        .map(|&(code, name)| Language { code, name })
        .collect()
}
