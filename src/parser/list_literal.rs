use serde_json::Value;

/// Decodes a multi-value field into an ordered list of trimmed labels.
///
/// Accepts either a bracketed, single-quoted list (`['Action', 'Thriller']`)
/// or a bare comma clause (`Action, Thriller`); equivalent content decodes to
/// the same sequence. Missing or blank input yields an empty list.
#[must_use]
pub fn decode_list(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Vec::new();
    };

    decode_structured(raw).unwrap_or_else(|| split_clause(raw))
}

fn decode_structured(raw: &str) -> Option<Vec<String>> {
    if !raw.starts_with('[') {
        return None;
    }

    let normalized = raw.replace('\'', "\"");
    let items: Vec<Value> = serde_json::from_str(&normalized).ok()?;

    let mut labels = Vec::new();
    collect_labels(items, &mut labels);
    Some(labels)
}

/// Nested lists are flattened in order
fn collect_labels(items: Vec<Value>, labels: &mut Vec<String>) {
    for item in items {
        match item {
            Value::Null => {}
            Value::Array(inner) => collect_labels(inner, labels),
            Value::String(s) => labels.push(s.trim().to_string()),
            other => labels.push(other.to_string()),
        }
    }
    labels.retain(|label| !label.is_empty());
}

fn split_clause(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|piece| {
            piece
                .trim()
                .trim_matches(|c| matches!(c, '[' | ']' | '\'' | '"'))
                .trim()
        })
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_literal_and_clause_agree() {
        let expected = vec!["Action".to_string(), "Thriller".to_string()];
        assert_eq!(decode_list(Some("['Action', 'Thriller']")), expected);
        assert_eq!(decode_list(Some("Action, Thriller")), expected);
    }

    #[test]
    fn test_absent_or_blank_is_empty() {
        assert!(decode_list(None).is_empty());
        assert!(decode_list(Some("")).is_empty());
        assert!(decode_list(Some("   ")).is_empty());
        assert!(decode_list(Some("[]")).is_empty());
    }

    #[test]
    fn test_single_value_clause() {
        assert_eq!(
            decode_list(Some("United States of America")),
            vec!["United States of America"]
        );
    }

    #[test]
    fn test_double_quoted_literal() {
        assert_eq!(
            decode_list(Some(r#"["Science Fiction", "Drama"]"#)),
            vec!["Science Fiction", "Drama"]
        );
    }

    #[test]
    fn test_apostrophe_falls_back_to_split() {
        // Normalizing quotes breaks the literal, the clause split still recovers both labels
        assert_eq!(
            decode_list(Some("['Côte d'Ivoire', 'France']")),
            vec!["Côte d'Ivoire", "France"]
        );
    }

    #[test]
    fn test_null_items_skipped_and_scalars_stringified() {
        assert_eq!(
            decode_list(Some("['Drama', null, 42]")),
            vec!["Drama", "42"]
        );
    }

    #[test]
    fn test_nested_lists_flattened() {
        assert_eq!(
            decode_list(Some("[['Action', 'Drama'], 'Crime', []]")),
            vec!["Action", "Drama", "Crime"]
        );
    }

    #[test]
    fn test_broken_nested_literal_falls_back_without_brackets() {
        assert_eq!(
            decode_list(Some("[['Rock 'n' Roll'], 'Music']")),
            vec!["Rock 'n' Roll", "Music"]
        );
    }

    #[test]
    fn test_empty_pieces_dropped() {
        assert_eq!(
            decode_list(Some("Action, , Thriller,")),
            vec!["Action", "Thriller"]
        );
    }
}
