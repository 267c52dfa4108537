use std::collections::HashSet;

use crate::models::candidate::CandidateProfile;
use crate::search::engine::contains_ignore_case;

pub const MAX_SUGGESTIONS: usize = 10;

/// Autocomplete candidates for a partially typed query.
///
/// Walks records in store order and each record's fields in scan order,
/// keeping every field value that contains the input. Values are deduplicated
/// ignoring case (first spelling wins) and the list stops at `MAX_SUGGESTIONS`.
///
/// A record can contribute more than one suggestion: every matching field is
/// offered, not only the first one found in that record.
pub fn suggest(records: &[CandidateProfile], partial: &str) -> Vec<String> {
    let needle = partial.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut suggestions = Vec::new();

    for field in records.iter().flat_map(|r| r.searchable_fields()) {
        if !contains_ignore_case(field, &needle) {
            continue;
        }
        if seen.insert(field.to_lowercase()) {
            suggestions.push(field.to_string());
            if suggestions.len() == MAX_SUGGESTIONS {
                break;
            }
        }
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::search::fixtures::sample_candidates;

    #[test]
    fn test_suggest_finds_skill() {
        let records = sample_candidates();
        let suggestions = suggest(&records, "reac");
        assert!(suggestions.contains(&"React".to_string()));
        assert!(suggestions.len() <= MAX_SUGGESTIONS);
    }

    #[test]
    fn test_suggest_follows_discovery_order() {
        let records = sample_candidates();
        // Jane's bio is scanned before her skills.
        assert_eq!(
            suggest(&records, "reac"),
            vec![
                "Builds accessible React interfaces and design systems.",
                "React",
            ]
        );
    }

    #[test]
    fn test_suggest_has_no_duplicates() {
        let records = sample_candidates();
        let suggestions = suggest(&records, "e");
        let unique: HashSet<String> = suggestions.iter().map(|s| s.to_lowercase()).collect();
        assert_eq!(unique.len(), suggestions.len());
    }

    #[test]
    fn test_suggest_is_capped() {
        let records = sample_candidates();
        assert_eq!(suggest(&records, "e").len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_suggest_dedups_ignoring_case() {
        let records: Vec<CandidateProfile> = serde_json::from_value(json!([
            { "id": "a", "skills": ["GraphQL"] },
            { "id": "b", "skills": ["graphql"] }
        ]))
        .unwrap();
        assert_eq!(suggest(&records, "graph"), vec!["GraphQL"]);
    }

    #[test]
    fn test_empty_input_gives_nothing() {
        let records = sample_candidates();
        assert!(suggest(&records, "").is_empty());
        assert!(suggest(&records, "   ").is_empty());
    }
}
