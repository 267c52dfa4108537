use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Candidate identifier. Fixtures use both numeric and string ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CandidateId {
    Number(u64),
    Text(String),
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateId::Number(n) => write!(f, "{n}"),
            CandidateId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    #[serde(default, deserialize_with = "lenient_list")]
    pub types: Vec<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileLinks {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub technologies: Vec<String>,
    #[serde(
        default,
        alias = "url",
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub link: Option<String>,
}

impl Project {
    /// Name, description, then each technology.
    pub fn searchable_fields(&self) -> impl Iterator<Item = &str> + '_ {
        [self.name.as_str(), self.description.as_str()]
            .into_iter()
            .chain(self.technologies.iter().map(String::as_str))
    }
}

/// A read-only candidate record from the talent fixture.
///
/// Only `id` is required. Every other field falls back to its default when it
/// is missing, `null` or of the wrong type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub id: CandidateId,
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub title: String,
    #[serde(default, alias = "summary", deserialize_with = "lenient")]
    pub bio: String,
    #[serde(default, deserialize_with = "lenient")]
    pub location: String,
    #[serde(default, deserialize_with = "years")]
    pub experience: u32,
    #[serde(default, deserialize_with = "skill_names")]
    pub skills: Vec<String>,
    #[serde(
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub work_authorization: Vec<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub willing_to_relocate: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub projects: Vec<Project>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub links: Option<ProfileLinks>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CandidateProfile {
    /// Every free-text field the query and suggestion engines look at, in scan order:
    /// name, title, bio, skills, then each project's fields.
    pub fn searchable_fields(&self) -> impl Iterator<Item = &str> + '_ {
        [self.name.as_str(), self.title.as_str(), self.bio.as_str()]
            .into_iter()
            .chain(self.skills.iter().map(String::as_str))
            .chain(self.projects.iter().flat_map(|p| p.searchable_fields()))
    }

    /// Availability types listed on the profile; empty when availability is absent.
    pub fn availability_types(&self) -> &[String] {
        self.availability
            .as_ref()
            .map(|a| a.types.as_slice())
            .unwrap_or(&[])
    }
}

/// Any value that does not fit `T` (including `null`) becomes `T::default()`.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Keeps the array elements that fit `T` and drops the rest. Non-arrays are empty.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// Years of experience as a number or a numeric string (`6`, `6.5`, `"7"`).
fn years<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let years = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(years
        .filter(|y| y.is_finite() && *y >= 0.0)
        .map(|y| y.min(u32::MAX as f64) as u32)
        .unwrap_or_default())
}

/// Accepts `["React"]` as well as `[{"name": "React", "level": "Advanced"}]`.
fn skill_names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(name) => Some(name),
            Value::Object(mut fields) => match fields.remove("name") {
                Some(Value::String(name)) => Some(name),
                _ => None,
            },
            _ => None,
        })
        .collect())
}

/// A single string or a list of strings.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => vec![s],
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_record_parses() {
        let profile: CandidateProfile = serde_json::from_value(json!({
            "id": "7",
            "name": "Jane Doe",
            "title": "Frontend Engineer",
            "bio": "Builds design systems",
            "location": "Austin, TX",
            "experience": 6,
            "skills": ["React", "Node.js"],
            "workAuthorization": ["US Citizen"],
            "availability": { "types": ["Full-time"], "startDate": "ASAP", "note": "2 weeks notice" },
            "willingToRelocate": "Maybe",
            "projects": [{ "name": "Atlas", "description": "Component kit", "technologies": ["Storybook"], "link": "https://example.com" }]
        }))
        .unwrap();

        assert_eq!(profile.id, CandidateId::Text("7".into()));
        assert_eq!(profile.availability_types(), ["Full-time".to_string()]);
        assert_eq!(profile.willing_to_relocate.as_deref(), Some("Maybe"));
        assert_eq!(
            profile.projects[0].link.as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn test_minimal_record_defaults_optional_fields() {
        let profile: CandidateProfile = serde_json::from_value(json!({ "id": 3 })).unwrap();
        assert_eq!(profile.id.to_string(), "3");
        assert!(profile.skills.is_empty());
        assert!(profile.work_authorization.is_empty());
        assert!(profile.availability.is_none());
        assert!(profile.availability_types().is_empty());
        assert_eq!(profile.experience, 0);
    }

    #[test]
    fn test_legacy_shape_is_accepted() {
        let profile: CandidateProfile = serde_json::from_value(json!({
            "id": "1",
            "name": "John Doe",
            "summary": "Full-stack developer",
            "skills": [{ "name": "React", "level": "Advanced", "percentage": 85 }],
            "workAuthorization": "H1B",
            "projects": [{ "name": "API", "description": "REST", "technologies": [], "url": "https://github.com/x" }]
        }))
        .unwrap();

        assert_eq!(profile.bio, "Full-stack developer");
        assert_eq!(profile.skills, vec!["React"]);
        assert_eq!(profile.work_authorization, vec!["H1B"]);
        assert_eq!(
            profile.projects[0].link.as_deref(),
            Some("https://github.com/x")
        );
    }

    #[test]
    fn test_searchable_fields_scan_order() {
        let profile: CandidateProfile = serde_json::from_value(json!({
            "id": 1,
            "name": "N",
            "title": "T",
            "bio": "B",
            "skills": ["S1", "S2"],
            "projects": [{ "name": "P", "description": "D", "technologies": ["X"] }]
        }))
        .unwrap();

        let fields: Vec<&str> = profile.searchable_fields().collect();
        assert_eq!(fields, vec!["N", "T", "B", "S1", "S2", "P", "D", "X"]);
    }

    #[test]
    fn test_malformed_optional_fields_fall_back_to_defaults() {
        let profile: CandidateProfile = serde_json::from_value(json!({
            "id": "9",
            "name": null,
            "bio": 42,
            "experience": "7",
            "skills": ["Go", 3, { "level": "High" }],
            "workAuthorization": { "status": "H1B" },
            "availability": { "types": null, "note": 5 },
            "willingToRelocate": true,
            "projects": null,
            "links": "https://example.com",
            "image": []
        }))
        .unwrap();

        assert_eq!(profile.name, "");
        assert_eq!(profile.bio, "");
        assert_eq!(profile.experience, 7);
        assert_eq!(profile.skills, vec!["Go"]);
        assert!(profile.work_authorization.is_empty());
        assert!(profile.availability_types().is_empty());
        assert!(profile.willing_to_relocate.is_none());
        assert!(profile.projects.is_empty());
        assert!(profile.links.is_none());
        assert!(profile.image.is_none());
    }

    #[test]
    fn test_experience_accepts_numbers_and_numeric_strings() {
        let parse = |value: Value| -> u32 {
            serde_json::from_value::<CandidateProfile>(json!({ "id": 1, "experience": value }))
                .unwrap()
                .experience
        };
        assert_eq!(parse(json!(12)), 12);
        assert_eq!(parse(json!(6.5)), 6);
        assert_eq!(parse(json!(" 4 ")), 4);
        assert_eq!(parse(json!("lots")), 0);
        assert_eq!(parse(json!(-3)), 0);
        assert_eq!(parse(Value::Null), 0);
    }

    #[test]
    fn test_bad_project_entries_are_dropped() {
        let profile: CandidateProfile = serde_json::from_value(json!({
            "id": 1,
            "projects": ["not a project", { "name": "Atlas", "technologies": "Rust" }]
        }))
        .unwrap();
        assert_eq!(profile.projects.len(), 1);
        assert_eq!(profile.projects[0].name, "Atlas");
        assert!(profile.projects[0].technologies.is_empty());
    }

    #[test]
    fn test_missing_id_is_rejected() {
        assert!(serde_json::from_value::<CandidateProfile>(json!({ "name": "x" })).is_err());
        assert!(serde_json::from_value::<CandidateProfile>(json!({ "id": null })).is_err());
    }
}
