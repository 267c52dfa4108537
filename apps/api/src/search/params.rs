//! Query-string adapter for the search endpoints.
//!
//! Parameters arrive as raw `(key, value)` pairs and are folded here, so the
//! extractor itself never rejects a request. Values are then parsed leniently:
//! a malformed number or unknown facet value becomes "unset" instead of a 400.
//! A repeated key keeps its first value, except `skills`, whose values are
//! concatenated. Aliases count as the same key.

use crate::search::filters::{FacetChoice, SearchFilters};
use crate::search::ordering::ResultOrder;
use crate::search::SearchRequest;

#[derive(Debug, Default)]
pub struct SearchParams {
    pub q: Option<String>,
    /// Comma-separated; repeated `skills` keys are joined.
    pub skills: Option<String>,
    pub location: Option<String>,
    pub min_experience: Option<String>,
    pub work_authorization: Option<String>,
    pub availability: Option<String>,
    pub relocation: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub seed: Option<String>,
}

impl SearchParams {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "q" | "query" => &mut params.q,
                "skills" => {
                    params.skills = Some(match params.skills.take() {
                        Some(skills) => format!("{skills},{value}"),
                        None => value,
                    });
                    continue;
                }
                "location" => &mut params.location,
                "min_experience" | "experience" | "minExperience" => &mut params.min_experience,
                "work_authorization" | "workAuthorization" => &mut params.work_authorization,
                "availability" | "availabilityType" => &mut params.availability,
                "relocation" | "willingToRelocate" => &mut params.relocation,
                "page" => &mut params.page,
                "page_size" | "pageSize" => &mut params.page_size,
                "seed" => &mut params.seed,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }

    pub fn into_request(self, default_page_size: usize) -> SearchRequest {
        let mut filters =
            SearchFilters::default().with_location(self.location.as_deref().unwrap_or_default());
        for skill in self.skills.as_deref().unwrap_or_default().split(',') {
            filters = filters.with_skill(skill);
        }
        filters.min_experience = parse_number(self.min_experience.as_deref());
        filters.work_authorization = FacetChoice::parse(self.work_authorization.as_deref());
        filters.availability_type = FacetChoice::parse(self.availability.as_deref());
        filters.willing_to_relocate = FacetChoice::parse(self.relocation.as_deref());

        SearchRequest {
            query: self.q.unwrap_or_default(),
            filters,
            page: parse_number(self.page.as_deref()).unwrap_or(1),
            page_size: parse_number(self.page_size.as_deref()).unwrap_or(default_page_size),
            order: parse_number(self.seed.as_deref())
                .map(|seed| ResultOrder::Shuffled { seed: Some(seed) }),
        }
    }
}

/// The first `q` (or `query`) value, for endpoints that take only free text.
pub fn text_query<I>(pairs: I) -> String
where
    I: IntoIterator<Item = (String, String)>,
{
    pairs
        .into_iter()
        .find(|(key, _)| key == "q" || key == "query")
        .map(|(_, value)| value)
        .unwrap_or_default()
}

fn parse_number<T: std::str::FromStr>(raw: Option<&str>) -> Option<T> {
    raw.and_then(|s| s.trim().parse().ok())
}
