//! Query engine — free-text plus facet matching over the record store.
//!
//! A record passes when every clause holds:
//! 1. the query is empty, or it is a case-insensitive substring of any searchable field
//! 2. every selected skill is a substring of at least one of the record's skills
//! 3. location is unset, or a substring of the record's location
//! 4. experience is unset, or `record.experience >= min`
//! 5. work authorization is `Any`, or equals one of the record's values (ignoring case)
//! 6. availability is `Any`, or is listed among the record's availability types
//! 7. relocation is `Any`, or equals the record's value exactly
//!
//! Pure and deterministic; ordering is the caller's business (see `ordering`).

use crate::models::candidate::CandidateProfile;
use crate::search::filters::{FacetValue, SearchFilters};

/// Filters `records`, preserving their order.
pub fn search<'a>(
    records: &'a [CandidateProfile],
    query: &str,
    filters: &SearchFilters,
) -> Vec<&'a CandidateProfile> {
    search_iter(records, query, filters)
}

/// Same as [`search`] over an already arranged view of the store.
pub fn search_iter<'a, I>(
    records: I,
    query: &str,
    filters: &SearchFilters,
) -> Vec<&'a CandidateProfile>
where
    I: IntoIterator<Item = &'a CandidateProfile>,
{
    let matcher = Matcher::new(query, filters);
    records.into_iter().filter(|r| matcher.matches(r)).collect()
}

/// Query and filters lower-cased once per search instead of once per record.
struct Matcher<'f> {
    query: String,
    skills: Vec<String>,
    location: Option<String>,
    filters: &'f SearchFilters,
}

impl<'f> Matcher<'f> {
    fn new(query: &str, filters: &'f SearchFilters) -> Self {
        Self {
            query: query.trim().to_lowercase(),
            skills: filters.skills.iter().map(|s| s.to_lowercase()).collect(),
            location: filters.location.as_ref().map(|l| l.to_lowercase()),
            filters,
        }
    }

    fn matches(&self, record: &CandidateProfile) -> bool {
        self.matches_query(record)
            && self.matches_skills(record)
            && self.matches_location(record)
            && self.matches_experience(record)
            && self.matches_work_authorization(record)
            && self.matches_availability(record)
            && self.matches_relocation(record)
    }

    fn matches_query(&self, record: &CandidateProfile) -> bool {
        self.query.is_empty()
            || record
                .searchable_fields()
                .any(|field| contains_ignore_case(field, &self.query))
    }

    fn matches_skills(&self, record: &CandidateProfile) -> bool {
        self.skills.iter().all(|wanted| {
            record
                .skills
                .iter()
                .any(|skill| contains_ignore_case(skill, wanted))
        })
    }

    fn matches_location(&self, record: &CandidateProfile) -> bool {
        match &self.location {
            Some(location) => contains_ignore_case(&record.location, location),
            None => true,
        }
    }

    fn matches_experience(&self, record: &CandidateProfile) -> bool {
        self.filters
            .min_experience
            .map_or(true, |min| record.experience >= min)
    }

    fn matches_work_authorization(&self, record: &CandidateProfile) -> bool {
        match self.filters.work_authorization.value() {
            Some(wanted) => record
                .work_authorization
                .iter()
                .any(|auth| auth.trim().eq_ignore_ascii_case(wanted.as_str())),
            None => true,
        }
    }

    fn matches_availability(&self, record: &CandidateProfile) -> bool {
        match self.filters.availability_type.value() {
            Some(wanted) => record
                .availability_types()
                .iter()
                .any(|t| t.trim().eq_ignore_ascii_case(wanted.as_str())),
            None => true,
        }
    }

    fn matches_relocation(&self, record: &CandidateProfile) -> bool {
        match self.filters.willing_to_relocate.value() {
            Some(wanted) => record.willing_to_relocate.as_deref() == Some(wanted.as_str()),
            None => true,
        }
    }
}

/// `needle` must already be lower-cased.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
