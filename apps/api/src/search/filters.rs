//! Facet filters for the talent search.
//!
//! Filter values arrive as loose strings from the query string. Everything is
//! normalised here once so the engine only sees canonical values: unknown or
//! "any" choices collapse to `FacetChoice::Any`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkAuthorization {
    UsCitizen,
    GreenCard,
    H1B,
    Opt,
    Cpt,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityType {
    FullTime,
    Contract,
    PartTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relocation {
    Yes,
    No,
    Maybe,
}

/// A closed set of values a facet can be filtered on.
pub trait FacetValue: Copy + Sized + 'static {
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str().eq_ignore_ascii_case(raw))
    }
}

impl FacetValue for WorkAuthorization {
    const ALL: &'static [Self] = &[
        Self::UsCitizen,
        Self::GreenCard,
        Self::H1B,
        Self::Opt,
        Self::Cpt,
        Self::Other,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::UsCitizen => "US Citizen",
            Self::GreenCard => "Green Card",
            Self::H1B => "H1B",
            Self::Opt => "OPT",
            Self::Cpt => "CPT",
            Self::Other => "Other",
        }
    }
}

impl FacetValue for AvailabilityType {
    const ALL: &'static [Self] = &[Self::FullTime, Self::Contract, Self::PartTime];

    fn as_str(&self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::Contract => "Contract",
            Self::PartTime => "Part-time",
        }
    }
}

impl FacetValue for Relocation {
    const ALL: &'static [Self] = &[Self::Yes, Self::No, Self::Maybe];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Maybe => "Maybe",
        }
    }
}

/// Either no constraint, or one canonical facet value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetChoice<T> {
    Any,
    Only(T),
}

impl<T> Default for FacetChoice<T> {
    fn default() -> Self {
        FacetChoice::Any
    }
}

impl<T: FacetValue> FacetChoice<T> {
    /// `"any"`, blank and unrecognised input all mean no constraint.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.and_then(T::parse) {
            Some(v) => FacetChoice::Only(v),
            None => FacetChoice::Any,
        }
    }

    pub fn value(&self) -> Option<T> {
        match self {
            FacetChoice::Any => None,
            FacetChoice::Only(v) => Some(*v),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    /// AND semantics: a record must carry every one of these.
    pub skills: Vec<String>,
    pub location: Option<String>,
    pub min_experience: Option<u32>,
    pub work_authorization: FacetChoice<WorkAuthorization>,
    pub availability_type: FacetChoice<AvailabilityType>,
    pub willing_to_relocate: FacetChoice<Relocation>,
}

impl SearchFilters {
    /// Adds a skill filter unless it is blank or already selected (case-insensitive).
    pub fn with_skill(mut self, skill: &str) -> Self {
        let skill = skill.trim();
        if !skill.is_empty() && !self.skills.iter().any(|s| s.eq_ignore_ascii_case(skill)) {
            self.skills.push(skill.to_string());
        }
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        let location = location.trim();
        self.location = (!location.is_empty()).then(|| location.to_string());
        self
    }

    /// Display chips for every filter that is set, skills first.
    pub fn active_labels(&self) -> Vec<String> {
        let mut labels = self.skills.clone();
        if let Some(location) = &self.location {
            labels.push(format!("Location: {location}"));
        }
        if let Some(years) = self.min_experience {
            labels.push(format!("Experience: {years}+ years"));
        }
        if let Some(v) = self.work_authorization.value() {
            labels.push(format!("Work Auth: {}", v.as_str()));
        }
        if let Some(v) = self.availability_type.value() {
            labels.push(format!("Availability: {}", v.as_str()));
        }
        if let Some(v) = self.willing_to_relocate.value() {
            labels.push(format!("Relocation: {}", v.as_str()));
        }
        labels
    }
}

#[cfg(test)]
impl SearchFilters {
    pub fn with_min_experience(mut self, years: u32) -> Self {
        self.min_experience = Some(years);
        self
    }

    pub fn with_work_authorization(mut self, value: WorkAuthorization) -> Self {
        self.work_authorization = FacetChoice::Only(value);
        self
    }

    pub fn with_availability(mut self, value: AvailabilityType) -> Self {
        self.availability_type = FacetChoice::Only(value);
        self
    }

    pub fn with_relocation(mut self, value: Relocation) -> Self {
        self.willing_to_relocate = FacetChoice::Only(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.active_labels().is_empty()
    }
}
