use serde::Serialize;

/// Curated skills offered in the search filter panel, grouped by category.
const SKILL_CATALOG: &[(&str, &[&str])] = &[
    (
        "Front End",
        &[
            "React",
            "Next.js",
            "Angular",
            "Vue.js",
            "TypeScript",
            "JavaScript",
            "CSS/SCSS",
            "Tailwind CSS",
            "UI/UX Design",
            "Storybook",
        ],
    ),
    (
        "Back End",
        &[
            "Node.js",
            "Express",
            "Python",
            "Django",
            "Flask",
            "Java",
            "Spring Boot",
            "Go",
            "Ruby on Rails",
            "PHP",
        ],
    ),
    (
        "DevOps / Infra",
        &[
            "AWS",
            "GCP",
            "Azure",
            "Docker",
            "Kubernetes",
            "CI/CD Pipelines",
            "Terraform",
        ],
    ),
    (
        "Data / Storage",
        &[
            "PostgreSQL",
            "MySQL",
            "MongoDB",
            "Redis",
            "Elasticsearch",
            "GraphQL",
        ],
    ),
    (
        "Data Science / ML",
        &[
            "Pandas",
            "PyTorch",
            "TensorFlow",
            "Scikit-learn",
            "Airflow",
            "Spark",
        ],
    ),
    (
        "Other Skills",
        &[
            "REST API Design",
            "TDD / Unit Testing",
            "Git / GitHub",
            "Agile / Scrum",
            "System Design",
            "Microservices Architecture",
        ],
    ),
];

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: Vec<&'static str>,
}

/// Catalog narrowed to skills containing `query` (ignoring case).
/// Categories with no remaining skills are dropped.
pub fn filter_catalog(query: &str) -> Vec<SkillCategory> {
    let needle = query.trim().to_lowercase();
    SKILL_CATALOG
        .iter()
        .filter_map(|(name, skills)| {
            let skills: Vec<&'static str> = skills
                .iter()
                .copied()
                .filter(|s| s.to_lowercase().contains(&needle))
                .collect();
            (!skills.is_empty()).then_some(SkillCategory {
                name: *name,
                skills,
            })
        })
        .collect()
}
