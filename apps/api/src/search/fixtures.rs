//! Shared test records for the search modules.

use serde_json::json;

use crate::models::candidate::CandidateProfile;

pub fn sample_candidates() -> Vec<CandidateProfile> {
    serde_json::from_value(json!([
        {
            "id": "1",
            "name": "Jane Doe",
            "title": "Frontend Engineer",
            "bio": "Builds accessible React interfaces and design systems.",
            "location": "Austin, TX",
            "experience": 6,
            "skills": ["React", "Node.js", "TypeScript"],
            "workAuthorization": "US Citizen",
            "availability": { "types": ["Full-time"] },
            "willingToRelocate": "No",
            "projects": [
                {
                    "name": "Design System",
                    "description": "Shared component library",
                    "technologies": ["React", "Storybook"]
                }
            ]
        },
        {
            "id": "2",
            "name": "Marcus Lee",
            "title": "Backend Engineer",
            "bio": "Owns payment services end to end.",
            "location": "Seattle, WA",
            "experience": 12,
            "skills": ["Go", "PostgreSQL", "Kubernetes"],
            "workAuthorization": ["Green Card"],
            "availability": { "types": ["Full-time", "Contract"], "note": "Open to short contracts" },
            "willingToRelocate": "Yes",
            "projects": [
                {
                    "name": "Billing Service",
                    "description": "Payments ledger",
                    "technologies": ["Go", "gRPC"]
                }
            ]
        },
        {
            "id": "3",
            "name": "Priya Raman",
            "title": "Data Engineer",
            "bio": "Builds streaming data pipelines.",
            "location": "New York, NY",
            "experience": 4,
            "skills": ["Python", "Spark", "Airflow"],
            "workAuthorization": ["OPT"],
            "availability": { "types": ["Full-time"] },
            "willingToRelocate": "Maybe",
            "projects": [
                {
                    "name": "Clickstream",
                    "description": "Real-time event ingestion",
                    "technologies": ["Kafka", "Spark"]
                }
            ]
        },
        {
            "id": "4",
            "name": "Diego Alvarez",
            "title": "Full Stack Developer",
            "bio": "Ships Django backends with modern UIs.",
            "location": "Austin, TX",
            "experience": 9,
            "skills": ["React", "Python", "Django"],
            "workAuthorization": "H1B",
            "availability": { "types": ["Part-time", "Contract"] },
            "willingToRelocate": "No",
            "projects": []
        },
        {
            "id": 5,
            "name": "Sam Okafor",
            "title": "DevOps Engineer",
            "bio": "Infrastructure as code, cost tuning.",
            "location": "Denver, CO",
            "experience": 15,
            "skills": ["AWS", "Terraform", "Docker"]
        }
    ]))
    .expect("sample candidates must parse")
}
