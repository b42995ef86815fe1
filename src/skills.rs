// src/skills.rs
use serde::Serialize;

use crate::models::Company;
use crate::utils::push_unique;

/// Every distinct value the front-end can offer as a filter, in first-seen order
#[derive(Debug, Default, Serialize, PartialEq)]
pub struct SkillCatalog {
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub personal_traits: Vec<String>,
    pub language_requirements: Vec<String>,
    pub universities: Vec<String>,
    pub majors: Vec<String>,
}

impl SkillCatalog {
    pub fn from_companies(companies: &[Company]) -> Self {
        let mut catalog = Self::default();

        for job in companies.iter().flat_map(Company::jobs) {
            for skill in &job.technical_skills {
                push_unique(&mut catalog.technical_skills, skill);
            }
            for skill in &job.soft_skills {
                push_unique(&mut catalog.soft_skills, skill);
            }
            for trait_ in &job.personal_traits {
                push_unique(&mut catalog.personal_traits, trait_);
            }
            if let Some(requirement) = job.language_requirement.as_deref() {
                if !requirement.is_empty() {
                    push_unique(&mut catalog.language_requirements, requirement);
                }
            }
            if let Some(target) = &job.student_target {
                if let Some(university) = target.university.as_deref() {
                    if !university.is_empty() {
                        push_unique(&mut catalog.universities, university);
                    }
                }
                for major in target.major_list() {
                    push_unique(&mut catalog.majors, major);
                }
            }
        }

        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn companies() -> Vec<Company> {
        serde_json::from_value(json!([
            {
                "id": "1",
                "name": "Acme",
                "recruitment": { "jobs": [
                    {
                        "technical_skills": ["Rust", "SQL"],
                        "soft_skills": ["Teamwork"],
                        "personal_traits": ["Curious"],
                        "language_requirement": "Tiếng Anh B1",
                        "student_target": { "university": "HUST", "majors": "CS, EE" }
                    },
                    {
                        "technical_skills": ["SQL", "Go"],
                        "language_requirement": "",
                        "student_target": { "majors": "EE,Math" }
                    }
                ]}
            },
            { "id": "2", "name": "No jobs" },
            {
                "id": "3",
                "name": "Globex",
                "recruitment": { "jobs": [
                    {
                        "soft_skills": ["Teamwork", "Communication"],
                        "language_requirement": "Tiếng Anh B1",
                        "student_target": { "university": "UET" }
                    }
                ]}
            }
        ]))
        .unwrap()
    }

    #[test]
    fn test_catalog_is_distinct_and_ordered() {
        let catalog = SkillCatalog::from_companies(&companies());

        assert_eq!(catalog.technical_skills, vec!["Rust", "SQL", "Go"]);
        assert_eq!(catalog.soft_skills, vec!["Teamwork", "Communication"]);
        assert_eq!(catalog.personal_traits, vec!["Curious"]);
        assert_eq!(catalog.language_requirements, vec!["Tiếng Anh B1"]);
        assert_eq!(catalog.universities, vec!["HUST", "UET"]);
        assert_eq!(catalog.majors, vec!["CS", "EE", "Math"]);
    }

    #[test]
    fn test_empty_store_gives_empty_catalog() {
        assert_eq!(SkillCatalog::from_companies(&[]), SkillCatalog::default());
    }
}
