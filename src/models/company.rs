// src/models/company.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{id_string, optional_id_string};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Company {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(
        default,
        rename = "ratingCount",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recruitment: Option<Recruitment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Company {
    /// Job postings in declaration order; empty when the company is not recruiting.
    pub fn jobs(&self) -> &[Job] {
        self.recruitment
            .as_ref()
            .map(|r| r.jobs.as_slice())
            .unwrap_or_default()
    }

    pub fn find_review(&self, review_id: &str) -> Option<&Review> {
        self.reviews
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|review| review.id.as_deref() == Some(review_id))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recruitment {
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Job {
    #[serde(default)]
    pub technical_skills: Vec<String>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
    #[serde(default)]
    pub personal_traits: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_requirement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_target: Option<StudentTarget>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentTarget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    /// Comma-separated, e.g. "Khoa học máy tính, Kỹ thuật phần mềm".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub majors: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StudentTarget {
    pub fn major_list(&self) -> Vec<&str> {
        self.majors
            .as_deref()
            .map(crate::utils::split_list)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Review {
    #[serde(
        default,
        deserialize_with = "optional_id_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replies: Option<Vec<Reply>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Reply {
    #[serde(
        default,
        deserialize_with = "optional_id_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
