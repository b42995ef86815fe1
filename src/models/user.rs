// src/models/user.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::id_string;

/// A student profile. Forum authors are resolved against the same collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub majors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    /// Free text such as "Tiếng Anh B2".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_level: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
