// src/models/mod.rs
//! Typed records for every collection of the JSON document store.

pub mod company;
pub mod forum;
pub mod user;

pub use company::{Company, Job, Recruitment, Reply, Review, StudentTarget};
pub use forum::{Post, PostComment, Vote, VoteType};
pub use user::User;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// The whole persisted document. Unknown top-level collections are kept as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Database {
    #[serde(default)]
    pub companies: Vec<Company>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default, rename = "postComments")]
    pub post_comments: Vec<PostComment>,
    #[serde(default)]
    pub votes: Vec<Vote>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn id_from_value<E: serde::de::Error>(value: Value) -> Result<Option<String>, E> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(E::custom(format!(
            "expected a string or numeric id, found {}",
            other
        ))),
    }
}

/// Ids in hand-edited documents are sometimes numbers; they are compared as strings.
pub(crate) fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    id_from_value(Value::deserialize(deserializer)?)?
        .ok_or_else(|| D::Error::custom("id must not be null"))
}

pub(crate) fn optional_id_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    id_from_value(Value::deserialize(deserializer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_ids_are_read_as_strings() {
        let doc: Database = serde_json::from_value(json!({
            "posts": [{ "id": 7, "userId": 1, "title": "t", "content": "c" }],
            "postComments": [{ "id": "c1", "postId": 7, "userId": "2", "content": "hi" }],
            "votes": [{ "id": 3, "postId": "7", "userId": "2", "type": "upvote" }]
        }))
        .unwrap();

        assert_eq!(doc.posts[0].id, "7");
        assert_eq!(doc.posts[0].user_id.as_deref(), Some("1"));
        assert_eq!(doc.post_comments[0].post_id, "7");
        assert_eq!(doc.votes[0].id, "3");
        assert!(doc.companies.is_empty());
    }

    #[test]
    fn test_unknown_fields_survive_a_rewrite() {
        let raw = json!({
            "companies": [{
                "id": "1",
                "name": "Acme",
                "logo": "acme.png",
                "recruitment": { "jobs": [], "deadline": "2025-01-01" }
            }],
            "settings": { "theme": "dark" }
        });

        let doc: Database = serde_json::from_value(raw).unwrap();
        let written = serde_json::to_value(&doc).unwrap();

        assert_eq!(written["companies"][0]["logo"], "acme.png");
        assert_eq!(written["companies"][0]["recruitment"]["deadline"], "2025-01-01");
        assert_eq!(written["settings"]["theme"], "dark");
    }

    #[test]
    fn test_object_id_is_rejected() {
        let result: Result<Database, _> =
            serde_json::from_value(json!({ "users": [{ "id": { "nested": 1 } }] }));
        assert!(result.is_err());
    }
}
