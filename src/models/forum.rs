// src/models/forum.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{id_string, optional_id_string};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Upvote,
    Downvote,
}

impl VoteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteType::Upvote => "upvote",
            VoteType::Downvote => "downvote",
        }
    }
}

impl FromStr for VoteType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upvote" => Ok(VoteType::Upvote),
            "downvote" => Ok(VoteType::Downvote),
            other => Err(format!("Unknown vote type: {}", other)),
        }
    }
}

impl fmt::Display for VoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(
        default,
        rename = "userId",
        deserialize_with = "optional_id_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub upvotes: i64,
    #[serde(default)]
    pub downvotes: i64,
    #[serde(
        default,
        rename = "createdAt",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostComment {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(rename = "postId", deserialize_with = "id_string")]
    pub post_id: String,
    #[serde(
        default,
        rename = "userId",
        deserialize_with = "optional_id_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_id: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(
        default,
        rename = "createdAt",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vote {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(rename = "postId", deserialize_with = "id_string")]
    pub post_id: String,
    #[serde(rename = "userId", deserialize_with = "id_string")]
    pub user_id: String,
    #[serde(rename = "type")]
    pub vote_type: VoteType,
    #[serde(
        default,
        rename = "createdAt",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
}
