// src/web/types.rs - request and response bodies for every route

use rocket::form::FromForm;
use rocket::serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::{optional_id_string, Reply, Review};
use crate::presentation::VoteTally;

// ===== Requests =====

#[derive(Debug, Default, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct NewReviewRequest {
    #[serde(default, deserialize_with = "optional_id_string")]
    pub id: Option<String>,
    pub user: Option<String>,
    pub content: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewReviewRequest {
    /// Build the stored review; a missing id is generated so the review can be voted on and replied to
    pub fn into_review(self, content: String) -> Review {
        Review {
            id: Some(self.id.unwrap_or_else(crate::utils::new_id)),
            user: self.user,
            content,
            replies: None,
            extra: self.extra,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct NewReplyRequest {
    #[serde(default, deserialize_with = "optional_id_string")]
    pub id: Option<String>,
    pub user: Option<String>,
    pub content: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewReplyRequest {
    pub fn into_reply(self, content: String) -> Reply {
        Reply {
            id: Some(self.id.unwrap_or_else(crate::utils::new_id)),
            user: self.user,
            content,
            extra: self.extra,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct ReviewVoteRequest {
    #[serde(rename = "voteType")]
    pub vote_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct NewPostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct NewCommentRequest {
    #[serde(default, rename = "postId", deserialize_with = "optional_id_string")]
    pub post_id: Option<String>,
    #[serde(default, rename = "userId", deserialize_with = "optional_id_string")]
    pub user_id: Option<String>,
    pub content: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct NewVoteRequest {
    #[serde(default, rename = "postId", deserialize_with = "optional_id_string")]
    pub post_id: Option<String>,
    #[serde(default, rename = "userId", deserialize_with = "optional_id_string")]
    pub user_id: Option<String>,
    #[serde(rename = "type")]
    pub vote_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct UpdateVoteRequest {
    #[serde(rename = "type")]
    pub vote_type: Option<String>,
}

#[derive(Debug, FromForm)]
pub struct VoteQuery {
    #[field(name = "postId")]
    pub post_id: Option<String>,
    #[field(name = "userId")]
    pub user_id: Option<String>,
}

#[derive(Debug, FromForm)]
pub struct CommentQuery {
    #[field(name = "postId")]
    pub post_id: Option<String>,
}

// ===== Responses =====

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct DataResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ReviewListResponse {
    pub success: bool,
    pub message: String,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct VoteAckResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "reviewId")]
    pub review_id: String,
}

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct CompanyReviewsResponse {
    pub success: bool,
    pub count: usize,
    #[serde(rename = "avgRating")]
    pub avg_rating: f64,
    #[serde(rename = "ratingCount")]
    pub rating_count: u64,
    pub data: Vec<ReviewView>,
}

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ReviewVotes {
    pub upvotes: u32,
    pub downvotes: u32,
    pub total: i64,
}

impl From<VoteTally> for ReviewVotes {
    fn from(tally: VoteTally) -> Self {
        Self {
            upvotes: tally.upvotes,
            downvotes: tally.downvotes,
            total: tally.total(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ReviewView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    pub content: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    pub avatar: String,
    pub company: String,
    pub votes: ReviewVotes,
    #[serde(rename = "isCompanyMember")]
    pub is_company_member: bool,
    pub replies: Vec<ReplyView>,
}

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ReplyView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    pub content: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    pub avatar: String,
    pub location: String,
    pub votes: VoteTally,
}

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct PostView {
    pub id: String,
    pub author: String,
    pub avatar: String,
    pub time: String,
    pub content: Option<String>,
    pub title: Option<String>,
    pub tags: Vec<String>,
    #[serde(rename = "voteCount")]
    pub vote_count: i64,
    #[serde(rename = "commentCount")]
    pub comment_count: usize,
}

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct CommentView {
    pub id: String,
    pub author: String,
    pub avatar: String,
    pub time: String,
    pub content: String,
}
