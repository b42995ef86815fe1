// src/store/mod.rs
//! Repository seams over the document store.
//!
//! Handlers and the match scorer only see these traits; `JsonStore` is the
//! file-backed implementation used by the server.

pub mod json_store;

pub use json_store::JsonStore;

use anyhow::Result;
use rocket::async_trait;
use std::sync::Arc;

use crate::models::{Company, Post, PostComment, User, Vote, VoteType};

/// In-place edit applied to a single company while the store holds its write lock
pub type CompanyEdit = Box<dyn FnOnce(&mut Company) + Send>;

/// Optional filters for listing votes
#[derive(Debug, Clone, Default)]
pub struct VoteFilter {
    pub post_id: Option<String>,
    pub user_id: Option<String>,
}

impl VoteFilter {
    pub fn matches(&self, vote: &Vote) -> bool {
        self.post_id.as_deref().map_or(true, |id| vote.post_id == id)
            && self.user_id.as_deref().map_or(true, |id| vote.user_id == id)
    }
}

#[async_trait]
pub trait CompanyReader {
    async fn get_company(&self, id: &str) -> Result<Option<Company>>;
    async fn list_companies(&self) -> Result<Vec<Company>>;
}

#[async_trait]
pub trait CompanyWriter {
    /// Apply `edit` and persist. Returns the updated company, or `None` if `id` is unknown.
    async fn update_company(&self, id: &str, edit: CompanyEdit) -> Result<Option<Company>>;
}

#[async_trait]
pub trait UserReader {
    async fn get_user(&self, id: &str) -> Result<Option<User>>;
    async fn list_users(&self) -> Result<Vec<User>>;
}

#[async_trait]
pub trait ForumReader {
    async fn list_posts(&self) -> Result<Vec<Post>>;
    async fn get_post(&self, id: &str) -> Result<Option<Post>>;
    /// All comments, or only those of `post_id` when given
    async fn list_comments(&self, post_id: Option<&str>) -> Result<Vec<PostComment>>;
    async fn get_comment(&self, id: &str) -> Result<Option<PostComment>>;
    async fn list_votes(&self, filter: &VoteFilter) -> Result<Vec<Vote>>;
    async fn get_vote(&self, id: &str) -> Result<Option<Vote>>;
}

#[async_trait]
pub trait ForumWriter {
    async fn append_post(&self, post: Post) -> Result<Post>;
    async fn append_comment(&self, comment: PostComment) -> Result<PostComment>;
    async fn append_vote(&self, vote: Vote) -> Result<Vote>;
    async fn update_vote(&self, id: &str, vote_type: VoteType) -> Result<Option<Vote>>;
    /// Remove a post together with the comments and votes that reference it
    async fn delete_post(&self, id: &str) -> Result<Option<Post>>;
    async fn delete_comment(&self, id: &str) -> Result<Option<PostComment>>;
    async fn delete_vote(&self, id: &str) -> Result<Option<Vote>>;
}

/// Full capability set injected into the web layer
pub trait Repository:
    CompanyReader + CompanyWriter + UserReader + ForumReader + ForumWriter + Send + Sync
{
}

impl<T> Repository for T where
    T: CompanyReader + CompanyWriter + UserReader + ForumReader + ForumWriter + Send + Sync
{
}

pub type SharedStore = Arc<dyn Repository>;
