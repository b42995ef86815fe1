// src/store/json_store.rs
use anyhow::{Context, Result};
use rocket::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::{
    CompanyEdit, CompanyReader, CompanyWriter, ForumReader, ForumWriter, UserReader, VoteFilter,
};
use crate::models::{Company, Database, Post, PostComment, User, Vote, VoteType};

/// Document store kept in memory and rewritten to a single JSON file on every write.
///
/// Writes hold the write lock until the file is flushed, so at most one writer
/// touches the file at a time.
pub struct JsonStore {
    path: Option<PathBuf>,
    document: RwLock<Database>,
}

impl JsonStore {
    /// Load the document at `path`, creating an empty one if the file does not exist
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let document = if tokio::fs::try_exists(&path)
            .await
            .with_context(|| format!("Failed to access document store: {}", path.display()))?
        {
            let raw = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("Failed to read document store: {}", path.display()))?;
            serde_json::from_str::<Database>(&raw)
                .with_context(|| format!("Failed to parse document store: {}", path.display()))?
        } else {
            info!("Creating empty document store at {}", path.display());
            let document = Database::default();
            write_document(&path, &document).await?;
            document
        };

        info!(
            "Document store loaded from {}: {} companies, {} users, {} posts, {} comments, {} votes",
            path.display(),
            document.companies.len(),
            document.users.len(),
            document.posts.len(),
            document.post_comments.len(),
            document.votes.len()
        );

        Ok(Self {
            path: Some(path),
            document: RwLock::new(document),
        })
    }

    /// Store without a backing file; writes only change memory
    pub fn in_memory(document: Database) -> Self {
        Self {
            path: None,
            document: RwLock::new(document),
        }
    }

    async fn persist(&self, document: &Database) -> Result<()> {
        match &self.path {
            Some(path) => write_document(path, document).await,
            None => Ok(()),
        }
    }
}

async fn write_document(path: &Path, document: &Database) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(document).context("Failed to serialize document")?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write document store: {}", path.display()))?;

    debug!("Document store written to {}", path.display());
    Ok(())
}

#[async_trait]
impl CompanyReader for JsonStore {
    async fn get_company(&self, id: &str) -> Result<Option<Company>> {
        let document = self.document.read().await;
        Ok(document.companies.iter().find(|c| c.id == id).cloned())
    }

    async fn list_companies(&self) -> Result<Vec<Company>> {
        Ok(self.document.read().await.companies.clone())
    }
}

#[async_trait]
impl CompanyWriter for JsonStore {
    async fn update_company(&self, id: &str, edit: CompanyEdit) -> Result<Option<Company>> {
        let mut document = self.document.write().await;
        let Some(company) = document.companies.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };

        edit(&mut *company);
        let updated = company.clone();

        self.persist(&document).await?;
        Ok(Some(updated))
    }
}

#[async_trait]
impl UserReader for JsonStore {
    async fn get_user(&self, id: &str) -> Result<Option<User>> {
        let document = self.document.read().await;
        Ok(document.users.iter().find(|u| u.id == id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.document.read().await.users.clone())
    }
}

#[async_trait]
impl ForumReader for JsonStore {
    async fn list_posts(&self) -> Result<Vec<Post>> {
        Ok(self.document.read().await.posts.clone())
    }

    async fn get_post(&self, id: &str) -> Result<Option<Post>> {
        let document = self.document.read().await;
        Ok(document.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn list_comments(&self, post_id: Option<&str>) -> Result<Vec<PostComment>> {
        let document = self.document.read().await;
        Ok(document
            .post_comments
            .iter()
            .filter(|c| post_id.map_or(true, |id| c.post_id == id))
            .cloned()
            .collect())
    }

    async fn get_comment(&self, id: &str) -> Result<Option<PostComment>> {
        let document = self.document.read().await;
        Ok(document.post_comments.iter().find(|c| c.id == id).cloned())
    }

    async fn list_votes(&self, filter: &VoteFilter) -> Result<Vec<Vote>> {
        let document = self.document.read().await;
        Ok(document
            .votes
            .iter()
            .filter(|v| filter.matches(v))
            .cloned()
            .collect())
    }

    async fn get_vote(&self, id: &str) -> Result<Option<Vote>> {
        let document = self.document.read().await;
        Ok(document.votes.iter().find(|v| v.id == id).cloned())
    }
}

#[async_trait]
impl ForumWriter for JsonStore {
    async fn append_post(&self, post: Post) -> Result<Post> {
        let mut document = self.document.write().await;
        document.posts.push(post.clone());
        self.persist(&document).await?;
        Ok(post)
    }

    async fn append_comment(&self, comment: PostComment) -> Result<PostComment> {
        let mut document = self.document.write().await;
        document.post_comments.push(comment.clone());
        self.persist(&document).await?;
        Ok(comment)
    }

    async fn append_vote(&self, vote: Vote) -> Result<Vote> {
        let mut document = self.document.write().await;
        document.votes.push(vote.clone());
        self.persist(&document).await?;
        Ok(vote)
    }

    async fn update_vote(&self, id: &str, vote_type: VoteType) -> Result<Option<Vote>> {
        let mut document = self.document.write().await;
        let Some(vote) = document.votes.iter_mut().find(|v| v.id == id) else {
            return Ok(None);
        };

        vote.vote_type = vote_type;
        let updated = vote.clone();

        self.persist(&document).await?;
        Ok(Some(updated))
    }

    async fn delete_post(&self, id: &str) -> Result<Option<Post>> {
        let mut document = self.document.write().await;
        let Some(index) = document.posts.iter().position(|p| p.id == id) else {
            return Ok(None);
        };

        let removed = document.posts.remove(index);
        document.post_comments.retain(|c| c.post_id != removed.id);
        document.votes.retain(|v| v.post_id != removed.id);

        self.persist(&document).await?;
        Ok(Some(removed))
    }

    async fn delete_comment(&self, id: &str) -> Result<Option<PostComment>> {
        let mut document = self.document.write().await;
        let Some(index) = document.post_comments.iter().position(|c| c.id == id) else {
            return Ok(None);
        };

        let removed = document.post_comments.remove(index);
        self.persist(&document).await?;
        Ok(Some(removed))
    }

    async fn delete_vote(&self, id: &str) -> Result<Option<Vote>> {
        let mut document = self.document.write().await;
        let Some(index) = document.votes.iter().position(|v| v.id == id) else {
            return Ok(None);
        };

        let removed = document.votes.remove(index);
        self.persist(&document).await?;
        Ok(Some(removed))
    }
}
