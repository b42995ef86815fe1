// src/web/handlers/forum_handlers.rs
use std::collections::HashMap;

use crate::error::{AppError, AppResult};
use crate::messages;
use crate::models::{Post, PostComment, User, Vote, VoteType};
use crate::presentation::{format_vietnamese_time, SharedPresenter};
use crate::store::{SharedStore, VoteFilter};
use crate::utils::{is_blank, new_id, now_iso};
use crate::web::types::{
    CommentQuery, CommentView, DataResponse, NewCommentRequest, NewPostRequest,
    NewVoteRequest, PostView, UpdateVoteRequest, VoteQuery,
};

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{info, warn};

/// Posts created from the forum page are attributed to this demo account
const FORUM_DEMO_USER_ID: &str = "1";

fn author_names(users: Vec<User>) -> HashMap<String, String> {
    users
        .into_iter()
        .filter_map(|user| user.name.map(|name| (user.id, name)))
        .collect()
}

fn author_of(names: &HashMap<String, String>, user_id: Option<&str>) -> String {
    user_id
        .and_then(|id| names.get(id))
        .cloned()
        .unwrap_or_else(|| messages::UNKNOWN_AUTHOR.to_string())
}

fn parse_vote_type(raw: Option<&str>, missing: &str) -> AppResult<VoteType> {
    let raw = raw
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::validation(missing))?;
    raw.parse::<VoteType>()
        .map_err(|_| AppError::validation(messages::INVALID_VOTE_TYPE))
}

fn found<T>(record: Option<T>, id: &str, message: &str) -> AppResult<Json<T>> {
    record.map(Json).ok_or_else(|| {
        warn!("Forum record not found: {}", id);
        AppError::not_found(message)
    })
}

pub async fn list_posts_handler(
    store: &State<SharedStore>,
    presenter: &State<SharedPresenter>,
) -> AppResult<Json<Vec<PostView>>> {
    let posts = store.list_posts().await?;
    let names = author_names(store.list_users().await?);
    let comments = store.list_comments(None).await?;
    let votes = store.list_votes(&VoteFilter::default()).await?;

    let views = posts
        .into_iter()
        .map(|post| {
            let comment_count = comments.iter().filter(|c| c.post_id == post.id).count();
            let vote_count: i64 = votes
                .iter()
                .filter(|v| v.post_id == post.id)
                .map(|v| match v.vote_type {
                    VoteType::Upvote => 1,
                    VoteType::Downvote => -1,
                })
                .sum();
            let author = author_of(&names, post.user_id.as_deref());

            PostView {
                avatar: presenter.avatar(Some(author.as_str())),
                time: format_vietnamese_time(post.created_at.as_deref()),
                id: post.id,
                author,
                content: post.content,
                title: post.title,
                tags: post.tags,
                vote_count,
                comment_count,
            }
        })
        .collect();

    Ok(Json(views))
}

pub async fn create_post_handler(
    request: NewPostRequest,
    store: &State<SharedStore>,
) -> AppResult<(Status, Json<Post>)> {
    let post = Post {
        id: new_id(),
        user_id: Some(FORUM_DEMO_USER_ID.to_string()),
        title: request.title,
        content: request.content,
        tags: request.tags.unwrap_or_default(),
        upvotes: 0,
        downvotes: 0,
        created_at: Some(now_iso()),
    };

    let post = store.append_post(post).await?;
    info!("Post {} created", post.id);

    Ok((Status::Created, Json(post)))
}

pub async fn list_comments_handler(
    query: CommentQuery,
    store: &State<SharedStore>,
    presenter: &State<SharedPresenter>,
) -> AppResult<Json<Vec<CommentView>>> {
    let post_id = query
        .post_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::validation(messages::MISSING_POST_ID))?;

    let comments = store.list_comments(Some(post_id.as_str())).await?;
    let names = author_names(store.list_users().await?);

    let views = comments
        .into_iter()
        .map(|comment| {
            let author = author_of(&names, comment.user_id.as_deref());
            CommentView {
                avatar: presenter.avatar(Some(author.as_str())),
                time: format_vietnamese_time(comment.created_at.as_deref()),
                id: comment.id,
                author,
                content: comment.content,
            }
        })
        .collect();

    Ok(Json(views))
}

/// Validate and build a comment. `created_at` from the client is kept when given.
fn build_comment(request: NewCommentRequest) -> AppResult<PostComment> {
    let (Some(post_id), Some(user_id), Some(content)) =
        (request.post_id, request.user_id, request.content)
    else {
        return Err(AppError::validation(messages::MISSING_COMMENT));
    };
    if post_id.is_empty() || user_id.is_empty() || is_blank(Some(content.as_str())) {
        return Err(AppError::validation(messages::MISSING_COMMENT));
    }

    Ok(PostComment {
        id: new_id(),
        post_id,
        user_id: Some(user_id),
        content,
        created_at: Some(request.created_at.unwrap_or_else(now_iso)),
    })
}

fn build_vote(request: NewVoteRequest) -> AppResult<Vote> {
    let (Some(post_id), Some(user_id)) = (request.post_id, request.user_id) else {
        return Err(AppError::validation(messages::MISSING_VOTE));
    };
    if post_id.is_empty() || user_id.is_empty() {
        return Err(AppError::validation(messages::MISSING_VOTE));
    }
    let vote_type = parse_vote_type(request.vote_type.as_deref(), messages::MISSING_VOTE)?;

    Ok(Vote {
        id: new_id(),
        post_id,
        user_id,
        vote_type,
        created_at: Some(now_iso()),
    })
}

/// Forum page variant: answers with the bare comment, always stamped server-side
pub async fn create_forum_comment_handler(
    request: NewCommentRequest,
    store: &State<SharedStore>,
) -> AppResult<(Status, Json<PostComment>)> {
    let comment = build_comment(NewCommentRequest {
        created_at: None,
        ..request
    })?;
    let comment = store.append_comment(comment).await?;
    info!("Comment {} added to post {}", comment.id, comment.post_id);
    Ok((Status::Created, Json(comment)))
}

/// Legacy variant: answers with the `{success, message, data}` envelope
pub async fn create_post_comment_handler(
    request: NewCommentRequest,
    store: &State<SharedStore>,
) -> AppResult<(Status, Json<DataResponse<PostComment>>)> {
    let comment = build_comment(request)?;
    let comment = store.append_comment(comment).await?;
    info!("Comment {} added to post {}", comment.id, comment.post_id);
    Ok((
        Status::Created,
        Json(DataResponse::success(comment).with_message(messages::COMMENT_CREATED)),
    ))
}

pub async fn create_forum_vote_handler(
    request: NewVoteRequest,
    store: &State<SharedStore>,
) -> AppResult<(Status, Json<Vote>)> {
    let vote = build_vote(request)?;
    let vote = store.append_vote(vote).await?;
    info!("{} {} recorded on post {}", vote.vote_type, vote.id, vote.post_id);
    Ok((Status::Created, Json(vote)))
}

pub async fn list_votes_handler(
    query: VoteQuery,
    store: &State<SharedStore>,
) -> AppResult<Json<Vec<Vote>>> {
    let filter = VoteFilter {
        post_id: query.post_id.filter(|id| !id.is_empty()),
        user_id: query.user_id.filter(|id| !id.is_empty()),
    };
    Ok(Json(store.list_votes(&filter).await?))
}

pub async fn create_vote_handler(
    request: NewVoteRequest,
    store: &State<SharedStore>,
) -> AppResult<(Status, Json<DataResponse<Vote>>)> {
    let vote = build_vote(request)?;
    let vote = store.append_vote(vote).await?;
    info!("{} {} recorded on post {}", vote.vote_type, vote.id, vote.post_id);
    Ok((
        Status::Created,
        Json(DataResponse::success(vote).with_message(messages::VOTE_CREATED)),
    ))
}

pub async fn update_vote_handler(
    id: &str,
    request: UpdateVoteRequest,
    store: &State<SharedStore>,
) -> AppResult<Json<DataResponse<Vote>>> {
    let vote_type = parse_vote_type(request.vote_type.as_deref(), messages::MISSING_VOTE_TYPE)?;

    let Some(vote) = store.update_vote(id, vote_type).await? else {
        warn!("Vote not found: {}", id);
        return Err(AppError::not_found(messages::VOTE_NOT_FOUND));
    };

    info!("Vote {} changed to {}", vote.id, vote.vote_type);
    Ok(Json(
        DataResponse::success(vote).with_message(messages::VOTE_UPDATED),
    ))
}

// Plain collection access on the raw documents

pub async fn list_raw_posts_handler(store: &State<SharedStore>) -> AppResult<Json<Vec<Post>>> {
    Ok(Json(store.list_posts().await?))
}

pub async fn get_post_handler(id: &str, store: &State<SharedStore>) -> AppResult<Json<Post>> {
    found(store.get_post(id).await?, id, messages::POST_NOT_FOUND)
}

pub async fn delete_post_handler(
    id: &str,
    store: &State<SharedStore>,
) -> AppResult<Json<DataResponse<Post>>> {
    let post = found(store.delete_post(id).await?, id, messages::POST_NOT_FOUND)?.into_inner();
    info!("Post {} deleted with its comments and votes", id);
    Ok(Json(DataResponse::success(post)))
}

pub async fn list_raw_comments_handler(
    query: CommentQuery,
    store: &State<SharedStore>,
) -> AppResult<Json<Vec<PostComment>>> {
    let post_id = query.post_id.filter(|id| !id.is_empty());
    Ok(Json(store.list_comments(post_id.as_deref()).await?))
}

pub async fn get_comment_handler(
    id: &str,
    store: &State<SharedStore>,
) -> AppResult<Json<PostComment>> {
    found(store.get_comment(id).await?, id, messages::COMMENT_NOT_FOUND)
}

pub async fn delete_comment_handler(
    id: &str,
    store: &State<SharedStore>,
) -> AppResult<Json<DataResponse<PostComment>>> {
    let comment =
        found(store.delete_comment(id).await?, id, messages::COMMENT_NOT_FOUND)?.into_inner();
    info!("Comment {} deleted", id);
    Ok(Json(DataResponse::success(comment)))
}

pub async fn get_vote_handler(id: &str, store: &State<SharedStore>) -> AppResult<Json<Vote>> {
    found(store.get_vote(id).await?, id, messages::VOTE_NOT_FOUND)
}

pub async fn delete_vote_handler(
    id: &str,
    store: &State<SharedStore>,
) -> AppResult<Json<DataResponse<Vote>>> {
    let vote = found(store.delete_vote(id).await?, id, messages::VOTE_NOT_FOUND)?.into_inner();
    info!("Vote {} deleted", id);
    Ok(Json(DataResponse::success(vote)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment_request(post_id: Option<&str>, user_id: Option<&str>, content: Option<&str>) -> NewCommentRequest {
        NewCommentRequest {
            post_id: post_id.map(str::to_string),
            user_id: user_id.map(str::to_string),
            content: content.map(str::to_string),
            created_at: None,
        }
    }

    #[test]
    fn test_build_comment_requires_fields() {
        for request in [
            comment_request(None, Some("1"), Some("hi")),
            comment_request(Some("p1"), None, Some("hi")),
            comment_request(Some("p1"), Some("1"), None),
            comment_request(Some("p1"), Some("1"), Some("  ")),
        ] {
            let err = build_comment(request).unwrap_err();
            assert_eq!(err.public_message(), messages::MISSING_COMMENT);
        }
    }

    #[test]
    fn test_build_comment_keeps_client_timestamp() {
        let mut request = comment_request(Some("p1"), Some("1"), Some("hi"));
        request.created_at = Some("2025-01-01T00:00:00.000Z".to_string());

        let comment = build_comment(request).unwrap();

        assert_eq!(comment.created_at.as_deref(), Some("2025-01-01T00:00:00.000Z"));
        assert_eq!(comment.post_id, "p1");
        assert!(!comment.id.is_empty());
    }

    #[test]
    fn test_parse_vote_type() {
        assert_eq!(
            parse_vote_type(Some("upvote"), messages::MISSING_VOTE).unwrap(),
            VoteType::Upvote
        );
        assert_eq!(
            parse_vote_type(None, messages::MISSING_VOTE_TYPE)
                .unwrap_err()
                .public_message(),
            messages::MISSING_VOTE_TYPE
        );
        assert_eq!(
            parse_vote_type(Some("sideways"), messages::MISSING_VOTE)
                .unwrap_err()
                .public_message(),
            messages::INVALID_VOTE_TYPE
        );
    }

    #[test]
    fn test_author_lookup() {
        let users = vec![
            User {
                id: "1".to_string(),
                name: Some("Lan".to_string()),
                ..Default::default()
            },
            User {
                id: "2".to_string(),
                ..Default::default()
            },
        ];
        let names = author_names(users);

        assert_eq!(author_of(&names, Some("1")), "Lan");
        assert_eq!(author_of(&names, Some("2")), "Unknown User");
        assert_eq!(author_of(&names, None), "Unknown User");
    }
}
