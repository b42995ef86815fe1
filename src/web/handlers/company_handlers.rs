// src/web/handlers/company_handlers.rs
use crate::error::{AppError, AppResult};
use crate::messages;
use crate::models::{Company, Review, VoteType};
use crate::presentation::{Presenter, SharedPresenter, VoteTally};
use crate::skills::SkillCatalog;
use crate::store::SharedStore;
use crate::utils::is_blank;
use crate::web::types::{
    CompanyReviewsResponse, NewReplyRequest, NewReviewRequest, ReplyView, ReviewListResponse,
    ReviewView, ReviewVoteRequest, VoteAckResponse,
};

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{info, warn};

const HANOI_MEMBER: &str = "Hoàng Phong";
const HANOI: &str = "Hà Nội";

async fn require_company(store: &SharedStore, id: &str) -> AppResult<Company> {
    match store.get_company(id).await? {
        Some(company) => Ok(company),
        None => {
            warn!("Company not found: {}", id);
            Err(AppError::not_found(messages::COMPANY_NOT_FOUND))
        }
    }
}

fn require_review<'c>(company: &'c Company, review_id: &str) -> AppResult<&'c Review> {
    company.find_review(review_id).ok_or_else(|| {
        warn!("Review {} not found for company {}", review_id, company.id);
        AppError::not_found(messages::REVIEW_NOT_FOUND)
    })
}

pub async fn list_companies_handler(store: &State<SharedStore>) -> AppResult<Json<Vec<Company>>> {
    Ok(Json(store.list_companies().await?))
}

pub async fn get_company_handler(id: &str, store: &State<SharedStore>) -> AppResult<Json<Company>> {
    Ok(Json(require_company(store, id).await?))
}

pub async fn get_company_reviews_handler(
    id: &str,
    store: &State<SharedStore>,
    presenter: &State<SharedPresenter>,
) -> AppResult<Json<CompanyReviewsResponse>> {
    let company = require_company(store, id).await?;
    let presenter: &dyn Presenter = presenter.inner().as_ref();

    let data: Vec<ReviewView> = company
        .reviews
        .clone()
        .unwrap_or_default()
        .into_iter()
        .map(|review| decorate_review(review, &company.name, presenter))
        .collect();

    Ok(Json(CompanyReviewsResponse {
        success: true,
        count: data.len(),
        avg_rating: company.rating.unwrap_or(0.0),
        rating_count: company.rating_count.unwrap_or(0),
        data,
    }))
}

fn decorate_review(review: Review, company_name: &str, presenter: &dyn Presenter) -> ReviewView {
    let replies = review
        .replies
        .unwrap_or_default()
        .into_iter()
        .map(|reply| ReplyView {
            avatar: presenter.avatar(reply.user.as_deref()),
            location: if reply.user.as_deref() == Some(HANOI_MEMBER) {
                HANOI.to_string()
            } else {
                String::new()
            },
            votes: VoteTally {
                upvotes: presenter.reply_upvotes(),
                downvotes: 0,
            },
            id: reply.id,
            user: reply.user,
            content: reply.content,
            extra: reply.extra,
        })
        .collect();

    ReviewView {
        avatar: presenter.avatar(review.user.as_deref()),
        company: company_name.to_string(),
        votes: presenter.review_votes().into(),
        is_company_member: review.user.as_deref() == Some(messages::COMPANY_REPRESENTATIVE),
        replies,
        id: review.id,
        user: review.user,
        content: review.content,
        extra: review.extra,
    }
}

pub async fn add_review_handler(
    id: &str,
    request: NewReviewRequest,
    store: &State<SharedStore>,
) -> AppResult<(Status, Json<ReviewListResponse>)> {
    let content = match request.content.as_deref() {
        Some(content) if !is_blank(Some(content)) => content.to_string(),
        _ => return Err(AppError::validation(messages::MISSING_REVIEW)),
    };

    let review = request.into_review(content);
    let review_id = review.id.clone().unwrap_or_default();

    let edit = Box::new(move |company: &mut Company| {
        company.reviews.get_or_insert_with(Vec::new).push(review);
    });
    let Some(company) = store.update_company(id, edit).await? else {
        warn!("Review posted for unknown company: {}", id);
        return Err(AppError::not_found(messages::COMPANY_NOT_FOUND));
    };

    info!("Review {} added to company {}", review_id, id);

    Ok((
        Status::Created,
        Json(ReviewListResponse {
            success: true,
            message: messages::REVIEW_ADDED.to_string(),
            reviews: company.reviews.unwrap_or_default(),
        }),
    ))
}

/// Votes on reviews are acknowledged but not stored
pub async fn vote_review_handler(
    id: &str,
    review_id: &str,
    request: ReviewVoteRequest,
    store: &State<SharedStore>,
) -> AppResult<Json<VoteAckResponse>> {
    let vote_type = request
        .vote_type
        .as_deref()
        .and_then(|raw| raw.parse::<VoteType>().ok())
        .ok_or_else(|| AppError::validation(messages::INVALID_VOTE_TYPE))?;

    let company = require_company(store, id).await?;
    require_review(&company, review_id)?;

    info!("{} on review {} of company {}", vote_type, review_id, id);

    let message = match vote_type {
        VoteType::Upvote => messages::UPVOTE_ACCEPTED,
        VoteType::Downvote => messages::DOWNVOTE_ACCEPTED,
    };

    Ok(Json(VoteAckResponse {
        success: true,
        message: message.to_string(),
        review_id: review_id.to_string(),
    }))
}

pub async fn add_reply_handler(
    id: &str,
    review_id: &str,
    request: NewReplyRequest,
    store: &State<SharedStore>,
) -> AppResult<(Status, Json<ReviewListResponse>)> {
    let content = match request.content.as_deref() {
        Some(content) if !is_blank(Some(content)) => content.to_string(),
        _ => return Err(AppError::validation(messages::MISSING_REPLY)),
    };

    let company = require_company(store, id).await?;
    require_review(&company, review_id)?;

    let reply = request.into_reply(content);
    let target = review_id.to_string();
    let edit = Box::new(move |company: &mut Company| {
        if let Some(review) = company
            .reviews
            .iter_mut()
            .flatten()
            .find(|review| review.id.as_deref() == Some(target.as_str()))
        {
            review.replies.get_or_insert_with(Vec::new).push(reply);
        }
    });

    let Some(company) = store.update_company(id, edit).await? else {
        return Err(AppError::not_found(messages::COMPANY_NOT_FOUND));
    };

    info!("Reply added to review {} of company {}", review_id, id);

    Ok((
        Status::Created,
        Json(ReviewListResponse {
            success: true,
            message: messages::REPLY_ADDED.to_string(),
            reviews: company.reviews.unwrap_or_default(),
        }),
    ))
}

pub async fn distinct_skills_handler(store: &State<SharedStore>) -> AppResult<Json<SkillCatalog>> {
    let companies = store.list_companies().await?;
    Ok(Json(SkillCatalog::from_companies(&companies)))
}
