// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use handlers::*;
pub use types::*;

use crate::config::AppConfig;
use crate::error::{AppResult, ErrorBody};
use crate::matching::MatchResult;
use crate::messages;
use crate::models::{Company, Post, PostComment, User, Vote};
use crate::presentation::{self, SharedPresenter};
use crate::skills::SkillCatalog;
use crate::store::{JsonStore, SharedStore};
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{
    catchers, delete, get, options, patch, post, routes, Build, Request, Response, Rocket, Route,
    State,
};
use std::sync::Arc;
use tracing::info;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "GET, POST, PUT, DELETE, PATCH, OPTIONS",
        ));
        response.set_header(Header::new(
            "Access-Control-Allow-Headers",
            "Origin, X-Requested-With, Content-Type, Accept",
        ));
    }
}

/// A missing or unreadable JSON body counts as `{}`, so the handler's own
/// validation decides the message.
fn body_or_default<T: Default>(request: Option<Json<T>>) -> T {
    request.map(Json::into_inner).unwrap_or_default()
}

// Companies and reviews

#[get("/companies")]
pub async fn list_companies(store: &State<SharedStore>) -> AppResult<Json<Vec<Company>>> {
    handlers::list_companies_handler(store).await
}

#[get("/companies/<id>")]
pub async fn get_company(id: &str, store: &State<SharedStore>) -> AppResult<Json<Company>> {
    handlers::get_company_handler(id, store).await
}

#[get("/companies/<id>/reviews")]
pub async fn get_company_reviews(
    id: &str,
    store: &State<SharedStore>,
    presenter: &State<SharedPresenter>,
) -> AppResult<Json<CompanyReviewsResponse>> {
    handlers::get_company_reviews_handler(id, store, presenter).await
}

#[post("/companies/<id>/reviews", data = "<request>")]
pub async fn add_review(
    id: &str,
    request: Option<Json<NewReviewRequest>>,
    store: &State<SharedStore>,
) -> AppResult<(Status, Json<ReviewListResponse>)> {
    handlers::add_review_handler(id, body_or_default(request), store).await
}

#[post("/companies/<id>/reviews/<review_id>/vote", data = "<request>")]
pub async fn vote_review(
    id: &str,
    review_id: &str,
    request: Option<Json<ReviewVoteRequest>>,
    store: &State<SharedStore>,
) -> AppResult<Json<VoteAckResponse>> {
    handlers::vote_review_handler(id, review_id, body_or_default(request), store).await
}

#[post("/companies/<id>/reviews/<review_id>/replies", data = "<request>")]
pub async fn add_reply(
    id: &str,
    review_id: &str,
    request: Option<Json<NewReplyRequest>>,
    store: &State<SharedStore>,
) -> AppResult<(Status, Json<ReviewListResponse>)> {
    handlers::add_reply_handler(id, review_id, body_or_default(request), store).await
}

#[get("/distinct-skills")]
pub async fn distinct_skills(store: &State<SharedStore>) -> AppResult<Json<SkillCatalog>> {
    handlers::distinct_skills_handler(store).await
}

// Students and matching

#[get("/users")]
pub async fn list_users(store: &State<SharedStore>) -> AppResult<Json<Vec<User>>> {
    handlers::list_users_handler(store).await
}

#[get("/users/<id>")]
pub async fn get_user(id: &str, store: &State<SharedStore>) -> AppResult<Json<User>> {
    handlers::get_user_handler(id, store).await
}

#[get("/match-companies/<user_id>")]
pub async fn match_companies(
    user_id: &str,
    store: &State<SharedStore>,
) -> AppResult<Json<DataResponse<Vec<MatchResult>>>> {
    handlers::match_companies_handler(user_id, store).await
}

// Forum

#[get("/forum/posts")]
pub async fn list_posts(
    store: &State<SharedStore>,
    presenter: &State<SharedPresenter>,
) -> AppResult<Json<Vec<PostView>>> {
    handlers::list_posts_handler(store, presenter).await
}

#[post("/forum/posts", data = "<request>")]
pub async fn create_post(
    request: Option<Json<NewPostRequest>>,
    store: &State<SharedStore>,
) -> AppResult<(Status, Json<Post>)> {
    handlers::create_post_handler(body_or_default(request), store).await
}

#[get("/forum/comments?<query..>")]
pub async fn list_comments(
    query: CommentQuery,
    store: &State<SharedStore>,
    presenter: &State<SharedPresenter>,
) -> AppResult<Json<Vec<CommentView>>> {
    handlers::list_comments_handler(query, store, presenter).await
}

#[post("/forum/comments", data = "<request>")]
pub async fn create_forum_comment(
    request: Option<Json<NewCommentRequest>>,
    store: &State<SharedStore>,
) -> AppResult<(Status, Json<PostComment>)> {
    handlers::create_forum_comment_handler(body_or_default(request), store).await
}

#[post("/forum/postComments", data = "<request>")]
pub async fn create_forum_post_comment(
    request: Option<Json<NewCommentRequest>>,
    store: &State<SharedStore>,
) -> AppResult<(Status, Json<DataResponse<PostComment>>)> {
    handlers::create_post_comment_handler(body_or_default(request), store).await
}

#[post("/postComments", data = "<request>")]
pub async fn create_post_comment(
    request: Option<Json<NewCommentRequest>>,
    store: &State<SharedStore>,
) -> AppResult<(Status, Json<DataResponse<PostComment>>)> {
    handlers::create_post_comment_handler(body_or_default(request), store).await
}

#[post("/forum/votes", data = "<request>")]
pub async fn create_forum_vote(
    request: Option<Json<NewVoteRequest>>,
    store: &State<SharedStore>,
) -> AppResult<(Status, Json<Vote>)> {
    handlers::create_forum_vote_handler(body_or_default(request), store).await
}

#[get("/votes?<query..>")]
pub async fn list_votes(query: VoteQuery, store: &State<SharedStore>) -> AppResult<Json<Vec<Vote>>> {
    handlers::list_votes_handler(query, store).await
}

#[post("/votes", data = "<request>")]
pub async fn create_vote(
    request: Option<Json<NewVoteRequest>>,
    store: &State<SharedStore>,
) -> AppResult<(Status, Json<DataResponse<Vote>>)> {
    handlers::create_vote_handler(body_or_default(request), store).await
}

#[patch("/votes/<id>", data = "<request>")]
pub async fn update_vote(
    id: &str,
    request: Option<Json<UpdateVoteRequest>>,
    store: &State<SharedStore>,
) -> AppResult<Json<DataResponse<Vote>>> {
    handlers::update_vote_handler(id, body_or_default(request), store).await
}

// Raw collections

#[get("/posts")]
pub async fn list_raw_posts(store: &State<SharedStore>) -> AppResult<Json<Vec<Post>>> {
    handlers::list_raw_posts_handler(store).await
}

#[get("/posts/<id>")]
pub async fn get_post(id: &str, store: &State<SharedStore>) -> AppResult<Json<Post>> {
    handlers::get_post_handler(id, store).await
}

#[delete("/posts/<id>")]
pub async fn delete_post(
    id: &str,
    store: &State<SharedStore>,
) -> AppResult<Json<DataResponse<Post>>> {
    handlers::delete_post_handler(id, store).await
}

#[get("/postComments?<query..>")]
pub async fn list_raw_comments(
    query: CommentQuery,
    store: &State<SharedStore>,
) -> AppResult<Json<Vec<PostComment>>> {
    handlers::list_raw_comments_handler(query, store).await
}

#[get("/postComments/<id>")]
pub async fn get_comment(id: &str, store: &State<SharedStore>) -> AppResult<Json<PostComment>> {
    handlers::get_comment_handler(id, store).await
}

#[delete("/postComments/<id>")]
pub async fn delete_comment(
    id: &str,
    store: &State<SharedStore>,
) -> AppResult<Json<DataResponse<PostComment>>> {
    handlers::delete_comment_handler(id, store).await
}

#[get("/votes/<id>")]
pub async fn get_vote(id: &str, store: &State<SharedStore>) -> AppResult<Json<Vote>> {
    handlers::get_vote_handler(id, store).await
}

#[delete("/votes/<id>")]
pub async fn delete_vote(
    id: &str,
    store: &State<SharedStore>,
) -> AppResult<Json<DataResponse<Vote>>> {
    handlers::delete_vote_handler(id, store).await
}

// System

#[get("/health")]
pub async fn health(store: &State<SharedStore>) -> Json<&'static str> {
    handlers::health_handler(store).await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers

#[rocket::catch(400)]
pub fn bad_request() -> Json<ErrorBody> {
    Json(ErrorBody::new(messages::BAD_REQUEST))
}

#[rocket::catch(404)]
pub fn not_found() -> Json<ErrorBody> {
    Json(ErrorBody::new(messages::ROUTE_NOT_FOUND))
}

#[rocket::catch(422)]
pub fn unprocessable_entity() -> Json<ErrorBody> {
    Json(ErrorBody::new(messages::BAD_REQUEST))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<ErrorBody> {
    Json(ErrorBody::new(messages::INTERNAL_ERROR))
}

pub fn api_routes() -> Vec<Route> {
    routes![
        list_companies,
        get_company,
        get_company_reviews,
        add_review,
        vote_review,
        add_reply,
        distinct_skills,
        list_users,
        get_user,
        match_companies,
        list_posts,
        create_post,
        list_comments,
        create_forum_comment,
        create_forum_post_comment,
        create_post_comment,
        create_forum_vote,
        list_votes,
        create_vote,
        update_vote,
        list_raw_posts,
        get_post,
        delete_post,
        list_raw_comments,
        get_comment,
        delete_comment,
        get_vote,
        delete_vote,
        health,
    ]
}

/// Attach state, fairings, catchers and routes. Every route answers both with
/// and without the `/api` prefix; the preflight route is mounted once since
/// `/<_..>` already covers `/api/...`.
pub fn build_rocket(
    rocket: Rocket<Build>,
    store: SharedStore,
    presenter: SharedPresenter,
) -> Rocket<Build> {
    rocket
        .attach(Cors)
        .manage(store)
        .manage(presenter)
        .register("/", catchers![bad_request, not_found, unprocessable_entity, internal_error])
        .mount("/", api_routes())
        .mount("/api", api_routes())
        .mount("/", routes![options])
}

// Main server start function
pub async fn start_web_server(config: &AppConfig) -> Result<()> {
    let store: SharedStore = Arc::new(JsonStore::open(&config.database_path).await?);
    let presenter = presentation::presenter(config.random_presentation);

    let figment = rocket::Config::figment()
        .merge(("address", config.address.clone()))
        .merge(("port", config.port));

    info!("Starting campus jobs API server");
    info!("Database: {}", config.database_path.display());
    info!("Server: http://{}:{}", config.address, config.port);

    let _rocket = build_rocket(rocket::custom(figment), store, presenter)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Rocket server failed: {}", e))?;

    Ok(())
}
