// src/web/handlers/student_handlers.rs
use crate::error::{AppError, AppResult};
use crate::matching::{self, MatchResult};
use crate::messages;
use crate::models::User;
use crate::store::SharedStore;
use crate::web::types::DataResponse;

use rocket::serde::json::Json;
use rocket::State;
use tracing::info;

pub async fn list_users_handler(store: &State<SharedStore>) -> AppResult<Json<Vec<User>>> {
    Ok(Json(store.list_users().await?))
}

pub async fn get_user_handler(id: &str, store: &State<SharedStore>) -> AppResult<Json<User>> {
    store
        .get_user(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(messages::STUDENT_NOT_FOUND))
}

pub async fn match_companies_handler(
    user_id: &str,
    store: &State<SharedStore>,
) -> AppResult<Json<DataResponse<Vec<MatchResult>>>> {
    let results = matching::match_companies(store.inner().as_ref(), user_id).await?;

    info!(
        "Matched {} companies for student {}",
        results.len(),
        user_id
    );

    Ok(Json(DataResponse::success(results)))
}
