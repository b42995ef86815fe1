// src/web/handlers/system_handlers.rs
use crate::store::SharedStore;

use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

pub async fn health_handler(store: &State<SharedStore>) -> Json<&'static str> {
    match store.list_companies().await {
        Ok(companies) => info!("Health check: {} companies loaded", companies.len()),
        Err(e) => error!("Health check could not read the document store: {}", e),
    }
    Json("OK")
}
