// src/lib.rs
pub mod config;
pub mod error;
pub mod logging;
pub mod matching;
pub mod messages;
pub mod models;
pub mod presentation;
pub mod skills;
pub mod store;
pub mod utils;
pub mod web;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use store::{JsonStore, SharedStore};
pub use web::{build_rocket, start_web_server};
