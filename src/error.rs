// src/error.rs
use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::Request;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::messages;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    /// A required body or query field is missing or malformed
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal error: {0:#}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }

    pub fn status(&self) -> Status {
        match self {
            AppError::Validation(_) => Status::BadRequest,
            AppError::NotFound(_) => Status::NotFound,
            AppError::Internal(_) => Status::InternalServerError,
        }
    }

    /// Message safe to return to the client; internal causes stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(message) | AppError::NotFound(message) => message.clone(),
            AppError::Internal(_) => messages::INTERNAL_ERROR.to_string(),
        }
    }
}

/// Body shared by every failed request
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl<'r> Responder<'r, 'static> for AppError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        if let AppError::Internal(cause) = &self {
            error!(
                "{} {} failed: {:#}",
                request.method(),
                request.uri(),
                cause
            );
        }

        (self.status(), Json(ErrorBody::new(self.public_message()))).respond_to(request)
    }
}
