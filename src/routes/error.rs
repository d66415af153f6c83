use std::{error::Error, fmt::Debug};

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

use crate::{db_interaction::StoreError, export::ExportError, utils::{error_chain_text, error_fmt_chain, PoolGetError}};

// Every failure a handler can report
#[derive(Error)]
pub enum ApiError{
    #[error("Invalid request body")]
    ValidationError(#[from] ValidationErrors),
    #[error(transparent)]
    StoreError(#[from] StoreError),
    #[error("Failed to get database connection")]
    ConnectionError(#[from] PoolGetError),
    #[error("Failed to export users")]
    ExportError(#[from] ExportError)
}

impl Debug for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::StoreError(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::StoreError(
                StoreError::EmailNotUnique
                | StoreError::ProductAlreadyInOrder
                | StoreError::ProductNotInOrder
            ) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        let status = self.status_code();

        match self {
            ApiError::ValidationError(errors) => HttpResponse::build(status).json(errors),
            _ if status.is_server_error() => {
                HttpResponse::build(status).json(json!({ "error": error_chain_text(self) }))
            },
            _ => HttpResponse::build(status).json(json!({ "message": self.to_string() }))
        }
    }
}
