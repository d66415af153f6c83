mod health_check;
mod error;
pub mod user;
pub mod product;
pub mod order;

pub use health_check::*;
pub use error::*;

use actix_web::{error::InternalError, web, HttpResponse};
use serde_json::json;

// Malformed or incomplete JSON bodies are rejected with 400 and the parser message
pub fn json_config() -> web::JsonConfig{
    web::JsonConfig::default()
        .error_handler(|err, _req| {
            let response = HttpResponse::BadRequest()
                                .json(json!({ "error": err.to_string() }));
            InternalError::from_response(err, response).into()
        })
}
