use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::{db_interaction::delete_product, routes::ApiError, utils::{get_pooled_connection, DbPool}};

// Orders that held the product keep existing without it
#[tracing::instrument(
    "Deleting product by id",
    skip(pool)
)]
pub async fn remove_product(
    pool: web::Data<DbPool>,
    path: web::Path<i32>
) -> Result<HttpResponse, ApiError>{
    let conn = get_pooled_connection(&pool).await?;
    delete_product(conn, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Product deleted" })))
}
