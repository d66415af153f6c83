use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::{db_interaction::insert_product, domain::ProductPayload, routes::ApiError, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Creating product",
    skip(pool)
)]
pub async fn create_product(
    pool: web::Data<DbPool>,
    json: web::Json<ProductPayload>
) -> Result<HttpResponse, ApiError>{
    json.validate()?;

    let conn = get_pooled_connection(&pool).await?;
    let product = insert_product(conn, json.0.into()).await?;

    Ok(HttpResponse::Created().json(product))
}
