use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::{db_interaction::update_product, domain::ProductPayload, routes::ApiError, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Updating product",
    skip(pool)
)]
pub async fn put_product(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    json: web::Json<ProductPayload>
) -> Result<HttpResponse, ApiError>{
    json.validate()?;

    let conn = get_pooled_connection(&pool).await?;
    let product = update_product(conn, path.into_inner(), json.0.into()).await?;

    Ok(HttpResponse::Ok().json(product))
}
