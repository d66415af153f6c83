use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::{db_interaction::insert_order, domain::OrderPayload, routes::ApiError, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Posting order",
    skip(pool)
)]
pub async fn post_order(
    pool: web::Data<DbPool>,
    json: web::Json<OrderPayload>
) -> Result<HttpResponse, ApiError>{
    json.validate()?;

    let conn = get_pooled_connection(&pool).await?;
    let order = insert_order(conn, json.0.into()).await?;

    Ok(HttpResponse::Created().json(order))
}
