use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::{db_interaction::delete_order, routes::ApiError, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Deleting order by id",
    skip(pool)
)]
pub async fn remove_order(
    pool: web::Data<DbPool>,
    path: web::Path<i32>
) -> Result<HttpResponse, ApiError>{
    let conn = get_pooled_connection(&pool).await?;
    delete_order(conn, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Order deleted" })))
}
