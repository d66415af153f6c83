use actix_web::{web, HttpResponse};

use crate::db_interaction::{get_all_orders, get_order_by_id, get_products_for_order};
use crate::routes::ApiError;
use crate::utils::{get_pooled_connection, DbPool};

#[tracing::instrument(
    "Getting list of orders",
    skip(pool)
)]
pub async fn get_orders(
    pool: web::Data<DbPool>
) -> Result<HttpResponse, ApiError> {
    let conn = get_pooled_connection(&pool).await?;
    let orders = get_all_orders(conn).await?;

    Ok(HttpResponse::Ok().json(orders))
}

#[tracing::instrument(
    "Getting order by id",
    skip(pool)
)]
pub async fn get_order(
    pool: web::Data<DbPool>,
    path: web::Path<i32>
) -> Result<HttpResponse, ApiError> {
    let conn = get_pooled_connection(&pool).await?;
    let order = get_order_by_id(conn, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(order))
}

#[tracing::instrument(
    "Getting products in order",
    skip(pool)
)]
pub async fn get_order_products(
    pool: web::Data<DbPool>,
    path: web::Path<i32>
) -> Result<HttpResponse, ApiError> {
    let conn = get_pooled_connection(&pool).await?;
    let products = get_products_for_order(conn, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(products))
}
