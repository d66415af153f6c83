use actix_web::{web, HttpResponse};

use crate::{db_interaction::{get_all_products, get_product_by_id}, routes::ApiError, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Getting list of products",
    skip(pool)
)]
pub async fn get_products(
    pool: web::Data<DbPool>
) -> Result<HttpResponse, ApiError>{
    let conn = get_pooled_connection(&pool).await?;
    let products = get_all_products(conn).await?;

    Ok(HttpResponse::Ok().json(products))
}

#[tracing::instrument(
    "Getting product by id",
    skip(pool)
)]
pub async fn get_product(
    pool: web::Data<DbPool>,
    path: web::Path<i32>
) -> Result<HttpResponse, ApiError>{
    let conn = get_pooled_connection(&pool).await?;
    let product = get_product_by_id(conn, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(product))
}
