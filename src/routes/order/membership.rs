use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::{db_interaction::{add_product_to_order, remove_product_from_order}, routes::ApiError, utils::{get_pooled_connection, DbPool}};

#[derive(Deserialize, Debug)]
pub struct MembershipPath{
    pub order_id: i32,
    pub product_id: i32
}

// 409 when the product is already part of the order
#[tracing::instrument(
    "Adding product to order",
    skip(pool)
)]
pub async fn add_product(
    pool: web::Data<DbPool>,
    path: web::Path<MembershipPath>
) -> Result<HttpResponse, ApiError>{
    let conn = get_pooled_connection(&pool).await?;
    add_product_to_order(conn, path.order_id, path.product_id).await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Product added to order" })))
}

// 409 as well when the product is not part of the order
#[tracing::instrument(
    "Removing product from order",
    skip(pool)
)]
pub async fn remove_product_from(
    pool: web::Data<DbPool>,
    path: web::Path<MembershipPath>
) -> Result<HttpResponse, ApiError>{
    let conn = get_pooled_connection(&pool).await?;
    remove_product_from_order(conn, path.order_id, path.product_id).await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Product removed from order" })))
}
