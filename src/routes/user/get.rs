use actix_web::{web, HttpResponse};

use crate::{db_interaction::{get_all_users, get_orders_for_user, get_user_by_id}, routes::ApiError, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Getting list of users",
    skip(pool)
)]
pub async fn get_users(
    pool: web::Data<DbPool>
) -> Result<HttpResponse, ApiError>{
    let conn = get_pooled_connection(&pool).await?;
    let users = get_all_users(conn).await?;

    Ok(HttpResponse::Ok().json(users))
}

#[tracing::instrument(
    "Getting user by id",
    skip(pool)
)]
pub async fn get_user(
    pool: web::Data<DbPool>,
    path: web::Path<i32>
) -> Result<HttpResponse, ApiError>{
    let conn = get_pooled_connection(&pool).await?;
    let user = get_user_by_id(conn, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

#[tracing::instrument(
    "Getting orders of user",
    skip(pool)
)]
pub async fn get_user_orders(
    pool: web::Data<DbPool>,
    path: web::Path<i32>
) -> Result<HttpResponse, ApiError>{
    let conn = get_pooled_connection(&pool).await?;
    let orders = get_orders_for_user(conn, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(orders))
}
