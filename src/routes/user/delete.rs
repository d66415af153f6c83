use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::{db_interaction::delete_user, routes::ApiError, utils::{get_pooled_connection, DbPool}};

// Takes the user's orders and their memberships along, products stay
#[tracing::instrument(
    "Deleting user by id",
    skip(pool)
)]
pub async fn remove_user(
    pool: web::Data<DbPool>,
    path: web::Path<i32>
) -> Result<HttpResponse, ApiError>{
    let conn = get_pooled_connection(&pool).await?;
    delete_user(conn, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "User deleted" })))
}
