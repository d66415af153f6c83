use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::{db_interaction::update_user, domain::UserPayload, routes::ApiError, utils::{get_pooled_connection, DbPool}};

// The body replaces name, email and address as a whole
#[tracing::instrument(
    "Updating user",
    skip(pool)
)]
pub async fn put_user(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    json: web::Json<UserPayload>
) -> Result<HttpResponse, ApiError>{
    json.validate()?;

    let conn = get_pooled_connection(&pool).await?;
    let user = update_user(conn, path.into_inner(), json.0.into()).await?;

    Ok(HttpResponse::Ok().json(user))
}
