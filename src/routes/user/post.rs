use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::{db_interaction::insert_user, domain::UserPayload, routes::ApiError, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Creating user",
    skip(pool)
)]
pub async fn create_user(
    pool: web::Data<DbPool>,
    json: web::Json<UserPayload>
) -> Result<HttpResponse, ApiError>{
    json.validate()?;

    let conn = get_pooled_connection(&pool).await?;
    let user = insert_user(conn, json.0.into()).await?;

    Ok(HttpResponse::Created().json(user))
}
