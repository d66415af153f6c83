use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::{db_interaction::get_all_users, export::{export_users_to_csv, ExportDirectory}, routes::ApiError, utils::{get_pooled_connection, DbPool}};

#[derive(Serialize, Debug)]
pub struct ExportResponse{
    pub message: String,
    pub file: String
}

#[tracing::instrument(
    "Exporting users",
    skip(pool)
)]
pub async fn export_users(
    pool: web::Data<DbPool>,
    export_directory: web::Data<ExportDirectory>
) -> Result<HttpResponse, ApiError>{
    let conn = get_pooled_connection(&pool).await?;
    let users = get_all_users(conn).await?;

    let file = export_users_to_csv(users, &export_directory).await?;

    Ok(HttpResponse::Ok().json(ExportResponse{
        message: "Users exported successfully".to_string(),
        file
    }))
}
