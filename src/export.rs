use std::{borrow::Cow, error::Error, fmt::{Debug, Write}, fs, path::PathBuf};

use chrono::Local;
use thiserror::Error;

use crate::{models::User, telemetry::spawn_blocking_with_tracing, utils::error_fmt_chain};

const USERS_CSV_HEADER: &str = "id,name,email,address";

// Directory the export files are written to, shared through app data
#[derive(Debug, Clone)]
pub struct ExportDirectory(pub PathBuf);

#[derive(Error)]
pub enum ExportError{
    #[error("Failed due to threadpool error")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("Failed to create export directory")]
    CreateDirectoryError(#[source] std::io::Error),
    #[error("Failed to write export file")]
    WriteError(#[source] std::io::Error)
}

impl Debug for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

// Quotes a field when it holds a separator, a quote or a line break
fn csv_field(value: &str) -> Cow<'_, str>{
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

pub fn render_users_csv(users: &[User]) -> String{
    let mut csv = String::from(USERS_CSV_HEADER);
    csv.push('\n');

    for user in users {
        let _ = writeln!(
            csv,
            "{},{},{},{}",
            user.id,
            csv_field(&user.name),
            csv_field(&user.email),
            csv_field(&user.address)
        );
    }

    csv
}

pub fn users_export_filename() -> String{
    format!("users_{}.csv", Local::now().format("%Y-%m-%d_%H-%M-%S"))
}

/// Writes every user to `users_<timestamp>.csv` inside the export directory,
/// creating the directory when needed, and returns the file name.
#[tracing::instrument(
    "Exporting users to csv",
    skip(users)
)]
pub async fn export_users_to_csv(
    users: Vec<User>,
    directory: &ExportDirectory
) -> Result<String, ExportError>{
    let directory = directory.0.clone();
    let filename = users_export_filename();
    let path = directory.join(&filename);

    spawn_blocking_with_tracing(move || {
        fs::create_dir_all(&directory)
            .map_err(ExportError::CreateDirectoryError)?;

        fs::write(&path, render_users_csv(&users))
            .map_err(ExportError::WriteError)
    })
    .await??;

    tracing::info!(file = %filename, "Users exported");
    Ok(filename)
}
