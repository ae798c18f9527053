use std::path::PathBuf;

use thiserror::Error;

use super::Dialect;

#[derive(Debug, Error)]
pub enum LintError {
    #[error("Failed to load the {dialect} grammar: {message}")]
    Language { dialect: Dialect, message: String },
    #[error("Failed to parse {}", .path.display())]
    Parse { path: PathBuf },
    #[error("Fix at byte offset {offset} does not land on a character boundary of the {len}-byte source")]
    InvalidFix { offset: u32, len: usize },
}

pub type LintResult<T> = Result<T, LintError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Lint(#[from] LintError),
    #[error("{0}")]
    Custom(String),
}

pub type AppResult<T> = Result<T, AppError>;
