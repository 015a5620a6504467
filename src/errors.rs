//! Unified application error type.
//! All modules (db, store, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid expense category: {0}")]
    InvalidCategory(String),

    #[error("Unknown period: {0}")]
    InvalidPeriod(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("An entry already exists for {0}. Delete it before adding a new one.")]
    DuplicateDate(String),

    #[error("No {0} found with id {1}")]
    NotFound(&'static str, String),

    // ---------------------------
    // Authorization errors
    // ---------------------------
    #[error("The default administrator '{0}' cannot be deleted")]
    ProtectedAccount(String),

    #[error("Username already exists: {0}")]
    UsernameTaken(String),

    #[error("User '{0}' is not allowed to perform this operation")]
    Forbidden(String),

    #[error("Unknown or inactive user: {0}")]
    UnknownUser(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export / narrative errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Narrative service error: {0}")]
    Narrative(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
