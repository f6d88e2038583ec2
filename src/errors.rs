//! Unified application error type.
//! All modules (store, core, ai, export, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Store error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("Store migration error: {0}")]
    Migration(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid month format: {0}")]
    InvalidMonth(String),

    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    #[error("Invalid equipment type: {0}")]
    InvalidEquipmentType(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No record found with id {0}")]
    RecordNotFound(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // AI gateway errors
    // ---------------------------
    #[error("API key not found (set GEMINI_API_KEY)")]
    MissingApiKey,

    #[error("AI request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed AI response: {0}")]
    MalformedResponse(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
