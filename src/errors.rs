//! Unified application error type.
//! All modules (store, core, cli, export) return AppError to keep the
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
    // Store / serialization
    // ---------------------------
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("State serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid kit number: {0} (expected an integer between 0 and 9,999,999,999)")]
    InvalidKitNumber(String),

    #[error("Result for kit number {0} exceeds the 8 digit limit")]
    KitOverflow(i64),

    #[error("Missing required value: {0}")]
    EmptyField(&'static str),

    // ---------------------------
    // Account errors
    // ---------------------------
    #[error("Invalid username '{0}': use letters, digits, '.', '_' or '-'")]
    InvalidUsername(String),

    #[error("Username already exists: {0}")]
    UsernameTaken(String),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("No user is logged in (run `kitledger login <username>` first)")]
    NotLoggedIn,

    // ---------------------------
    // Generation errors
    // ---------------------------
    #[error("Unable to generate a unique number after {0} attempts; retry with --allow-duplicates")]
    GenerationExhausted(u32),

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
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
