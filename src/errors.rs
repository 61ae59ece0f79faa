//! Unified application error type.
//! All modules (hierarchy, capture, records, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use std::fmt;
use std::io;
use thiserror::Error;

/// Form field a client-side validation error points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Photo,
    Class,
    Department,
    Course,
    Branch,
    Year,
    Semester,
    TimeSlot,
    Name,
    Email,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Photo => "photo",
            Field::Class => "class",
            Field::Department => "department",
            Field::Course => "course",
            Field::Branch => "branch",
            Field::Year => "year",
            Field::Semester => "semester",
            Field::TimeSlot => "time slot",
            Field::Name => "name",
            Field::Email => "email",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recoverable, field-level validation failure. Always blocks the action
/// that triggered it and never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    pub fn missing(field: Field) -> Self {
        let message = match field {
            Field::Photo => "Please take or upload a photo".to_string(),
            Field::Class => "Please select a class".to_string(),
            Field::TimeSlot => "Please select a time slot".to_string(),
            Field::Name => "Name cannot be empty".to_string(),
            Field::Email => "Please enter a valid email".to_string(),
            other => format!("Please select a {}", other),
        };
        Self::new(field, message)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Remote services
    // ---------------------------
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx answer from the recognition service; the message is the
    /// server-provided `error` field or a generic fallback.
    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Database service error: {0}")]
    Store(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Input / flow errors
    // ---------------------------
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid {field}: '{value}'")]
    InvalidSelection { field: Field, value: String },

    #[error("Invalid time slot: {0}")]
    InvalidTimeSlot(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Unsupported photo: {0}")]
    UnsupportedPhoto(String),

    #[error("An attendance submission is already in progress")]
    SubmitInProgress,

    #[error("Cannot open browser: {0}")]
    Launch(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type AppResult<T> = Result<T, AppError>;
