//! Error types for the injury dashboard client

use thiserror::Error;


pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Non-2xx answer from the analysis API. `message` carries the
    /// backend's `{"error": "..."}` text when it sent one.
    #[error("HTTP error! status: {status}{}", detail_suffix(.message))]
    Status {
        status: u16,
        message: Option<String>,
    },

    #[error("{message}")]
    Validation { message: String },

    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl DashboardError {
    /// Empty selection, raised before any request is issued.
    pub fn validation(message: impl Into<String>) -> Self {
        DashboardError::Validation {
            message: message.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, DashboardError::Validation { .. })
    }
}

fn detail_suffix(message: &Option<String>) -> String {
    match message {
        Some(m) if !m.trim().is_empty() => format!(" ({})", m.trim()),
        _ => String::new(),
    }
}
