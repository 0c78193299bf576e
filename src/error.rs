//! Error types and handling for the climate API

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Main error type for the climate API
#[derive(Error, Debug)]
pub enum ClimateApiError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Data source errors (unreachable file, broken query, pool exhausted)
    #[error("Database error: {source}")]
    Database {
        #[from]
        source: sqlx::Error,
    },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl ClimateApiError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ClimateApiError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            ClimateApiError::Database { .. } => {
                "The climate database is currently unavailable.".to_string()
            }
            ClimateApiError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            ClimateApiError::General { message } => message.clone(),
        }
    }

    /// HTTP status reported to the caller
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ClimateApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (
            self.status_code(),
            Json(ErrorBody {
                error: self.user_message(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = ClimateApiError::config("missing database path");
        assert!(matches!(config_err, ClimateApiError::Config { .. }));

        let general_err = ClimateApiError::general("boom");
        assert!(matches!(general_err, ClimateApiError::General { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = ClimateApiError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let db_err: ClimateApiError = sqlx::Error::PoolTimedOut.into();
        assert!(db_err.user_message().contains("unavailable"));
        assert!(!db_err.user_message().contains("pool"));

        let general_err = ClimateApiError::general("test input");
        assert_eq!(general_err.user_message(), "test input");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let api_err: ClimateApiError = io_err.into();
        assert!(matches!(api_err, ClimateApiError::Io { .. }));
    }

    #[test]
    fn test_database_error_maps_to_server_error() {
        let err: ClimateApiError = sqlx::Error::PoolClosed.into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
