//! Error types and handling for the destinations catalog

use thiserror::Error;

/// Main error type for the destinations catalog
#[derive(Error, Debug)]
pub enum DestinationsError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Catalog invariant violations
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// JSON rendering errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    /// Text rendering errors
    #[error("Formatting error: {source}")]
    Format {
        #[from]
        source: std::fmt::Error,
    },
}

impl DestinationsError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new catalog error
    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            DestinationsError::Config { message } => {
                format!("Configuration error: {message}. Please check your config file and environment.")
            }
            DestinationsError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            DestinationsError::Catalog { message } => {
                format!("The destination catalog is inconsistent: {message}")
            }
            DestinationsError::Io { .. } => {
                "Could not read input or write output.".to_string()
            }
            DestinationsError::Serialization { .. } => {
                "Could not render destinations as JSON.".to_string()
            }
            DestinationsError::Format { .. } => {
                "Could not render destinations as text.".to_string()
            }
        }
    }
}
