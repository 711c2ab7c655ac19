//! # App Error Type
//!
//! Unified error type for event handlers and the terminal driver.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow                                           │
//! │                                                                         │
//! │  driver line ──► parse_command ──► App::dispatch ──► bistro-core        │
//! │                        │                  │               │             │
//! │                        ▼                  ▼               ▼             │
//! │                  UnknownCommand      ProductNotFound   CoreError        │
//! │                        │                  │               │             │
//! │                        └──────────────────┴───────► AppError            │
//! │                                                        │                │
//! │                                            ErrorReport { code, message }│
//! │                                                        │                │
//! │                                   printed; the session keeps going      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use bistro_core::CoreError;
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the application layer.
#[derive(Debug, Error)]
pub enum AppError {
    /// A domain error from bistro-core.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The catalog file could not be read.
    #[error("Could not read catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Terminal input or output failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The driver did not understand a line.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

/// Machine-readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product, param or option id unknown.
    NotFound,
    /// Data failed a rule.
    ValidationError,
    /// Selection is inconsistent with the product.
    BusinessLogic,
    /// Cart operation failed.
    CartError,
    /// Input the driver cannot parse.
    BadCommand,
    /// File or terminal failure.
    Internal,
}

/// What the driver prints for a failed line.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub message: String,
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Core(err) => match err {
                CoreError::ProductNotFound(_)
                | CoreError::UnknownParam { .. }
                | CoreError::UnknownOption { .. } => ErrorCode::NotFound,
                CoreError::MissingSelection { .. } | CoreError::PriceOverflow => {
                    ErrorCode::BusinessLogic
                }
                CoreError::CartTooLarge { .. } => ErrorCode::CartError,
                CoreError::InvalidCatalog(_) | CoreError::Validation(_) => ErrorCode::ValidationError,
            },
            AppError::UnknownCommand(_) => ErrorCode::BadCommand,
            AppError::CatalogRead { .. } | AppError::Io(_) => ErrorCode::Internal,
        }
    }

    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
