//! # Storefront Error Types
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Display                     Rust Backend                               │
//! │  ───────                     ────────────                               │
//! │                                                                         │
//! │  "inc 9"                                                                │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Handler → CartHandle → dispatcher → CartLedger          │  │
//! │  │                                                   │              │  │
//! │  │  LedgerError::ItemNotFound("9") ◄─────────────────┘              │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  DispatchError::Ledger ──────────────────────────► ApiError ────►│  │
//! │  │                                                                  │  │
//! │  │  Dispatcher gone? DispatchError::Stopped ────────► ApiError ────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "NOT_FOUND", "message": "Item not found in cart: 9" }        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use greenlife_core::{LedgerError, ValidationError};
use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Dispatch Error
// =============================================================================

/// Errors returned by [`crate::state::CartHandle`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The ledger rejected the command.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// The dispatcher task has shut down; the command was not applied.
    #[error("Cart dispatcher is not running")]
    Stopped,
}

// =============================================================================
// Config Error
// =============================================================================

/// Errors raised while loading [`crate::state::StoreConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read.
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for `StoreConfig`.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is outside its allowed range.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

// =============================================================================
// API Error
// =============================================================================

/// Error returned from command handlers.
///
/// ## Serialization
/// This is what a display receives when a command fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Item not found in cart: 9"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product or cart line not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Configuration could not be loaded
    ConfigError,

    /// Internal failure (dispatcher stopped, I/O)
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::ItemNotFound(_) => ApiError::new(ErrorCode::NotFound, err.to_string()),
            LedgerError::InvalidInput(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::Ledger(e) => ApiError::from(e),
            DispatchError::Stopped => {
                tracing::error!("Command sent to stopped cart dispatcher");
                ApiError::internal("Cart is unavailable")
            }
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("I/O error: {}", err);
        ApiError::internal(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
