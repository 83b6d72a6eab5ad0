//! Domain error type

use super::codes::ErrorCode;
use thiserror::Error;

/// Domain error with a structured code
///
/// Raised synchronously at the point of the offending input; nothing is
/// validated lazily.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    // ==================== Convenience constructors ====================

    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidArgument, msg)
    }

    /// Create a type mismatch error
    pub fn type_mismatch(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::TypeMismatch, msg)
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::NotFound, format!("{} not found", resource.into()))
    }

    /// Create an already exists error
    pub fn already_exists(resource: impl Into<String>) -> Self {
        Self::with_message(
            ErrorCode::AlreadyExists,
            format!("{} already exists", resource.into()),
        )
    }

    /// Food name is not on the menu
    pub fn food_not_on_menu(name: &str) -> Self {
        Self::with_message(ErrorCode::FoodNotOnMenu, format!("{} is not on the menu", name))
    }

    /// Table number does not exist
    pub fn table_not_found(num: u32) -> Self {
        Self::with_message(ErrorCode::TableNotFound, format!("table {} not found", num))
    }

    /// Booking reference does not exist
    pub fn booking_not_found(reference: &str) -> Self {
        Self::with_message(
            ErrorCode::BookingNotFound,
            format!("booking {} not found", reference),
        )
    }

    /// Whether this error reports a missing resource
    pub fn is_not_found(&self) -> bool {
        self.code.is_not_found()
    }
}

/// Result type for domain operations
pub type AppResult<T> = Result<T, AppError>;
