//! Error codes for the restaurant domain
//!
//! Codes are grouped by range:
//! - 0xxx: General errors
//! - 6xxx: Menu errors
//! - 7xxx: Table and booking errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Domain error code
///
/// Represented as `u16` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// A field failed validation
    InvalidArgument = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// A value has the wrong type (e.g. a non-numeric price)
    TypeMismatch = 6,

    // ==================== 6xxx: Menu ====================
    /// Food name is not on the menu
    FoodNotOnMenu = 6001,

    // ==================== 7xxx: Table ====================
    /// Table number does not exist
    TableNotFound = 7001,
    /// Booking reference does not exist
    BookingNotFound = 7201,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Whether this code reports a missing resource.
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            ErrorCode::NotFound
                | ErrorCode::FoodNotOnMenu
                | ErrorCode::TableNotFound
                | ErrorCode::BookingNotFound
        )
    }

    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::InvalidArgument => "Invalid argument",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::TypeMismatch => "Value has the wrong type",
            ErrorCode::FoodNotOnMenu => "Food is not on the menu",
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::BookingNotFound => "Booking not found",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Raised when a `u16` does not name a known [`ErrorCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::InvalidArgument),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            6 => Ok(ErrorCode::TypeMismatch),
            6001 => Ok(ErrorCode::FoodNotOnMenu),
            7001 => Ok(ErrorCode::TableNotFound),
            7201 => Ok(ErrorCode::BookingNotFound),
            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
