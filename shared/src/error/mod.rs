//! Error system for the restaurant domain
//!
//! - [`ErrorCode`]: codes grouped by range (0xxx general, 6xxx menu, 7xxx tables)
//! - [`AppError`]: code plus message
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::food_not_on_menu("salvation");
//! assert_eq!(err.code, ErrorCode::FoodNotOnMenu);
//! assert!(err.is_not_found());
//! ```

pub mod codes;
pub mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
