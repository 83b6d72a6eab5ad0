//! Shared types for the Aardvark restaurant system
//!
//! The menu, table and booking domain model, the JSON payloads exchanged
//! with the restaurant server, and the domain error type.

pub mod client;
pub mod error;
pub mod models;
pub mod money;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use models::{Food, FoodType, Menu, Restaurant, Table};
pub use serde::{Deserialize, Serialize};
