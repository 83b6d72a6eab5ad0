//! Restaurant domain models
//!
//! Food and Menu describe what can be ordered; Table and Restaurant track
//! in-session orders and payments; Booking and Reservation cover tables
//! reserved ahead of time.

pub mod booking;
pub mod food;
pub mod menu;
pub mod reservation;
pub mod restaurant;
pub mod table;

// Re-exports
pub use booking::*;
pub use food::*;
pub use menu::*;
pub use reservation::*;
pub use restaurant::*;
pub use table::*;
