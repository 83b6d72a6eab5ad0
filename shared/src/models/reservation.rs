//! Reservation requests (booking or cancellation intent for a table)

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Booking or cancellation of a table at a given start time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub table: u32,
    pub book: bool,
    /// (year, month, day)
    pub date: (i32, u32, u32),
    /// (hour, minute)
    pub time: (u32, u32),
}

/// Builds reservation requests
#[derive(Debug, Clone, Copy, Default)]
pub struct Reservation;

impl Reservation {
    /// `book = true` books the table, `false` cancels it
    pub fn reserve(book: bool, table: u32, when: NaiveDateTime) -> ReservationRequest {
        ReservationRequest {
            table,
            book,
            date: (when.year(), when.month(), when.day()),
            time: (when.hour(), when.minute()),
        }
    }
}
