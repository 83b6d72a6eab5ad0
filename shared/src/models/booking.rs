//! Booking Model
//!
//! A reservation record for a table at one of the fixed daily time slots,
//! plus an in-memory store that keeps booking references unique.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::util::{REFERENCE_LEN, generate_reference};

pub const MAX_NAME_LEN: usize = 50;
pub const MAX_EMAIL_LEN: usize = 80;
pub const MAX_PHONE_LEN: usize = 13;

/// Bookable start times
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    #[serde(rename = "09:00", alias = "09:00:00")]
    Nine,
    #[serde(rename = "11:00", alias = "11:00:00")]
    Eleven,
    #[serde(rename = "13:00", alias = "13:00:00")]
    Thirteen,
    #[serde(rename = "15:00", alias = "15:00:00")]
    Fifteen,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 4] = [
        TimeSlot::Nine,
        TimeSlot::Eleven,
        TimeSlot::Thirteen,
        TimeSlot::Fifteen,
    ];

    pub const fn hour(&self) -> u32 {
        match self {
            TimeSlot::Nine => 9,
            TimeSlot::Eleven => 11,
            TimeSlot::Thirteen => 13,
            TimeSlot::Fifteen => 15,
        }
    }

    pub fn as_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour(), 0, 0).unwrap_or_default()
    }

    /// Slot starting exactly at `time`, if any
    pub fn from_time(time: NaiveTime) -> Option<Self> {
        TimeSlot::ALL.into_iter().find(|slot| slot.as_time() == time)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.hour())
    }
}

impl FromStr for TimeSlot {
    type Err = AppError;

    /// Accepts `HH:MM` or `HH:MM:SS`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
            .ok()
            .and_then(TimeSlot::from_time)
            .ok_or_else(|| {
                AppError::invalid_argument(format!(
                    "{} is not a booking slot (09:00, 11:00, 13:00, 15:00)",
                    s
                ))
            })
    }
}

/// Stored booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub reference: String,
    /// Booked table; cleared when the table is removed
    pub table: Option<u32>,
}

/// Create booking payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub table: Option<u32>,
}

impl BookingCreate {
    pub fn validate(&self) -> AppResult<()> {
        if self.name.is_empty() {
            return Err(AppError::invalid_argument("booking name cannot be empty"));
        }
        check_len("name", &self.name, MAX_NAME_LEN)?;
        check_len("email", &self.email, MAX_EMAIL_LEN)?;
        check_len("phone", &self.phone, MAX_PHONE_LEN)?;
        Ok(())
    }
}

fn check_len(field: &str, value: &str, max: usize) -> AppResult<()> {
    if value.chars().count() > max {
        return Err(AppError::invalid_argument(format!(
            "booking {} exceeds {} characters",
            field, max
        )));
    }
    Ok(())
}

/// In-memory booking store keyed by reference
#[derive(Debug, Clone, Default)]
pub struct BookingStore {
    bookings: IndexMap<String, Booking>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Store a booking under a freshly generated reference
    pub fn insert(&mut self, create: BookingCreate) -> AppResult<&Booking> {
        create.validate()?;
        let reference = loop {
            let candidate = generate_reference();
            if !self.bookings.contains_key(&candidate) {
                break candidate;
            }
            tracing::debug!(reference = %candidate, "Booking reference collision, regenerating");
        };
        Ok(self.store(create, reference))
    }

    /// Store a booking under a caller-chosen reference
    pub fn insert_with_reference(
        &mut self,
        create: BookingCreate,
        reference: impl Into<String>,
    ) -> AppResult<&Booking> {
        create.validate()?;
        let reference = reference.into();
        if reference.is_empty() || reference.chars().count() > REFERENCE_LEN {
            return Err(AppError::invalid_argument(format!(
                "booking reference must be 1 to {} characters",
                REFERENCE_LEN
            )));
        }
        if self.bookings.contains_key(&reference) {
            return Err(AppError::already_exists(format!("booking {}", reference)));
        }
        Ok(self.store(create, reference))
    }

    fn store(&mut self, create: BookingCreate, reference: String) -> &Booking {
        let booking = Booking {
            name: create.name,
            email: create.email,
            phone: create.phone,
            date: create.date,
            time: create.time,
            reference: reference.clone(),
            table: create.table,
        };
        tracing::info!(reference = %reference, date = %booking.date, time = %booking.time, "Booking stored");
        self.bookings.entry(reference).or_insert(booking)
    }

    pub fn find_by_reference(&self, reference: &str) -> AppResult<&Booking> {
        self.bookings
            .get(reference)
            .ok_or_else(|| AppError::booking_not_found(reference))
    }

    /// First booking (in name order) under this customer name, case-insensitive
    pub fn find_by_name(&self, name: &str) -> AppResult<&Booking> {
        let wanted = name.to_lowercase();
        self.list()
            .into_iter()
            .find(|b| b.name.to_lowercase() == wanted)
            .ok_or_else(|| AppError::not_found(format!("booking for {}", name)))
    }

    /// All bookings ordered by name
    pub fn list(&self) -> Vec<&Booking> {
        let mut bookings: Vec<&Booking> = self.bookings.values().collect();
        bookings.sort_by(|a, b| a.name.cmp(&b.name));
        bookings
    }

    /// Bookings for one table on one date
    pub fn for_table(&self, table: u32, date: NaiveDate) -> Vec<&Booking> {
        self.bookings
            .values()
            .filter(|b| b.table == Some(table) && b.date == date)
            .collect()
    }

    pub fn remove(&mut self, reference: &str) -> AppResult<Booking> {
        self.bookings
            .shift_remove(reference)
            .ok_or_else(|| AppError::booking_not_found(reference))
    }

    /// Detach every booking from a removed table. Bookings are kept with
    /// no table. Returns how many were detached.
    pub fn remove_table(&mut self, table: u32) -> usize {
        let mut detached = 0;
        for booking in self.bookings.values_mut() {
            if booking.table == Some(table) {
                booking.table = None;
                detached += 1;
            }
        }
        if detached > 0 {
            tracing::info!(table, detached, "Table removed, bookings detached");
        }
        detached
    }
}
