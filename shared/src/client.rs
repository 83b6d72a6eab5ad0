//! Request/response payloads exchanged with the restaurant server
//!
//! These types are shared between the domain crate and aardvark-client.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{BookingCreate, Food, FoodFields, TimeSlot};

// =============================================================================
// Menu API DTOs
// =============================================================================

/// One menu item as listed by `GET /menu/get` and sent to `POST /menu/update`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub fields: FoodFields,
}

impl From<&Food> for MenuEntry {
    fn from(food: &Food) -> Self {
        Self {
            fields: FoodFields::from(food),
        }
    }
}

// =============================================================================
// Booking API DTOs
// =============================================================================

/// `POST /booking/update` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub table: u32,
    pub size: u32,
}

impl From<BookingRequest> for BookingCreate {
    fn from(req: BookingRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            phone: req.phone,
            date: req.date,
            time: req.time,
            table: Some(req.table),
        }
    }
}

/// Query for `GET /booking/tables` (with size) and `GET /booking/sizes` (without)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    pub date: NaiveDate,
    pub time: TimeSlot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

/// Query for `GET /table`: look a booking reference up by one booking field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRefQuery {
    pub field: String,
    pub value: String,
}

impl BookingRefQuery {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            field: "name".to_string(),
            value: name.into(),
        }
    }
}

/// `GET /booking/tables` and `GET /table/total` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablesResponse {
    pub tables: Vec<u32>,
}

/// `GET /booking/sizes` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizesResponse {
    pub sizes: Vec<u32>,
}

// =============================================================================
// Order API DTOs
// =============================================================================

/// One line of an order submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub food: String,
    pub quantity: u32,
    pub table: u32,
}

/// `POST /order/submit` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSubmission {
    pub order: Vec<OrderLine>,
}

impl OrderSubmission {
    /// Lines in food-name order, all for the same table
    pub fn new(items: &BTreeMap<String, u32>, table: u32) -> Self {
        let order = items
            .iter()
            .map(|(food, &quantity)| OrderLine {
                food: food.clone(),
                quantity,
                table,
            })
            .collect();
        Self { order }
    }
}

/// Query for `GET /order/bill`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillQuery {
    pub table: u32,
}

/// `GET /order/bill` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillResponse {
    pub bill: f64,
}
