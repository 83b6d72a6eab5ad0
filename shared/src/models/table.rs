//! Dining Table Model
//!
//! Tracks what a table has ordered and how much it has paid. The menu is
//! shared with the restaurant and every other table.

use std::sync::Arc;

use super::food::Food;
use super::menu::{Menu, SEPARATOR_WIDTH};
use crate::error::AppResult;
use crate::money;

const ORDERS_HEADER_PAD: usize = 16;

/// Dining table (order history and running payments)
#[derive(Debug, Clone)]
pub struct Table {
    num: u32,
    menu: Arc<Menu>,
    order_history: Vec<Food>,
    total_paid: f64,
    is_occupied: bool,
    has_ordered: bool,
    size: Option<u32>,
}

impl Table {
    pub fn new(num: u32, menu: Arc<Menu>) -> Self {
        Self {
            num,
            menu,
            order_history: Vec::new(),
            total_paid: 0.0,
            is_occupied: false,
            has_ordered: false,
            size: None,
        }
    }

    pub fn num(&self) -> u32 {
        self.num
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn order_history(&self) -> &[Food] {
        &self.order_history
    }

    pub fn total_paid(&self) -> f64 {
        self.total_paid
    }

    pub fn is_occupied(&self) -> bool {
        self.is_occupied
    }

    pub fn has_ordered(&self) -> bool {
        self.has_ordered
    }

    pub fn size(&self) -> Option<u32> {
        self.size
    }

    /// Order a menu item by name (case-insensitive).
    ///
    /// The history is left untouched when the name is not on the menu. That
    /// error carries `ErrorCode::FoodNotOnMenu`, not `ErrorCode::NotFound`;
    /// check it with `AppError::is_not_found`.
    pub fn order(&mut self, food_name: &str) -> AppResult<()> {
        let food = self.menu.find_item(food_name)?.clone();
        tracing::debug!(table = self.num, food = %food.name(), "Order placed");
        self.order_history.push(food);
        self.has_ordered = true;
        Ok(())
    }

    /// Sum of the prices of everything ordered so far
    pub fn compute_bill(&self) -> f64 {
        money::sum(self.order_history.iter().map(Food::price))
    }

    /// Record a payment.
    ///
    /// Payments are a ledger only: the amount is neither validated nor
    /// capped at the bill.
    pub fn pay_bill(&mut self, amount: f64) {
        self.total_paid += amount;
    }

    /// Seat a party at this table
    pub fn seat(&mut self, size: u32) {
        self.is_occupied = true;
        self.size = Some(size);
    }

    /// Free the table for the next party. Order history and payments stay.
    pub fn vacate(&mut self) {
        self.is_occupied = false;
        self.has_ordered = false;
        self.size = None;
    }

    /// Printable list of every ordered item
    pub fn render_orders(&self) -> String {
        let pad = "#".repeat(ORDERS_HEADER_PAD);
        let mut out = format!("{pad} ORDERS {pad}\n");
        for food in &self.order_history {
            out.push_str(&food.to_string());
            out.push('\n');
        }
        out.push_str(&"#".repeat(SEPARATOR_WIDTH));
        out.push('\n');
        out
    }

    /// Printable bill total, e.g. `Total Bill: 555.00 GBP`
    pub fn render_bill(&self) -> String {
        format!("Total Bill: {}", money::format_amount(self.compute_bill()))
    }
}
