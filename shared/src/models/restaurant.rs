//! Restaurant Model

use std::sync::Arc;

use super::menu::Menu;
use super::table::Table;
use crate::error::{AppError, AppResult};

/// The restaurant floor: one menu shared by a fixed set of tables
#[derive(Debug, Clone)]
pub struct Restaurant {
    menu: Arc<Menu>,
    tables: Vec<Table>,
}

impl Restaurant {
    /// Create a restaurant with tables numbered `0..table_amount`
    pub fn new(menu: Menu, table_amount: u32) -> Self {
        let menu = Arc::new(menu);
        let tables = (0..table_amount)
            .map(|num| Table::new(num, Arc::clone(&menu)))
            .collect();
        Self { menu, tables }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn table(&self, num: u32) -> AppResult<&Table> {
        self.tables
            .iter()
            .find(|t| t.num() == num)
            .ok_or_else(|| AppError::table_not_found(num))
    }

    pub fn table_mut(&mut self, num: u32) -> AppResult<&mut Table> {
        self.tables
            .iter_mut()
            .find(|t| t.num() == num)
            .ok_or_else(|| AppError::table_not_found(num))
    }

    /// Tables no party is sitting at
    pub fn find_empty_tables(&self) -> Vec<&Table> {
        self.tables.iter().filter(|t| !t.is_occupied()).collect()
    }
}
