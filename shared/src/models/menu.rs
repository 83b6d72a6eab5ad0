//! Menu Model
//!
//! Items are keyed by their normalized (lowercase) name and iterate in
//! insertion order.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use super::food::{Food, FoodType};
use crate::client::MenuEntry;
use crate::error::{AppError, AppResult};

const MENU_HEADER_PAD: usize = 17;
pub(crate) const SEPARATOR_WIDTH: usize = 40;

/// Restaurant menu
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Menu {
    items: IndexMap<String, Food>,
}

impl Menu {
    /// Create an empty menu
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a menu from a list of food items, in order
    pub fn from_items(items: impl IntoIterator<Item = Food>) -> Self {
        let mut menu = Self::new();
        for food in items {
            menu.add(food);
        }
        menu
    }

    /// Build a menu from wire entries, validating every item
    pub fn from_entries(entries: Vec<MenuEntry>) -> AppResult<Self> {
        let items = entries
            .into_iter()
            .map(|entry| Food::try_from(entry.fields))
            .collect::<AppResult<Vec<_>>>()?;
        Ok(Self::from_items(items))
    }

    /// Convert the menu to wire entries, in menu order
    pub fn to_entries(&self) -> Vec<MenuEntry> {
        self.items.values().map(MenuEntry::from).collect()
    }

    /// Add an item to the menu.
    ///
    /// An item with the same name replaces the stored one in place and a
    /// warning is logged. Returns the replaced item, if any.
    pub fn add(&mut self, food: Food) -> Option<Food> {
        let previous = self.items.insert(food.name().to_string(), food);
        if let Some(old) = &previous {
            tracing::warn!(name = %old.name(), "Overriding an existing menu item");
        }
        previous
    }

    /// Look up an item by name (case-insensitive)
    ///
    /// A missing name fails with `ErrorCode::FoodNotOnMenu`, which belongs
    /// to the not-found family: match on `AppError::is_not_found` rather
    /// than comparing against `ErrorCode::NotFound`.
    pub fn find_item(&self, name: &str) -> AppResult<&Food> {
        self.items
            .get(&name.to_lowercase())
            .ok_or_else(|| AppError::food_not_on_menu(name))
    }

    /// Whether an item with this name is on the menu
    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(&name.to_lowercase())
    }

    /// Iterate items in insertion order
    pub fn items(&self) -> impl Iterator<Item = &Food> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Group items by food type. Groups follow [`FoodType::ALL`] order;
    /// items inside a group keep menu order. Empty groups are omitted.
    pub fn categorize_food(&self) -> BTreeMap<FoodType, Vec<&Food>> {
        let mut groups: BTreeMap<FoodType, Vec<&Food>> = BTreeMap::new();
        for food in self.items.values() {
            groups.entry(food.food_type()).or_default().push(food);
        }
        groups
    }

    /// Food types in display order
    pub fn food_types(&self) -> [FoodType; 4] {
        FoodType::ALL
    }

    /// Printable menu
    pub fn render(&self) -> String {
        let pad = "#".repeat(MENU_HEADER_PAD);
        let separator = "#".repeat(SEPARATOR_WIDTH);

        let mut out = format!("{pad} MENU {pad}\n{separator}\n\n");
        for food in self.items.values() {
            out.push_str(&food.to_string());
            out.push('\n');
        }
        out.push_str(&separator);
        out.push('\n');
        out
    }
}

impl FromIterator<Food> for Menu {
    fn from_iter<I: IntoIterator<Item = Food>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}
