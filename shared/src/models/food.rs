//! Food Model
//!
//! A single menu item. All fields are validated and normalized when the
//! value is built; a `Food` that exists is always valid.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::money;

/// Food category, in canonical menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FoodType {
    #[serde(rename = "starter")]
    Starter,
    #[serde(rename = "main course")]
    MainCourse,
    #[serde(rename = "dessert")]
    Dessert,
    #[serde(rename = "beverage")]
    Beverage,
}

impl FoodType {
    /// All food types in the order they appear on a menu
    pub const ALL: [FoodType; 4] = [
        FoodType::Starter,
        FoodType::MainCourse,
        FoodType::Dessert,
        FoodType::Beverage,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            FoodType::Starter => "starter",
            FoodType::MainCourse => "main course",
            FoodType::Dessert => "dessert",
            FoodType::Beverage => "beverage",
        }
    }
}

impl fmt::Display for FoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FoodType {
    type Err = AppError;

    /// Case-insensitive parse
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        FoodType::ALL
            .into_iter()
            .find(|t| t.as_str() == lowered)
            .ok_or_else(|| {
                let valid: Vec<&str> = FoodType::ALL.iter().map(FoodType::as_str).collect();
                AppError::invalid_argument(format!(
                    "The food type is invalid. It can only be of type: {}",
                    valid.join(", ")
                ))
            })
    }
}

/// Raw food fields as they travel over the wire
///
/// `price` is kept as an untyped JSON scalar so that a non-numeric price can
/// be reported as a type mismatch rather than a decode failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodFields {
    pub name: String,
    #[serde(rename = "type")]
    pub food_type: String,
    pub description: String,
    pub price: Value,
}

/// Menu item (starter, main course, dessert or beverage)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FoodFields")]
pub struct Food {
    name: String,
    #[serde(rename = "type")]
    food_type: FoodType,
    description: String,
    price: f64,
}

impl Food {
    /// Build a food item from `<name, type, description, price>`.
    ///
    /// Name and description must be non-empty; the type must be one of
    /// [`FoodType::ALL`] (any case). Text fields are stored lowercase.
    /// The price accepts numbers and numeric strings; anything else is a
    /// type mismatch, and a negative price is an invalid argument.
    pub fn new(
        name: &str,
        food_type: &str,
        description: &str,
        price: impl Into<Value>,
    ) -> AppResult<Self> {
        if name.is_empty() {
            return Err(AppError::invalid_argument("The food name cannot be empty."));
        }
        let food_type = food_type.parse::<FoodType>()?;
        if description.is_empty() {
            return Err(AppError::invalid_argument(
                "The food description cannot be empty.",
            ));
        }
        let price = coerce_price(&price.into())?;

        Ok(Self {
            name: name.to_lowercase(),
            food_type,
            description: description.to_lowercase(),
            price,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn food_type(&self) -> FoodType {
        self.food_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

fn coerce_price(value: &Value) -> AppResult<f64> {
    let price = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|p| p.is_finite())
    .ok_or_else(|| AppError::type_mismatch("The food price must be a number."))?;

    if price < 0.0 {
        return Err(AppError::invalid_argument(
            "The food price must be non-negative.",
        ));
    }
    Ok(price)
}

impl TryFrom<FoodFields> for Food {
    type Error = AppError;

    fn try_from(fields: FoodFields) -> Result<Self, Self::Error> {
        Food::new(&fields.name, &fields.food_type, &fields.description, fields.price)
    }
}

impl From<&Food> for FoodFields {
    fn from(food: &Food) -> Self {
        Self {
            name: food.name.clone(),
            food_type: food.food_type.as_str().to_string(),
            description: food.description.clone(),
            price: Value::from(food.price),
        }
    }
}

/// First character uppercased, the rest lowercased
pub(crate) fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

impl fmt::Display for Food {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Item: {}", capitalize(&self.name))?;
        writeln!(f, "Type: {}", capitalize(self.food_type.as_str()))?;
        writeln!(f, "Description: {}", capitalize(&self.description))?;
        writeln!(f, "Price: {}", money::format_amount(self.price))
    }
}
