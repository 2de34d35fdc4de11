//! Menu Item Model

use super::Category;
use serde::{Deserialize, Serialize};

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    /// Price in whole currency units (LKR has no minor unit on the menu)
    pub price: i64,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Image reference (URL or path), rendered by the host
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_vegetarian: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_vegan: Option<bool>,
    /// Stock flag; unavailable items cannot be added to a cart
    #[serde(default = "default_true")]
    pub available: bool,
}

fn default_true() -> bool {
    true
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    pub name: String,
    pub price: i64,
    pub category: Option<Category>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub is_vegetarian: Option<bool>,
    pub is_vegan: Option<bool>,
    pub available: Option<bool>,
}

/// Update menu item payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub price: Option<i64>,
    pub category: Option<Category>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub is_vegetarian: Option<bool>,
    pub is_vegan: Option<bool>,
    pub available: Option<bool>,
}

impl MenuItem {
    /// Apply a partial update in place; `None` fields are left untouched.
    pub fn apply(&mut self, update: MenuItemUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if update.description.is_some() {
            self.description = update.description;
        }
        if update.image.is_some() {
            self.image = update.image;
        }
        if update.is_vegetarian.is_some() {
            self.is_vegetarian = update.is_vegetarian;
        }
        if update.is_vegan.is_some() {
            self.is_vegan = update.is_vegan;
        }
        if let Some(available) = update.available {
            self.available = available;
        }
    }
}
