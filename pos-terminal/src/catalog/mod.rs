//! 菜单目录
//!
//! 持有全部可售菜品。每次修改都会替换成新的不可变快照
//! (`Arc<[MenuItem]>`)，由 [`PosState`](crate::core::PosState) 交给持久化层。
//!
//! 删除菜品不检查历史订单：订单里保存的是自己的菜品快照。

mod seed;

pub use seed::initial_menu;

use rand::Rng;
use rand::seq::SliceRandom;
use shared::{Category, MenuItem, MenuItemCreate, MenuItemUpdate};
use std::sync::Arc;
use thiserror::Error;

/// New items get this image until one is set
pub const DEFAULT_IMAGE: &str = "https://picsum.photos/200/300";

/// New items without a category land here
pub const DEFAULT_CATEGORY: Category = Category::MainCourse;

/// Highest accepted menu price
pub const MAX_PRICE: i64 = 10_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Menu item name is required")]
    NameRequired,

    #[error("Menu item price must be between 0 and {max}, got {0}", max = MAX_PRICE)]
    InvalidPrice(i64),

    #[error("Menu item not found: {0}")]
    NotFound(String),
}

/// Menu catalog
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    items: Arc<[MenuItem]>,
}

impl MenuCatalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items: items.into(),
        }
    }

    /// Catalog holding the initial menu
    pub fn seeded() -> Self {
        Self::new(initial_menu())
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Shared immutable view of the current menu
    pub fn snapshot(&self) -> Arc<[MenuItem]> {
        Arc::clone(&self.items)
    }

    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Items in `category` (all when `None`) whose name contains `search`,
    /// case-insensitive. Unavailable items are included; the cart gates them.
    pub fn filter(&self, category: Option<Category>, search: &str) -> Vec<&MenuItem> {
        let needle = search.trim().to_lowercase();
        self.items
            .iter()
            .filter(|i| category.is_none_or(|c| i.category == c))
            .filter(|i| needle.is_empty() || i.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// One available item chosen uniformly at random
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&MenuItem> {
        let available: Vec<&MenuItem> = self.items.iter().filter(|i| i.available).collect();
        available.choose(rng).copied()
    }

    /// Add a new item at the front of the menu
    pub fn create(&mut self, draft: MenuItemCreate) -> Result<Arc<[MenuItem]>, CatalogError> {
        let name = validate_name(&draft.name)?;
        validate_price(draft.price)?;

        let item = MenuItem {
            id: self.fresh_id(),
            name,
            price: draft.price,
            category: draft.category.unwrap_or(DEFAULT_CATEGORY),
            description: draft.description,
            image: Some(draft.image.unwrap_or_else(|| DEFAULT_IMAGE.to_string())),
            is_vegetarian: draft.is_vegetarian,
            is_vegan: draft.is_vegan,
            available: draft.available.unwrap_or(true),
        };

        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.push(item);
        items.extend(self.items.iter().cloned());
        self.items = items.into();
        Ok(self.snapshot())
    }

    /// Merge `update` into the item with `id`
    pub fn update(
        &mut self,
        id: &str,
        mut update: MenuItemUpdate,
    ) -> Result<Arc<[MenuItem]>, CatalogError> {
        if let Some(name) = &update.name {
            update.name = Some(validate_name(name)?);
        }
        if let Some(price) = update.price {
            validate_price(price)?;
        }
        self.modify(id, |item| item.apply(update))
    }

    pub fn set_availability(
        &mut self,
        id: &str,
        available: bool,
    ) -> Result<Arc<[MenuItem]>, CatalogError> {
        self.modify(id, |item| item.available = available)
    }

    pub fn delete(&mut self, id: &str) -> Result<Arc<[MenuItem]>, CatalogError> {
        if self.get(id).is_none() {
            return Err(CatalogError::NotFound(id.to_string()));
        }
        let items: Vec<MenuItem> = self.items.iter().filter(|i| i.id != id).cloned().collect();
        self.items = items.into();
        Ok(self.snapshot())
    }

    fn modify(
        &mut self,
        id: &str,
        f: impl FnOnce(&mut MenuItem),
    ) -> Result<Arc<[MenuItem]>, CatalogError> {
        let mut items = self.items.to_vec();
        let item = items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        f(item);
        self.items = items.into();
        Ok(self.snapshot())
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = shared::util::snowflake_id().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

fn validate_name(name: &str) -> Result<String, CatalogError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CatalogError::NameRequired);
    }
    Ok(name.to_string())
}

fn validate_price(price: i64) -> Result<(), CatalogError> {
    if !(0..=MAX_PRICE).contains(&price) {
        return Err(CatalogError::InvalidPrice(price));
    }
    Ok(())
}
