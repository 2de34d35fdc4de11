//! Role Model
//!
//! Four fixed roles gate which terminal views a user may open.

use serde::{Deserialize, Serialize};
use std::fmt;

/// User role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Manager,
    #[default]
    Cashier,
    Kitchen,
}

/// Terminal views
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum View {
    Dashboard,
    MenuManagement,
    KitchenBoard,
    OrderEntry,
}

/// 管理角色可见全部视图
const BACK_OFFICE_VIEWS: &[View] = &[
    View::Dashboard,
    View::MenuManagement,
    View::KitchenBoard,
    View::OrderEntry,
];

const KITCHEN_VIEWS: &[View] = &[View::KitchenBoard];

const CASHIER_VIEWS: &[View] = &[View::OrderEntry];

impl UserRole {
    /// Views this role may open
    pub fn allowed_views(&self) -> &'static [View] {
        match self {
            UserRole::Admin | UserRole::Manager => BACK_OFFICE_VIEWS,
            UserRole::Kitchen => KITCHEN_VIEWS,
            UserRole::Cashier => CASHIER_VIEWS,
        }
    }

    /// Whether this role may open `view`
    pub fn can_access(&self, view: View) -> bool {
        self.allowed_views().contains(&view)
    }

    /// View shown right after login
    pub fn landing_view(&self) -> View {
        match self {
            UserRole::Admin | UserRole::Manager => View::Dashboard,
            UserRole::Kitchen => View::KitchenBoard,
            UserRole::Cashier => View::OrderEntry,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::Manager => "MANAGER",
            UserRole::Cashier => "CASHIER",
            UserRole::Kitchen => "KITCHEN",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl View {
    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::MenuManagement => "Menu Management",
            View::KitchenBoard => "Kitchen Board",
            View::OrderEntry => "Order Entry",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
