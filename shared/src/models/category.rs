//! Menu Category Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed set of menu categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Breakfast,
    Dosa,
    Kottu,
    #[serde(rename = "Main Course")]
    MainCourse,
    Biryani,
    Curry,
    Appetizer,
    #[serde(rename = "Rice Dish")]
    RiceDish,
}

impl Category {
    /// All categories in menu display order
    pub const ALL: [Category; 8] = [
        Category::Breakfast,
        Category::Dosa,
        Category::Kottu,
        Category::MainCourse,
        Category::Biryani,
        Category::Curry,
        Category::Appetizer,
        Category::RiceDish,
    ];

    /// Display label (same as the serialized form)
    pub fn label(&self) -> &'static str {
        match self {
            Category::Breakfast => "Breakfast",
            Category::Dosa => "Dosa",
            Category::Kottu => "Kottu",
            Category::MainCourse => "Main Course",
            Category::Biryani => "Biryani",
            Category::Curry => "Curry",
            Category::Appetizer => "Appetizer",
            Category::RiceDish => "Rice Dish",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unknown category label
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Case-insensitive; spaces, dashes and underscores are interchangeable
    /// (`main-course`, `Main Course`, `MAIN_COURSE`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        Category::ALL
            .into_iter()
            .find(|c| c.label().replace(' ', "").to_lowercase() == normalized)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
