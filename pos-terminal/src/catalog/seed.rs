//! Initial menu, loaded when the store has never saved one

use shared::{Category, MenuItem};

/// (id, name, price, category, description, vegetarian, vegan)
const SEED: &[(&str, &str, i64, Category, &str, bool, bool)] = &[
    ("1", "Idli (4 pcs)", 399, Category::Breakfast, "Steamed rice cakes served with sambar and chutney", true, false),
    ("2", "Ghee Dosa", 599, Category::Dosa, "3 pcs crispy crepe with ghee, sambar & chutney", true, false),
    ("3", "Onion Ghee Podi Dosa", 450, Category::Dosa, "2 pcs spiced onion dosa", true, false),
    ("4", "Egg Ghee Dosa", 450, Category::Dosa, "2 pcs dosa topped with egg and ghee", false, false),
    ("5", "Spicy Idli Kottu", 599, Category::Kottu, "5 pcs chopped idli stir-fried with spices", true, false),
    ("6", "String Hoppers", 350, Category::Breakfast, "2 pcs steamed rice noodles with pol sambol & sambar", true, false),
    ("7", "Rice & Curry (Veg)", 500, Category::MainCourse, "Traditional Sri Lankan vegetarian rice and curry", true, false),
    ("8", "Rice & Curry (Chicken)", 850, Category::MainCourse, "Spicy chicken curry with rice and sides", false, false),
    ("9", "Medu Vada (2 pcs)", 250, Category::Appetizer, "Crispy lentil donuts", true, true),
    ("10", "Pongal", 300, Category::RiceDish, "Small bowl of savory rice and lentil dish", true, false),
    ("11", "Chicken Biryani", 1000, Category::Biryani, "Aromatic basmati rice cooked with chicken and spices", false, false),
    ("12", "Mutton Biryani", 1200, Category::Biryani, "Rich and flavorful mutton biryani plate", false, false),
    ("13", "Fish Curry", 900, Category::Curry, "Spicy fish curry plate", false, false),
];

pub fn initial_menu() -> Vec<MenuItem> {
    SEED.iter()
        .map(|&(id, name, price, category, description, veg, vegan)| MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            price,
            category,
            description: Some(description.to_string()),
            image: Some(format!("https://picsum.photos/200/200?random={}", id)),
            is_vegetarian: Some(veg),
            is_vegan: vegan.then_some(true),
            available: true,
        })
        .collect()
}
