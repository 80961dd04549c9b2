//! The fixed menu catalog.
//!
//! Category and item order is preserved as written; the catalog is loaded
//! once at startup and never mutated afterwards.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    /// Unit price in won, always positive.
    pub price: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub name: String,
    pub items: Vec<MenuItem>,
}

/// Ordered mapping of category → item → unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCatalog {
    categories: Vec<MenuCategory>,
}

impl MenuCatalog {
    pub fn new(categories: Vec<MenuCategory>) -> Self {
        Self { categories }
    }

    /// Parses a catalog from its JSON representation.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    /// Unit price of an item, if it exists in the named category.
    pub fn price_of(&self, category: &str, item: &str) -> Option<u32> {
        self.categories
            .iter()
            .find(|c| c.name == category)?
            .items
            .iter()
            .find(|i| i.name == item)
            .map(|i| i.price)
    }
}

impl Default for MenuCatalog {
    /// The built-in single-location menu.
    fn default() -> Self {
        fn item(name: &str, price: u32) -> MenuItem {
            MenuItem {
                name: name.to_string(),
                price,
            }
        }

        Self::new(vec![
            MenuCategory {
                name: "Drinks".to_string(),
                items: vec![
                    item("Coke", 1500),
                    item("Sprite", 1500),
                    item("Iced Americano", 2500),
                ],
            },
            MenuCategory {
                name: "Snacks".to_string(),
                items: vec![
                    item("Chips", 2000),
                    item("Popcorn", 2500),
                    item("Cup Ramen", 3000),
                ],
            },
            MenuCategory {
                name: "Meals".to_string(),
                items: vec![item("Fried Rice", 6000), item("Tonkatsu", 7500)],
            },
        ])
    }
}
