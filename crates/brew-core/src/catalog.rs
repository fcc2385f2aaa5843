//! # Catalog
//!
//! The drinks the storefront sells. Built once at startup and only read
//! afterwards.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CatalogItem, Category, CategoryFilter};

/// An ordered, read-only list of catalogue items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Catalog { items }
    }

    /// The six house drinks, each with the default size/temperature/sugar/
    /// topping choices filled in.
    pub fn demo() -> Self {
        const IMAGE_BASE: &str = "https://images.unsplash.com";

        let drinks = [
            ("1", "Ice Caffe Latte", 650, "photo-1461023058943-07fcbe16d735", Category::Coffee),
            ("2", "Espresso", 650, "photo-1514432324607-a09d9b4aefdd", Category::Coffee),
            ("3", "Cold Brew", 700, "photo-1517701604599-bb29b565090c", Category::Coffee),
            ("4", "Cappuccino", 550, "photo-1572442388796-11668a67e53d", Category::Coffee),
            ("5", "Mango Smoothie", 800, "photo-1546173159-315724a31696", Category::Smoothie),
            ("6", "Green Tea Latte", 600, "photo-1515823064-d6e0c04616a79", Category::Tea),
        ];

        let items = drinks
            .into_iter()
            .map(|(id, name, cents, photo, category)| {
                let image = format!("{}/{}?w=400", IMAGE_BASE, photo);
                CatalogItem::new(id, name, Money::from_cents(cents), image, category)
                    .with_default_variants()
            })
            .collect();

        Catalog { items }
    }

    /// Looks up an item by id.
    pub fn get(&self, id: &str) -> CoreResult<&CatalogItem> {
        self.items
            .iter()
            .find(|item| item.id == id.trim())
            .ok_or_else(|| CoreError::ItemNotFound(id.to_string()))
    }

    /// Items shown under a category tab, in catalogue order.
    pub fn filter(&self, filter: CategoryFilter) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter().filter(move |item| filter.matches(item.category))
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.len(), 6);

        let latte = catalog.get("1").unwrap();
        assert_eq!(latte.name, "Ice Caffe Latte");
        assert_eq!(latte.price, Money::from_cents(650));
        assert!(latte.size("large").is_some());
    }

    #[test]
    fn test_get_unknown_item() {
        let catalog = Catalog::demo();
        assert!(matches!(catalog.get("42"), Err(CoreError::ItemNotFound(id)) if id == "42"));
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = Catalog::demo();

        let coffee: Vec<&str> = catalog
            .filter(CategoryFilter::CoffeeBased)
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(coffee, ["Ice Caffe Latte", "Espresso", "Cold Brew", "Cappuccino"]);

        assert_eq!(catalog.filter(CategoryFilter::Smoothies).count(), 1);
        assert_eq!(catalog.filter(CategoryFilter::Tea).count(), 1);
        assert_eq!(catalog.filter(CategoryFilter::All).count(), 6);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.get("1").is_err());
    }
}
