//! # Domain Types
//!
//! Reference data shared by every screen of the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐                                               │
//! │  │    CatalogItem      │──┬── sizes:        [SizeOption]   (priced)    │
//! │  │  ─────────────────  │  ├── temperatures: [TemperatureOption]        │
//! │  │  id, name, price    │  ├── sugar_levels: [SugarLevel]               │
//! │  │  image, category    │  └── toppings:     [Topping]      (priced)    │
//! │  └─────────────────────┘                                               │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Store       │   │    Customer     │   │ CategoryFilter  │       │
//! │  │  id, name,      │   │  name, points   │   │  All, Smoothies │       │
//! │  │  address        │   │                 │   │  CoffeeBased,Tea│       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All of these are immutable once built. The cart takes a snapshot of the
//! `CatalogItem` it prices so later catalogue edits cannot change a line.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Variant Options
// =============================================================================

/// A cup size. Its price replaces the item's base price when selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SizeOption {
    pub id: String,
    pub name: String,
    pub price: Money,
}

/// Hot/cold choice. Some drinks only come one way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TemperatureOption {
    pub id: String,
    pub name: String,
    pub available: bool,
}

/// Sweetness choice. Does not affect price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SugarLevel {
    pub id: String,
    pub name: String,
}

/// An add-on, priced per cup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Topping {
    pub id: String,
    pub name: String,
    pub price: Money,
}

// =============================================================================
// Category
// =============================================================================

/// The shelf a catalogue item sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Coffee,
    Smoothie,
    Tea,
}

/// The category tabs on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    All,
    Smoothies,
    /// The home screen opens on this tab.
    #[default]
    CoffeeBased,
    Tea,
}

impl CategoryFilter {
    /// Whether an item on shelf `category` shows under this tab.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Smoothies => category == Category::Smoothie,
            CategoryFilter::CoffeeBased => category == Category::Coffee,
            CategoryFilter::Tea => category == Category::Tea,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CategoryFilter::All => "All",
            CategoryFilter::Smoothies => "Smoothies",
            CategoryFilter::CoffeeBased => "Coffee Based",
            CategoryFilter::Tea => "Tea",
        };
        f.write_str(label)
    }
}

impl FromStr for CategoryFilter {
    type Err = ValidationError;

    /// Accepts the tab label in any case, with spaces, dashes or underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();

        match key.as_str() {
            "all" => Ok(CategoryFilter::All),
            "smoothies" | "smoothie" => Ok(CategoryFilter::Smoothies),
            "coffeebased" | "coffee" => Ok(CategoryFilter::CoffeeBased),
            "tea" => Ok(CategoryFilter::Tea),
            _ => Err(ValidationError::InvalidFormat {
                field: "category".to_string(),
                reason: format!("unknown category '{}'", s),
            }),
        }
    }
}

// =============================================================================
// Catalog Item
// =============================================================================

/// A sellable drink with optional variant metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    /// Base price, used when no size is selected.
    pub price: Money,
    pub image: String,
    pub description: Option<String>,
    pub category: Category,
    pub sizes: Option<Vec<SizeOption>>,
    pub temperatures: Option<Vec<TemperatureOption>>,
    pub sugar_levels: Option<Vec<SugarLevel>>,
    pub toppings: Option<Vec<Topping>>,
}

impl CatalogItem {
    /// Creates an item with no variant metadata.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
        category: Category,
    ) -> Self {
        CatalogItem {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
            description: None,
            category,
            sizes: None,
            temperatures: None,
            sugar_levels: None,
            toppings: None,
        }
    }

    /// Looks up a size by id.
    pub fn size(&self, size_id: &str) -> Option<&SizeOption> {
        self.sizes.as_deref()?.iter().find(|s| s.id == size_id)
    }

    /// Looks up a topping by id.
    pub fn topping(&self, topping_id: &str) -> Option<&Topping> {
        self.toppings.as_deref()?.iter().find(|t| t.id == topping_id)
    }

    /// Fills every missing variant list with the house defaults.
    ///
    /// The details screen shows the same sizes, temperatures, sugar levels
    /// and toppings for any drink that does not define its own. Lists the
    /// item already has are left untouched.
    pub fn with_default_variants(mut self) -> Self {
        if self.description.is_none() {
            self.description = Some("A delicious coffee drink prepared with care.".to_string());
        }
        self.temperatures.get_or_insert_with(|| {
            vec![
                TemperatureOption {
                    id: "cold".to_string(),
                    name: "Cold".to_string(),
                    available: true,
                },
                TemperatureOption {
                    id: "hot".to_string(),
                    name: "Hot".to_string(),
                    available: true,
                },
            ]
        });
        self.sizes.get_or_insert_with(|| {
            vec![
                size("small", "Small", 550),
                size("medium", "Medium", 650),
                size("large", "Large", 750),
            ]
        });
        self.sugar_levels.get_or_insert_with(|| {
            vec![
                sugar("normal", "Normal"),
                sugar("less", "Less"),
                sugar("no-sugar", "No Sugar"),
            ]
        });
        self.toppings.get_or_insert_with(|| {
            vec![
                topping("cinnamon", "Cinnamon Sprinkle", 50),
                topping("whipped-cream", "Whipped Cream", 50),
                topping("chocolate", "Chocolate Shavings", 50),
            ]
        });
        self
    }
}

fn size(id: &str, name: &str, cents: i64) -> SizeOption {
    SizeOption {
        id: id.to_string(),
        name: name.to_string(),
        price: Money::from_cents(cents),
    }
}

fn sugar(id: &str, name: &str) -> SugarLevel {
    SugarLevel {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn topping(id: &str, name: &str, cents: i64) -> Topping {
    Topping {
        id: id.to_string(),
        name: name.to_string(),
        price: Money::from_cents(cents),
    }
}

// =============================================================================
// Store & Customer
// =============================================================================

/// A shop location the customer can order from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Store {
    pub id: String,
    pub name: String,
    pub address: String,
}

impl Store {
    pub fn new(id: &str, name: &str, address: &str) -> Self {
        Store {
            id: id.to_string(),
            name: name.to_string(),
            address: address.to_string(),
        }
    }

    /// The three demo locations.
    pub fn demo_stores() -> Vec<Store> {
        vec![
            Store::new("1", "CIPLAZ Garut, Garut Kota", "Jl. Ahmad Yani No. 123, Garut"),
            Store::new("2", "CIPLAZ Bandung, Dago", "Jl. Ir. H. Djuanda No. 456, Bandung"),
            Store::new(
                "3",
                "CIPLAZ Jakarta, Senopati",
                "Jl. Senopati No. 789, Jakarta Selatan",
            ),
        ]
    }
}

/// The signed-in customer shown on the profile screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    pub name: String,
    pub points: u32,
}

impl Default for Customer {
    fn default() -> Self {
        Customer {
            name: "John Doe".to_string(),
            points: 1,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn latte() -> CatalogItem {
        CatalogItem::new("1", "Ice Caffe Latte", Money::from_cents(650), "latte.jpg", Category::Coffee)
    }

    #[test]
    fn test_item_without_variants_has_no_lookups() {
        let item = latte();
        assert!(item.size("large").is_none());
        assert!(item.topping("cinnamon").is_none());
    }

    #[test]
    fn test_default_variants_fill_missing_lists() {
        let item = latte().with_default_variants();
        assert_eq!(item.size("large").map(|s| s.price), Some(Money::from_cents(750)));
        assert_eq!(item.sizes.as_ref().map(Vec::len), Some(3));
        assert_eq!(item.temperatures.as_ref().map(Vec::len), Some(2));
        assert_eq!(item.sugar_levels.as_ref().map(Vec::len), Some(3));
        assert_eq!(
            item.topping("whipped-cream").map(|t| t.price),
            Some(Money::from_cents(50))
        );
        assert!(item.description.is_some());
    }

    #[test]
    fn test_default_variants_keep_existing_lists() {
        let mut item = latte();
        item.sizes = Some(vec![size("tall", "Tall", 900)]);
        let item = item.with_default_variants();
        assert_eq!(item.sizes.as_ref().map(Vec::len), Some(1));
        assert!(item.size("large").is_none());
    }

    #[test]
    fn test_category_filter_matches() {
        assert!(CategoryFilter::All.matches(Category::Tea));
        assert!(CategoryFilter::CoffeeBased.matches(Category::Coffee));
        assert!(!CategoryFilter::CoffeeBased.matches(Category::Smoothie));
        assert!(CategoryFilter::Smoothies.matches(Category::Smoothie));
        assert!(!CategoryFilter::Tea.matches(Category::Coffee));
    }

    #[test]
    fn test_category_filter_from_str() {
        assert_eq!("Coffee Based".parse::<CategoryFilter>().unwrap(), CategoryFilter::CoffeeBased);
        assert_eq!("coffee-based".parse::<CategoryFilter>().unwrap(), CategoryFilter::CoffeeBased);
        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert!("cake".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_category_filter_default() {
        assert_eq!(CategoryFilter::default(), CategoryFilter::CoffeeBased);
    }

    #[test]
    fn test_catalog_item_serializes_camel_case() {
        let json = serde_json::to_value(latte().with_default_variants()).unwrap();
        assert!(json.get("sugarLevels").is_some());
        assert_eq!(json["price"], 650);
        assert_eq!(json["category"], "coffee");
    }
}
