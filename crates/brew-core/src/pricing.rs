//! # Pricing
//!
//! Turns a catalogue item plus a selection into money.
//!
//! ## Price Resolution
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Unit price                                                          │
//! │     size id found in item.sizes?  ── yes ──► size.price                 │
//! │                                   ── no ───► item.price (base)          │
//! │                                                                         │
//! │  2. Topping surcharge                                                   │
//! │     Σ price of item.toppings whose id is selected                       │
//! │     (ids the item does not offer add nothing)                           │
//! │                                                                         │
//! │  3. Line total = (unit price + surcharge) × quantity                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A size's price *replaces* the base price rather than adding to it, so a
//! "Medium" drink costs exactly what the Medium option says.

use crate::money::Money;
use crate::options::SelectedOptions;
use crate::types::CatalogItem;

/// Price of one cup before toppings.
///
/// ```rust
/// use brew_core::{pricing, CatalogItem, Category, Money, SelectedOptions};
///
/// let latte = CatalogItem::new("1", "Latte", Money::from_cents(650), "", Category::Coffee)
///     .with_default_variants();
///
/// let large = SelectedOptions::new().with_size("large");
/// assert_eq!(pricing::unit_price(&latte, &large).cents(), 750);
///
/// // No size chosen: base price
/// assert_eq!(pricing::unit_price(&latte, &SelectedOptions::new()).cents(), 650);
/// ```
pub fn unit_price(item: &CatalogItem, options: &SelectedOptions) -> Money {
    options
        .size
        .as_deref()
        .and_then(|size_id| item.size(size_id))
        .map(|size| size.price)
        .unwrap_or(item.price)
}

/// Sum of the selected toppings' prices for one cup.
pub fn topping_surcharge(item: &CatalogItem, options: &SelectedOptions) -> Money {
    options
        .toppings
        .iter()
        .filter_map(|topping_id| item.topping(topping_id))
        .map(|topping| topping.price)
        .sum()
}

/// Price of one fully configured cup.
pub fn effective_unit_price(item: &CatalogItem, options: &SelectedOptions) -> Money {
    unit_price(item, options) + topping_surcharge(item, options)
}

/// Price of `quantity` identically configured cups.
///
/// ```rust
/// use brew_core::{pricing, CatalogItem, Category, Money, SelectedOptions};
///
/// let latte = CatalogItem::new("1", "Latte", Money::from_cents(650), "", Category::Coffee)
///     .with_default_variants();
/// let opts = SelectedOptions::new().with_size("large").with_topping("cinnamon");
///
/// // ($7.50 + $0.50) × 2 = $16.00
/// assert_eq!(pricing::line_total(&latte, &opts, 2).cents(), 1600);
/// ```
pub fn line_total(item: &CatalogItem, options: &SelectedOptions, quantity: u32) -> Money {
    effective_unit_price(item, options).multiply_quantity(quantity)
}

// =============================================================================
// Unit Tests
// =============================================================================
