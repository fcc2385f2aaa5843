//! # Cart
//!
//! The in-memory shopping cart and its derived totals.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Screen Action            Cart Method                State Change       │
//! │  ─────────────            ───────────                ────────────       │
//! │                                                                         │
//! │  Quick add (home) ──────► add_item() ──────────────► merge or push     │
//! │                                                                         │
//! │  Add (details) ─────────► add_item_with_options() ─► merge or push     │
//! │                                                                         │
//! │  +/- buttons ───────────► update_quantity() ───────► set, or remove    │
//! │                                                      when qty <= 0     │
//! │                                                                         │
//! │  Trash icon ────────────► remove_item() ───────────► remove            │
//! │                                                                         │
//! │  Order note ────────────► set_note() ──────────────► set, or clear     │
//! │                                                      when blank        │
//! │                                                                         │
//! │  Checkout ──────────────► clear() ─────────────────► empty             │
//! │                                                                         │
//! │  Badge / totals ────────► item_count(), total() ───► (read only)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by `EntryKey` (item id + normalized options)
//! - Every line has `quantity >= 1`
//! - Lines keep the order they were first added in
//! - A line's note never takes part in merging
//!
//! None of the operations fail. Adding zero counts as one, and an unknown
//! key is a no-op.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::options::{CartItemOptions, EntryKey, SelectedOptions};
use crate::pricing;
use crate::types::CatalogItem;
use crate::validation::{clamp_quantity, normalize_quantity};

/// One line in the cart.
///
/// ## Design Notes
/// `item` is a frozen copy of the catalogue entry at the time of adding, so
/// the line keeps pricing the same way even if the catalogue is swapped out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    item: CatalogItem,
    options: SelectedOptions,
    quantity: u32,
    /// Free-text order note ("less ice please")
    #[serde(default)]
    note: Option<String>,
    #[ts(as = "String")]
    added_at: DateTime<Utc>,
}

impl CartEntry {
    fn new(item: &CatalogItem, options: SelectedOptions, quantity: u32) -> Self {
        CartEntry {
            item: item.clone(),
            options,
            quantity: normalize_quantity(quantity),
            note: None,
            added_at: Utc::now(),
        }
    }

    pub fn item(&self) -> &CatalogItem {
        &self.item
    }

    pub fn options(&self) -> &SelectedOptions {
        &self.options
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }

    /// The identity this line merges on.
    pub fn key(&self) -> EntryKey {
        EntryKey {
            item_id: self.item.id.clone(),
            options: self.options.clone(),
        }
    }

    fn matches(&self, key: &EntryKey) -> bool {
        self.item.id == key.item_id && self.options == key.options
    }

    /// Price of one cup: size (or base) price plus toppings.
    pub fn unit_price(&self) -> Money {
        pricing::effective_unit_price(&self.item, &self.options)
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        pricing::line_total(&self.item, &self.options, self.quantity)
    }
}

/// The shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    entries: Vec<CartEntry>,

    /// When the cart was created/last cleared
    #[ts(as = "String")]
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            entries: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds `quantity` cups of `item` with no options chosen.
    ///
    /// Merges into the existing default-option line for this item, if any.
    /// A quantity of zero is treated as one.
    pub fn add_item(&mut self, item: &CatalogItem, quantity: u32) -> &CartEntry {
        self.merge_or_push(item, SelectedOptions::default(), quantity)
    }

    /// Adds a configured drink.
    ///
    /// ## Behavior
    /// - Same item and same (normalized) options already in cart: quantity increases
    /// - Otherwise: a new line is appended
    ///
    /// ```rust
    /// use brew_core::{Cart, CartItemOptions, CatalogItem, Category, Money, SelectedOptions};
    ///
    /// let latte = CatalogItem::new("1", "Latte", Money::from_cents(650), "", Category::Coffee)
    ///     .with_default_variants();
    /// let mut cart = Cart::new();
    ///
    /// let a = SelectedOptions::new().with_toppings(["chocolate", "cinnamon"]);
    /// let b = SelectedOptions::new().with_toppings(["cinnamon", "chocolate"]);
    /// cart.add_item_with_options(&latte, CartItemOptions::new(a, 1));
    /// cart.add_item_with_options(&latte, CartItemOptions::new(b, 2));
    ///
    /// assert_eq!(cart.line_count(), 1);
    /// assert_eq!(cart.item_count(), 3);
    /// ```
    pub fn add_item_with_options(&mut self, item: &CatalogItem, options: CartItemOptions) -> &CartEntry {
        let selection = options.selection.normalized();
        self.merge_or_push(item, selection, options.quantity)
    }

    fn merge_or_push(&mut self, item: &CatalogItem, options: SelectedOptions, quantity: u32) -> &CartEntry {
        let quantity = normalize_quantity(quantity);
        let key = EntryKey {
            item_id: item.id.clone(),
            options,
        };

        let index = match self.position(&key) {
            Some(index) => {
                let entry = &mut self.entries[index];
                entry.quantity = entry.quantity.saturating_add(quantity);
                index
            }
            None => {
                self.entries.push(CartEntry::new(item, key.options, quantity));
                self.entries.len() - 1
            }
        };

        &self.entries[index]
    }

    /// Sets the quantity of a line.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: removes the line
    /// - Key not in cart: nothing happens
    ///
    /// ## Returns
    /// `true` if a line was changed or removed.
    pub fn update_quantity(&mut self, key: &EntryKey, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(key).is_some();
        }

        match self.entries.iter_mut().find(|e| e.matches(key)) {
            Some(entry) => {
                entry.quantity = clamp_quantity(quantity);
                true
            }
            None => false,
        }
    }

    /// Attaches a note to a line.
    ///
    /// The note is trimmed; a blank note clears it. Unknown keys are a no-op.
    ///
    /// ## Returns
    /// `true` if the line exists.
    pub fn set_note(&mut self, key: &EntryKey, note: &str) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.matches(key)) else {
            return false;
        };

        let note = note.trim();
        entry.note = (!note.is_empty()).then(|| note.to_string());
        true
    }

    /// Removes a line, returning it if it was present.
    pub fn remove_item(&mut self, key: &EntryKey) -> Option<CartEntry> {
        let index = self.position(key)?;
        Some(self.entries.remove(index))
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.created_at = Utc::now();
    }

    fn position(&self, key: &EntryKey) -> Option<usize> {
        self.entries.iter().position(|e| e.matches(key))
    }

    /// Looks up a line by key.
    pub fn get(&self, key: &EntryKey) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.matches(key))
    }

    /// Lines in the order they were first added.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Key of the n-th line (zero based), as shown in a rendered list.
    pub fn key_at(&self, index: usize) -> Option<EntryKey> {
        self.entries.get(index).map(CartEntry::key)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns the total number of cups (badge count).
    pub fn item_count(&self) -> u32 {
        self.entries.iter().fold(0u32, |count, e| count.saturating_add(e.quantity))
    }

    /// Sum of every line total.
    pub fn total(&self) -> Money {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn drink(id: &str, cents: i64) -> CatalogItem {
        CatalogItem::new(id, format!("Drink {}", id), Money::from_cents(cents), "", Category::Coffee)
            .with_default_variants()
    }

    fn with(options: SelectedOptions, quantity: u32) -> CartItemOptions {
        CartItemOptions::new(options, quantity)
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();
        cart.add_item(&drink("1", 650), 2);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total(), Money::from_cents(1300));
    }

    #[test]
    fn test_cart_add_same_item_increases_quantity() {
        let mut cart = Cart::new();
        let latte = drink("1", 650);

        cart.add_item(&latte, 1);
        let entry = cart.add_item(&latte, 1);
        assert_eq!(entry.quantity(), 2);
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_zero_quantity_add_counts_as_one() {
        let mut cart = Cart::new();
        cart.add_item(&drink("1", 650), 0);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_same_options_merge() {
        let mut cart = Cart::new();
        let latte = drink("1", 650);
        let opts = SelectedOptions::new().with_size("large").with_temperature("hot");

        cart.add_item_with_options(&latte, with(opts.clone(), 2));
        cart.add_item_with_options(&latte, with(opts, 3));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_different_options_are_distinct_lines() {
        let mut cart = Cart::new();
        let latte = drink("1", 650);

        cart.add_item_with_options(&latte, with(SelectedOptions::new().with_size("small"), 1));
        cart.add_item_with_options(&latte, with(SelectedOptions::new().with_size("large"), 1));
        cart.add_item_with_options(&latte, with(SelectedOptions::new().with_sugar_level("less"), 1));

        assert_eq!(cart.line_count(), 3);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_plain_add_and_default_options_share_a_line() {
        let mut cart = Cart::new();
        let latte = drink("1", 650);

        cart.add_item(&latte, 1);
        cart.add_item_with_options(&latte, with(SelectedOptions::new(), 2));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.get(&EntryKey::plain("1")).map(CartEntry::quantity), Some(3));
    }

    #[test]
    fn test_whitespace_in_options_still_merges() {
        let mut cart = Cart::new();
        let latte = drink("1", 650);

        cart.add_item_with_options(&latte, with(SelectedOptions::new().with_size("large"), 1));
        cart.add_item_with_options(&latte, with(SelectedOptions::new().with_size(" large"), 1));

        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let mut cart = Cart::new();
        cart.add_item(&drink("1", 650), 1);

        assert!(cart.update_quantity(&EntryKey::plain("1"), 4));
        assert_eq!(cart.item_count(), 4);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add_item(&drink("1", 650), 3);
        cart.add_item(&drink("2", 500), 1);
        assert_eq!(cart.item_count(), 4);

        assert!(cart.update_quantity(&EntryKey::plain("1"), 0));
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_update_quantity_negative_removes() {
        let mut cart = Cart::new();
        cart.add_item(&drink("1", 650), 3);

        assert!(cart.update_quantity(&EntryKey::plain("1"), -2));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_unknown_key_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&drink("1", 650), 1);

        assert!(!cart.update_quantity(&EntryKey::plain("99"), 5));
        assert!(!cart.update_quantity(&EntryKey::plain("99"), 0));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_large_quantities_add_up() {
        let mut cart = Cart::new();
        let latte = drink("1", 650);

        cart.add_item(&latte, 600);
        cart.add_item(&latte, 600);
        assert_eq!(cart.item_count(), 1200);
        assert_eq!(cart.total(), Money::from_cents(650 * 1200));

        cart.update_quantity(&EntryKey::plain("1"), 1500);
        assert_eq!(cart.item_count(), 1500);
    }

    #[test]
    fn test_huge_quantities_saturate() {
        let mut cart = Cart::new();
        cart.add_item(&drink("1", 650), u32::MAX);
        cart.add_item(&drink("1", 650), 10);
        cart.add_item(&drink("2", 650), u32::MAX);

        assert_eq!(cart.get(&EntryKey::plain("1")).map(CartEntry::quantity), Some(u32::MAX));
        assert_eq!(cart.item_count(), u32::MAX);

        cart.update_quantity(&EntryKey::plain("2"), i64::MAX);
        assert_eq!(cart.get(&EntryKey::plain("2")).map(CartEntry::quantity), Some(u32::MAX));
    }

    #[test]
    fn test_set_and_clear_note() {
        let mut cart = Cart::new();
        cart.add_item(&drink("1", 650), 1);
        let key = EntryKey::plain("1");

        assert!(cart.set_note(&key, "  less ice please "));
        assert_eq!(cart.get(&key).and_then(CartEntry::note), Some("less ice please"));

        assert!(cart.set_note(&key, "   "));
        assert_eq!(cart.get(&key).and_then(CartEntry::note), None);
    }

    #[test]
    fn test_note_on_unknown_key_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&drink("1", 650), 1);

        assert!(!cart.set_note(&EntryKey::plain("2"), "extra hot"));
        assert!(cart.entries().iter().all(|e| e.note().is_none()));
    }

    #[test]
    fn test_note_does_not_affect_merging() {
        let mut cart = Cart::new();
        let latte = drink("1", 650);
        let opts = SelectedOptions::new().with_size("large");

        cart.add_item_with_options(&latte, with(opts.clone(), 1));
        cart.set_note(&EntryKey::new("1", opts.clone()), "oat milk");
        let entry = cart.add_item_with_options(&latte, with(opts, 2));

        assert_eq!(entry.quantity(), 3);
        assert_eq!(entry.note(), Some("oat milk"));
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        cart.add_item(&drink("1", 650), 2);

        let removed = cart.remove_item(&EntryKey::plain("1"));
        assert_eq!(removed.map(|e| e.quantity()), Some(2));
        assert!(cart.remove_item(&EntryKey::plain("1")).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_clear() {
        let mut cart = Cart::new();
        cart.add_item(&drink("1", 650), 2);
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_line_total_example() {
        let mut cart = Cart::new();
        let opts = SelectedOptions::new().with_size("large").with_topping("cinnamon");
        let entry = cart.add_item_with_options(&drink("1", 650), with(opts, 2));

        assert_eq!(entry.unit_price(), Money::from_cents(800));
        assert_eq!(entry.line_total(), Money::from_cents(1600));
    }

    #[test]
    fn test_two_line_total_example() {
        let mut cart = Cart::new();
        let opts = SelectedOptions::new().with_size("large").with_topping("cinnamon");
        cart.add_item_with_options(&drink("1", 650), with(opts, 2));

        let plain = CatalogItem::new("4", "Cappuccino", Money::from_cents(550), "", Category::Coffee);
        cart.add_item(&plain, 1);

        assert_eq!(cart.total(), Money::from_cents(2150));
        assert_eq!(cart.total().to_string(), "$21.50");
    }

    #[test]
    fn test_item_count_matches_sum_of_lines() {
        let mut cart = Cart::new();
        let items = [drink("1", 650), drink("2", 650), drink("3", 700)];
        let sizes = ["small", "medium", "large"];

        for (round, qty) in [1u32, 2, 3, 1, 4, 2, 5].iter().enumerate() {
            let item = &items[round % items.len()];
            if round % 2 == 0 {
                cart.add_item(item, *qty);
            } else {
                let opts = SelectedOptions::new().with_size(sizes[round % sizes.len()]);
                cart.add_item_with_options(item, with(opts, *qty));
            }
        }

        let by_lines: u32 = cart.entries().iter().map(CartEntry::quantity).sum();
        assert_eq!(cart.item_count(), by_lines);
        assert_eq!(cart.item_count(), 18);
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add_item(&drink("2", 650), 1);
        cart.add_item(&drink("1", 650), 1);
        cart.add_item(&drink("2", 650), 1);

        let ids: Vec<&str> = cart.entries().iter().map(|e| e.item().id.as_str()).collect();
        assert_eq!(ids, ["2", "1"]);
        assert_eq!(cart.key_at(1), Some(EntryKey::plain("1")));
        assert_eq!(cart.key_at(2), None);
    }

    #[test]
    fn test_line_snapshot_survives_catalog_change() {
        let mut cart = Cart::new();
        let mut latte = drink("1", 650);
        cart.add_item(&latte, 1);

        latte.price = Money::from_cents(9999);
        assert_eq!(cart.total(), Money::from_cents(650));
    }
}
