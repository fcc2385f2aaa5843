//! # Cart Commands
//!
//! The details screen's "Add to cart" button and everything on the cart
//! screen.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Voucher  │────►│  Order   │       │
//! │  │  Cart    │     │          │     │ applied  │     │ (active) │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                 ▲              │
//! │                   add, qty, remove                   checkout          │
//! │                        │                             (order.rs)        │
//! │                        ▼                                                │
//! │                      clear ──────────────────────► (back to empty)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lines are addressed by their 1-based position in the `cart` listing.
//! A line's order note (`note`) does not change which line later adds merge
//! into.

use std::fmt::Write;

use brew_core::{
    CartEntry, CartItemOptions, CartSummary, CatalogItem, EntryKey, Money, SelectedOptions, ShopStore,
};
use clap::Args;
use serde::Serialize;
use tracing::{debug, info};

use super::CommandResult;
use crate::config::ShopConfig;
use crate::error::CliError;

/// Arguments of the `add` command.
#[derive(Debug, Clone, Default, Args)]
pub struct AddArgs {
    /// Catalogue item id
    pub item_id: String,

    /// Size id (e.g. small, medium, large)
    #[arg(long)]
    pub size: Option<String>,

    /// Temperature id (e.g. hot, cold)
    #[arg(long = "temp")]
    pub temperature: Option<String>,

    /// Sugar level id (e.g. normal, less, no-sugar)
    #[arg(long)]
    pub sugar: Option<String>,

    /// Topping id; repeat for several
    #[arg(long = "topping")]
    pub toppings: Vec<String>,

    /// Number of cups
    #[arg(long = "qty", short = 'q', default_value_t = 1)]
    pub quantity: u32,
}

impl AddArgs {
    fn selection(&self) -> SelectedOptions {
        let mut selection = SelectedOptions::new().with_toppings(self.toppings.iter().cloned());
        selection.size = self.size.clone();
        selection.temperature = self.temperature.clone();
        selection.sugar_level = self.sugar.clone();
        selection.normalized()
    }
}

/// One rendered cart line.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub line: usize,
    pub key: String,
    pub name: String,
    pub options: SelectedOptions,
    pub quantity: u32,
    pub unit_price: Money,
    pub line_total: Money,
    pub note: Option<String>,
}

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLineView>,
    pub summary: CartSummary,
}

impl From<&ShopStore> for CartResponse {
    fn from(store: &ShopStore) -> Self {
        let lines = store
            .cart()
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| CartLineView {
                line: i + 1,
                key: entry.key().to_string(),
                name: entry.item().name.clone(),
                options: entry.options().clone(),
                quantity: entry.quantity(),
                unit_price: entry.unit_price(),
                line_total: entry.line_total(),
                note: entry.note().map(str::to_string),
            })
            .collect();

        CartResponse {
            lines,
            summary: store.summary(),
        }
    }
}

/// Checks every chosen option against what the drink offers.
///
/// The core prices unknown ids as if they were not chosen; the shell
/// rejects them instead so a typo does not silently become a plain drink.
fn check_selection(item: &CatalogItem, selection: &SelectedOptions) -> Result<(), CliError> {
    let not_offered = |kind: &str, id: &str| {
        CliError::validation(format!("'{}' is not a {} of {}", id, kind, item.name))
    };

    if let Some(size) = &selection.size {
        if item.size(size).is_none() {
            return Err(not_offered("size", size));
        }
    }

    if let Some(temp) = &selection.temperature {
        let offered = item
            .temperatures
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|t| &t.id == temp);
        match offered {
            None => return Err(not_offered("temperature", temp)),
            Some(t) if !t.available => {
                return Err(CliError::validation(format!(
                    "{} is not available {}",
                    item.name,
                    t.name.to_lowercase()
                )))
            }
            Some(_) => {}
        }
    }

    if let Some(sugar) = &selection.sugar_level {
        let offered = item
            .sugar_levels
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(|s| &s.id == sugar);
        if !offered {
            return Err(not_offered("sugar level", sugar));
        }
    }

    for topping in &selection.toppings {
        if item.topping(topping).is_none() {
            return Err(not_offered("topping", topping));
        }
    }

    Ok(())
}

/// Adds a drink to the cart.
///
/// ## Behavior
/// - No options given: quick add, merges with the plain line for the drink
/// - Options given: merges with an identical configuration or adds a line
pub fn add_to_cart(store: &mut ShopStore, config: &ShopConfig, args: &AddArgs) -> CommandResult {
    let selection = args.selection();
    debug!(item_id = %args.item_id, options = %selection, quantity = args.quantity, "add_to_cart command");

    let item = store.catalog().get(&args.item_id)?.clone();
    check_selection(&item, &selection)?;

    let entry: &CartEntry = if selection.is_default() {
        store.add_item(&item, args.quantity)
    } else {
        store.add_item_with_options(&item, CartItemOptions::new(selection, args.quantity))
    };
    let line = format!(
        "{} x{} ({}) = {}",
        entry.item().name,
        entry.quantity(),
        entry.options(),
        config.format_currency(entry.line_total())
    );
    info!(key = %entry.key(), quantity = entry.quantity(), "cart line added");

    Ok(format!(
        "Added: {}\nCart: {} item(s), {}\n",
        line,
        store.item_count(),
        config.format_currency(store.cart_total())
    ))
}

/// Shows the cart lines and payment details.
pub fn show_cart(store: &ShopStore, config: &ShopConfig) -> CommandResult {
    debug!("show_cart command");

    if store.cart().is_empty() {
        return Ok("Your cart is empty\n".to_string());
    }

    let response = CartResponse::from(store);
    let mut out = String::new();
    for line in &response.lines {
        writeln!(
            out,
            "  {:>2}. {:<22} x{:<3} {:>9}",
            line.line,
            line.name,
            line.quantity,
            config.format_currency(line.line_total)
        )?;
        if !line.options.is_default() {
            writeln!(out, "      {}", line.options)?;
        }
        if let Some(note) = &line.note {
            writeln!(out, "      note: {}", note)?;
        }
    }

    let summary = &response.summary;
    writeln!(out, "  Subtotal ({} items)          {:>9}", summary.item_count, config.format_currency(summary.subtotal))?;
    if let Some(code) = &summary.voucher_code {
        writeln!(out, "  Discount ({})", code)?;
        writeln!(out, "                               -{:>8}", config.format_currency(summary.discount))?;
    }
    writeln!(out, "  Total                        {:>9}", config.format_currency(summary.total))?;
    Ok(out)
}

/// Shows the cart as JSON.
pub fn show_cart_json(store: &ShopStore) -> CommandResult {
    debug!("show_cart_json command");

    let response = CartResponse::from(store);
    serde_json::to_string_pretty(&response)
        .map(|json| json + "\n")
        .map_err(|e| CliError::validation(e.to_string()))
}

fn key_for_line(store: &ShopStore, line: usize) -> Option<EntryKey> {
    line.checked_sub(1).and_then(|index| store.cart().key_at(index))
}

/// Sets a line's quantity. Zero or less removes the line.
pub fn update_quantity(store: &mut ShopStore, config: &ShopConfig, line: usize, quantity: i64) -> CommandResult {
    debug!(line, quantity, "update_quantity command");

    let Some(key) = key_for_line(store, line) else {
        return Ok(format!("No line {} in the cart\n", line));
    };

    store.update_quantity(&key, quantity);
    info!(key = %key, quantity, "cart line updated");

    Ok(match store.cart().get(&key) {
        Some(entry) => format!(
            "Line {} now x{} = {}\n",
            line,
            entry.quantity(),
            config.format_currency(entry.line_total())
        ),
        None => format!("Removed line {}\n", line),
    })
}

/// Sets the order note of a line. Empty text clears it.
pub fn set_note(store: &mut ShopStore, line: usize, text: &str) -> CommandResult {
    debug!(line, "set_note command");

    let Some(key) = key_for_line(store, line) else {
        return Ok(format!("No line {} in the cart\n", line));
    };

    store.set_note(&key, text);
    info!(key = %key, "cart line note set");

    Ok(match store.cart().get(&key).and_then(|entry| entry.note()) {
        Some(note) => format!("Note for line {}: {}\n", line, note),
        None => format!("Cleared note for line {}\n", line),
    })
}

/// Removes a line.
pub fn remove_from_cart(store: &mut ShopStore, line: usize) -> CommandResult {
    debug!(line, "remove_from_cart command");

    let removed = key_for_line(store, line).and_then(|key| store.remove_item(&key));
    Ok(match removed {
        Some(entry) => {
            info!(key = %entry.key(), "cart line removed");
            format!("Removed {}\n", entry.item().name)
        }
        None => format!("No line {} in the cart\n", line),
    })
}

/// Clears all lines.
pub fn clear_cart(store: &mut ShopStore) -> CommandResult {
    debug!("clear_cart command");

    let had = store.item_count();
    store.clear_cart();
    info!(items = had, "cart cleared");
    Ok("Cart cleared\n".to_string())
}

/// Applies a voucher code.
pub fn apply_voucher(store: &mut ShopStore, config: &ShopConfig, code: &str) -> CommandResult {
    debug!(code, "apply_voucher command");

    let voucher = store.apply_voucher(code)?.clone();
    info!(code = %voucher.code, "voucher applied");

    let summary = store.summary();
    Ok(format!(
        "Voucher \"{}\" applied successfully!\n  Discount -{}  Total {}\n",
        voucher.code,
        config.format_currency(summary.discount),
        config.format_currency(summary.total)
    ))
}

/// Removes the applied voucher.
pub fn remove_voucher(store: &mut ShopStore) -> CommandResult {
    debug!("remove_voucher command");

    Ok(match store.remove_voucher() {
        Some(voucher) => format!("Removed voucher {}\n", voucher.code),
        None => "No voucher applied\n".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn add(item_id: &str) -> AddArgs {
        AddArgs {
            item_id: item_id.to_string(),
            quantity: 1,
            ..AddArgs::default()
        }
    }

    #[test]
    fn test_quick_add() {
        let mut store = ShopStore::demo();
        let out = add_to_cart(&mut store, &ShopConfig::default(), &add("4")).unwrap();
        assert!(out.contains("Cappuccino x1"));
        assert!(out.contains("Cart: 1 item(s), $5.50"));
    }

    #[test]
    fn test_add_with_options_merges() {
        let mut store = ShopStore::demo();
        let config = ShopConfig::default();
        let mut args = add("1");
        args.size = Some("large".to_string());
        args.toppings = vec!["cinnamon".to_string()];
        args.quantity = 1;

        add_to_cart(&mut store, &config, &args).unwrap();
        let out = add_to_cart(&mut store, &config, &args).unwrap();

        assert!(out.contains("x2"));
        assert!(out.contains("$16.00"));
        assert_eq!(store.cart().line_count(), 1);
    }

    #[test]
    fn test_add_rejects_unknown_option() {
        let mut store = ShopStore::demo();
        let mut args = add("2");
        args.size = Some("venti".to_string());

        let err = add_to_cart(&mut store, &ShopConfig::default(), &args).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "'venti' is not a size of Espresso");
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_add_unknown_item() {
        let mut store = ShopStore::demo();
        let err = add_to_cart(&mut store, &ShopConfig::default(), &add("99")).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_show_cart_with_voucher() {
        let mut store = ShopStore::demo();
        let config = ShopConfig::default();
        let mut large = add("1");
        large.size = Some("large".to_string());
        large.toppings = vec!["chocolate".to_string()];
        large.quantity = 2;
        add_to_cart(&mut store, &config, &large).unwrap();
        add_to_cart(&mut store, &config, &add("4")).unwrap();
        apply_voucher(&mut store, &config, "coffee10").unwrap();

        let out = show_cart(&store, &config).unwrap();
        assert!(out.contains("$21.50"));
        assert!(out.contains("Discount (COFFEE10)"));
        assert!(out.contains("$2.15"));
        assert!(out.contains("$19.35"));
    }

    #[test]
    fn test_show_empty_cart() {
        let store = ShopStore::demo();
        assert_eq!(show_cart(&store, &ShopConfig::default()).unwrap(), "Your cart is empty\n");
    }

    #[test]
    fn test_cart_json() {
        let mut store = ShopStore::demo();
        add_to_cart(&mut store, &ShopConfig::default(), &add("3")).unwrap();

        let json: serde_json::Value = serde_json::from_str(&show_cart_json(&store).unwrap()).unwrap();
        assert_eq!(json["lines"][0]["name"], "Cold Brew");
        assert_eq!(json["lines"][0]["lineTotal"], 700);
        assert_eq!(json["summary"]["total"], 700);
    }

    #[test]
    fn test_update_quantity_by_line() {
        let mut store = ShopStore::demo();
        let config = ShopConfig::default();
        add_to_cart(&mut store, &config, &add("2")).unwrap();

        let out = update_quantity(&mut store, &config, 1, 3).unwrap();
        assert_eq!(out, "Line 1 now x3 = $19.50\n");

        let out = update_quantity(&mut store, &config, 1, 0).unwrap();
        assert_eq!(out, "Removed line 1\n");
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_note_shows_in_cart_and_json() {
        let mut store = ShopStore::demo();
        let config = ShopConfig::default();
        add_to_cart(&mut store, &config, &add("1")).unwrap();

        assert_eq!(set_note(&mut store, 1, "  less ice ").unwrap(), "Note for line 1: less ice\n");
        assert!(show_cart(&store, &config).unwrap().contains("note: less ice"));

        let json: serde_json::Value = serde_json::from_str(&show_cart_json(&store).unwrap()).unwrap();
        assert_eq!(json["lines"][0]["note"], "less ice");

        assert_eq!(set_note(&mut store, 1, "").unwrap(), "Cleared note for line 1\n");
        assert!(!show_cart(&store, &config).unwrap().contains("note:"));
        assert_eq!(set_note(&mut store, 3, "hot").unwrap(), "No line 3 in the cart\n");
    }

    #[test]
    fn test_missing_lines_are_noops() {
        let mut store = ShopStore::demo();
        let config = ShopConfig::default();
        assert_eq!(update_quantity(&mut store, &config, 0, 2).unwrap(), "No line 0 in the cart\n");
        assert_eq!(remove_from_cart(&mut store, 4).unwrap(), "No line 4 in the cart\n");
    }

    #[test]
    fn test_remove_and_clear() {
        let mut store = ShopStore::demo();
        let config = ShopConfig::default();
        add_to_cart(&mut store, &config, &add("5")).unwrap();
        add_to_cart(&mut store, &config, &add("6")).unwrap();

        assert_eq!(remove_from_cart(&mut store, 1).unwrap(), "Removed Mango Smoothie\n");
        assert_eq!(store.item_count(), 1);

        clear_cart(&mut store).unwrap();
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_voucher_errors_and_removal() {
        let mut store = ShopStore::demo();
        let config = ShopConfig::default();

        let err = apply_voucher(&mut store, &config, "BOGUS").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidVoucher);

        assert_eq!(remove_voucher(&mut store).unwrap(), "No voucher applied\n");
        apply_voucher(&mut store, &config, "SAVE5").unwrap();
        assert_eq!(remove_voucher(&mut store).unwrap(), "Removed voucher SAVE5\n");
    }
}
