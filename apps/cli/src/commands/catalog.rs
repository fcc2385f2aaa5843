//! # Catalogue Commands
//!
//! The home, details and profile screens.

use std::fmt::{self, Write};

use brew_core::{CatalogItem, CategoryFilter, ShopStore};
use tracing::{debug, info};

use super::CommandResult;
use crate::config::ShopConfig;

/// Lists drinks under a category tab, marking favorites with `*`.
///
/// ```text
/// Coffee Based
///     1  Ice Caffe Latte        $6.50  *
///     2  Espresso               $6.50
/// ```
pub fn menu(store: &ShopStore, config: &ShopConfig, filter: CategoryFilter) -> CommandResult {
    debug!(%filter, "menu command");

    let mut out = format!("{}\n", filter);
    let mut shown = 0;
    for item in store.catalog().filter(filter) {
        let mark = if store.is_favorite(&item.id) { "  *" } else { "" };
        writeln!(
            out,
            "  {:>3}  {:<22} {:>8}{}",
            item.id,
            item.name,
            config.format_currency(item.price),
            mark
        )?;
        shown += 1;
    }

    if shown == 0 {
        out.push_str("  (nothing here yet)\n");
    }
    Ok(out)
}

/// Shows one drink with every option and its price.
pub fn show(store: &ShopStore, config: &ShopConfig, item_id: &str) -> CommandResult {
    debug!(item_id, "show command");

    let item = store.catalog().get(item_id)?;
    Ok(render_item(item, config, store.is_favorite(&item.id))?)
}

fn render_item(item: &CatalogItem, config: &ShopConfig, favorite: bool) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let heart = if favorite { " *" } else { "" };
    writeln!(out, "{} ({}){}", item.name, item.id, heart)?;
    if let Some(description) = &item.description {
        writeln!(out, "  {}", description)?;
    }
    writeln!(out, "  base price   {}", config.format_currency(item.price))?;

    if let Some(sizes) = &item.sizes {
        writeln!(out, "  sizes")?;
        for size in sizes {
            writeln!(
                out,
                "    {:<16} {:<20} {}",
                size.id,
                size.name,
                config.format_currency(size.price)
            )?;
        }
    }
    if let Some(temperatures) = &item.temperatures {
        writeln!(out, "  temperatures")?;
        for temp in temperatures {
            let note = if temp.available { "" } else { " (unavailable)" };
            writeln!(out, "    {:<16} {}{}", temp.id, temp.name, note)?;
        }
    }
    if let Some(levels) = &item.sugar_levels {
        writeln!(out, "  sugar")?;
        for level in levels {
            writeln!(out, "    {:<16} {}", level.id, level.name)?;
        }
    }
    if let Some(toppings) = &item.toppings {
        writeln!(out, "  toppings")?;
        for topping in toppings {
            writeln!(
                out,
                "    {:<16} {:<20} +{}",
                topping.id,
                topping.name,
                config.format_currency(topping.price)
            )?;
        }
    }
    Ok(out)
}

/// Toggles the heart on a drink.
pub fn toggle_favorite(store: &mut ShopStore, item_id: &str) -> CommandResult {
    debug!(item_id, "toggle_favorite command");

    let name = store.catalog().get(item_id)?.name.clone();
    let now_favorite = store.toggle_favorite(item_id.trim());
    info!(item_id, favorite = now_favorite, "favorite toggled");

    Ok(if now_favorite {
        format!("Added {} to favorites\n", name)
    } else {
        format!("Removed {} from favorites\n", name)
    })
}

/// Lists favorite drinks.
pub fn favorites(store: &ShopStore, config: &ShopConfig) -> CommandResult {
    debug!("favorites command");

    if store.favorites().is_empty() {
        return Ok("No favorites yet\n".to_string());
    }

    let mut out = String::from("Favorites\n");
    for id in store.favorites().iter() {
        match store.catalog().get(id) {
            Ok(item) => {
                writeln!(
                    out,
                    "  {:>3}  {:<22} {:>8}",
                    item.id,
                    item.name,
                    config.format_currency(item.price)
                )?;
            }
            Err(_) => {
                writeln!(out, "  {:>3}  (no longer on the menu)", id)?;
            }
        }
    }
    Ok(out)
}

/// The profile screen: customer, points, selected store.
pub fn profile(store: &ShopStore) -> CommandResult {
    debug!("profile command");

    let customer = store.customer();
    let selected = store.selected_store();
    Ok(format!(
        "{}\n  You have {} points\n  Ordering from {}\n",
        customer.name, customer.points, selected.name
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_default_tab() {
        let store = ShopStore::demo();
        let out = menu(&store, &ShopConfig::default(), CategoryFilter::CoffeeBased).unwrap();
        assert!(out.starts_with("Coffee Based\n"));
        assert!(out.contains("Ice Caffe Latte"));
        assert!(out.contains("$5.50"));
        assert!(!out.contains("Mango Smoothie"));
    }

    #[test]
    fn test_menu_marks_favorites() {
        let mut store = ShopStore::demo();
        store.toggle_favorite("5");
        let out = menu(&store, &ShopConfig::default(), CategoryFilter::Smoothies).unwrap();
        assert!(out.contains("Mango Smoothie"));
        assert!(out.trim_end().ends_with('*'));
    }

    #[test]
    fn test_show_lists_options() {
        let store = ShopStore::demo();
        let out = show(&store, &ShopConfig::default(), "1").unwrap();
        assert!(out.contains("large"));
        assert!(out.contains("$7.50"));
        assert!(out.contains("whipped-cream"));
        assert!(out.contains("no-sugar"));
    }

    #[test]
    fn test_show_unknown_item() {
        let store = ShopStore::demo();
        let err = show(&store, &ShopConfig::default(), "42").unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::NotFound);
    }

    #[test]
    fn test_toggle_favorite_roundtrip() {
        let mut store = ShopStore::demo();
        let added = toggle_favorite(&mut store, "2").unwrap();
        assert_eq!(added, "Added Espresso to favorites\n");

        let listed = favorites(&store, &ShopConfig::default()).unwrap();
        assert!(listed.contains("Espresso"));

        let removed = toggle_favorite(&mut store, "2").unwrap();
        assert_eq!(removed, "Removed Espresso from favorites\n");
        assert_eq!(favorites(&store, &ShopConfig::default()).unwrap(), "No favorites yet\n");
    }

    #[test]
    fn test_toggle_unknown_favorite() {
        let mut store = ShopStore::demo();
        assert!(toggle_favorite(&mut store, "77").is_err());
        assert!(store.favorites().is_empty());
    }

    #[test]
    fn test_profile() {
        let store = ShopStore::demo();
        let out = profile(&store).unwrap();
        assert!(out.contains("John Doe"));
        assert!(out.contains("You have 1 points"));
        assert!(out.contains("CIPLAZ Garut"));
    }
}
