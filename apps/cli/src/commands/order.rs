//! # Order Commands
//!
//! Store selection, checkout and the orders screen.

use std::fmt::Write;

use brew_core::{Order, OrderStatus, OrderType, ShopStore};
use tracing::{debug, info};

use super::CommandResult;
use crate::config::ShopConfig;

/// Lists shop locations, marking the selected one.
pub fn list_stores(store: &ShopStore) -> CommandResult {
    debug!("list_stores command");

    let selected = &store.selected_store().id;
    let mut out = String::from("Stores\n");
    for location in store.stores() {
        let mark = if &location.id == selected { ">" } else { " " };
        writeln!(out, "  {} {}  {}", mark, location.id, location.name)?;
        writeln!(out, "       {}", location.address)?;
    }
    Ok(out)
}

/// Selects the store orders are collected from.
pub fn select_store(store: &mut ShopStore, store_id: &str) -> CommandResult {
    debug!(store_id, "select_store command");

    let name = store.select_store(store_id)?.name.clone();
    info!(store_id, "store selected");
    Ok(format!("Ordering from {}\n", name))
}

/// Places the cart as an order. No payment is taken.
pub fn checkout(store: &mut ShopStore, config: &ShopConfig, order_type: OrderType) -> CommandResult {
    debug!(%order_type, "checkout command");

    let Some(order) = store.checkout(order_type) else {
        return Ok("Your cart is empty\n".to_string());
    };
    info!(order_id = %order.id, total = order.total.cents(), "order placed");

    Ok(format!(
        "Order placed: {} ({}) at {}\n  Total {} (payment not processed)\n",
        order.name,
        order.order_type,
        order.location,
        config.format_currency(order.total)
    ))
}

/// Lists orders under one tab.
pub fn list_orders(store: &ShopStore, config: &ShopConfig, status: OrderStatus) -> CommandResult {
    debug!(%status, "list_orders command");

    let orders: Vec<&Order> = store.orders().by_status(status).collect();
    if orders.is_empty() {
        return Ok(format!("No {} orders\n", status));
    }

    let mut out = format!("{} orders\n", status);
    for order in orders {
        write!(
            out,
            "  {:<8} {:<28} {:<26} {}",
            short_id(&order.id),
            order.name,
            order.location,
            order.order_type
        )?;
        if !order.lines.is_empty() {
            write!(out, "  {}", config.format_currency(order.total))?;
        }
        out.push('\n');
    }
    Ok(out)
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use brew_core::{CartItemOptions, SelectedOptions};

    #[test]
    fn test_list_and_select_stores() {
        let mut store = ShopStore::demo();
        let out = list_stores(&store).unwrap();
        assert!(out.contains("> 1  CIPLAZ Garut, Garut Kota"));

        assert_eq!(select_store(&mut store, "3").unwrap(), "Ordering from CIPLAZ Jakarta, Senopati\n");
        assert!(list_stores(&store).unwrap().contains("> 3"));
        assert!(select_store(&mut store, "8").is_err());
    }

    #[test]
    fn test_checkout_empty() {
        let mut store = ShopStore::demo();
        let out = checkout(&mut store, &ShopConfig::default(), OrderType::SitIn).unwrap();
        assert_eq!(out, "Your cart is empty\n");
    }

    #[test]
    fn test_checkout_then_list() {
        let mut store = ShopStore::demo();
        let config = ShopConfig::default();
        store
            .add_by_id("6", CartItemOptions::new(SelectedOptions::new(), 2))
            .unwrap();

        let out = checkout(&mut store, &config, OrderType::ToGo).unwrap();
        assert!(out.contains("Green Tea Latte (To Go)"));
        assert!(out.contains("$12.00"));
        assert!(store.cart().is_empty());

        let active = list_orders(&store, &config, OrderStatus::Active).unwrap();
        assert!(active.starts_with("active orders\n"));
        assert!(active.contains("Green Tea Latte"));
        assert_eq!(active.lines().count(), 5);
    }

    #[test]
    fn test_list_completed() {
        let store = ShopStore::demo();
        let out = list_orders(&store, &ShopConfig::default(), OrderStatus::Completed).unwrap();
        assert_eq!(out.matches("Café Bombón").count(), 3);
    }

    #[test]
    fn test_no_orders_in_tab() {
        let store = ShopStore::default();
        let out = list_orders(&store, &ShopConfig::default(), OrderStatus::Cancelled).unwrap();
        assert_eq!(out, "No cancelled orders\n");
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("1"), "1");
        assert_eq!(short_id("0f8e4c1a-aaaa"), "0f8e4c1a");
    }
}
