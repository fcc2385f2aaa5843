//! # Orders
//!
//! The orders screen: three tabs (active, completed, cancelled) over a list
//! of orders. Checkout appends to it; nothing is sent anywhere and no
//! payment is taken.
//!
//! ## Checkout Snapshot
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart ──► OrderLine per CartEntry (name, options, qty, line total)      │
//! │       ──► CartSummary (subtotal, discount, total)                       │
//! │       ──► Order { status: Active, location: selected store }            │
//! │                                                                         │
//! │  The cart is cleared afterwards; the order keeps its own copy.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::{Cart, CartEntry};
use crate::error::ValidationError;
use crate::money::Money;
use crate::options::SelectedOptions;
use crate::types::Store;
use crate::voucher::CartSummary;

// =============================================================================
// Status & Type
// =============================================================================

/// Which tab an order appears under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Active,
    Completed,
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Active => "active",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

impl FromStr for OrderStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(OrderStatus::Active),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" | "canceled" => Ok(OrderStatus::Cancelled),
            other => Err(ValidationError::InvalidFormat {
                field: "order status".to_string(),
                reason: format!("unknown status '{}'", other),
            }),
        }
    }
}

/// Where the customer drinks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum OrderType {
    #[default]
    #[serde(rename = "Sit In")]
    SitIn,
    #[serde(rename = "To Go")]
    ToGo,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::SitIn => f.write_str("Sit In"),
            OrderType::ToGo => f.write_str("To Go"),
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// A frozen cart line inside an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub item_id: String,
    pub name: String,
    pub options: SelectedOptions,
    pub quantity: u32,
    pub unit_price: Money,
    pub line_total: Money,
    #[serde(default)]
    pub note: Option<String>,
}

impl From<&CartEntry> for OrderLine {
    fn from(entry: &CartEntry) -> Self {
        OrderLine {
            item_id: entry.item().id.clone(),
            name: entry.item().name.clone(),
            options: entry.options().clone(),
            quantity: entry.quantity(),
            unit_price: entry.unit_price(),
            line_total: entry.line_total(),
            note: entry.note().map(str::to_string),
        }
    }
}

/// An order on the orders screen.
///
/// The demo orders carry no lines and zero totals; only orders placed
/// through checkout have a basket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    /// Headline shown on the order card (first drink's name).
    pub name: String,
    /// Store name the order is collected from.
    pub location: String,
    pub status: OrderStatus,
    pub order_type: OrderType,
    pub rated: bool,
    pub lines: Vec<OrderLine>,
    pub subtotal: Money,
    pub discount: Money,
    pub total: Money,
    #[ts(as = "Option<String>")]
    pub placed_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Snapshots a non-empty cart into a new active order.
    ///
    /// Returns `None` for an empty cart; there is nothing to order.
    pub fn from_cart(cart: &Cart, summary: &CartSummary, store: &Store, order_type: OrderType) -> Option<Order> {
        let first = cart.entries().first()?;
        let name = match cart.line_count() {
            1 => first.item().name.clone(),
            n => format!("{} +{} more", first.item().name, n - 1),
        };

        Some(Order {
            id: Uuid::new_v4().to_string(),
            name,
            location: store.name.clone(),
            status: OrderStatus::Active,
            order_type,
            rated: false,
            lines: cart.entries().iter().map(OrderLine::from).collect(),
            subtotal: summary.subtotal,
            discount: summary.discount,
            total: summary.total,
            placed_at: Some(Utc::now()),
        })
    }

    fn demo(id: usize, status: OrderStatus, order_type: OrderType) -> Order {
        Order {
            id: id.to_string(),
            name: "Café Bombón".to_string(),
            location: "Sanctuary Brew".to_string(),
            status,
            order_type,
            rated: true,
            lines: Vec::new(),
            subtotal: Money::zero(),
            discount: Money::zero(),
            total: Money::zero(),
            placed_at: None,
        }
    }
}

// =============================================================================
// Order Book
// =============================================================================

/// All orders known to this session, newest last.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nine sample orders, three per tab.
    pub fn demo() -> Self {
        let tabs = [
            (OrderStatus::Active, OrderType::SitIn),
            (OrderStatus::Completed, OrderType::ToGo),
            (OrderStatus::Cancelled, OrderType::ToGo),
        ];

        let orders = tabs
            .iter()
            .flat_map(|tab| std::iter::repeat(*tab).take(3))
            .enumerate()
            .map(|(i, (status, order_type))| Order::demo(i + 1, status, order_type))
            .collect();

        OrderBook { orders }
    }

    pub fn push(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Orders under one tab, oldest first.
    pub fn by_status(&self, status: OrderStatus) -> impl Iterator<Item = &Order> {
        self.orders.iter().filter(move |o| o.status == status)
    }

    pub fn get(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn all(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
