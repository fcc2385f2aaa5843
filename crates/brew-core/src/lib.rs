//! # brew-core: Pure Business Logic for the Coffee Storefront
//!
//! This crate holds everything the storefront screens compute: prices,
//! the cart, vouchers, favorites and orders. It performs no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Brew Cart Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │          Screens (React Native) / brew shell (apps/cli)         │   │
//! │  │    Home ──► Details ──► Cart ──► Orders ──► Profile             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &mut ShopStore                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ brew-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐   │   │
//! │  │   │  types  │ │ options │ │ pricing │ │  cart   │ │ voucher │   │   │
//! │  │   │ Catalog │ │ EntryKey│ │ size /  │ │ Cart    │ │ Summary │   │   │
//! │  │   │ Item    │ │         │ │ toppings│ │ Entry   │ │         │   │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘   │   │
//! │  │                                                                 │   │
//! │  │   store: ShopStore owns catalog, cart, favorites, orders       │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO GLOBAL STATE                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalogue items, variant options, stores, customer
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`options`] - Selected options and the cart line key
//! - [`pricing`] - Unit price, topping surcharge, line total
//! - [`cart`] - The cart and its lines
//! - [`voucher`] - Demo discount codes and the cart summary
//! - [`order`] - Orders and the order book
//! - [`store`] - `ShopStore`, the owned state object
//! - [`error`] - Domain error types
//! - [`validation`] - Quantity and voucher code normalization
//!
//! ## Example Usage
//!
//! ```rust
//! use brew_core::{CartItemOptions, Money, SelectedOptions, ShopStore};
//!
//! let mut shop = ShopStore::demo();
//!
//! // Large Ice Caffe Latte with cinnamon, two cups
//! let opts = SelectedOptions::new().with_size("large").with_topping("cinnamon");
//! shop.add_by_id("1", CartItemOptions::new(opts, 2)).unwrap();
//!
//! // Plain Cappuccino
//! let cappuccino = shop.catalog().get("4").unwrap().clone();
//! shop.add_item(&cappuccino, 1);
//!
//! assert_eq!(shop.item_count(), 3);
//! assert_eq!(shop.cart_total(), Money::from_cents(2150)); // $16.00 + $5.50
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod favorites;
pub mod money;
pub mod options;
pub mod order;
pub mod pricing;
pub mod store;
pub mod types;
pub mod validation;
pub mod voucher;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartEntry};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use favorites::Favorites;
pub use money::Money;
pub use options::{CartItemOptions, EntryKey, SelectedOptions};
pub use order::{Order, OrderBook, OrderLine, OrderStatus, OrderType};
pub use store::ShopStore;
pub use types::*;
pub use voucher::{CartSummary, Voucher, VoucherKind};
