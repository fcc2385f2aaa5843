//! # Shell Commands
//!
//! Every command the `brew` shell understands.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── catalog.rs  ◄─── menu, show, fav, favs, profile
//! ├── cart.rs     ◄─── add, cart, qty, note, remove, clear, voucher, unvoucher
//! └── order.rs    ◄─── stores, store, checkout, orders
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Read-only catalogue access
//! fn menu(store: &ShopStore, config: &ShopConfig, ...)
//!
//! // Mutates the cart
//! fn add_to_cart(store: &mut ShopStore, config: &ShopConfig, ...)
//! ```
//!
//! Commands return the text to print. They never print themselves, so the
//! shell decides where output goes.

pub mod cart;
pub mod catalog;
pub mod order;

use crate::error::CliError;

/// Result of a shell command: the text to show.
pub type CommandResult = Result<String, CliError>;
