//! # Shop Store
//!
//! The single owned state object behind every screen.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         ShopStore                                       │
//! │                                                                         │
//! │  ┌──────────┐ ┌──────────┐ ┌───────────┐ ┌──────────┐ ┌─────────────┐  │
//! │  │ Catalog  │ │   Cart   │ │ Favorites │ │ Voucher? │ │  OrderBook  │  │
//! │  │ (static) │ │          │ │           │ │          │ │             │  │
//! │  └──────────┘ └──────────┘ └───────────┘ └──────────┘ └─────────────┘  │
//! │                                                                         │
//! │  customer, stores, selected store                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//!           ▲
//!           │ &mut ShopStore, passed in by whoever owns it
//!           │
//!     screen / shell command
//! ```
//!
//! There is no global instance. The application constructs one `ShopStore`
//! and hands a reference to each command, so exactly one writer exists and
//! no locking is needed.

use crate::cart::{Cart, CartEntry};
use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::favorites::Favorites;
use crate::money::Money;
use crate::options::{CartItemOptions, EntryKey};
use crate::order::{Order, OrderBook, OrderType};
use crate::types::{CatalogItem, Customer, Store};
use crate::voucher::{CartSummary, Voucher};

#[derive(Debug, Clone)]
pub struct ShopStore {
    catalog: Catalog,
    cart: Cart,
    favorites: Favorites,
    customer: Customer,
    stores: Vec<Store>,
    selected_store: usize,
    voucher: Option<Voucher>,
    orders: OrderBook,
}

impl ShopStore {
    /// Creates a store over `catalog` and `stores`.
    ///
    /// The first store is selected. `stores` falls back to the demo
    /// locations when empty, so a store is always selected.
    pub fn new(catalog: Catalog, stores: Vec<Store>, customer: Customer) -> Self {
        let stores = if stores.is_empty() {
            Store::demo_stores()
        } else {
            stores
        };

        ShopStore {
            catalog,
            cart: Cart::new(),
            favorites: Favorites::new(),
            customer,
            stores,
            selected_store: 0,
            voucher: None,
            orders: OrderBook::new(),
        }
    }

    /// Demo catalogue, demo stores, demo orders, default customer.
    pub fn demo() -> Self {
        ShopStore::new(Catalog::demo(), Store::demo_stores(), Customer::default())
            .with_orders(OrderBook::demo())
    }

    /// Replaces the order history.
    pub fn with_orders(mut self, orders: OrderBook) -> Self {
        self.orders = orders;
        self
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Adds `quantity` cups of `item` with no options chosen.
    pub fn add_item(&mut self, item: &CatalogItem, quantity: u32) -> &CartEntry {
        self.cart.add_item(item, quantity)
    }

    /// Adds a configured drink, merging with an identical line if present.
    pub fn add_item_with_options(&mut self, item: &CatalogItem, options: CartItemOptions) -> &CartEntry {
        self.cart.add_item_with_options(item, options)
    }

    /// Resolves `item_id` in the catalogue, then adds it with `options`.
    ///
    /// Fails only when the id is not in the catalogue.
    pub fn add_by_id(&mut self, item_id: &str, options: CartItemOptions) -> CoreResult<&CartEntry> {
        let item = self.catalog.get(item_id)?;
        Ok(self.cart.add_item_with_options(item, options))
    }

    /// Sets a line's quantity; `<= 0` removes it. Unknown keys are ignored.
    pub fn update_quantity(&mut self, key: &EntryKey, quantity: i64) -> bool {
        self.cart.update_quantity(key, quantity)
    }

    /// Sets or clears a line's order note. Unknown keys are ignored.
    pub fn set_note(&mut self, key: &EntryKey, note: &str) -> bool {
        self.cart.set_note(key, note)
    }

    /// Removes a line. Unknown keys are ignored.
    pub fn remove_item(&mut self, key: &EntryKey) -> Option<CartEntry> {
        self.cart.remove_item(key)
    }

    /// Empties the cart. An applied voucher stays applied.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Total cups in the cart.
    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }

    /// Sum of line totals, before any voucher.
    pub fn cart_total(&self) -> Money {
        self.cart.total()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    // =========================================================================
    // Favorites
    // =========================================================================

    /// Flips the favorite flag on `item_id`; returns the new state.
    pub fn toggle_favorite(&mut self, item_id: &str) -> bool {
        self.favorites.toggle(item_id)
    }

    pub fn is_favorite(&self, item_id: &str) -> bool {
        self.favorites.contains(item_id)
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    // =========================================================================
    // Vouchers & Totals
    // =========================================================================

    /// Applies a voucher code, replacing any previously applied one.
    pub fn apply_voucher(&mut self, code: &str) -> CoreResult<&Voucher> {
        let voucher = Voucher::lookup(code)?;
        let applied: &Voucher = self.voucher.insert(voucher);
        Ok(applied)
    }

    /// Removes the applied voucher, returning it.
    pub fn remove_voucher(&mut self) -> Option<Voucher> {
        self.voucher.take()
    }

    pub fn voucher(&self) -> Option<&Voucher> {
        self.voucher.as_ref()
    }

    /// Subtotal, discount and payable total.
    pub fn summary(&self) -> CartSummary {
        CartSummary::new(&self.cart, self.voucher.as_ref())
    }

    // =========================================================================
    // Stores, Customer, Catalogue
    // =========================================================================

    /// Selects the store with `store_id`.
    pub fn select_store(&mut self, store_id: &str) -> CoreResult<&Store> {
        let index = self
            .stores
            .iter()
            .position(|s| s.id == store_id.trim())
            .ok_or_else(|| CoreError::StoreNotFound(store_id.to_string()))?;
        self.selected_store = index;
        Ok(&self.stores[index])
    }

    pub fn selected_store(&self) -> &Store {
        &self.stores[self.selected_store]
    }

    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // =========================================================================
    // Checkout & Orders
    // =========================================================================

    /// Turns the cart into an active order at the selected store.
    ///
    /// ## Behavior
    /// - Empty cart: returns `None`, nothing changes
    /// - Otherwise: order recorded, cart cleared, voucher consumed
    ///
    /// No payment is processed.
    pub fn checkout(&mut self, order_type: OrderType) -> Option<&Order> {
        let summary = self.summary();
        let order = Order::from_cart(&self.cart, &summary, self.selected_store(), order_type)?;

        self.cart.clear();
        self.voucher = None;
        self.orders.push(order);
        self.orders.all().last()
    }

    pub fn orders(&self) -> &OrderBook {
        &self.orders
    }
}

impl Default for ShopStore {
    fn default() -> Self {
        ShopStore::new(Catalog::default(), Vec::new(), Customer::default())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
