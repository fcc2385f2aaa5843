//! # Vouchers
//!
//! Demo discount codes and the checkout summary they feed into.
//!
//! ## Payment Details Block
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │  Subtotal                            $21.50    │  ◄── Cart::total()
//! │  Discount (COFFEE10)                 -$2.15    │  ◄── Voucher::discount()
//! │  ──────────────────────────────────────────    │
//! │  Total                               $19.35    │  ◄── never below $0.00
//! └────────────────────────────────────────────────┘
//! ```
//!
//! The codes are hardcoded. There is no backend to validate against.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::validate_voucher_code;

/// How a voucher reduces the subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum VoucherKind {
    /// Whole-number percent off the subtotal.
    Percentage(u32),
    /// Flat amount off, never more than the subtotal.
    Fixed(Money),
}

/// A recognised voucher code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Voucher {
    pub code: String,
    pub kind: VoucherKind,
}

const DEMO_VOUCHERS: &[(&str, VoucherKind)] = &[
    ("COFFEE10", VoucherKind::Percentage(10)),
    ("SAVE5", VoucherKind::Fixed(Money::from_cents(500))),
    ("WELCOME20", VoucherKind::Percentage(20)),
    ("FREESHIP", VoucherKind::Fixed(Money::from_cents(300))),
    ("SUMMER15", VoucherKind::Percentage(15)),
];

impl Voucher {
    /// Resolves a code typed by the customer.
    ///
    /// ```rust
    /// use brew_core::voucher::{Voucher, VoucherKind};
    ///
    /// let v = Voucher::lookup("coffee10").unwrap();
    /// assert_eq!(v.kind, VoucherKind::Percentage(10));
    /// assert!(Voucher::lookup("COFFEE99").is_err());
    /// ```
    pub fn lookup(code: &str) -> CoreResult<Voucher> {
        let code = validate_voucher_code(code)?;

        DEMO_VOUCHERS
            .iter()
            .find(|(known, _)| *known == code)
            .map(|(known, kind)| Voucher {
                code: known.to_string(),
                kind: *kind,
            })
            .ok_or(CoreError::InvalidVoucher(code))
    }

    /// The amount taken off `subtotal`.
    ///
    /// Percentages round half-up to the cent. Fixed amounts are capped at the
    /// subtotal so the discount line never exceeds what is being paid.
    pub fn discount(&self, subtotal: Money) -> Money {
        if !subtotal.is_positive() {
            return Money::zero();
        }

        match self.kind {
            VoucherKind::Percentage(percent) => subtotal.percentage(percent),
            VoucherKind::Fixed(amount) => amount.min(subtotal),
        }
    }
}

/// "10% discount" / "$5.00 discount", as on the voucher row.
impl fmt::Display for Voucher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            VoucherKind::Percentage(percent) => write!(f, "{}: {}% discount", self.code, percent),
            VoucherKind::Fixed(amount) => write!(f, "{}: {} discount", self.code, amount),
        }
    }
}

/// Cart totals for the payment details block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub line_count: usize,
    pub item_count: u32,
    pub subtotal: Money,
    pub voucher_code: Option<String>,
    pub discount: Money,
    pub total: Money,
}

impl CartSummary {
    /// Summarizes `cart` with an optional applied voucher.
    pub fn new(cart: &Cart, voucher: Option<&Voucher>) -> Self {
        let subtotal = cart.total();
        let discount = voucher.map_or(Money::zero(), |v| v.discount(subtotal));

        CartSummary {
            line_count: cart.line_count(),
            item_count: cart.item_count(),
            subtotal,
            voucher_code: voucher.map(|v| v.code.clone()),
            discount,
            total: subtotal.saturating_sub_to_zero(discount),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
