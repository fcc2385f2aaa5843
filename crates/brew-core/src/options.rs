//! # Selected Options
//!
//! The variant choices a customer makes on the details screen, and the key
//! that decides whether two cart lines are "the same drink".
//!
//! ## Line Identity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  EntryKey = (item id, SelectedOptions)                                  │
//! │                                                                         │
//! │  Latte, large, [chocolate, cinnamon]  ─┐                                │
//! │                                        ├─► same key → quantities merge  │
//! │  Latte, large, [cinnamon, chocolate]  ─┘                                │
//! │                                                                         │
//! │  Latte, small, [cinnamon]             ───► different key → new line     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Toppings live in a `BTreeSet`, so the order the customer tapped them in
//! never reaches the comparison and duplicates collapse on insert.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use ts_rs::TS;

/// The chosen variant values for one cart line.
///
/// `None` means "not chosen". An all-`None`, no-topping selection is the
/// default selection used by the quick-add button on the home screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SelectedOptions {
    pub size: Option<String>,
    pub temperature: Option<String>,
    pub sugar_level: Option<String>,
    pub toppings: BTreeSet<String>,
}

impl SelectedOptions {
    /// Starts an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size_id: impl Into<String>) -> Self {
        self.size = Some(size_id.into());
        self
    }

    pub fn with_temperature(mut self, temperature_id: impl Into<String>) -> Self {
        self.temperature = Some(temperature_id.into());
        self
    }

    pub fn with_sugar_level(mut self, sugar_id: impl Into<String>) -> Self {
        self.sugar_level = Some(sugar_id.into());
        self
    }

    pub fn with_topping(mut self, topping_id: impl Into<String>) -> Self {
        self.toppings.insert(topping_id.into());
        self
    }

    pub fn with_toppings<I, S>(mut self, topping_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.toppings.extend(topping_ids.into_iter().map(Into::into));
        self
    }

    /// Trims ids and drops empty ones so `" large "` and `"large"` agree.
    pub fn normalized(self) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        SelectedOptions {
            size: clean(self.size),
            temperature: clean(self.temperature),
            sugar_level: clean(self.sugar_level),
            toppings: self
                .toppings
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    /// True when nothing has been chosen.
    pub fn is_default(&self) -> bool {
        self == &SelectedOptions::default()
    }
}

/// Compact label for logs and the shell, e.g. `large/hot/less+chocolate+cinnamon`.
impl fmt::Display for SelectedOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let part = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "{}/{}/{}",
            part(&self.size),
            part(&self.temperature),
            part(&self.sugar_level)
        )?;
        for topping in &self.toppings {
            write!(f, "+{}", topping)?;
        }
        Ok(())
    }
}

/// What the details screen submits: the selection plus how many cups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItemOptions {
    #[serde(flatten)]
    pub selection: SelectedOptions,
    pub quantity: u32,
}

impl CartItemOptions {
    pub fn new(selection: SelectedOptions, quantity: u32) -> Self {
        CartItemOptions {
            selection,
            quantity,
        }
    }
}

/// Identity of a cart line.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EntryKey {
    pub item_id: String,
    pub options: SelectedOptions,
}

impl EntryKey {
    /// Builds a key, normalizing the selection first.
    pub fn new(item_id: impl Into<String>, options: SelectedOptions) -> Self {
        EntryKey {
            item_id: item_id.into(),
            options: options.normalized(),
        }
    }

    /// The key used by plain "add to cart" (no options chosen).
    pub fn plain(item_id: impl Into<String>) -> Self {
        EntryKey::new(item_id, SelectedOptions::default())
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.item_id, self.options)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
