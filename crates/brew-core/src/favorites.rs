//! # Favorites
//!
//! The heart icon on each drink card. A set of catalogue item ids with a
//! toggle and nothing else.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use ts_rs::TS;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Favorites {
    ids: BTreeSet<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `item_id`.
    ///
    /// ## Returns
    /// `true` if the item is a favorite after the call.
    pub fn toggle(&mut self, item_id: &str) -> bool {
        if self.ids.remove(item_id) {
            false
        } else {
            self.ids.insert(item_id.to_string());
            true
        }
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.ids.contains(item_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut favorites = Favorites::new();

        assert!(favorites.toggle("3"));
        assert!(favorites.contains("3"));

        assert!(!favorites.toggle("3"));
        assert!(!favorites.contains("3"));
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let mut favorites = Favorites::new();
        favorites.toggle("1");
        let before = favorites.clone();

        favorites.toggle("5");
        favorites.toggle("5");
        assert_eq!(favorites, before);

        favorites.toggle("1");
        favorites.toggle("1");
        assert_eq!(favorites, before);
    }

    #[test]
    fn test_iter_is_sorted() {
        let mut favorites = Favorites::new();
        favorites.toggle("6");
        favorites.toggle("2");
        assert_eq!(favorites.iter().collect::<Vec<_>>(), ["2", "6"]);
        assert_eq!(favorites.len(), 2);
    }
}
