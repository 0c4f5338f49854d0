//! Per-item forecast results.

use std::collections::btree_map::{self, BTreeMap};

use serde::Serialize;

use super::item::MenuItem;

/// Predicted quantity per menu item for a single date.
///
/// Quantities are signed: negative model outputs are passed through as-is.
/// Serializes as a flat JSON object keyed by item name, in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Forecast(BTreeMap<MenuItem, i64>);

impl Forecast {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, item: MenuItem, quantity: i64) {
        self.0.insert(item, quantity);
    }

    #[must_use]
    pub fn get(&self, item: &MenuItem) -> Option<i64> {
        self.0.get(item).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.0.keys()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, MenuItem, i64> {
        self.0.iter()
    }
}

impl FromIterator<(MenuItem, i64)> for Forecast {
    fn from_iter<T: IntoIterator<Item = (MenuItem, i64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Forecast {
    type Item = (&'a MenuItem, &'a i64);
    type IntoIter = btree_map::Iter<'a, MenuItem, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
