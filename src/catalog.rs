//! Item catalog.
//!
//! The catalog is loaded once and stays read-only for the whole run. Item
//! order matters: the item at index `i` is the one selected by gene `i` of
//! every [`Genome`](crate::ga::Genome).
//!
//! # Text format
//!
//! Whitespace-separated `name weight value` triples, read until end of input:
//!
//! ```text
//! map      0.5  10
//! compass  0.2  7
//! water    2.0  25
//! ```
//!
//! Reading stops at the first triple that does not parse; anything after it
//! is ignored.

use crate::error::Result;
use std::path::Path;

/// A single item that may be packed into the knapsack.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Display name.
    pub name: String,
    /// Non-negative weight.
    pub weight: f64,
    /// Value gained when the item is packed.
    pub value: u32,
}

impl Item {
    /// Creates a new item.
    pub fn new(name: impl Into<String>, weight: f64, value: u32) -> Self {
        Self {
            name: name.into(),
            weight,
            value,
        }
    }
}

/// Ordered, immutable collection of items.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Creates a catalog from items in their gene order.
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Parses the whitespace triple format.
    ///
    /// Never fails: ingestion simply ends at the first malformed or
    /// incomplete triple.
    pub fn parse(input: &str) -> Self {
        let mut tokens = input.split_whitespace();
        let mut items = Vec::new();

        while let Some(name) = tokens.next() {
            let weight = tokens
                .next()
                .and_then(|t| t.parse::<f64>().ok())
                .filter(|w| w.is_finite() && *w >= 0.0);
            let value = tokens.next().and_then(|t| t.parse::<u32>().ok());

            match (weight, value) {
                (Some(weight), Some(value)) => items.push(Item::new(name, weight, value)),
                _ => {
                    log::warn!(
                        "stopped reading items at entry {} ({name:?}): not a valid triple",
                        items.len() + 1
                    );
                    break;
                }
            }
        }

        Self { items }
    }

    /// Reads and parses a catalog file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let catalog = Self::parse(&text);
        log::info!("loaded {} items from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Number of items (and therefore the genome length).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// All items in gene order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Iterates over the items in gene order.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }
}

impl From<Vec<Item>> for Catalog {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
