// SPDX-License-Identifier: MPL-2.0
//! Project catalog: the read-only list of portfolio entries loaded at startup.
//!
//! The catalog is deserialized once from a JSON array of [`Item`]s and never
//! mutated afterwards. Categories are derived on demand and keep the order in
//! which they first appear in the document, so the tab order follows the
//! author's file rather than an alphabetical sort.

pub mod loader;
pub mod source;

pub use loader::load;
pub use source::{AssetRoot, DataSource, ImageSource};

use serde::Deserialize;

/// One project entry as it appears in the data file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub images: Vec<String>,
    pub url: String,
}

impl Item {
    /// Whether the card for this item needs a slider instead of a single image.
    #[must_use]
    pub fn has_gallery(&self) -> bool {
        self.images.len() > 1
    }
}

/// In-memory list of every loaded project, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Parses a catalog from the raw bytes of a JSON document.
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let items: Vec<Item> = serde_json::from_slice(bytes)?;
        Ok(Self { items })
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct categories, each listed once, in first-occurrence order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for item in &self.items {
            if !categories.iter().any(|c| c == &item.category) {
                categories.push(item.category.clone());
            }
        }
        categories
    }

    /// Items belonging to `category`, in document order.
    pub fn items_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Item> + 'a {
        self.items
            .iter()
            .filter(move |item| item.category == category)
    }
}

/// Display casing for categories and skill tags: the first character is
/// uppercased, the rest is left untouched.
#[must_use]
pub fn label_case(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Item;

    pub fn item(name: &str, category: &str, images: &[&str]) -> Item {
        Item {
            name: name.to_string(),
            description: format!("{name} description"),
            category: category.to_string(),
            skills: vec!["rust".to_string(), "iced".to_string()],
            images: images.iter().map(|s| (*s).to_string()).collect(),
            url: format!("https://example.com/{name}"),
        }
    }

    /// The three-item catalog used across the scenario tests.
    pub fn web_and_art() -> Vec<Item> {
        vec![
            item("alpha", "web", &["a.png"]),
            item("beta", "web", &["b.png", "c.png"]),
            item("gamma", "art", &["d.png"]),
        ]
    }
}
