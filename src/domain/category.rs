//! Menu Categories
//!
//! The fixed set of categories shown as filter chips, and the transient
//! selection a screen session builds from them.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Menu category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Starters,
    Mains,
    Desserts,
    Drinks,
    Specials,
}

impl Category {
    /// All categories in chip display order
    pub const ALL: [Category; 5] = [
        Category::Starters,
        Category::Mains,
        Category::Desserts,
        Category::Drinks,
        Category::Specials,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Starters => "starters",
            Category::Mains => "mains",
            Category::Desserts => "desserts",
            Category::Drinks => "drinks",
            Category::Specials => "specials",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Category::Starters => "Starters",
            Category::Mains => "Mains",
            Category::Desserts => "Desserts",
            Category::Drinks => "Drinks",
            Category::Specials => "Specials",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

/// Set of selected categories. An empty selection means "no restriction".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySelection {
    selected: BTreeSet<Category>,
}

impl CategorySelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `category` if absent, deselect it otherwise.
    /// Returns whether it is selected afterwards.
    pub fn toggle(&mut self, category: Category) -> bool {
        if self.selected.remove(&category) {
            false
        } else {
            self.selected.insert(category);
            true
        }
    }

    pub fn contains(&self, category: Category) -> bool {
        self.selected.contains(&category)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        self.selected.iter().copied()
    }
}

impl FromIterator<Category> for CategorySelection {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().collect(),
        }
    }
}
