//! Menu Item Entity
//!
//! A dish or drink on the restaurant menu. Rows are inserted once when the
//! cache is populated and never updated in place.

use serde::{Deserialize, Deserializer, Serialize};
use super::entity::Entity;

/// A menu item as served by the remote menu, before it is stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMenuItem {
    pub name: String,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
    #[serde(default)]
    pub description: String,
    /// Image filename, resolved against the image base URL
    #[serde(default)]
    pub image: String,
    /// Raw category id (`starters`, `mains`, ...)
    #[serde(default)]
    pub category: String,
}

/// A menu item read back from the local store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Store-assigned identifier
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    pub category: String,
}

impl MenuItem {
    pub fn from_new(id: i64, item: &NewMenuItem) -> Self {
        Self {
            id,
            name: item.name.clone(),
            price: item.price,
            description: item.description.clone(),
            image: item.image.clone(),
            category: item.category.clone(),
        }
    }

    /// Price as shown on the menu, e.g. `$12.99`
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Full image URL for this item under `base`
    pub fn image_url(&self, base: &str) -> String {
        format!("{}/{}?raw=true", base.trim_end_matches('/'), self.image)
    }

    /// True when this row carries the same data as `item`
    pub fn matches(&self, item: &NewMenuItem) -> bool {
        self.name == item.name
            && self.price == item.price
            && self.description == item.description
            && self.image == item.image
            && self.category == item.category
    }
}

impl Entity for MenuItem {
    type Id = i64;
    type Draft = NewMenuItem;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Accepts the price either as a JSON number or as a numeric string
fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Price {
        Number(f64),
        Text(String),
    }

    match Price::deserialize(deserializer)? {
        Price::Number(n) => Ok(n),
        Price::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
