use serde::{Deserialize, Serialize};
use std::{fmt::Display, path::Path};

use crate::error::{AppError, AppResult};

/// Menu shipped with the binary, used when no `MENU_PATH` is configured
const BUNDLED_MENU: &str = include_str!("../../data/menu.json");

/// Fixed menu sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Exotic & Exciting")]
    ExoticAndExciting,
    #[serde(rename = "Creature Features")]
    CreatureFeatures,
    #[serde(rename = "Feats of Strength")]
    FeatsOfStrength,
    #[serde(rename = "Beers")]
    Beers,
    #[serde(rename = "Wines")]
    Wines,
    #[serde(rename = "Concession Stand")]
    ConcessionStand,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::ExoticAndExciting => "Exotic & Exciting",
            Category::CreatureFeatures => "Creature Features",
            Category::FeatsOfStrength => "Feats of Strength",
            Category::Beers => "Beers",
            Category::Wines => "Wines",
            Category::ConcessionStand => "Concession Stand",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single entry on the menu
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            ingredients: None,
            description: None,
        }
    }
}

/// The full menu document
///
/// Every category key is required; a document missing one is rejected at load
/// time rather than silently treated as empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuDataset {
    #[serde(rename = "Exotic & Exciting")]
    pub exotic_and_exciting: Vec<MenuItem>,
    #[serde(rename = "Creature Features")]
    pub creature_features: Vec<MenuItem>,
    #[serde(rename = "Feats of Strength")]
    pub feats_of_strength: Vec<MenuItem>,
    #[serde(rename = "Beers")]
    pub beers: Vec<MenuItem>,
    #[serde(rename = "Wines")]
    pub wines: Vec<MenuItem>,
    #[serde(rename = "Concession Stand")]
    pub concession_stand: Vec<MenuItem>,
}

impl MenuDataset {
    /// Parses a menu document from JSON
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(|e| AppError::InvalidMenu(e.to_string()))
    }

    /// Reads and parses a menu document from disk
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            AppError::InvalidMenu(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    /// The menu bundled with the service
    pub fn bundled() -> AppResult<Self> {
        Self::from_json(BUNDLED_MENU)
    }

    pub fn items(&self, category: Category) -> &[MenuItem] {
        match category {
            Category::ExoticAndExciting => &self.exotic_and_exciting,
            Category::CreatureFeatures => &self.creature_features,
            Category::FeatsOfStrength => &self.feats_of_strength,
            Category::Beers => &self.beers,
            Category::Wines => &self.wines,
            Category::ConcessionStand => &self.concession_stand,
        }
    }

    #[cfg(test)]
    pub fn items_mut(&mut self, category: Category) -> &mut Vec<MenuItem> {
        match category {
            Category::ExoticAndExciting => &mut self.exotic_and_exciting,
            Category::CreatureFeatures => &mut self.creature_features,
            Category::FeatsOfStrength => &mut self.feats_of_strength,
            Category::Beers => &mut self.beers,
            Category::Wines => &mut self.wines,
            Category::ConcessionStand => &mut self.concession_stand,
        }
    }

    /// A dataset with every category present and empty
    pub fn empty() -> Self {
        Self {
            exotic_and_exciting: Vec::new(),
            creature_features: Vec::new(),
            feats_of_strength: Vec::new(),
            beers: Vec::new(),
            wines: Vec::new(),
            concession_stand: Vec::new(),
        }
    }
}
