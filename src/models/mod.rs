use serde::{Deserialize, Serialize};

mod answers;
mod menu;
mod saved_drink;

pub use answers::{AnswerSet, AnyOf, Question};
pub use menu::{Category, MenuDataset, MenuItem};
pub use saved_drink::{average_rating, SavedDrink, MAX_RATING, MAX_REVIEW_CHARS, MIN_RATING};

/// A food item suggested alongside the drink
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodPairing {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub pairing_reason: String,
}

/// The assembled drink suggestion returned to a guest
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Candidate display names; the first is always `selected_name`
    pub names: Vec<String>,
    pub selected_name: String,
    pub ingredients: Vec<String>,
    pub story: String,
    pub whisper: String,
    pub flavor_profile: String,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_pairing: Option<FoodPairing>,
}

/// Accumulated cross-session lore
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoreData {
    pub tags: Vec<String>,
    pub whispers: Vec<String>,
}

impl LoreData {
    /// Merges new tags (as a set) and a whisper (suppressing duplicates)
    pub fn merge(&mut self, tags: &[String], whisper: Option<&str>) {
        for tag in tags {
            if !self.tags.contains(tag) {
                self.tags.push(tag.clone());
            }
        }

        if let Some(whisper) = whisper.filter(|w| !w.is_empty()) {
            if !self.whispers.iter().any(|w| w == whisper) {
                self.whispers.push(whisper.to_string());
            }
        }
    }
}
