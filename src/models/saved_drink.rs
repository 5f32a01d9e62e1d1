use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Recommendation;
use crate::error::{AppError, AppResult};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;
pub const MAX_REVIEW_CHARS: usize = 50;

/// A recommendation stamped with an identity so a guest can rate and keep it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedDrink {
    pub id: String,
    #[serde(flatten)]
    pub recommendation: Recommendation,
    pub created_at: DateTime<Utc>,
    pub rating: Option<u8>,
    pub review: Option<String>,
    pub ordered: bool,
}

impl SavedDrink {
    /// Assigns a fresh id and creation time to a recommendation
    pub fn stamp(recommendation: Recommendation) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            recommendation,
            created_at: Utc::now(),
            rating: None,
            review: None,
            ordered: false,
        }
    }

    /// Applies guest feedback
    ///
    /// The rating arrives as any JSON number so out-of-range and fractional
    /// values reach validation. A rating of 0 means "no stars picked" and
    /// clears the rating. Reviews are trimmed and an empty review clears the
    /// field. Nothing is changed when validation fails.
    pub fn apply_feedback(
        &mut self,
        rating: Option<f64>,
        review: Option<&str>,
        ordered: bool,
    ) -> AppResult<()> {
        let rating = match rating {
            None => None,
            Some(r) if r == 0.0 => None,
            Some(r)
                if r.fract() == 0.0
                    && (f64::from(MIN_RATING)..=f64::from(MAX_RATING)).contains(&r) =>
            {
                Some(r as u8)
            }
            Some(r) => {
                return Err(AppError::InvalidInput(format!(
                    "Rating must be a whole number between {} and {}, got {}",
                    MIN_RATING, MAX_RATING, r
                )))
            }
        };

        let review = review.map(str::trim).filter(|r| !r.is_empty());
        if let Some(text) = review {
            let chars = text.chars().count();
            if chars > MAX_REVIEW_CHARS {
                return Err(AppError::InvalidInput(format!(
                    "Review must be at most {} characters, got {}",
                    MAX_REVIEW_CHARS, chars
                )));
            }
        }

        self.rating = rating;
        self.review = review.map(str::to_string);
        self.ordered = ordered;
        Ok(())
    }
}

/// Mean rating across rated drinks, 0 when none are rated
pub fn average_rating(drinks: &[SavedDrink]) -> f64 {
    let ratings: Vec<f64> = drinks
        .iter()
        .filter_map(|d| d.rating)
        .map(f64::from)
        .collect();

    if ratings.is_empty() {
        return 0.0;
    }
    ratings.iter().sum::<f64>() / ratings.len() as f64
}
