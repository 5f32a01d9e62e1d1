use axum::Json;
use serde::{Deserialize, Serialize};

use crate::{
    error::AppResult,
    models::{average_rating, SavedDrink},
    services::lore::recurring_tags,
};

#[derive(Debug, Deserialize)]
pub struct RateDrinkRequest {
    pub drink: SavedDrink,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review: Option<String>,
    #[serde(default)]
    pub ordered: bool,
}

/// Applies a guest's rating, review and ordered flag to a saved drink
pub async fn rate(Json(request): Json<RateDrinkRequest>) -> AppResult<Json<SavedDrink>> {
    let mut drink = request.drink;
    drink.apply_feedback(request.rating, request.review.as_deref(), request.ordered)?;

    tracing::info!(id = %drink.id, rating = ?drink.rating, ordered = drink.ordered, "Drink rated");
    Ok(Json(drink))
}

#[derive(Debug, Deserialize)]
pub struct StatsRequest {
    pub drinks: Vec<SavedDrink>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub drink_count: usize,
    pub ordered_count: usize,
    pub average_rating: f64,
    /// Tags that keep coming back across the guest's drinks
    pub recurring_tags: Vec<String>,
}

/// Summarizes a guest's saved drinks for their profile
pub async fn stats(Json(request): Json<StatsRequest>) -> Json<StatsResponse> {
    let all_tags: Vec<String> = request
        .drinks
        .iter()
        .flat_map(|d| d.recommendation.tags.iter().cloned())
        .collect();

    Json(StatsResponse {
        drink_count: request.drinks.len(),
        ordered_count: request.drinks.iter().filter(|d| d.ordered).count(),
        average_rating: average_rating(&request.drinks),
        recurring_tags: recurring_tags(&all_tags),
    })
}
