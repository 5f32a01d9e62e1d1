use axum::{extract::State, Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    db::LoreAppend,
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{AnswerSet, SavedDrink},
    routes::AppState,
    services::CocktailGenerator,
};

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub answers: Option<AnswerSet>,
}

/// Handler for the rule-based recommendation endpoint
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<SavedDrink>> {
    serve(&state, state.recommender.as_ref(), request, &request_id).await
}

/// Handler for the configured cocktail generator
pub async fn generate_cocktail(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<SavedDrink>> {
    serve(&state, state.generator.as_ref(), request, &request_id).await
}

async fn serve(
    state: &AppState,
    generator: &dyn CocktailGenerator,
    request: RecommendationRequest,
    request_id: &RequestId,
) -> AppResult<Json<SavedDrink>> {
    let answers = request
        .answers
        .ok_or_else(|| AppError::InvalidInput("Missing quiz answers".to_string()))?;

    tracing::info!(
        request_id = %request_id,
        generator = generator.name(),
        answered = answers.answered(),
        "Processing recommendation request"
    );

    let recommendation = generator.generate(&answers).await;

    state.lore_writer.record_in_background(LoreAppend {
        tags: recommendation.tags.clone(),
        whisper: Some(recommendation.whisper.clone()),
    });

    let drink = SavedDrink::stamp(recommendation);

    tracing::info!(
        request_id = %request_id,
        drink = %drink.recommendation.selected_name,
        id = %drink.id,
        "Recommendation served"
    );

    Ok(Json(drink))
}
