use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::{
    db::LoreAppend,
    error::AppResult,
    models::LoreData,
    routes::AppState,
    services::lore::{lore_fragment, random_whisper, DEFAULT_WHISPERS},
};

/// Returns all accumulated lore
pub async fn get_lore(State(state): State<Arc<AppState>>) -> AppResult<Json<LoreData>> {
    let lore = state.lore.fetch().await?;
    Ok(Json(lore))
}

/// Merges new tags and a whisper into the lore
pub async fn add_lore(
    State(state): State<Arc<AppState>>,
    Json(entry): Json<LoreAppend>,
) -> AppResult<Json<Value>> {
    state.lore.append(&entry).await?;
    tracing::info!(tags = entry.tags.len(), whisper = entry.whisper.is_some(), "Lore updated");
    Ok(Json(json!({ "success": true })))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoreFragmentResponse {
    pub whisper: String,
    pub fragment: String,
}

/// A random whisper and a line of lore built around one of the known tags
///
/// Serves the default whispers when the store cannot be read.
pub async fn fragment(State(state): State<Arc<AppState>>) -> Json<LoreFragmentResponse> {
    let lore = match state.lore.fetch().await {
        Ok(lore) => lore,
        Err(e) => {
            tracing::warn!(error = %e, "Lore unavailable, using default whispers");
            LoreData {
                tags: Vec::new(),
                whispers: DEFAULT_WHISPERS.iter().map(|w| w.to_string()).collect(),
            }
        }
    };

    Json(build_fragment(&lore))
}

fn build_fragment(lore: &LoreData) -> LoreFragmentResponse {
    let mut rng = rand::thread_rng();

    LoreFragmentResponse {
        whisper: random_whisper(&lore.whispers, &mut rng),
        fragment: lore_fragment(&lore.tags, &mut rng),
    }
}
