use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::{error::AppResult, models::LoreData};

/// New lore to merge into the store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoreAppend {
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub whisper: Option<String>,
}

impl LoreAppend {
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.whisper.as_deref().map_or(true, str::is_empty)
    }
}

/// Append-only store of tags and whispers gathered across sessions
///
/// Tags are kept as a set. Whispers are kept in arrival order with duplicates
/// suppressed.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait LoreStore: Send + Sync {
    /// Reads everything accumulated so far
    async fn fetch(&self) -> AppResult<LoreData>;

    /// Merges new tags and an optional whisper
    async fn append(&self, entry: &LoreAppend) -> AppResult<()>;

    /// Store name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Process-local lore store, used when no Redis is configured and in tests
#[derive(Default)]
pub struct InMemoryLoreStore {
    data: RwLock<LoreData>,
}

impl InMemoryLoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: LoreData) -> Self {
        Self {
            data: RwLock::new(data),
        }
    }
}

#[async_trait::async_trait]
impl LoreStore for InMemoryLoreStore {
    async fn fetch(&self) -> AppResult<LoreData> {
        Ok(self.data.read().await.clone())
    }

    async fn append(&self, entry: &LoreAppend) -> AppResult<()> {
        let mut data = self.data.write().await;
        data.merge(&entry.tags, entry.whisper.as_deref());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
