use redis::{aio::ConnectionManager, AsyncCommands, Client};
use std::fmt::Display;

use crate::{
    db::lore::{LoreAppend, LoreStore},
    error::AppResult,
    models::LoreData,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoreKey {
    /// SET of every tag seen
    Tags,
    /// LIST of whispers in arrival order
    Whispers,
    /// SET mirroring `Whispers`, used to suppress duplicates
    SeenWhispers,
}

impl Display for LoreKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoreKey::Tags => write!(f, "lore:tags"),
            LoreKey::Whispers => write!(f, "lore:whispers"),
            LoreKey::SeenWhispers => write!(f, "lore:whispers:seen"),
        }
    }
}

/// Creates a Redis client for the lore store
pub fn create_redis_client(redis_url: &str) -> anyhow::Result<Client> {
    let client = Client::open(redis_url)?;
    Ok(client)
}

/// Lore store persisted in Redis
#[derive(Clone)]
pub struct RedisLoreStore {
    conn: ConnectionManager,
}

impl RedisLoreStore {
    /// Connects to Redis; the connection manager reconnects on its own afterwards
    pub async fn new(client: Client) -> AppResult<Self> {
        let conn = ConnectionManager::new(client).await?;
        Ok(Self { conn })
    }
}

#[async_trait::async_trait]
impl LoreStore for RedisLoreStore {
    async fn fetch(&self) -> AppResult<LoreData> {
        let mut conn = self.conn.clone();

        let mut tags: Vec<String> = conn.smembers(LoreKey::Tags.to_string()).await?;
        tags.sort();
        let whispers: Vec<String> = conn.lrange(LoreKey::Whispers.to_string(), 0, -1).await?;

        Ok(LoreData { tags, whispers })
    }

    async fn append(&self, entry: &LoreAppend) -> AppResult<()> {
        let mut conn = self.conn.clone();

        if !entry.tags.is_empty() {
            let _: () = conn
                .sadd(LoreKey::Tags.to_string(), entry.tags.as_slice())
                .await?;
        }

        if let Some(whisper) = entry.whisper.as_deref().filter(|w| !w.is_empty()) {
            let added: i64 = conn
                .sadd(LoreKey::SeenWhispers.to_string(), whisper)
                .await?;
            if added == 1 {
                let _: () = conn.rpush(LoreKey::Whispers.to_string(), whisper).await?;
            } else {
                tracing::debug!("Whisper already in lore, skipping");
            }
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lore_key_display() {
        assert_eq!(LoreKey::Tags.to_string(), "lore:tags");
        assert_eq!(LoreKey::Whispers.to_string(), "lore:whispers");
        assert_eq!(LoreKey::SeenWhispers.to_string(), "lore:whispers:seen");
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        assert!(create_redis_client("not a redis url").is_err());
    }

    #[tokio::test]
    #[ignore = "requires a running Redis at REDIS_URL"]
    async fn test_append_deduplicates_whispers() {
        let redis_url =
            std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string());
        let client = create_redis_client(&redis_url).unwrap();
        let store = RedisLoreStore::new(client).await.unwrap();

        let entry = LoreAppend {
            tags: vec!["test_tag".to_string()],
            whisper: Some("test whisper from the lore store".to_string()),
        };
        store.append(&entry).await.unwrap();
        store.append(&entry).await.unwrap();

        let lore = store.fetch().await.unwrap();
        assert!(lore.tags.contains(&"test_tag".to_string()));
        let count = lore
            .whispers
            .iter()
            .filter(|w| *w == "test whisper from the lore store")
            .count();
        assert_eq!(count, 1);

        let mut conn = store.conn.clone();
        let _: () = conn.srem(LoreKey::Tags.to_string(), "test_tag").await.unwrap();
        let _: () = conn
            .lrem(LoreKey::Whispers.to_string(), 0, "test whisper from the lore store")
            .await
            .unwrap();
        let _: () = conn
            .srem(LoreKey::SeenWhispers.to_string(), "test whisper from the lore store")
            .await
            .unwrap();
    }
}
