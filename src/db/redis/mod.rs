pub mod lore_store;

pub use lore_store::{create_redis_client, LoreKey, RedisLoreStore};
