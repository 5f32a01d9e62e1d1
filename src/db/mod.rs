pub mod lore;
pub mod redis;
pub mod writer;

pub use lore::{InMemoryLoreStore, LoreAppend, LoreStore};
pub use self::redis::{create_redis_client, RedisLoreStore};
pub use writer::{LoreWriter, LoreWriterHandle};
