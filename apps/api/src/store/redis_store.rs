use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::info;

use crate::store::{KeyValueStore, StoreError};

/// Redis-backed store. Opens a multiplexed connection per operation.
#[derive(Clone)]
pub struct RedisStore {
    client: redis::Client,
}

impl RedisStore {
    pub fn open(redis_url: &str) -> Result<Self, StoreError> {
        let client = redis::Client::open(redis_url)?;
        info!("Redis client initialized");
        Ok(Self { client })
    }

    async fn connection(&self) -> Result<redis::aio::MultiplexedConnection, StoreError> {
        Ok(self.client.get_multiplexed_async_connection().await?)
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.connection().await?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        conn.set::<_, _, ()>(key, value).await?;
        Ok(())
    }

    async fn clear(&self, key: &str) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        conn.del::<_, ()>(key).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_rejects_invalid_url() {
        assert!(matches!(
            RedisStore::open("not-a-redis-url"),
            Err(StoreError::Redis(_))
        ));
    }

    #[test]
    fn test_open_does_not_connect() {
        assert!(RedisStore::open("redis://127.0.0.1:1/").is_ok());
    }
}
