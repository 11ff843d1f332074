//! Session Store: explicitly scoped key-value storage for per-session user records.
//!
//! `AppState` holds an `Arc<dyn KeyValueStore>`; handlers receive a `ScopedStore`
//! bound to the caller's session, so no page ever touches another session's keys.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

pub mod memory;
pub mod redis_store;

pub use memory::MemoryStore;
pub use redis_store::RedisStore;

/// Header carrying the caller's session scope.
pub const SESSION_HEADER: &str = "x-session-id";
pub const ANONYMOUS_SCOPE: &str = "anonymous";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] ::redis::RedisError),

    #[error("Stored value is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Minimal string key-value store. Implement this to swap backends.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    async fn clear(&self, key: &str) -> Result<(), StoreError>;
}

/// A store view whose keys are namespaced by one session scope.
#[derive(Clone)]
pub struct ScopedStore {
    inner: Arc<dyn KeyValueStore>,
    scope: String,
}

impl ScopedStore {
    pub fn new(inner: Arc<dyn KeyValueStore>, scope: impl Into<String>) -> Self {
        Self {
            inner,
            scope: scope.into(),
        }
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    fn key(&self, key: &str) -> String {
        format!("session:{}:{}", self.scope, key)
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(&self.key(key)).await
    }

    pub async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.inner.set(&self.key(key), value).await
    }

    pub async fn clear(&self, key: &str) -> Result<(), StoreError> {
        self.inner.clear(&self.key(key)).await
    }

    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.get(key).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub async fn set_json<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw).await
    }
}

/// Session scope taken from the `x-session-id` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionScope(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for SessionScope
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let scope = parts
            .headers
            .get(SESSION_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(ANONYMOUS_SCOPE);
        Ok(SessionScope(scope.to_string()))
    }
}
