//! High-level client for the advice API.
//!
//! Translates domain operations into transport calls, consulting the
//! response cache for idempotent reads only. Advice generation is a fresh
//! AI invocation server-side and is never cached.

use std::sync::{Arc, Mutex, MutexGuard};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::client::cache::ResponseCache;
use crate::client::transport::{HttpTransport, Transport};
use crate::config::Settings;
use crate::error::Result;
use crate::models::{
    HealthStatus, MedicalAdvice, MedicalQuestion, QueryHistory, QueryHistoryItem,
};

/// Client for the medical advice service.
///
/// Owns its response cache; independent clients share nothing. All methods
/// take `&self`; the cache sits behind a mutex that is never held across
/// an `.await`.
pub struct LukmanClient {
    transport: Arc<dyn Transport>,
    cache: Mutex<ResponseCache>,
}

impl LukmanClient {
    /// Build a client over HTTP from the given settings.
    pub fn new(settings: &Settings) -> Self {
        let transport = Arc::new(HttpTransport::new(&settings.api_url, settings.timeout_secs));
        Self::with_transport(transport, ResponseCache::new(&settings.cache))
    }

    /// Build a client over a custom transport and cache. Used by tests and
    /// embedders.
    pub fn with_transport(transport: Arc<dyn Transport>, cache: ResponseCache) -> Self {
        Self {
            transport,
            cache: Mutex::new(cache),
        }
    }

    /// Check service health. Cacheable.
    pub async fn check_health(&self) -> Result<HealthStatus> {
        self.cached_get("/health", &[]).await
    }

    /// Request medical advice for a question. Never cached; each call is a
    /// fresh AI invocation with server-side effects. Transport errors
    /// propagate unchanged.
    ///
    /// The question is validated first; a rejected request never leaves
    /// the process.
    pub async fn get_medical_advice(&self, question: &MedicalQuestion) -> Result<MedicalAdvice> {
        question.validate()?;
        let body = serde_json::to_value(question)?;
        let data = self.transport.post("/advice", &body).await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Fetch a page of past queries. Cacheable, keyed by `(limit, offset)`.
    pub async fn get_history(&self, limit: u32, offset: u32) -> Result<QueryHistory> {
        let query = [("limit", limit.to_string()), ("offset", offset.to_string())];
        self.cached_get("/history", &query).await
    }

    /// Fetch one past query by ID. Cacheable, keyed by the ID.
    pub async fn get_query_by_id(&self, id: i64) -> Result<QueryHistoryItem> {
        self.cached_get(&format!("/history/{id}"), &[]).await
    }

    /// Empty the response cache unconditionally. No network call.
    pub fn clear_cache(&self) {
        self.lock_cache().clear();
    }

    /// Number of cached responses currently held.
    pub fn cache_len(&self) -> usize {
        self.lock_cache().len()
    }

    /// GET with response caching: look up, fetch on miss, store, decode.
    async fn cached_get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let key = ResponseCache::cache_key(path, query);
        if let Some(data) = self.lock_cache().get(&key) {
            debug!(path = %path, "Cache hit");
            return Ok(serde_json::from_value(data)?);
        }
        debug!(path = %path, "Cache miss, fetching");
        let data = self.transport.get(path, query).await?;
        self.lock_cache().put(key, data.clone());
        Ok(serde_json::from_value(data)?)
    }

    fn lock_cache(&self) -> MutexGuard<'_, ResponseCache> {
        self.cache.lock().unwrap()
    }
}
