//! Saved property registry
//!
//! Holds the properties a user has chosen to keep for comparison. The
//! registry is injected into handlers through `AppState` as a trait object so
//! the in-memory store can be replaced by a real datastore without touching
//! the calculator or the handlers.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::AppError;
use crate::models::property::{SavedProperty, RESERVED_KEYS};

#[async_trait]
pub trait PropertyRegistry: Send + Sync {
    /// Append a record and return its assigned id.
    ///
    /// Fails with `AppError::InvalidRecord` when `record` is not a JSON object.
    async fn save(&self, record: Value) -> Result<u64, AppError>;

    /// All saved properties in insertion order
    async fn list_all(&self) -> Vec<SavedProperty>;

    /// Remove every record with `id`. Idempotent: always returns `true`.
    async fn delete(&self, id: u64) -> bool;
}

struct RegistryInner {
    next_id: u64,
    properties: Vec<SavedProperty>,
}

/// Process-lifetime registry backed by a vector
///
/// Ids come from a monotonic counter, so they are never reused after a
/// deletion.
#[derive(Clone)]
pub struct InMemoryPropertyRegistry {
    inner: Arc<RwLock<RegistryInner>>,
}

impl InMemoryPropertyRegistry {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(RegistryInner {
                next_id: 1,
                properties: Vec::new(),
            })),
        }
    }
}

impl Default for InMemoryPropertyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PropertyRegistry for InMemoryPropertyRegistry {
    async fn save(&self, record: Value) -> Result<u64, AppError> {
        let mut fields = match record {
            Value::Object(map) => map,
            other => {
                return Err(AppError::InvalidRecord(format!(
                    "expected a JSON object, got {}",
                    json_kind(&other)
                )));
            }
        };

        for key in RESERVED_KEYS {
            fields.remove(key);
        }

        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.properties.push(SavedProperty {
            id,
            saved_at: Utc::now(),
            fields,
        });

        info!("Saved property {} ({} in registry)", id, inner.properties.len());
        Ok(id)
    }

    async fn list_all(&self) -> Vec<SavedProperty> {
        self.inner.read().properties.clone()
    }

    async fn delete(&self, id: u64) -> bool {
        let mut inner = self.inner.write();
        let before = inner.properties.len();
        inner.properties.retain(|p| p.id != id);
        let removed = before - inner.properties.len();

        if removed > 0 {
            info!("Deleted property {}", id);
        } else {
            debug!("Delete for unknown property {} ignored", id);
        }

        true
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
