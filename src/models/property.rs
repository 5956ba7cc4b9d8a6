use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A saved property record
///
/// The client-supplied payload is kept as an open map; `id` and `saved_at`
/// are assigned by the registry and flattened alongside it on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedProperty {
    pub id: u64,
    pub saved_at: DateTime<Utc>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Keys owned by the registry; stripped from client payloads on save
pub const RESERVED_KEYS: [&str; 2] = ["id", "saved_at"];
