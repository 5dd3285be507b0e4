//! Defines the stored-configuration record and the API response bodies.
//!
//! These structs are serialized to JSON, either into the `metadata.json`
//! index (records) or into HTTP response bodies (DTOs).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::EngineState;

/// One entry of the `metadata.json` index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigRecord {
    pub id: Uuid,
    /// The filename the operator uploaded.
    pub filename: String,
    /// The name of the file on disk (`<id>.<ext>`).
    pub stored_name: String,
    pub uploaded_at: DateTime<Utc>,
    /// Whether this document is the one handed to the engine. Older index
    /// files predate the flag, so it defaults off.
    #[serde(default)]
    pub active: bool,
}

/// A row of the configuration listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigListEntry {
    pub id: Uuid,
    pub filename: String,
    pub uploaded_at: DateTime<Utc>,
    pub active: bool,
}

impl From<ConfigRecord> for ConfigListEntry {
    fn from(record: ConfigRecord) -> Self {
        ConfigListEntry {
            id: record.id,
            filename: record.filename,
            uploaded_at: record.uploaded_at,
            active: record.active,
        }
    }
}

/// Response body of a successful upload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub id: Uuid,
    pub filename: String,
    pub uploaded_at: DateTime<Utc>,
}

impl From<ConfigRecord> for UploadResponse {
    fn from(record: ConfigRecord) -> Self {
        UploadResponse {
            id: record.id,
            filename: record.filename,
            uploaded_at: record.uploaded_at,
        }
    }
}

/// Snapshot of the engine lifecycle, returned by the status and activation
/// endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineStatus {
    pub state: EngineState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_config_id: Option<Uuid>,
}

/// Error response body: `{ "message": "..." }`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub message: String,
}
