use serde::{Deserialize, Serialize};
use uuid::Uuid;

use relief_types::Settings;

/// Messages from the UI (JavaScript main thread) to the engine worker.
/// Serialized as JSON for postMessage transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiToEngine {
    /// Upload a decoded RGBA image. The engine caps the resolution
    /// before storing it.
    SetImage {
        width: u32,
        height: u32,
        rgba_base64: String,
    },
    /// Replace the generation settings.
    UpdateSettings { settings: Settings },
    /// Run the pipeline on the stored image and settings. The request
    /// id is echoed back so the UI can drop stale responses when the
    /// user keeps dragging a slider.
    GenerateModel { request_id: Uuid },
    /// Serialize the last generated mesh for download.
    ExportStl { ascii: bool },
}

/// Responses from the engine worker back to the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EngineToUi {
    /// Image stored; dimensions are post-cap.
    ImageLoaded { width: u32, height: u32 },
    /// Settings validated and stored.
    SettingsUpdated,
    /// Generation finished; the mesh itself is fetched via the typed
    /// array accessors, not serialized through JSON.
    ModelGenerated {
        request_id: Uuid,
        triangle_count: usize,
    },
    /// Serialized model ready for download.
    StlReady {
        filename: String,
        data_base64: String,
    },
    /// Any failure, surfaced as a user-visible notice by the UI.
    Error { message: String },
}
