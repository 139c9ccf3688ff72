use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::engine_state::{BridgeError, EngineState};
use crate::messages::{EngineToUi, UiToEngine};

/// Dispatch a UI message to the engine and return a response.
///
/// This is the main entry point for processing messages from the
/// JavaScript main thread. Errors are folded into `EngineToUi::Error`
/// so the worker always replies.
pub fn dispatch(state: &mut EngineState, msg: UiToEngine) -> EngineToUi {
    match handle_message(state, msg) {
        Ok(response) => response,
        Err(e) => EngineToUi::Error {
            message: e.to_string(),
        },
    }
}

fn handle_message(state: &mut EngineState, msg: UiToEngine) -> Result<EngineToUi, BridgeError> {
    match msg {
        UiToEngine::SetImage {
            width,
            height,
            rgba_base64,
        } => {
            let rgba = BASE64
                .decode(rgba_base64.as_bytes())
                .map_err(|e| BridgeError::Decode(e.to_string()))?;
            let (width, height) = state.set_image(&rgba, width, height)?;
            Ok(EngineToUi::ImageLoaded { width, height })
        }

        UiToEngine::UpdateSettings { settings } => {
            state.update_settings(settings)?;
            Ok(EngineToUi::SettingsUpdated)
        }

        UiToEngine::GenerateModel { request_id } => {
            let triangle_count = state.generate()?;
            Ok(EngineToUi::ModelGenerated {
                request_id,
                triangle_count,
            })
        }

        UiToEngine::ExportStl { ascii } => {
            let bytes = state.export_stl(ascii)?;
            Ok(EngineToUi::StlReady {
                filename: file_format::STL_FILENAME.to_string(),
                data_base64: BASE64.encode(bytes),
            })
        }
    }
}
