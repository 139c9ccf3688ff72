//! WASM entry points for the web worker.
//!
//! This module is only compiled for the `wasm32` target. It provides the
//! `#[wasm_bindgen]` functions that JavaScript calls from the web worker.

use wasm_bindgen::prelude::*;

use crate::dispatch;
use crate::engine_state::EngineState;
use crate::messages::{EngineToUi, UiToEngine};

// Global engine state — single-threaded in the web worker.
thread_local! {
    static ENGINE_STATE: std::cell::RefCell<Option<EngineState>> = std::cell::RefCell::new(None);
}

/// Initialize the WASM engine. Must be called once before any other function.
///
/// Sets up panic hooks for better error messages and creates the engine state.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();

    ENGINE_STATE.with(|cell| {
        *cell.borrow_mut() = Some(EngineState::new());
    });
}

/// Process a JSON message from the UI and return a JSON response.
///
/// This is the main entry point for the web worker's message handler.
/// The input should be a JSON-serialized `UiToEngine` message.
/// Returns a JSON-serialized `EngineToUi` response.
#[wasm_bindgen]
pub fn process_message(json_input: &str) -> String {
    let response = ENGINE_STATE.with(|cell| {
        let mut engine = cell.borrow_mut();
        let state = engine
            .as_mut()
            .expect("Engine not initialized. Call init() first.");

        let msg: UiToEngine = match serde_json::from_str(json_input) {
            Ok(msg) => msg,
            Err(e) => {
                return EngineToUi::Error {
                    message: format!("Failed to parse message: {}", e),
                };
            }
        };

        dispatch::dispatch(state, msg)
    });

    if let EngineToUi::Error { ref message } = response {
        web_sys::console::warn_1(&JsValue::from_str(message));
    }

    serde_json::to_string(&response).unwrap_or_else(|e| {
        format!(r#"{{"type":"Error","message":"Serialization failed: {}"}}"#, e)
    })
}

/// Get the latest mesh's vertex positions as a Float32Array view into
/// WASM memory. The array contains [x0, y0, z0, x1, y1, z1, ...].
///
/// IMPORTANT: The returned view is invalidated by any WASM memory growth.
/// Copy or transfer the data immediately after calling this function.
#[wasm_bindgen]
pub fn mesh_positions() -> js_sys::Float32Array {
    with_mesh(|mesh| unsafe { js_sys::Float32Array::view(&mesh.positions) })
        .unwrap_or_else(|| js_sys::Float32Array::new_with_length(0))
}

/// Get the latest mesh's triangle indices as a Uint32Array view into
/// WASM memory. Each consecutive triple is one triangle.
#[wasm_bindgen]
pub fn mesh_indices() -> js_sys::Uint32Array {
    with_mesh(|mesh| unsafe { js_sys::Uint32Array::view(&mesh.indices) })
        .unwrap_or_else(|| js_sys::Uint32Array::new_with_length(0))
}

/// Number of triangles in the latest generated mesh, 0 when none exists.
#[wasm_bindgen]
pub fn mesh_triangle_count() -> usize {
    with_mesh(|mesh| mesh.triangle_count()).unwrap_or(0)
}

/// Helper: access the latest mesh and apply a function to it.
fn with_mesh<T>(f: impl FnOnce(&mesh_extrude::TriangleMesh) -> T) -> Option<T> {
    ENGINE_STATE.with(|cell| {
        let engine = cell.borrow();
        let state = engine.as_ref()?;
        state.mesh.as_ref().map(f)
    })
}
