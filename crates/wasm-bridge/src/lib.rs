//! Bridge between the browser UI and the relief generation pipeline.
//!
//! The UI thread posts JSON messages to a web worker hosting this
//! module; the worker runs the pipeline synchronously and replies, so
//! long generations never block the UI thread. Native callers can use
//! `EngineState` directly.

pub mod dispatch;
pub mod engine_state;
pub mod messages;
#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

pub use dispatch::dispatch;
pub use engine_state::{BridgeError, EngineState};
pub use messages::{EngineToUi, UiToEngine};
