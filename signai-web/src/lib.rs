//! SignAI Web - sign language to text in the browser
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! The page runs MediaPipe Hands and forwards every result to
//! `process_hand_frame` / `process_empty_frame`.

use wasm_bindgen::prelude::*;

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub(crate) fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => ($crate::log(&format_args!($($t)*).to_string()))
}
pub(crate) use console_log;

mod bridge;
pub mod classifier;
pub mod sentence;
pub mod stabilizer;

// Re-export wasm_bindgen functions for JS access
pub use bridge::*;

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Announce readiness - call once after the module is loaded
#[wasm_bindgen]
pub fn init() {
    console_log!(
        "✅ SignAI core ready ({} gestures, cooldown {} ms)",
        classifier::Gesture::VOCABULARY.len(),
        bridge::get_cooldown_ms()
    );
}
