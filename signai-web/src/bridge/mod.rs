//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod classifier_integration;
mod clock;
mod errors;
mod history;
mod landmarks;

pub use landmarks::{
    // WASM entry points
    process_hand_frame,
    process_empty_frame,
    // Internal API
    parse_hand_landmarks,
    FrameError,
    FLAT_HAND_LEN,
};

pub use classifier_integration::{
    set_cooldown_ms,
    get_cooldown_ms,
    get_speed_mode,
    get_sentence,
    clear_sentence,
    apply_preset_phrase,
    speakable_sentence,
    reset_session,
    get_dropped_frames,
    FrameReport,
};

pub use history::{
    clear_history,
    get_history_json,
    export_history,
    export_filename,
    translation_url,
    accept_translation,
};
