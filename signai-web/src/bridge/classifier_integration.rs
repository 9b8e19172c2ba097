//! Classifier integration - connects per-frame classification with the
//! stabilizer session, the current sentence and the conversation log
//!
//! All pipeline state lives in one thread-local value. A static frame
//! guard keeps a second detector callback from entering the pipeline
//! while one is still running; such frames are dropped.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;

use crate::classifier::{Classification, ConfidenceTier, Gesture};
use crate::sentence::{ConversationLog, EntryKind, Transcript};
use crate::stabilizer::{FrameGuard, FrameOutcome, StabilizerSession};

use super::clock;

/// Result of one detector callback, read by the page for display
#[wasm_bindgen]
#[derive(Clone, Debug, PartialEq)]
pub struct FrameReport {
    label: Gesture,
    confidence: u8,
    committed: bool,
    sentence: Option<String>,
    dropped: bool,
}

impl FrameReport {
    fn dropped_frame() -> Self {
        Self {
            label: Gesture::None,
            confidence: 0,
            committed: false,
            sentence: None,
            dropped: true,
        }
    }
}

#[wasm_bindgen]
impl FrameReport {
    /// Stabilized gesture word, "—" when nothing is recognized
    #[wasm_bindgen(getter)]
    pub fn label(&self) -> String {
        self.label.as_str().to_string()
    }

    /// Raw confidence of this frame (0-100)
    #[wasm_bindgen(getter)]
    pub fn confidence(&self) -> u8 {
        self.confidence
    }

    /// "high", "medium" or "low"
    #[wasm_bindgen(getter)]
    pub fn confidence_tier(&self) -> String {
        ConfidenceTier::from_confidence(self.confidence).as_str().to_string()
    }

    /// True when this frame committed a new gesture
    #[wasm_bindgen(getter)]
    pub fn committed(&self) -> bool {
        self.committed
    }

    /// Newly assembled sentence, only set on commit
    #[wasm_bindgen(getter)]
    pub fn sentence(&self) -> Option<String> {
        self.sentence.clone()
    }

    /// True when the frame was discarded because another was in flight
    #[wasm_bindgen(getter)]
    pub fn dropped(&self) -> bool {
        self.dropped
    }
}

/// Everything the pipeline keeps between frames
#[derive(Default)]
pub(super) struct ClassifierState {
    pub session: StabilizerSession,
    pub transcript: Transcript,
    pub history: ConversationLog,
}

impl ClassifierState {
    /// Push one frame through the stabilizer and record any commit
    pub fn handle_frame(
        &mut self,
        raw: Option<Classification>,
        now_ms: f64,
        timestamp: impl FnOnce() -> String,
    ) -> FrameReport {
        let outcome = match raw {
            Some(raw) => self.session.observe(raw, now_ms),
            None => self.session.observe_no_hand(),
        };
        self.record(outcome, timestamp)
    }

    fn record(&mut self, outcome: FrameOutcome, timestamp: impl FnOnce() -> String) -> FrameReport {
        let sentence = outcome.commit.map(|commit| {
            self.transcript.set(commit.sentence.clone());
            self.history.push(commit.sentence.clone(), timestamp(), EntryKind::Gesture);
            commit.sentence
        });

        FrameReport {
            label: outcome.label,
            confidence: outcome.confidence,
            committed: sentence.is_some(),
            sentence,
            dropped: false,
        }
    }

    /// Clear button: empty sentence, allow the last gesture again
    pub fn clear_sentence(&mut self) {
        self.transcript.clear();
        self.session.clear_sentence();
    }

    pub fn apply_preset(&mut self, phrase: &str, timestamp: String) {
        self.transcript.set(phrase);
        self.history.push(phrase, timestamp, EntryKind::Preset);
    }

    /// New camera session. The conversation log is kept.
    pub fn reset(&mut self) {
        self.session.reset();
        self.transcript.clear();
    }
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static CLASSIFIER_STATE: RefCell<ClassifierState> = RefCell::new(ClassifierState::default());
}

static FRAME_GUARD: FrameGuard = FrameGuard::new();

pub(super) fn with_state<R>(f: impl FnOnce(&mut ClassifierState) -> R) -> R {
    CLASSIFIER_STATE.with(|state_cell| f(&mut state_cell.borrow_mut()))
}

/// Claim the guard, then run the frame. A busy guard drops the frame
/// before the state is touched.
fn guarded_frame(
    guard: &FrameGuard,
    state_cell: &RefCell<ClassifierState>,
    raw: Option<Classification>,
    now_ms: f64,
    timestamp: impl FnOnce() -> String,
) -> FrameReport {
    let Some(_permit) = guard.try_acquire() else {
        return FrameReport::dropped_frame();
    };
    state_cell.borrow_mut().handle_frame(raw, now_ms, timestamp)
}

/// Run one frame if the pipeline is free, otherwise report it as dropped
pub(super) fn run_frame(raw: Option<Classification>) -> FrameReport {
    let now = clock::now_ms();
    let report = CLASSIFIER_STATE.with(|state_cell| {
        guarded_frame(&FRAME_GUARD, state_cell, raw, now, clock::display_time)
    });

    if let Some(sentence) = &report.sentence {
        crate::console_log!("🤟 {} → \"{}\"", report.label(), sentence);
    }
    report
}

// ============================================================================
// WASM API
// ============================================================================

/// Set the minimum time between committed gestures (speed slider)
#[wasm_bindgen]
pub fn set_cooldown_ms(cooldown_ms: u32) {
    let mode = with_state(|state| {
        state.session.set_cooldown_ms(cooldown_ms);
        state.session.config().speed_mode()
    });
    crate::console_log!("⏱️ Cooldown {} ms ({})", cooldown_ms, mode.label());
}

#[wasm_bindgen]
pub fn get_cooldown_ms() -> u32 {
    with_state(|state| state.session.cooldown_ms())
}

/// "Fast Mode", "Normal Mode" or "Learning Mode"
#[wasm_bindgen]
pub fn get_speed_mode() -> String {
    with_state(|state| state.session.config().speed_mode().label().to_string())
}

#[wasm_bindgen]
pub fn get_sentence() -> String {
    with_state(|state| state.transcript.sentence().to_string())
}

#[wasm_bindgen]
pub fn clear_sentence() {
    with_state(|state| state.clear_sentence());
}

/// Replace the sentence with a preset phrase and log it
#[wasm_bindgen]
pub fn apply_preset_phrase(phrase: &str) {
    let timestamp = clock::display_time();
    with_state(|state| state.apply_preset(phrase, timestamp));
}

/// Sentence for speech synthesis, or an error if there is none
#[wasm_bindgen]
pub fn speakable_sentence() -> Result<String, JsValue> {
    with_state(|state| {
        state
            .transcript
            .speakable()
            .map(str::to_string)
            .map_err(JsValue::from)
    })
}

/// Start a fresh camera session
#[wasm_bindgen]
pub fn reset_session() {
    with_state(|state| state.reset());
    FRAME_GUARD.reset_dropped();
    crate::console_log!("🔄 Session reset");
}

/// Frames discarded because the previous one was still processing
#[wasm_bindgen]
pub fn get_dropped_frames() -> u32 {
    FRAME_GUARD.dropped_frames()
}
