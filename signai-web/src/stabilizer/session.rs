//! Stabilizer session - temporal debouncing of per-frame labels
//!
//! Owns all state that survives between frames:
//! - the rolling label window
//! - the currently displayed label
//! - the last committed gesture and when it was committed
//! - the committed gesture history
//!
//! Timestamps are passed in by the caller (milliseconds on a monotonic
//! clock), so the session itself never reads a clock.

use crate::classifier::{Classification, Gesture};
use crate::sentence::assemble;

use super::buffer::LabelWindow;
use super::config::StabilizerConfig;

/// A stabilized gesture accepted as a discrete event
#[derive(Clone, Debug, PartialEq)]
pub struct CommitEvent {
    pub gesture: Gesture,
    /// Confidence of the most recent frame classified as `gesture`
    pub confidence: u8,
    pub timestamp_ms: f64,
    /// Sentence assembled from the history including this gesture
    pub sentence: String,
}

/// What a single frame produced
#[derive(Clone, Debug, PartialEq)]
pub struct FrameOutcome {
    /// Stabilized label to display
    pub label: Gesture,
    /// Raw confidence of this frame's classification
    pub confidence: u8,
    pub commit: Option<CommitEvent>,
}

impl FrameOutcome {
    fn no_hand() -> Self {
        Self {
            label: Gesture::None,
            confidence: 0,
            commit: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StabilizerSession {
    window: LabelWindow,
    displayed: Classification,
    last_committed: Gesture,
    last_commit_ms: Option<f64>,
    history: Vec<Gesture>,
    config: StabilizerConfig,
}

impl StabilizerSession {
    pub fn new(config: StabilizerConfig) -> Self {
        Self {
            window: LabelWindow::new(),
            displayed: Classification::NONE,
            last_committed: Gesture::None,
            last_commit_ms: None,
            history: Vec::new(),
            config,
        }
    }

    /// Feed one frame's raw classification
    pub fn observe(&mut self, raw: Classification, now_ms: f64) -> FrameOutcome {
        self.window.push(raw);

        // Without a clear majority the previous label stays on screen
        if let Some(dominant) = self.window.dominant() {
            self.displayed = dominant;
        }

        let commit = self.try_commit(now_ms);

        FrameOutcome {
            label: self.displayed.gesture,
            confidence: raw.confidence,
            commit,
        }
    }

    /// Frame in which the detector found no hand. The window is left alone.
    pub fn observe_no_hand(&mut self) -> FrameOutcome {
        FrameOutcome::no_hand()
    }

    fn try_commit(&mut self, now_ms: f64) -> Option<CommitEvent> {
        let Classification {
            gesture: candidate,
            confidence,
        } = self.displayed;
        if candidate.is_none() || candidate == self.last_committed {
            return None;
        }
        if let Some(last) = self.last_commit_ms {
            if now_ms - last < f64::from(self.config.cooldown_ms) {
                return None;
            }
        }

        self.last_committed = candidate;
        self.last_commit_ms = Some(now_ms);
        self.history.push(candidate);

        let sentence = assemble(&self.history).unwrap_or_else(|| candidate.as_str().to_string());

        Some(CommitEvent {
            gesture: candidate,
            confidence,
            timestamp_ms: now_ms,
            sentence,
        })
    }

    /// Forget the last committed gesture so it can be committed again.
    /// The cooldown timer and history are kept.
    pub fn clear_sentence(&mut self) {
        self.last_committed = Gesture::None;
    }

    /// Start over, keeping the configured cooldown
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }

    pub fn displayed(&self) -> Gesture {
        self.displayed.gesture
    }

    pub fn last_committed(&self) -> Gesture {
        self.last_committed
    }

    pub fn history(&self) -> &[Gesture] {
        &self.history
    }

    pub fn config(&self) -> StabilizerConfig {
        self.config
    }

    pub fn cooldown_ms(&self) -> u32 {
        self.config.cooldown_ms
    }

    pub fn set_cooldown_ms(&mut self, cooldown_ms: u32) {
        self.config.cooldown_ms = cooldown_ms;
    }
}

impl Default for StabilizerSession {
    fn default() -> Self {
        Self::new(StabilizerConfig::default())
    }
}
