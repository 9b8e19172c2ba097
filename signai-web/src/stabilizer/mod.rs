//! Stabilizer module - turns noisy per-frame labels into committed gestures
//!
//! Re-exports only. All logic in submodules.

mod buffer;
mod config;
mod frame_guard;
mod session;

pub use buffer::{LabelWindow, MAJORITY_FRACTION, WINDOW_SIZE};
pub use config::{SpeedMode, StabilizerConfig, DEFAULT_COOLDOWN_MS};
pub use frame_guard::{FrameGuard, FramePermit};
pub use session::{CommitEvent, FrameOutcome, StabilizerSession};
