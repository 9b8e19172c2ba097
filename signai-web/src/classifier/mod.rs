//! Classifier module - static hand pose to gesture word
//!
//! Pure per-frame classification. No state is retained between calls.

mod features;
pub mod landmarks;
mod model;
mod rules;

#[cfg(test)]
pub(crate) mod fixtures;

pub use features::{FingerStates, PoseFeatures, FINGER_EXTENSION_RATIO, THUMB_EXTENSION_RATIO};
pub use landmarks::{HandLandmark, HandLandmarks, Handedness, HAND_LANDMARK_COUNT};
pub use model::{Classification, ConfidenceTier, Gesture, NO_GESTURE_LABEL};
pub use rules::{classify, classify_features, Rule, PINCH_THRESHOLD, RULES, SPREAD_THRESHOLD};
