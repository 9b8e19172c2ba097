//! Ordered rule table mapping pose features to gestures
//!
//! Rules are evaluated top to bottom and the first match wins. Some
//! predicates overlap (a pinch with all fingers out also looks like an
//! open palm), so the order below is part of the contract.

use std::cmp::Ordering;

use super::features::{FingerStates, PoseFeatures};
use super::landmarks::{HandLandmarks, Handedness};
use super::model::{Classification, Gesture};

/// Max thumb-index tip distance for a pinch
pub const PINCH_THRESHOLD: f32 = 0.05;

/// Min mean fingertip spread for an open "Hello" palm
pub const SPREAD_THRESHOLD: f32 = 0.04;

/// One entry of the rule table
pub struct Rule {
    pub gesture: Gesture,
    pub confidence: u8,
    pub matches: fn(&PoseFeatures) -> bool,
}

/// Classification rules in evaluation order
pub const RULES: [Rule; 9] = [
    Rule { gesture: Gesture::Ok, confidence: 95, matches: is_ok },
    Rule { gesture: Gesture::Hello, confidence: 95, matches: is_hello },
    Rule { gesture: Gesture::Help, confidence: 90, matches: is_help },
    Rule { gesture: Gesture::Good, confidence: 92, matches: is_good },
    Rule { gesture: Gesture::You, confidence: 90, matches: is_you },
    Rule { gesture: Gesture::ThankYou, confidence: 88, matches: is_thank_you },
    Rule { gesture: Gesture::Yes, confidence: 95, matches: is_yes },
    Rule { gesture: Gesture::No, confidence: 95, matches: is_no },
    Rule { gesture: Gesture::Stop, confidence: 90, matches: is_stop },
];

/// Classify one frame's landmarks
pub fn classify(landmarks: &HandLandmarks, handedness: Handedness) -> Classification {
    classify_features(&PoseFeatures::extract(landmarks, handedness))
}

/// Run the rule table against precomputed features
pub fn classify_features(features: &PoseFeatures) -> Classification {
    RULES
        .iter()
        .find(|rule| (rule.matches)(features))
        .map(|rule| Classification::new(rule.gesture, rule.confidence))
        .unwrap_or(Classification::NONE)
}

// ============================================================================
// PREDICATES
// ============================================================================

fn is_ok(f: &PoseFeatures) -> bool {
    let d = &f.fingers;
    f.pinch_distance < PINCH_THRESHOLD && d.middle && d.ring && d.pinky
}

fn is_hello(f: &PoseFeatures) -> bool {
    f.fingers.all_extended() && f.fingertip_spread > SPREAD_THRESHOLD
}

// Left hand only. Mirrored right-hand pose is deliberately not matched.
fn is_help(f: &PoseFeatures) -> bool {
    !f.fingers.thumb && f.fingers.four_fingers_extended() && f.handedness == Handedness::Left
}

fn is_good(f: &PoseFeatures) -> bool {
    f.fingers == FingerStates::from_pattern([false, true, true, false, false])
}

fn is_you(f: &PoseFeatures) -> bool {
    let d = &f.fingers;
    d.index && !d.middle && !d.ring && !d.pinky
}

fn is_thank_you(f: &PoseFeatures) -> bool {
    f.fingers == FingerStates::from_pattern([true, false, false, false, true])
}

fn thumb_only(f: &PoseFeatures) -> bool {
    f.fingers == FingerStates::from_pattern([true, false, false, false, false])
}

fn is_yes(f: &PoseFeatures) -> bool {
    thumb_only(f) && f.thumb_tip_height == Ordering::Less
}

fn is_no(f: &PoseFeatures) -> bool {
    thumb_only(f) && f.thumb_tip_height == Ordering::Greater
}

fn is_stop(f: &PoseFeatures) -> bool {
    f.fingers.all_folded()
}
