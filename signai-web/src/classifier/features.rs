//! Geometric features of a single hand pose
//!
//! Features consumed by the rule table:
//! - extended/folded state of every digit
//! - thumb tip to index tip distance (pinch)
//! - mean horizontal spread between adjacent fingertips
//! - thumb tip height relative to the thumb IP joint

use std::cmp::Ordering;

use super::landmarks::*;

/// Fingertip must be this much further from the wrist than its PIP joint
pub const FINGER_EXTENSION_RATIO: f32 = 1.2;

/// Thumb tip must be this much further from the wrist than the thumb IP joint
pub const THUMB_EXTENSION_RATIO: f32 = 1.1;

/// (tip, reference joint) for index, middle, ring, pinky
const FINGER_JOINTS: [(usize, usize); 4] = [
    (INDEX_TIP, INDEX_PIP),
    (MIDDLE_TIP, MIDDLE_PIP),
    (RING_TIP, RING_PIP),
    (PINKY_TIP, PINKY_PIP),
];

/// Fingertips from thumb to pinky, used for the spread measurement
const FINGERTIPS: [usize; 5] = [THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

/// Extended (true) or folded (false) for each digit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FingerStates {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerStates {
    pub fn from_landmarks(landmarks: &HandLandmarks) -> Self {
        let wrist = &landmarks[WRIST];
        let extended = |tip: usize, joint: usize, ratio: f32| {
            landmarks[tip].distance(wrist) > landmarks[joint].distance(wrist) * ratio
        };

        let [index, middle, ring, pinky] =
            FINGER_JOINTS.map(|(tip, pip)| extended(tip, pip, FINGER_EXTENSION_RATIO));

        Self {
            thumb: extended(THUMB_TIP, THUMB_IP, THUMB_EXTENSION_RATIO),
            index,
            middle,
            ring,
            pinky,
        }
    }

    /// Build from a compact [thumb, index, middle, ring, pinky] pattern
    pub const fn from_pattern(pattern: [bool; 5]) -> Self {
        Self {
            thumb: pattern[0],
            index: pattern[1],
            middle: pattern[2],
            ring: pattern[3],
            pinky: pattern[4],
        }
    }

    pub fn all_extended(&self) -> bool {
        *self == Self::from_pattern([true; 5])
    }

    pub fn all_folded(&self) -> bool {
        *self == Self::from_pattern([false; 5])
    }

    /// Index, middle, ring and pinky all extended (thumb not considered)
    pub fn four_fingers_extended(&self) -> bool {
        self.index && self.middle && self.ring && self.pinky
    }
}

/// Everything the rule table looks at for one frame
#[derive(Clone, Copy, Debug)]
pub struct PoseFeatures {
    pub fingers: FingerStates,
    pub handedness: Handedness,
    /// Distance between thumb tip and index tip
    pub pinch_distance: f32,
    /// Mean |dx| over adjacent fingertip pairs
    pub fingertip_spread: f32,
    /// Thumb tip y compared with thumb IP y (Less = tip is higher on screen)
    pub thumb_tip_height: Ordering,
}

impl PoseFeatures {
    pub fn extract(landmarks: &HandLandmarks, handedness: Handedness) -> Self {
        let spread_total: f32 = FINGERTIPS
            .windows(2)
            .map(|pair| (landmarks[pair[0]].x - landmarks[pair[1]].x).abs())
            .sum();

        let thumb_tip_height = landmarks[THUMB_TIP]
            .y
            .partial_cmp(&landmarks[THUMB_IP].y)
            .unwrap_or(Ordering::Equal);

        Self {
            fingers: FingerStates::from_landmarks(landmarks),
            handedness,
            pinch_distance: landmarks[THUMB_TIP].distance(&landmarks[INDEX_TIP]),
            fingertip_spread: spread_total / (FINGERTIPS.len() - 1) as f32,
            thumb_tip_height,
        }
    }
}
