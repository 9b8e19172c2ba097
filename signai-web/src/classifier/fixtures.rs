//! Synthetic hands for classifier tests
//!
//! Wrist sits at (0.5, 0.9), fingers point up the screen. Extended
//! fingertips land at y = 0.50, folded ones curl back to y = 0.72.

use super::landmarks::*;

const WRIST_POS: (f32, f32) = (0.5, 0.9);

/// Column of each finger (index, middle, ring, pinky)
const FINGER_X: [f32; 4] = [0.42, 0.50, 0.58, 0.66];

/// (MCP, PIP, DIP, TIP) indices per finger
const FINGER_CHAINS: [[usize; 4]; 4] = [
    [INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP],
    [MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP],
    [RING_MCP, RING_PIP, RING_DIP, RING_TIP],
    [PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP],
];

#[derive(Clone, Copy, Debug)]
pub enum Thumb {
    /// Tucked across the palm
    Folded,
    /// Extended, tip above the IP joint
    Up,
    /// Extended, tip below the IP joint
    Down,
    /// Extended, tip touching the extended index fingertip
    Pinch,
}

impl Thumb {
    fn tip(self) -> (f32, f32) {
        match self {
            Thumb::Folded => (0.42, 0.80),
            Thumb::Up => (0.22, 0.68),
            Thumb::Down => (0.15, 0.85),
            Thumb::Pinch => (0.43, 0.52),
        }
    }
}

pub struct HandBuilder {
    thumb: Thumb,
    fingers: [bool; 4],
}

impl HandBuilder {
    /// All four fingers start folded
    pub fn new(thumb: Thumb) -> Self {
        Self {
            thumb,
            fingers: [false; 4],
        }
    }

    /// Extended flags for index, middle, ring, pinky
    pub fn fingers(mut self, fingers: [bool; 4]) -> Self {
        self.fingers = fingers;
        self
    }

    pub fn build(&self) -> HandLandmarks {
        let mut hand = [HandLandmark::default(); HAND_LANDMARK_COUNT];
        hand[WRIST] = HandLandmark::new(WRIST_POS.0, WRIST_POS.1);

        hand[THUMB_CMC] = HandLandmark::new(0.40, 0.85);
        hand[THUMB_MCP] = HandLandmark::new(0.35, 0.80);
        hand[THUMB_IP] = HandLandmark::new(0.30, 0.75);
        let (tx, ty) = self.thumb.tip();
        hand[THUMB_TIP] = HandLandmark::new(tx, ty);

        for (finger, chain) in FINGER_CHAINS.iter().enumerate() {
            let x = FINGER_X[finger];
            let open = self.fingers[finger];
            hand[chain[0]] = HandLandmark::new(x, 0.75);
            hand[chain[1]] = HandLandmark::new(x, 0.65);
            hand[chain[2]] = HandLandmark::new(x, if open { 0.58 } else { 0.70 });
            hand[chain[3]] = HandLandmark::new(x, if open { 0.50 } else { 0.72 });
        }

        hand
    }
}
