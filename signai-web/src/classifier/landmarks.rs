//! Hand landmark types as delivered by MediaPipe Hands
//!
//! One detector callback yields 21 normalized points plus a handedness label.
//! Only x/y take part in classification; z is carried for completeness.

// ============================================================================
// HAND LANDMARK INDICES (MediaPipe Hands - 21 total)
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Number of points in one hand
pub const HAND_LANDMARK_COUNT: usize = 21;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single hand landmark (normalized coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandLandmark {
    pub x: f32,  // 0-1 normalized
    pub y: f32,  // 0-1 normalized, grows downwards
    pub z: f32,  // Relative depth (unused)
}

impl HandLandmark {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Planar Euclidean distance, depth ignored
    pub fn distance(&self, other: &HandLandmark) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// One frame's worth of hand landmarks
pub type HandLandmarks = [HandLandmark; HAND_LANDMARK_COUNT];

/// Which hand the detector believes it is looking at
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Handedness {
    Left,
    Right,
    #[default]
    Unknown,
}

impl Handedness {
    /// Parse the detector's label. Anything but "Left"/"Right" is Unknown.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Left" => Handedness::Left,
            "Right" => Handedness::Right,
            _ => Handedness::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_ignores_depth() {
        let a = HandLandmark { x: 0.0, y: 0.0, z: 5.0 };
        let b = HandLandmark { x: 0.3, y: 0.4, z: -5.0 };
        assert!((a.distance(&b) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_handedness_labels() {
        assert_eq!(Handedness::from_label("Left"), Handedness::Left);
        assert_eq!(Handedness::from_label("Right"), Handedness::Right);
        assert_eq!(Handedness::from_label("left"), Handedness::Unknown);
        assert_eq!(Handedness::from_label(""), Handedness::Unknown);
    }
}
