//! Hand landmark parsing and the per-frame JS entry points
//!
//! JavaScript hands over MediaPipe Hands results as a flat Float32Array
//! of 63 values (21 landmarks × x, y, z) plus the handedness label.

use thiserror::Error;
use wasm_bindgen::prelude::*;

use crate::classifier::{classify, HandLandmark, HandLandmarks, Handedness, HAND_LANDMARK_COUNT};

use super::classifier_integration::{self, FrameReport};

/// Floats per frame: 21 landmarks × (x, y, z)
pub const FLAT_HAND_LEN: usize = HAND_LANDMARK_COUNT * 3;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FrameError {
    #[error("Invalid hand landmark data length: {actual} (expected {expected})")]
    InvalidLength { expected: usize, actual: usize },
}

/// Unpack the flat x,y,z array into landmarks
pub fn parse_hand_landmarks(data: &[f32]) -> Result<HandLandmarks, FrameError> {
    if data.len() != FLAT_HAND_LEN {
        return Err(FrameError::InvalidLength {
            expected: FLAT_HAND_LEN,
            actual: data.len(),
        });
    }

    let mut landmarks = [HandLandmark::default(); HAND_LANDMARK_COUNT];
    for (landmark, xyz) in landmarks.iter_mut().zip(data.chunks_exact(3)) {
        *landmark = HandLandmark {
            x: xyz[0],
            y: xyz[1],
            z: xyz[2],
        };
    }
    Ok(landmarks)
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from the MediaPipe `onResults` callback when a hand is visible
#[wasm_bindgen]
pub fn process_hand_frame(data: &[f32], handedness: &str) -> Result<FrameReport, JsValue> {
    let landmarks = parse_hand_landmarks(data).map_err(|err| {
        web_sys::console::warn_1(&err.to_string().into());
        JsValue::from(err)
    })?;

    let classification = classify(&landmarks, Handedness::from_label(handedness));
    Ok(classifier_integration::run_frame(Some(classification)))
}

/// Called from the MediaPipe `onResults` callback when no hand is visible
#[wasm_bindgen]
pub fn process_empty_frame() -> FrameReport {
    classifier_integration::run_frame(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_wrong_length() {
        let err = parse_hand_landmarks(&[0.0; 42]).unwrap_err();
        assert_eq!(err, FrameError::InvalidLength { expected: 63, actual: 42 });
    }

    #[test]
    fn test_parse_keeps_order() {
        let data: Vec<f32> = (0..FLAT_HAND_LEN).map(|i| i as f32).collect();
        let landmarks = parse_hand_landmarks(&data).unwrap();
        assert_eq!(landmarks[0], HandLandmark { x: 0.0, y: 1.0, z: 2.0 });
        assert_eq!(landmarks[20], HandLandmark { x: 60.0, y: 61.0, z: 62.0 });
    }
}
