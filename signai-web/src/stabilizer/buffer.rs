//! Rolling label window for majority-vote smoothing
//!
//! Stores the last 12 raw per-frame classifications in chronological order.

use std::collections::VecDeque;

use crate::classifier::{Classification, Gesture};

/// Number of frames in the smoothing window
pub const WINDOW_SIZE: usize = 12;

/// Majority must cover more than this fraction of the window
pub const MAJORITY_FRACTION: f32 = 0.6;

/// Rolling window that keeps the newest classifications, oldest first
#[derive(Debug, Clone)]
pub struct LabelWindow {
    frames: VecDeque<Classification>,
}

impl LabelWindow {
    pub fn new() -> Self {
        Self {
            frames: VecDeque::with_capacity(WINDOW_SIZE + 1),
        }
    }

    /// Push a new frame, evicting the oldest past capacity
    pub fn push(&mut self, frame: Classification) {
        self.frames.push_back(frame);
        if self.frames.len() > WINDOW_SIZE {
            self.frames.pop_front();
        }
    }

    /// Most frequent label and its count.
    ///
    /// Ties go to the label that appears first in the window (oldest first).
    pub fn majority(&self) -> Option<(Gesture, usize)> {
        // At most ten distinct labels, a Vec keeps first-seen order
        let mut tally: Vec<(Gesture, usize)> = Vec::with_capacity(Gesture::VOCABULARY.len() + 1);
        for frame in &self.frames {
            match tally.iter_mut().find(|(g, _)| *g == frame.gesture) {
                Some((_, count)) => *count += 1,
                None => tally.push((frame.gesture, 1)),
            }
        }

        let mut best: Option<(Gesture, usize)> = None;
        for (label, count) in tally {
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((label, count));
            }
        }
        best
    }

    /// Majority label if it covers more than 60% of a full window,
    /// paired with the confidence of its most recent frame
    pub fn dominant(&self) -> Option<Classification> {
        let threshold = WINDOW_SIZE as f32 * MAJORITY_FRACTION;
        let (label, _) = self
            .majority()
            .filter(|(_, count)| *count as f32 > threshold)?;
        self.latest(label)
    }

    /// Newest frame carrying `label`
    fn latest(&self, label: Gesture) -> Option<Classification> {
        self.frames.iter().rev().find(|frame| frame.gesture == label).copied()
    }

    /// Frame count (for debugging)
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Clear the window (useful on reset)
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl Default for LabelWindow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(gesture: Gesture) -> Classification {
        Classification::new(gesture, 90)
    }

    #[test]
    fn test_window_never_exceeds_capacity() {
        let mut window = LabelWindow::new();
        for _ in 0..40 {
            window.push(frame(Gesture::Yes));
            assert!(window.len() <= WINDOW_SIZE);
        }
        assert_eq!(window.len(), WINDOW_SIZE);
    }

    #[test]
    fn test_full_window_of_one_label() {
        let mut window = LabelWindow::new();
        for _ in 0..WINDOW_SIZE {
            window.push(frame(Gesture::Stop));
        }
        assert_eq!(window.majority(), Some((Gesture::Stop, 12)));
        assert_eq!(window.dominant(), Some(frame(Gesture::Stop)));
    }

    #[test]
    fn test_seven_of_twelve_is_not_enough() {
        let mut window = LabelWindow::new();
        for _ in 0..5 {
            window.push(frame(Gesture::No));
        }
        for _ in 0..7 {
            window.push(frame(Gesture::Yes));
        }
        assert_eq!(window.majority(), Some((Gesture::Yes, 7)));
        assert_eq!(window.dominant(), None);

        // Oldest "No" drops out, eighth "Yes" arrives
        window.push(frame(Gesture::Yes));
        assert_eq!(window.dominant(), Some(frame(Gesture::Yes)));
    }

    #[test]
    fn test_tie_goes_to_oldest_label() {
        let mut window = LabelWindow::new();
        for label in [Gesture::Good, Gesture::You, Gesture::You, Gesture::Good] {
            window.push(frame(label));
        }
        assert_eq!(window.majority(), Some((Gesture::Good, 2)));
    }

    #[test]
    fn test_eviction_is_fifo() {
        let mut window = LabelWindow::new();
        window.push(frame(Gesture::Hello));
        for _ in 0..WINDOW_SIZE {
            window.push(frame(Gesture::Help));
        }
        assert_eq!(window.majority(), Some((Gesture::Help, 12)));
    }

    #[test]
    fn test_empty_window() {
        let window = LabelWindow::new();
        assert!(window.is_empty());
        assert_eq!(window.majority(), None);
        assert_eq!(window.dominant(), None);
    }

    #[test]
    fn test_dominant_carries_latest_confidence() {
        let mut window = LabelWindow::new();
        for _ in 0..10 {
            window.push(Classification::new(Gesture::Yes, 95));
        }
        window.push(Classification::new(Gesture::Yes, 81));
        window.push(Classification::NONE);

        let dominant = window.dominant().unwrap();
        assert_eq!(dominant.gesture, Gesture::Yes);
        assert_eq!(dominant.confidence, 81);
    }
}
