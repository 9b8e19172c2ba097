//! Frame Guard - in-flight gate for the detector callback
//!
//! Only one frame runs through the pipeline at a time. A frame that
//! arrives while another is still being processed is dropped and
//! counted, never queued.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

pub struct FrameGuard {
    busy: AtomicBool,
    dropped: AtomicU32,
}

impl FrameGuard {
    pub const fn new() -> Self {
        Self {
            busy: AtomicBool::new(false),
            dropped: AtomicU32::new(0),
        }
    }

    /// Claim the pipeline for one frame.
    ///
    /// Returns None (and counts a drop) if a frame is already in flight.
    /// The pipeline is released when the permit is dropped.
    pub fn try_acquire(&self) -> Option<FramePermit<'_>> {
        match self
            .busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
        {
            Ok(_) => Some(FramePermit { guard: self }),
            Err(_) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Frames discarded since creation or the last reset
    pub fn dropped_frames(&self) -> u32 {
        self.dropped.load(Ordering::Relaxed)
    }

    pub fn reset_dropped(&self) {
        self.dropped.store(0, Ordering::Relaxed);
    }
}

impl Default for FrameGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Held while a frame is being processed
pub struct FramePermit<'a> {
    guard: &'a FrameGuard,
}

impl Drop for FramePermit<'_> {
    fn drop(&mut self) {
        self.guard.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_frame_dropped_while_busy() {
        let guard = FrameGuard::new();
        let permit = guard.try_acquire();
        assert!(permit.is_some());

        assert!(guard.try_acquire().is_none());
        assert!(guard.try_acquire().is_none());
        assert_eq!(guard.dropped_frames(), 2);

        drop(permit);
        assert!(guard.try_acquire().is_some());
        assert_eq!(guard.dropped_frames(), 2);
    }

    #[test]
    fn test_reset_dropped() {
        let guard = FrameGuard::new();
        let _permit = guard.try_acquire();
        assert!(guard.try_acquire().is_none());
        guard.reset_dropped();
        assert_eq!(guard.dropped_frames(), 0);
    }
}
