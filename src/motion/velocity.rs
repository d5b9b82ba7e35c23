//! Pointer velocity estimated from recent samples.

use std::collections::VecDeque;

use crate::constants::VELOCITY_WINDOW;

/// Keeps the pointer positions of the last [`VELOCITY_WINDOW`] seconds.
#[derive(Debug, Clone, Default)]
pub struct VelocityTracker {
    samples: VecDeque<(f64, f32)>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, time: f64, x: f32) {
        self.samples.push_back((time, x));
        while let Some(&(oldest, _)) = self.samples.front() {
            if time - oldest > VELOCITY_WINDOW && self.samples.len() > 2 {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Horizontal velocity in px/s, zero without two distinct sample times
    pub fn velocity(&self) -> f32 {
        let (Some(&(t0, x0)), Some(&(t1, x1))) = (self.samples.front(), self.samples.back()) else {
            return 0.0;
        };
        let dt = t1 - t0;
        if dt <= 0.0 {
            return 0.0;
        }
        ((x1 - x0) as f64 / dt) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_samples_is_still() {
        assert_eq!(VelocityTracker::new().velocity(), 0.0);
    }

    #[test]
    fn test_single_sample_is_still() {
        let mut tracker = VelocityTracker::new();
        tracker.push(1.0, 50.0);
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn test_steady_motion() {
        let mut tracker = VelocityTracker::new();
        for i in 0..10 {
            tracker.push(i as f64 * 0.01, i as f32 * 10.0);
        }
        assert!((tracker.velocity() - 1000.0).abs() < 1.0);
    }

    #[test]
    fn test_old_samples_are_forgotten() {
        let mut tracker = VelocityTracker::new();
        tracker.push(0.0, 0.0);
        tracker.push(0.05, 300.0);
        // Pointer then rests for a while
        for i in 0..30 {
            tracker.push(0.5 + i as f64 * 0.016, 300.0);
        }
        assert_eq!(tracker.velocity(), 0.0);
    }
}
