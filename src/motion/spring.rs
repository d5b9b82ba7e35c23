//! Damped spring used for snap-back and exit motion.

use crate::constants::*;

/// Largest integration step; keeps the stiff default spring stable at low frame rates.
const MAX_STEP: f32 = 1.0 / 240.0;

/// Speed below which the spring may rest (px/s)
const REST_SPEED: f32 = 2.0;
/// Distance to target below which the spring may rest (px)
const REST_DELTA: f32 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    position: f32,
    velocity: f32,
    target: f32,
    stiffness: f32,
    damping: f32,
    mass: f32,
    settled: bool,
}

impl Spring {
    /// Spring with the deck's default stiffness and damping
    pub fn new(from: f32, to: f32, velocity: f32) -> Self {
        Self::with_params(from, to, velocity, SPRING_STIFFNESS, SPRING_DAMPING, SPRING_MASS)
    }

    pub fn with_params(
        from: f32,
        to: f32,
        velocity: f32,
        stiffness: f32,
        damping: f32,
        mass: f32,
    ) -> Self {
        let mut spring = Self {
            position: from,
            velocity,
            target: to,
            stiffness,
            damping,
            mass,
            settled: false,
        };
        spring.settled = spring.at_rest();
        if spring.settled {
            spring.position = to;
            spring.velocity = 0.0;
        }
        spring
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// True once the spring has come to rest on its target
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Advance by `dt` seconds and return the new position.
    pub fn update(&mut self, dt: f32) -> f32 {
        if self.settled || dt <= 0.0 {
            return self.position;
        }

        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            let force = -self.stiffness * (self.position - self.target) - self.damping * self.velocity;
            self.velocity += force / self.mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }

        if self.at_rest() {
            self.settled = true;
            self.position = self.target;
            self.velocity = 0.0;
        }
        self.position
    }

    fn at_rest(&self) -> bool {
        self.velocity.abs() <= REST_SPEED && (self.position - self.target).abs() <= REST_DELTA
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut Spring, seconds: f32) {
        let frames = (seconds / FRAME_TIME).ceil() as usize;
        for _ in 0..frames {
            spring.update(FRAME_TIME);
        }
    }

    #[test]
    fn test_snap_back_settles_on_zero() {
        let mut spring = Spring::new(200.0, 0.0, 0.0);
        assert!(!spring.is_settled());
        run(&mut spring, 2.0);
        assert!(spring.is_settled());
        assert_eq!(spring.position(), 0.0);
    }

    #[test]
    fn test_starts_settled_at_target() {
        let spring = Spring::new(0.0, 0.0, 0.0);
        assert!(spring.is_settled());
    }

    #[test]
    fn test_moves_toward_target_before_settling() {
        let mut spring = Spring::new(0.0, 500.0, 0.0);
        spring.update(FRAME_TIME);
        assert!(spring.position() > 0.0);
        assert!(!spring.is_settled());
    }

    #[test]
    fn test_large_step_stays_finite() {
        let mut spring = Spring::new(0.0, 1000.0, 3000.0);
        spring.update(0.5);
        assert!(spring.position().is_finite());
        run(&mut spring, 3.0);
        assert!(spring.is_settled());
        assert_eq!(spring.position(), 1000.0);
    }
}
