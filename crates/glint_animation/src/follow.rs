//! Exponential follow smoothing
//!
//! A [`Follower`] chases a target coordinate by closing a fixed
//! fraction of the remaining distance on every frame. The result is a
//! lagged, eased pursuit that approaches the target asymptotically and
//! never overshoots.
//!
//! Stepping is deliberately per-frame rather than per-second: the
//! smoothing factor is defined against frame cadence, matching the
//! pointer-parallax feel the factor was tuned for.

use glint_core::Vec2;

/// Settled when the remaining distance is imperceptible.
const SETTLE_EPSILON: f32 = 1e-3;

/// A per-frame exponential smoother for 2D coordinates
#[derive(Clone, Copy, Debug)]
pub struct Follower {
    current: Vec2,
    target: Vec2,
    factor: f32,
}

impl Follower {
    /// Create a follower at `initial` closing `factor` of the remaining
    /// distance per frame
    ///
    /// The factor is clamped to (0, 1]; 1.0 tracks the target exactly.
    pub fn new(factor: f32, initial: Vec2) -> Self {
        Self {
            current: initial,
            target: initial,
            factor: factor.clamp(f32::EPSILON, 1.0),
        }
    }

    pub fn value(&self) -> Vec2 {
        self.current
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Advance one frame, returning the new smoothed value
    pub fn step(&mut self) -> Vec2 {
        self.current = self.current.lerp(&self.target, self.factor);
        self.current
    }

    /// Whether the follower has effectively reached its target
    pub fn is_settled(&self) -> bool {
        self.current.approx_eq(&self.target, SETTLE_EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_step_fraction() {
        let mut follower = Follower::new(0.05, Vec2::ZERO);
        follower.set_target(Vec2::new(1.0, 1.0));

        let v = follower.step();
        assert!((v.x - 0.05).abs() < 1e-6);
        assert!((v.y - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_converges_without_overshoot() {
        let mut follower = Follower::new(0.05, Vec2::ZERO);
        follower.set_target(Vec2::new(1.0, 1.0));

        let mut prev = 0.0;
        for _ in 0..600 {
            let v = follower.step();
            // Monotonic approach, never past the target
            assert!(v.x >= prev);
            assert!(v.x <= 1.0);
            prev = v.x;
        }
        assert!(follower.is_settled());
        assert!((follower.value().x - 1.0).abs() < 1e-2);
    }

    #[test]
    fn test_retarget_mid_flight() {
        let mut follower = Follower::new(0.5, Vec2::ZERO);
        follower.set_target(Vec2::new(10.0, 0.0));
        follower.step();
        assert!((follower.value().x - 5.0).abs() < 1e-6);

        // New target pulls from the current position, not the origin
        follower.set_target(Vec2::new(0.0, 0.0));
        follower.step();
        assert!((follower.value().x - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_factor_clamped() {
        let follower = Follower::new(5.0, Vec2::ZERO);
        let mut f = follower;
        f.set_target(Vec2::new(1.0, 0.0));
        assert!((f.step().x - 1.0).abs() < 1e-6);
    }
}
