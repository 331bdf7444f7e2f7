//! Easing functions
//!
//! Curves map normalized progress (0.0 to 1.0) to an eased value.
//! Input is clamped, so callers can feed raw `elapsed / duration`.

/// An easing curve
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    /// Quadratic ease-in
    EaseIn,
    /// Quadratic ease-out
    EaseOut,
    /// Quadratic ease-in-out
    EaseInOut,
    /// Cubic ease-out
    EaseOutCubic,
    /// Quartic ease-out: 1 - (1 - t)^4
    EaseOutQuart,
}

impl Easing {
    /// Apply the curve to progress `t`
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::EaseOutCubic,
            Easing::EaseOutQuart,
        ] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn test_clamping() {
        assert_eq!(Easing::EaseOutQuart.apply(-1.0), 0.0);
        assert_eq!(Easing::EaseOutQuart.apply(2.0), 1.0);
    }

    #[test]
    fn test_ease_out_quart_curve() {
        // 1 - (1 - 0.5)^4 = 0.9375
        assert!((Easing::EaseOutQuart.apply(0.5) - 0.9375).abs() < 1e-6);
        // Ease-out front-loads progress
        assert!(Easing::EaseOutQuart.apply(0.25) > 0.25);
    }

    #[test]
    fn test_monotonic() {
        for easing in [Easing::EaseOutQuart, Easing::EaseInOut] {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = easing.apply(i as f32 / 100.0);
                assert!(v >= prev);
                prev = v;
            }
        }
    }
}
