//! Counter ramp-up animation
//!
//! Animates a displayed number from zero to a target over a fixed
//! duration using a quartic ease-out, so the count rushes up early and
//! lands softly on the exact target.

use crate::easing::Easing;

/// A timed zero-to-target counter
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: f64,
    duration_ms: f32,
    elapsed_ms: f32,
    playing: bool,
}

impl CounterAnimation {
    pub fn new(target: f64, duration_ms: f32) -> Self {
        Self {
            target,
            duration_ms: duration_ms.max(0.0),
            elapsed_ms: 0.0,
            playing: false,
        }
    }

    pub fn start(&mut self) {
        self.elapsed_ms = 0.0;
        self.playing = true;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Progress through the duration, clamped to [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Current eased value
    ///
    /// Exactly `target` once the full duration has elapsed.
    pub fn value(&self) -> f64 {
        self.target * Easing::EaseOutQuart.apply(self.progress()) as f64
    }

    /// Current display value (floor of the eased value)
    pub fn display(&self) -> i64 {
        self.value().floor() as i64
    }

    /// Advance by `dt_ms` milliseconds
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }
        self.elapsed_ms += dt_ms;
        if self.elapsed_ms >= self.duration_ms {
            self.elapsed_ms = self.duration_ms;
            self.playing = false;
        }
    }
}

/// Format an integer with thousands grouping ("12,345")
pub fn format_grouped(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if negative {
        format!("-{out}")
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_endpoints() {
        let mut counter = CounterAnimation::new(1000.0, 2000.0);
        counter.start();

        assert_eq!(counter.display(), 0);

        counter.tick(2000.0);
        assert_eq!(counter.value(), 1000.0);
        assert_eq!(counter.display(), 1000);
        assert!(!counter.is_playing());
    }

    #[test]
    fn test_counter_monotonic() {
        let mut counter = CounterAnimation::new(1000.0, 2000.0);
        counter.start();

        let mut prev = 0;
        // 16ms frames for the full two seconds
        for _ in 0..130 {
            counter.tick(16.0);
            let shown = counter.display();
            assert!(shown >= prev);
            assert!(shown <= 1000);
            prev = shown;
        }
        assert_eq!(prev, 1000);
    }

    #[test]
    fn test_counter_ease_front_loads() {
        let mut counter = CounterAnimation::new(1000.0, 2000.0);
        counter.start();
        counter.tick(1000.0);
        // Quartic ease-out at t=0.5 is 0.9375
        assert_eq!(counter.display(), 937);
    }

    #[test]
    fn test_zero_duration_counter() {
        let mut counter = CounterAnimation::new(42.0, 0.0);
        counter.start();
        assert_eq!(counter.display(), 42);
        counter.tick(0.0);
        assert!(!counter.is_playing());
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1000), "1,000");
        assert_eq!(format_grouped(1234567), "1,234,567");
        assert_eq!(format_grouped(-12345), "-12,345");
    }
}
