//! Event rate limiting
//!
//! Three flavors, matching the cadences page input arrives at:
//! [`FrameGate`] coalesces event bursts into one pass per frame,
//! [`Throttle`] enforces a minimum wall-clock gap between runs, and
//! [`Debounce`] delays a run until events stop arriving. The clock is
//! passed in explicitly so behavior is test-controllable.

use std::time::{Duration, Instant};

/// Coalesces bursts of triggers into one pass per frame
///
/// `request` arms the gate; only the first arm between frames reports
/// that a pass needs scheduling. `take` is called from the frame pass
/// and clears the gate.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the gate; true if this trigger newly scheduled a pass
    pub fn request(&mut self) -> bool {
        let newly_armed = !self.pending;
        self.pending = true;
        newly_armed
    }

    /// Clear the gate; true if a pass was pending
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Allows at most one run per `limit` of wall-clock time
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    limit: Duration,
    last_run: Option<Instant>,
}

impl Throttle {
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            last_run: None,
        }
    }

    /// Whether a run is allowed at `now` (records the run if so)
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.last_run {
            Some(last) if now.duration_since(last) < self.limit => false,
            _ => {
                self.last_run = Some(now);
                true
            }
        }
    }
}

/// Delays a run until `wait` has passed without a new trigger
#[derive(Clone, Copy, Debug)]
pub struct Debounce {
    wait: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            deadline: None,
        }
    }

    /// Record a trigger at `now`, pushing the deadline out
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.wait);
    }

    /// Whether the quiet period has elapsed at `now` (clears if so)
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_gate_coalesces() {
        let mut gate = FrameGate::new();

        assert!(gate.request());
        // Burst of further triggers before the frame pass
        assert!(!gate.request());
        assert!(!gate.request());

        assert!(gate.take());
        assert!(!gate.take());

        // Next burst schedules again
        assert!(gate.request());
    }

    #[test]
    fn test_throttle_enforces_gap() {
        let mut throttle = Throttle::new(Duration::from_millis(100));
        let start = Instant::now();

        assert!(throttle.ready(start));
        assert!(!throttle.ready(start + Duration::from_millis(50)));
        assert!(throttle.ready(start + Duration::from_millis(150)));
    }

    #[test]
    fn test_debounce_waits_for_quiet() {
        let mut debounce = Debounce::new(Duration::from_millis(100));
        let start = Instant::now();

        debounce.trigger(start);
        assert!(!debounce.fire(start + Duration::from_millis(50)));

        // A new trigger resets the quiet period
        debounce.trigger(start + Duration::from_millis(50));
        assert!(!debounce.fire(start + Duration::from_millis(120)));
        assert!(debounce.fire(start + Duration::from_millis(150)));

        // Fired once; stays quiet until re-triggered
        assert!(!debounce.fire(start + Duration::from_millis(200)));
    }
}
