//! Staggered firing sequence
//!
//! Drives cascading reveals: item `i` fires once `i × step` milliseconds
//! have elapsed since the sequence started. Firing is one-shot and in
//! ordinal order; the sequence is finished once every item has fired.

use smallvec::SmallVec;

/// An ordinal-delayed firing sequence
#[derive(Clone, Debug)]
pub struct StaggerSequence {
    count: usize,
    step_ms: f32,
    elapsed_ms: f32,
    fired: usize,
}

impl StaggerSequence {
    pub fn new(count: usize, step_ms: f32) -> Self {
        Self {
            count,
            step_ms: step_ms.max(0.0),
            elapsed_ms: 0.0,
            fired: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.fired == self.count
    }

    /// Advance by `dt_ms`, returning the ordinals that fire this tick
    ///
    /// Ordinal 0 fires on the first tick (its delay is zero).
    pub fn tick(&mut self, dt_ms: f32) -> SmallVec<[usize; 8]> {
        let mut newly_fired = SmallVec::new();
        if self.is_done() {
            return newly_fired;
        }
        self.elapsed_ms += dt_ms;
        while self.fired < self.count && self.elapsed_ms >= self.fired as f32 * self.step_ms {
            newly_fired.push(self.fired);
            self.fired += 1;
        }
        newly_fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_ordinal_fires_immediately() {
        let mut seq = StaggerSequence::new(3, 100.0);
        let fired = seq.tick(0.0);
        assert_eq!(fired.as_slice(), &[0]);
    }

    #[test]
    fn test_ordinals_fire_at_step_multiples() {
        let mut seq = StaggerSequence::new(3, 100.0);
        assert_eq!(seq.tick(0.0).as_slice(), &[0]);
        assert_eq!(seq.tick(99.0).len(), 0);
        assert_eq!(seq.tick(1.0).as_slice(), &[1]);
        assert_eq!(seq.tick(100.0).as_slice(), &[2]);
        assert!(seq.is_done());
    }

    #[test]
    fn test_long_tick_fires_batch() {
        let mut seq = StaggerSequence::new(4, 100.0);
        let fired = seq.tick(250.0);
        assert_eq!(fired.as_slice(), &[0, 1, 2]);
        assert!(!seq.is_done());
    }

    #[test]
    fn test_done_sequence_is_inert() {
        let mut seq = StaggerSequence::new(1, 100.0);
        assert_eq!(seq.tick(0.0).len(), 1);
        assert!(seq.is_done());
        assert_eq!(seq.tick(1000.0).len(), 0);
    }

    #[test]
    fn test_zero_step_fires_all_at_once() {
        let mut seq = StaggerSequence::new(3, 0.0);
        assert_eq!(seq.tick(0.0).len(), 3);
        assert!(seq.is_done());
    }
}
