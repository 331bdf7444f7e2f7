//! Frame scheduler
//!
//! Holds every live animator and advances them once per frame.
//! Animators register implicitly when created through wrapper types:
//! - `AnimatedCounter` - timed counter ramp-up
//! - `AnimatedTypewriter` - character-by-character text reveal
//! - `SmoothedPointer` - exponential pointer smoothing
//!
//! The scheduler is host-driven: the embedding page calls `tick(dt)`
//! once per frame and no internal threads exist. Each wrapper owns its
//! registration and removes it on drop, so an animator's lifetime is
//! exactly the lifetime of its handle.

use crate::counter::CounterAnimation;
use crate::follow::Follower;
use crate::typewriter::Typewriter;
use glint_core::Vec2;
use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, Weak};

new_key_type! {
    /// Handle to a registered counter animation
    pub struct CounterId;
    /// Handle to a registered typewriter
    pub struct TypewriterId;
    /// Handle to a registered follower
    pub struct FollowerId;
}

/// Internal state of the frame scheduler
struct SchedulerInner {
    counters: SlotMap<CounterId, CounterAnimation>,
    typewriters: SlotMap<TypewriterId, Typewriter>,
    followers: SlotMap<FollowerId, Follower>,
}

/// The scheduler that ticks all live animators
///
/// Typically owned by the page and shared with components via
/// [`SchedulerHandle`].
pub struct FrameScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                counters: SlotMap::with_key(),
                typewriters: SlotMap::with_key(),
                followers: SlotMap::with_key(),
            })),
        }
    }

    /// Get a handle for passing to components
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Advance all animators by `dt_ms` milliseconds
    ///
    /// Followers step once per call regardless of `dt_ms`: their
    /// smoothing factor is defined per frame. Returns true if any
    /// animator is still in motion.
    pub fn tick(&self, dt_ms: f32) -> bool {
        let mut inner = self.inner.lock().unwrap();

        for (_, counter) in inner.counters.iter_mut() {
            counter.tick(dt_ms);
        }
        for (_, typewriter) in inner.typewriters.iter_mut() {
            typewriter.tick(dt_ms);
        }
        for (_, follower) in inner.followers.iter_mut() {
            follower.step();
        }

        // Animators are removed only when their wrapper drops, so a
        // finished counter can be restarted through its handle.
        inner.counters.iter().any(|(_, c)| c.is_playing())
            || inner.typewriters.iter().any(|(_, t)| t.is_playing())
            || inner.followers.iter().any(|(_, f)| !f.is_settled())
    }

    /// Check if any animator is still in motion
    pub fn has_active_animations(&self) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.counters.iter().any(|(_, c)| c.is_playing())
            || inner.typewriters.iter().any(|(_, t)| t.is_playing())
            || inner.followers.iter().any(|(_, f)| !f.is_settled())
    }

    pub fn counter_count(&self) -> usize {
        self.inner.lock().unwrap().counters.len()
    }

    pub fn typewriter_count(&self) -> usize {
        self.inner.lock().unwrap().typewriters.len()
    }

    pub fn follower_count(&self) -> usize {
        self.inner.lock().unwrap().followers.len()
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for FrameScheduler {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// A weak handle to the frame scheduler
///
/// Passed to components that need to register animators. It won't keep
/// the scheduler alive; every operation on a dead scheduler is a no-op.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    // =========================================================================
    // Counter Operations
    // =========================================================================

    pub fn register_counter(&self, counter: CounterAnimation) -> Option<CounterId> {
        self.inner.upgrade().map(|inner| {
            tracing::trace!(end = counter.target(), "registering counter animation");
            inner.lock().unwrap().counters.insert(counter)
        })
    }

    pub fn with_counter<F, R>(&self, id: CounterId, f: F) -> Option<R>
    where
        F: FnOnce(&mut CounterAnimation) -> R,
    {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().counters.get_mut(id).map(f))
    }

    pub fn remove_counter(&self, id: CounterId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().counters.remove(id);
        }
    }

    // =========================================================================
    // Typewriter Operations
    // =========================================================================

    pub fn register_typewriter(&self, typewriter: Typewriter) -> Option<TypewriterId> {
        self.inner.upgrade().map(|inner| {
            tracing::trace!(
                chars = typewriter.full_text().chars().count(),
                "registering typewriter"
            );
            inner.lock().unwrap().typewriters.insert(typewriter)
        })
    }

    pub fn with_typewriter<F, R>(&self, id: TypewriterId, f: F) -> Option<R>
    where
        F: FnOnce(&mut Typewriter) -> R,
    {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().typewriters.get_mut(id).map(f))
    }

    pub fn remove_typewriter(&self, id: TypewriterId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().typewriters.remove(id);
        }
    }

    // =========================================================================
    // Follower Operations
    // =========================================================================

    pub fn register_follower(&self, follower: Follower) -> Option<FollowerId> {
        self.inner
            .upgrade()
            .map(|inner| inner.lock().unwrap().followers.insert(follower))
    }

    pub fn set_follower_target(&self, id: FollowerId, target: Vec2) {
        if let Some(inner) = self.inner.upgrade() {
            if let Some(follower) = inner.lock().unwrap().followers.get_mut(id) {
                follower.set_target(target);
            }
        }
    }

    pub fn follower_value(&self, id: FollowerId) -> Option<Vec2> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().followers.get(id).map(|f| f.value()))
    }

    pub fn remove_follower(&self, id: FollowerId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().followers.remove(id);
        }
    }

    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

// ============================================================================
// Animated Counter
// ============================================================================

/// A counter animation that registers with the scheduler on start
///
/// The displayed value ramps from 0 to the target over the configured
/// duration and lands exactly on the target. Dropping the wrapper
/// unregisters the animation.
pub struct AnimatedCounter {
    handle: SchedulerHandle,
    id: Option<CounterId>,
    target: f64,
    duration_ms: f32,
}

impl AnimatedCounter {
    pub fn new(handle: SchedulerHandle, target: f64, duration_ms: f32) -> Self {
        Self {
            handle,
            id: None,
            target,
            duration_ms,
        }
    }

    /// Start (or restart) the ramp-up
    pub fn start(&mut self) {
        if let Some(id) = self.id {
            self.handle.with_counter(id, |c| c.start());
            return;
        }
        let mut counter = CounterAnimation::new(self.target, self.duration_ms);
        counter.start();
        self.id = self.handle.register_counter(counter);
    }

    /// Current display value (floor of the eased value)
    ///
    /// Before `start` the counter shows 0; if the scheduler is gone the
    /// final target is reported.
    pub fn display(&self) -> i64 {
        match self.id {
            Some(id) => self
                .handle
                .with_counter(id, |c| c.display())
                .unwrap_or(self.target.floor() as i64),
            None => 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.id
            .and_then(|id| self.handle.with_counter(id, |c| c.is_playing()))
            .unwrap_or(false)
    }

    pub fn target(&self) -> f64 {
        self.target
    }
}

impl Drop for AnimatedCounter {
    fn drop(&mut self) {
        if let Some(id) = self.id {
            self.handle.remove_counter(id);
        }
    }
}

// ============================================================================
// Animated Typewriter
// ============================================================================

/// A typewriter reveal that registers with the scheduler on start
pub struct AnimatedTypewriter {
    handle: SchedulerHandle,
    id: Option<TypewriterId>,
    text: String,
    interval_ms: f32,
}

impl AnimatedTypewriter {
    pub fn new(handle: SchedulerHandle, text: impl Into<String>, interval_ms: f32) -> Self {
        Self {
            handle,
            id: None,
            text: text.into(),
            interval_ms,
        }
    }

    pub fn start(&mut self) {
        if let Some(id) = self.id {
            self.handle.with_typewriter(id, |t| t.start());
            return;
        }
        let mut typewriter = Typewriter::new(self.text.clone(), self.interval_ms);
        typewriter.start();
        self.id = self.handle.register_typewriter(typewriter);
    }

    /// Currently revealed prefix
    ///
    /// Before `start` nothing is revealed; if the scheduler is gone the
    /// full text is reported.
    pub fn visible(&self) -> String {
        match self.id {
            Some(id) => self
                .handle
                .with_typewriter(id, |t| t.visible().to_string())
                .unwrap_or_else(|| self.text.clone()),
            None => String::new(),
        }
    }

    pub fn is_done(&self) -> bool {
        self.id
            .and_then(|id| self.handle.with_typewriter(id, |t| t.is_done()))
            .unwrap_or(false)
    }

    pub fn full_text(&self) -> &str {
        &self.text
    }
}

impl Drop for AnimatedTypewriter {
    fn drop(&mut self) {
        if let Some(id) = self.id {
            self.handle.remove_typewriter(id);
        }
    }
}

// ============================================================================
// Smoothed Pointer
// ============================================================================

/// A continuously smoothed pointer coordinate
///
/// Registers a [`Follower`] with the scheduler; every frame tick closes
/// the configured fraction of the distance to the latest raw target.
/// This is the engine's long-lived parallax task: dropping the wrapper
/// cancels the loop by unregistering the follower.
pub struct SmoothedPointer {
    handle: SchedulerHandle,
    id: Option<FollowerId>,
    last_target: Vec2,
}

impl SmoothedPointer {
    pub fn new(handle: SchedulerHandle, factor: f32) -> Self {
        let id = handle.register_follower(Follower::new(factor, Vec2::ZERO));
        Self {
            handle,
            id,
            last_target: Vec2::ZERO,
        }
    }

    /// Update the raw coordinate being chased
    pub fn set_target(&mut self, target: Vec2) {
        self.last_target = target;
        if let Some(id) = self.id {
            self.handle.set_follower_target(id, target);
        }
    }

    /// Current smoothed coordinate
    pub fn get(&self) -> Vec2 {
        self.id
            .and_then(|id| self.handle.follower_value(id))
            .unwrap_or(self.last_target)
    }
}

impl Drop for SmoothedPointer {
    fn drop(&mut self) {
        if let Some(id) = self.id {
            self.handle.remove_follower(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheduler_ticks_counters() {
        let scheduler = FrameScheduler::new();
        let handle = scheduler.handle();

        let mut counter = AnimatedCounter::new(handle, 100.0, 1000.0);
        counter.start();
        assert!(counter.is_running());

        assert!(scheduler.tick(500.0));
        assert!(counter.display() > 0);

        scheduler.tick(500.0);
        assert_eq!(counter.display(), 100);
        assert!(!counter.is_running());
    }

    #[test]
    fn test_smoothed_pointer_step_per_frame() {
        let scheduler = FrameScheduler::new();
        let mut pointer = SmoothedPointer::new(scheduler.handle(), 0.05);
        pointer.set_target(Vec2::new(1.0, 1.0));

        scheduler.tick(16.0);
        let v = pointer.get();
        assert!((v.x - 0.05).abs() < 1e-6);
        assert!((v.y - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_wrapper_drop_unregisters() {
        let scheduler = FrameScheduler::new();
        let handle = scheduler.handle();

        {
            let mut counter = AnimatedCounter::new(handle.clone(), 10.0, 100.0);
            counter.start();
            assert_eq!(scheduler.counter_count(), 1);
        }
        assert_eq!(scheduler.counter_count(), 0);

        {
            let _pointer = SmoothedPointer::new(handle, 0.05);
            assert_eq!(scheduler.follower_count(), 1);
        }
        assert_eq!(scheduler.follower_count(), 0);
    }

    #[test]
    fn test_handle_weak_reference() {
        let handle = {
            let scheduler = FrameScheduler::new();
            scheduler.handle()
        };

        // Scheduler is dropped, handle should not be alive
        assert!(!handle.is_alive());

        // Operations safely no-op
        assert!(handle
            .register_counter(CounterAnimation::new(1.0, 1.0))
            .is_none());

        let mut counter = AnimatedCounter::new(handle, 42.0, 100.0);
        counter.start();
        // Registration failed, so the counter never started
        assert_eq!(counter.display(), 0);
    }

    #[test]
    fn test_typewriter_via_scheduler() {
        let scheduler = FrameScheduler::new();
        let mut tw = AnimatedTypewriter::new(scheduler.handle(), "abc", 50.0);
        tw.start();

        scheduler.tick(100.0);
        assert_eq!(tw.visible(), "ab");

        scheduler.tick(100.0);
        assert_eq!(tw.visible(), "abc");
        assert!(tw.is_done());
    }

    #[test]
    fn test_has_active_animations() {
        let scheduler = FrameScheduler::new();
        assert!(!scheduler.has_active_animations());

        let mut counter = AnimatedCounter::new(scheduler.handle(), 10.0, 100.0);
        counter.start();
        assert!(scheduler.has_active_animations());

        scheduler.tick(200.0);
        assert!(!scheduler.has_active_animations());
    }
}
