//! Glint Animation System
//!
//! Frame-driven animators for page interactivity.
//!
//! # Features
//!
//! - **Easing**: standard curves including the quartic ease-out used by
//!   counters
//! - **Follower**: per-frame exponential smoothing for lagged pointer
//!   tracking
//! - **Micro-animators**: counter ramp-up and typewriter text reveal
//! - **Stagger**: ordinal-delayed firing for cascading reveals
//! - **Rate utilities**: frame-cadence coalescing, throttle, debounce
//! - **FrameScheduler**: registry of live animators ticked once per
//!   frame, with RAII wrapper types whose lifetime controls their
//!   registration

pub mod counter;
pub mod easing;
pub mod follow;
pub mod rate;
pub mod scheduler;
pub mod stagger;
pub mod typewriter;

pub use counter::{format_grouped, CounterAnimation};
pub use easing::Easing;
pub use follow::Follower;
pub use rate::{Debounce, FrameGate, Throttle};
pub use scheduler::{
    AnimatedCounter, AnimatedTypewriter, CounterId, FollowerId, FrameScheduler, SchedulerHandle,
    SmoothedPointer, TypewriterId,
};
pub use stagger::StaggerSequence;
pub use typewriter::Typewriter;
