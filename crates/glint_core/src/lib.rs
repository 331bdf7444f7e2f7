//! Glint Core Primitives
//!
//! This crate provides the foundational types for the Glint page
//! interactivity engine:
//!
//! - **Node Handles**: stable ids for host document elements
//! - **Geometry**: viewport/element rectangles and intersection math
//! - **Host Document**: read access to page structure and geometry
//! - **Presentation Sink**: the typed command surface every visual
//!   effect flows through, plus a recording implementation for tests
//! - **Page Events**: the input vocabulary the engine consumes
//!
//! # Example
//!
//! ```rust
//! use glint_core::{PresentationSinkExt, RecordingSink};
//!
//! let mut sink = RecordingSink::new();
//! let node = sink.alloc_node();
//!
//! sink.set_class(node, "is-visible", true);
//! sink.scroll_lock(true);
//!
//! assert!(sink.has_class(node, "is-visible"));
//! assert!(sink.scroll_locked());
//! ```

pub mod event;
pub mod geometry;
pub mod host;
pub mod node;
pub mod sink;

pub use event::PageEvent;
pub use geometry::{Rect, Vec2};
pub use host::HostDocument;
pub use node::{NavLink, NodeId};
pub use sink::{
    Backdrop, PresentOp, PresentationSink, PresentationSinkExt, RecordingSink, ScrollBehavior,
};
