//! Page input events
//!
//! The host translates its native input (scroll, pointer, clicks,
//! resizes) into this vocabulary and feeds it to the engine. Frame
//! ticks are delivered separately so bursts of input can coalesce into
//! a single visual pass.

use crate::node::NodeId;

/// Input events consumed by the engine
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PageEvent {
    /// The page scrolled to a new vertical offset
    Scroll {
        /// Document scroll offset in pixels
        offset: f32,
    },
    /// The pointer moved
    PointerMoved {
        /// X position in viewport coordinates
        x: f32,
        /// Y position in viewport coordinates
        y: f32,
    },
    /// An element was activated (click or keyboard activation)
    Activated {
        /// The activated element
        node: NodeId,
    },
    /// The viewport was resized
    Resized {
        /// New viewport width
        width: f32,
        /// New viewport height
        height: f32,
    },
}
