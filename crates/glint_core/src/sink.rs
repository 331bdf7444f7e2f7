//! Presentation sink
//!
//! Every visual effect the engine produces is expressed as a typed
//! [`PresentOp`] and handed to a [`PresentationSink`]. A real host maps
//! ops onto its rendering surface (style mutation, class toggling,
//! scroll requests); [`RecordingSink`] captures them for assertions.
//!
//! Keeping side effects behind this seam is what makes the reveal and
//! animation logic testable without a live document.

use crate::geometry::Vec2;
use crate::node::NodeId;
use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use smallvec::SmallVec;

/// Navbar backdrop state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backdrop {
    /// Light backdrop used near the top of the page
    Translucent,
    /// Opaque backdrop with a drop shadow, used once scrolled
    Solid,
}

/// How a scroll request should be performed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump instantly
    Auto,
    /// Animate toward the target
    Smooth,
}

/// A single presentation command
#[derive(Clone, Debug, PartialEq)]
pub enum PresentOp {
    /// Toggle a state class on an element
    SetClass {
        node: NodeId,
        name: String,
        on: bool,
    },
    /// Displace an element from its layout position
    Translate { node: NodeId, offset: Vec2 },
    /// Position an element absolutely in viewport coordinates
    Position { node: NodeId, pos: Vec2 },
    /// Replace an element's text content
    SetText { node: NodeId, content: String },
    /// Set the navbar backdrop state
    SetBackdrop { node: NodeId, style: Backdrop },
    /// Slide an element off the top edge (or restore it)
    SlideOffscreen { node: NodeId, hidden: bool },
    /// Scroll the page to a vertical offset
    ScrollTo { y: f32, behavior: ScrollBehavior },
    /// Lock or unlock page background scrolling
    ScrollLock { on: bool },
    /// Inject supplementary style rules into the document
    InjectStyle { css: String },
    /// Swap a deferred image's placeholder for its real source
    PromoteImage { node: NodeId },
}

/// Receiver for presentation commands
pub trait PresentationSink {
    fn apply(&mut self, op: PresentOp);
}

/// Convenience constructors for common ops
///
/// Implemented for every sink (including trait objects), mirroring the
/// split between the command vocabulary and ergonomic helpers.
pub trait PresentationSinkExt: PresentationSink {
    fn set_class(&mut self, node: NodeId, name: &str, on: bool) {
        self.apply(PresentOp::SetClass {
            node,
            name: name.to_string(),
            on,
        });
    }

    fn translate(&mut self, node: NodeId, offset: Vec2) {
        self.apply(PresentOp::Translate { node, offset });
    }

    fn position(&mut self, node: NodeId, pos: Vec2) {
        self.apply(PresentOp::Position { node, pos });
    }

    fn set_text(&mut self, node: NodeId, content: impl Into<String>) {
        self.apply(PresentOp::SetText {
            node,
            content: content.into(),
        });
    }

    fn set_backdrop(&mut self, node: NodeId, style: Backdrop) {
        self.apply(PresentOp::SetBackdrop { node, style });
    }

    fn slide_offscreen(&mut self, node: NodeId, hidden: bool) {
        self.apply(PresentOp::SlideOffscreen { node, hidden });
    }

    fn scroll_to(&mut self, y: f32, behavior: ScrollBehavior) {
        self.apply(PresentOp::ScrollTo { y, behavior });
    }

    fn scroll_lock(&mut self, on: bool) {
        self.apply(PresentOp::ScrollLock { on });
    }

    fn inject_style(&mut self, css: impl Into<String>) {
        self.apply(PresentOp::InjectStyle { css: css.into() });
    }
}

impl<T: PresentationSink + ?Sized> PresentationSinkExt for T {}

/// A sink that records every op for later inspection
///
/// Beyond the raw op log it tracks the derived state most tests care
/// about: which classes are set on a node, whether scrolling is
/// locked, and the last scroll request.
#[derive(Default)]
pub struct RecordingSink {
    ops: Vec<PresentOp>,
    classes: FxHashMap<NodeId, SmallVec<[String; 4]>>,
    scroll_locked: bool,
    last_scroll: Option<(f32, ScrollBehavior)>,
    // Private id source for elements tests create outside a host
    nodes: SlotMap<NodeId, ()>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh node id
    ///
    /// Only for tests that don't pair the sink with a host document.
    pub fn alloc_node(&mut self) -> NodeId {
        self.nodes.insert(())
    }

    /// All recorded ops, in application order
    pub fn ops(&self) -> &[PresentOp] {
        &self.ops
    }

    /// Ops that reference `node`
    pub fn ops_for(&self, node: NodeId) -> Vec<&PresentOp> {
        self.ops
            .iter()
            .filter(|op| match op {
                PresentOp::SetClass { node: n, .. }
                | PresentOp::Translate { node: n, .. }
                | PresentOp::Position { node: n, .. }
                | PresentOp::SetText { node: n, .. }
                | PresentOp::SetBackdrop { node: n, .. }
                | PresentOp::SlideOffscreen { node: n, .. }
                | PresentOp::PromoteImage { node: n } => *n == node,
                _ => false,
            })
            .collect()
    }

    /// Whether `node` currently carries the class `name`
    pub fn has_class(&self, node: NodeId, name: &str) -> bool {
        self.classes
            .get(&node)
            .map(|set| set.iter().any(|c| c == name))
            .unwrap_or(false)
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Target of the most recent scroll request, if any
    pub fn last_scroll(&self) -> Option<(f32, ScrollBehavior)> {
        self.last_scroll
    }

    /// Drop the op log (derived state is kept)
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl PresentationSink for RecordingSink {
    fn apply(&mut self, op: PresentOp) {
        match &op {
            PresentOp::SetClass { node, name, on } => {
                let set = self.classes.entry(*node).or_default();
                if *on {
                    if !set.iter().any(|c| c == name) {
                        set.push(name.clone());
                    }
                } else {
                    set.retain(|c| c != name);
                }
            }
            PresentOp::ScrollLock { on } => self.scroll_locked = *on,
            PresentOp::ScrollTo { y, behavior } => self.last_scroll = Some((*y, *behavior)),
            _ => {}
        }
        self.ops.push(op);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_tracking() {
        let mut sink = RecordingSink::new();
        let node = sink.alloc_node();

        sink.set_class(node, "is-visible", true);
        assert!(sink.has_class(node, "is-visible"));

        sink.set_class(node, "is-visible", false);
        assert!(!sink.has_class(node, "is-visible"));
    }

    #[test]
    fn test_scroll_state() {
        let mut sink = RecordingSink::new();

        assert!(!sink.scroll_locked());
        sink.scroll_lock(true);
        assert!(sink.scroll_locked());

        sink.scroll_to(640.0, ScrollBehavior::Smooth);
        assert_eq!(sink.last_scroll(), Some((640.0, ScrollBehavior::Smooth)));
    }

    #[test]
    fn test_ops_for_filters_by_node() {
        let mut sink = RecordingSink::new();
        let a = sink.alloc_node();
        let b = sink.alloc_node();

        sink.translate(a, Vec2::new(1.0, 2.0));
        sink.translate(b, Vec2::new(3.0, 4.0));
        sink.scroll_lock(true);

        assert_eq!(sink.ops_for(a).len(), 1);
        assert_eq!(sink.ops_for(b).len(), 1);
        assert_eq!(sink.ops().len(), 3);
    }
}
