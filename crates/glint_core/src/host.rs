//! Host document access
//!
//! The engine reads page structure and geometry through this trait and
//! never assumes anything beyond it. Absent structure is the normal
//! case, not an error: a query returning nothing simply disables the
//! component that wanted it.

use crate::geometry::{Rect, Vec2};
use crate::node::{NavLink, NodeId};

/// Read/write access to the host page
///
/// Geometry is reported in document coordinates; callers subtract the
/// current scroll offset to reason in viewport space. The only
/// structural mutation the engine performs is creating the handful of
/// elements it owns (mobile menu overlay, cursor glow).
pub trait HostDocument {
    /// All elements carrying `class`, in document order
    fn nodes_with_class(&self, class: &str) -> Vec<NodeId>;

    /// First element carrying `class`
    fn first_with_class(&self, class: &str) -> Option<NodeId> {
        self.nodes_with_class(class).into_iter().next()
    }

    /// Descendants of `parent` carrying any of `classes`, in document order
    fn children_with_classes(&self, parent: NodeId, classes: &[&str]) -> Vec<NodeId>;

    /// Element a fragment identifier points at, if it exists
    fn anchor_target(&self, fragment: &str) -> Option<NodeId>;

    /// Every in-page anchor link in the document, in document order
    fn anchor_links(&self) -> Vec<NavLink>;

    /// In-page anchor links that are descendants of `parent`
    fn links_in(&self, parent: NodeId) -> Vec<NavLink>;

    /// Images whose real source is deferred until they scroll into view
    fn deferred_images(&self) -> Vec<NodeId>;

    /// Bounds of `node` in document coordinates, or `None` if the id is
    /// stale
    fn bounds(&self, node: NodeId) -> Option<Rect>;

    /// Viewport size (width, height)
    fn viewport(&self) -> Vec2;

    /// Create an engine-owned element carrying `class`
    ///
    /// The element starts empty and unstyled; appearance comes from the
    /// style rules the owning component injects through the sink.
    fn create_element(&mut self, class: &str) -> NodeId;
}
