//! Node handles for host document elements
//!
//! The engine never touches document structure directly. Hosts hand out
//! [`NodeId`]s for the elements the engine cares about, and every later
//! query or presentation command refers back to those ids.

use slotmap::new_key_type;

new_key_type! {
    /// Handle to an element in the host document
    ///
    /// Ids are allocated by the host (or by a sink for elements it
    /// creates, such as the mobile menu overlay). A stale id simply
    /// fails geometry lookups; it never panics.
    pub struct NodeId;
}

/// An in-page navigation link
///
/// `target` is the fragment the link points at (without the leading
/// `#`); `label` is the visible link text, used when mirroring links
/// into the mobile menu overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    /// The link element itself
    pub node: NodeId,
    /// Visible link text
    pub label: String,
    /// Fragment identifier of the target section
    pub target: String,
}

impl NavLink {
    pub fn new(node: NodeId, label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            node,
            label: label.into(),
            target: target.into(),
        }
    }
}
