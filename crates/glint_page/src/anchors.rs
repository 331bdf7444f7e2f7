//! Smooth anchor scrolling
//!
//! Maps activations of in-page links to smooth scrolls that leave the
//! target section just below the navbar. A link whose target no longer
//! exists is silently ignored.

use crate::config::AnchorConfig;
use glint_core::{HostDocument, NodeId, PresentationSink, PresentationSinkExt, ScrollBehavior};
use rustc_hash::FxHashMap;

pub struct AnchorScroller {
    /// Link element to target fragment
    targets: FxHashMap<NodeId, String>,
    navbar: Option<NodeId>,
    config: AnchorConfig,
}

impl AnchorScroller {
    /// Collect every in-page link in the document
    ///
    /// `navbar` is measured on each navigation so the scroll position
    /// accounts for the bar covering the top of the viewport.
    pub fn attach(host: &dyn HostDocument, config: AnchorConfig, navbar: Option<NodeId>) -> Self {
        let targets = host
            .anchor_links()
            .into_iter()
            .map(|link| (link.node, link.target))
            .collect();
        Self {
            targets,
            navbar,
            config,
        }
    }

    /// Register an additional link element, used for engine-created
    /// links such as the mobile menu overlay's
    pub fn register_link(&mut self, node: NodeId, target: impl Into<String>) {
        self.targets.insert(node, target.into());
    }

    pub fn is_link(&self, node: NodeId) -> bool {
        self.targets.contains_key(&node)
    }

    pub fn link_count(&self) -> usize {
        self.targets.len()
    }

    /// Handle a link activation
    ///
    /// Returns true if a navigation was issued. Unknown nodes and links
    /// whose target is missing return false without emitting anything.
    pub fn on_activate(
        &self,
        node: NodeId,
        host: &dyn HostDocument,
        sink: &mut dyn PresentationSink,
    ) -> bool {
        let Some(fragment) = self.targets.get(&node) else {
            return false;
        };
        let Some(target) = host.anchor_target(fragment) else {
            tracing::debug!(%fragment, "anchor target missing, ignoring");
            return false;
        };
        let Some(bounds) = host.bounds(target) else {
            return false;
        };

        let navbar_height = self
            .navbar
            .and_then(|node| host.bounds(node))
            .map(|rect| rect.height)
            .unwrap_or(0.0);

        let y = bounds.y - navbar_height - self.config.margin;
        sink.scroll_to(y, ScrollBehavior::Smooth);
        true
    }
}
