//! Mobile menu overlay
//!
//! Built at mount by mirroring the navbar's links into an
//! engine-created full-screen overlay. The hamburger button toggles it;
//! page scrolling is locked exactly while the overlay is open.

use crate::anchors::AnchorScroller;
use glint_core::{HostDocument, NodeId, PresentationSink, PresentationSinkExt};

const MENU_CSS: &str = "\
.mobile-menu-overlay { position: fixed; inset: 0; display: none; }\n\
.mobile-menu-overlay.is-open { display: flex; flex-direction: column; }\n\
.mobile-menu-btn.is-active span:nth-child(1) { transform: rotate(45deg); }\n\
.mobile-menu-btn.is-active span:nth-child(2) { opacity: 0; }\n\
.mobile-menu-btn.is-active span:nth-child(3) { transform: rotate(-45deg); }";

pub struct MobileMenu {
    button: NodeId,
    overlay: NodeId,
    links: Vec<NodeId>,
    open: bool,
}

impl MobileMenu {
    /// Build the overlay if the page has a hamburger button and a link
    /// container to mirror
    ///
    /// The mirrored links are registered with `anchors` so activating
    /// them navigates like their originals.
    pub fn attach(
        host: &mut dyn HostDocument,
        anchors: &mut AnchorScroller,
        sink: &mut dyn PresentationSink,
    ) -> Option<Self> {
        let button = host.first_with_class("mobile-menu-btn")?;
        let nav = host.first_with_class("nav-links")?;

        let source_links = host.links_in(nav);
        let overlay = host.create_element("mobile-menu-overlay");
        let mut links = Vec::with_capacity(source_links.len());
        for link in source_links {
            let node = host.create_element("mobile-menu-link");
            sink.set_text(node, &link.label);
            anchors.register_link(node, link.target);
            links.push(node);
        }
        sink.inject_style(MENU_CSS);

        tracing::debug!(links = links.len(), "mobile menu overlay built");
        Some(Self {
            button,
            overlay,
            links,
            open: false,
        })
    }

    pub fn is_button(&self, node: NodeId) -> bool {
        node == self.button
    }

    pub fn is_link(&self, node: NodeId) -> bool {
        self.links.contains(&node)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self, sink: &mut dyn PresentationSink) {
        if self.open {
            self.close(sink);
        } else {
            self.open(sink);
        }
    }

    pub fn open(&mut self, sink: &mut dyn PresentationSink) {
        if self.open {
            return;
        }
        self.open = true;
        sink.set_class(self.overlay, "is-open", true);
        sink.set_class(self.button, "is-active", true);
        sink.scroll_lock(true);
    }

    pub fn close(&mut self, sink: &mut dyn PresentationSink) {
        if !self.open {
            return;
        }
        self.open = false;
        sink.set_class(self.overlay, "is-open", false);
        sink.set_class(self.button, "is-active", false);
        sink.scroll_lock(false);
    }

    pub fn overlay(&self) -> NodeId {
        self.overlay
    }

    pub fn link_nodes(&self) -> &[NodeId] {
        &self.links
    }
}
