//! Cursor glow
//!
//! A soft radial highlight that tracks the pointer one-to-one. Only
//! created on viewports wide enough to imply a pointing device; the
//! width gate is evaluated once at mount.

use crate::config::GlowConfig;
use glint_core::{HostDocument, NodeId, PresentationSink, PresentationSinkExt, Vec2};

pub struct CursorGlow {
    node: NodeId,
    size: f32,
}

impl CursorGlow {
    /// Create the glow element on wide viewports
    pub fn attach(
        host: &mut dyn HostDocument,
        config: GlowConfig,
        sink: &mut dyn PresentationSink,
    ) -> Option<Self> {
        if host.viewport().x < config.min_viewport_width {
            return None;
        }
        let node = host.create_element("cursor-glow");
        sink.inject_style(&format!(
            ".cursor-glow {{ position: fixed; width: {size}px; height: {size}px; \
             border-radius: 50%; pointer-events: none; \
             background: radial-gradient(circle, rgba(99, 102, 241, 0.15), transparent 70%); }}",
            size = config.size
        ));
        Some(Self {
            node,
            size: config.size,
        })
    }

    /// Center the glow on the pointer, unsmoothed
    pub fn on_pointer(&self, x: f32, y: f32, sink: &mut dyn PresentationSink) {
        let half = self.size / 2.0;
        sink.position(self.node, Vec2::new(x - half, y - half));
    }

    pub fn node(&self) -> NodeId {
        self.node
    }
}
