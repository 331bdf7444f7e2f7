//! Scroll-reactive navbar
//!
//! Two independent behaviors keyed off the scroll offset: the backdrop
//! turns solid once the page has scrolled a little, and the whole bar
//! slides offscreen while the user scrolls down past the hide
//! threshold, returning the moment they scroll up.
//!
//! Scroll events only record the latest offset and arm a frame gate;
//! all work happens on the next frame, so a burst of events between two
//! frames collapses into one evaluation.

use crate::config::NavbarConfig;
use glint_animation::FrameGate;
use glint_core::{Backdrop, HostDocument, NodeId, PresentationSink, PresentationSinkExt};

pub struct NavbarController {
    node: NodeId,
    config: NavbarConfig,
    gate: FrameGate,
    latest_offset: f32,
    /// Offset seen by the previous frame pass, not the previous event
    last_offset: f32,
    solid: bool,
    hidden: bool,
}

impl NavbarController {
    /// Attach to the first `navbar` element, if the page has one
    pub fn attach(host: &dyn HostDocument, config: NavbarConfig) -> Option<Self> {
        let node = host.first_with_class("navbar")?;
        Some(Self {
            node,
            config,
            gate: FrameGate::new(),
            latest_offset: 0.0,
            last_offset: 0.0,
            solid: false,
            hidden: false,
        })
    }

    /// Record a scroll offset and request a frame evaluation
    pub fn on_scroll(&mut self, offset: f32) {
        self.latest_offset = offset;
        self.gate.request();
    }

    /// Evaluate the latest offset, emitting ops only on state changes
    pub fn on_frame(&mut self, sink: &mut dyn PresentationSink) {
        if !self.gate.take() {
            return;
        }
        let offset = self.latest_offset;

        let solid = offset > self.config.solid_threshold;
        if solid != self.solid {
            self.solid = solid;
            let style = if solid {
                Backdrop::Solid
            } else {
                Backdrop::Translucent
            };
            sink.set_backdrop(self.node, style);
        }

        let hidden = offset > self.last_offset && offset > self.config.hide_threshold;
        if hidden != self.hidden {
            self.hidden = hidden;
            sink.slide_offscreen(self.node, hidden);
        }

        self.last_offset = offset;
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn is_solid(&self) -> bool {
        self.solid
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}
