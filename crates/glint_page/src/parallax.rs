//! Pointer parallax
//!
//! Floating decoration layers drift toward the pointer, deeper layers
//! moving further. Raw pointer positions are normalized to [-1, 1]
//! around the viewport center and chased by a smoothed follower, so
//! layer motion trails the pointer instead of snapping to it.

use crate::config::ParallaxConfig;
use glint_animation::{SchedulerHandle, SmoothedPointer};
use glint_core::{HostDocument, NodeId, PresentationSink, PresentationSinkExt, Vec2};

pub struct ParallaxField {
    layers: Vec<NodeId>,
    pointer: SmoothedPointer,
    depth_step: f32,
}

impl ParallaxField {
    /// Attach to the page's floating layers, if any exist
    pub fn attach(
        host: &dyn HostDocument,
        config: ParallaxConfig,
        scheduler: SchedulerHandle,
    ) -> Option<Self> {
        let layers = host.nodes_with_class("floating-orb");
        if layers.is_empty() {
            return None;
        }
        Some(Self {
            layers,
            pointer: SmoothedPointer::new(scheduler, config.smoothing),
            depth_step: config.depth_step,
        })
    }

    /// Retarget the follower from a raw pointer position
    pub fn on_pointer(&mut self, x: f32, y: f32, host: &dyn HostDocument) {
        let viewport = host.viewport();
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return;
        }
        let target = Vec2::new(
            (x / viewport.x - 0.5) * 2.0,
            (y / viewport.y - 0.5) * 2.0,
        );
        self.pointer.set_target(target);
    }

    /// Position every layer from the current smoothed value
    pub fn on_frame(&mut self, sink: &mut dyn PresentationSink) {
        let value = self.pointer.get();
        for (index, &layer) in self.layers.iter().enumerate() {
            let depth = (index + 1) as f32 * self.depth_step;
            sink.translate(layer, value * depth);
        }
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }
}
