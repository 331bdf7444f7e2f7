//! Text bindings for scheduled animators
//!
//! Glue between the animation crate's animators and document text. Each
//! binding pushes the animator's current output into its node every
//! frame and retires after writing the final value once.

use glint_animation::{format_grouped, AnimatedCounter, AnimatedTypewriter, SchedulerHandle};
use glint_core::{NodeId, PresentationSink, PresentationSinkExt};

pub struct CounterBinding {
    node: NodeId,
    counter: AnimatedCounter,
}

impl CounterBinding {
    pub fn start(handle: SchedulerHandle, node: NodeId, target: f64, duration_ms: f32) -> Self {
        let mut counter = AnimatedCounter::new(handle, target, duration_ms);
        counter.start();
        Self { node, counter }
    }

    /// Write the current value; returns false once finished
    pub fn on_frame(&mut self, sink: &mut dyn PresentationSink) -> bool {
        sink.set_text(self.node, format_grouped(self.counter.display()));
        self.counter.is_running()
    }

    pub fn node(&self) -> NodeId {
        self.node
    }
}

pub struct TypewriterBinding {
    node: NodeId,
    typewriter: AnimatedTypewriter,
}

impl TypewriterBinding {
    pub fn start(
        handle: SchedulerHandle,
        node: NodeId,
        text: impl Into<String>,
        interval_ms: f32,
        sink: &mut dyn PresentationSink,
    ) -> Self {
        let mut typewriter = AnimatedTypewriter::new(handle, text, interval_ms);
        typewriter.start();
        // Clear whatever placeholder text the node held so nothing
        // lingers until the first character lands
        sink.set_text(node, "");
        Self { node, typewriter }
    }

    /// Write the revealed prefix; returns false once fully typed
    pub fn on_frame(&mut self, sink: &mut dyn PresentationSink) -> bool {
        sink.set_text(self.node, self.typewriter.visible());
        !self.typewriter.is_done()
    }

    pub fn node(&self) -> NodeId {
        self.node
    }
}
