//! Deferred image loading
//!
//! Images marked as deferred are promoted to their real source the
//! first time any part of them enters the viewport. Each image is
//! promoted at most once and then forgotten.

use glint_core::{HostDocument, NodeId, PresentOp, PresentationSink, Rect};

pub struct LazyImages {
    pending: Vec<NodeId>,
}

impl LazyImages {
    pub fn attach(host: &dyn HostDocument) -> Self {
        Self {
            pending: host.deferred_images(),
        }
    }

    /// Promote any pending image that intersects the viewport
    pub fn on_frame(
        &mut self,
        scroll_offset: f32,
        host: &dyn HostDocument,
        sink: &mut dyn PresentationSink,
    ) {
        if self.pending.is_empty() {
            return;
        }
        let viewport = host.viewport();
        let clip = Rect::new(0.0, scroll_offset, viewport.x, viewport.y);

        self.pending.retain(|&node| {
            let visible = host
                .bounds(node)
                .map(|bounds| bounds.intersects(&clip))
                .unwrap_or(false);
            if visible {
                sink.apply(PresentOp::PromoteImage { node });
            }
            !visible
        });
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
