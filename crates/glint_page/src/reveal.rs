//! Viewport-intersection reveal
//!
//! Sections start hidden and gain the `visible` class once a fraction
//! of them enters the (bottom-contracted) viewport. Reveals are
//! monotonic: scrolling back out never hides a section again. When a
//! section reveals, its known card children animate in one after the
//! other on a fixed stagger.

use crate::config::RevealConfig;
use glint_animation::StaggerSequence;
use glint_core::{HostDocument, NodeId, PresentationSink, PresentationSinkExt, Rect};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// Style rules for hidden and revealed states
///
/// Cards listed in the config start hidden too, so the block is
/// self-contained regardless of the host's stylesheet.
fn reveal_css(card_classes: &[String]) -> String {
    let mut css = String::from(
        ".section { opacity: 0; transform: translateY(30px); \
         transition: opacity 0.8s ease, transform 0.8s ease; }\n\
         .section.visible { opacity: 1; transform: translateY(0); }",
    );
    if !card_classes.is_empty() {
        let selectors: Vec<String> = card_classes.iter().map(|c| format!(".{c}")).collect();
        css.push_str(&format!(
            "\n{} {{ opacity: 0; transform: translateY(30px); \
             transition: opacity 0.6s ease, transform 0.6s ease; }}\n\
             .animate-in {{ opacity: 1; transform: translateY(0); }}",
            selectors.join(", ")
        ));
    }
    css
}

/// A revealed section's cards mid-stagger
struct ActiveStagger {
    cards: Vec<NodeId>,
    sequence: StaggerSequence,
}

pub struct RevealObserver {
    sections: Vec<NodeId>,
    revealed: FxHashSet<NodeId>,
    staggers: Vec<ActiveStagger>,
    config: RevealConfig,
}

impl RevealObserver {
    /// Collect sections and inject the hidden-state styles
    pub fn attach(
        host: &dyn HostDocument,
        config: RevealConfig,
        sink: &mut dyn PresentationSink,
    ) -> Self {
        let sections = host.nodes_with_class("section");
        if !sections.is_empty() {
            sink.inject_style(reveal_css(&config.card_classes));
        }
        Self {
            sections,
            revealed: FxHashSet::default(),
            staggers: Vec::new(),
            config,
        }
    }

    /// Poll section geometry against the viewport and advance staggers
    pub fn on_frame(
        &mut self,
        dt_ms: f32,
        scroll_offset: f32,
        host: &dyn HostDocument,
        sink: &mut dyn PresentationSink,
    ) {
        let viewport = host.viewport();
        // The bottom edge is contracted so sections reveal slightly
        // after their top actually enters the screen.
        let clip = Rect::new(
            0.0,
            scroll_offset,
            viewport.x,
            (viewport.y - self.config.bottom_margin).max(0.0),
        );

        for &section in &self.sections {
            if self.revealed.contains(&section) {
                continue;
            }
            let Some(bounds) = host.bounds(section) else {
                continue;
            };
            if bounds.visible_fraction(&clip) < self.config.threshold {
                continue;
            }

            self.revealed.insert(section);
            sink.set_class(section, "visible", true);

            let classes: SmallVec<[&str; 8]> =
                self.config.card_classes.iter().map(|s| s.as_str()).collect();
            let cards = host.children_with_classes(section, &classes);
            if !cards.is_empty() {
                tracing::debug!(cards = cards.len(), "section revealed, staggering cards");
                let sequence = StaggerSequence::new(cards.len(), self.config.stagger_ms);
                self.staggers.push(ActiveStagger { cards, sequence });
            }
        }

        for stagger in &mut self.staggers {
            for ordinal in stagger.sequence.tick(dt_ms) {
                if let Some(&card) = stagger.cards.get(ordinal) {
                    sink.set_class(card, "animate-in", true);
                }
            }
        }
        self.staggers.retain(|s| !s.sequence.is_done());
    }

    pub fn is_revealed(&self, section: NodeId) -> bool {
        self.revealed.contains(&section)
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}
