//! Page orchestration
//!
//! [`Page`] wires every component to the host document at mount time,
//! routes host events to the components that care, and drives one
//! shared frame tick. Components whose required structure is absent are
//! simply skipped; a page with no navbar still reveals sections.

use crate::anchors::AnchorScroller;
use crate::bindings::{CounterBinding, TypewriterBinding};
use crate::config::PageConfig;
use crate::glow::CursorGlow;
use crate::lazy::LazyImages;
use crate::menu::MobileMenu;
use crate::navbar::NavbarController;
use crate::parallax::ParallaxField;
use crate::reveal::RevealObserver;
use glint_animation::FrameScheduler;
use glint_core::{HostDocument, NodeId, PageEvent, PresentationSink};

pub struct Page {
    config: PageConfig,
    scheduler: FrameScheduler,
    navbar: Option<NavbarController>,
    anchors: AnchorScroller,
    reveal: RevealObserver,
    menu: Option<MobileMenu>,
    parallax: Option<ParallaxField>,
    glow: Option<CursorGlow>,
    lazy: LazyImages,
    counters: Vec<CounterBinding>,
    typewriters: Vec<TypewriterBinding>,
    scroll_offset: f32,
}

impl Page {
    /// Attach every component to the host document
    pub fn mount(
        config: PageConfig,
        host: &mut dyn HostDocument,
        sink: &mut dyn PresentationSink,
    ) -> Self {
        let scheduler = FrameScheduler::new();

        let navbar = NavbarController::attach(host, config.navbar.clone());
        if navbar.is_none() {
            tracing::debug!("no navbar element, scroll styling disabled");
        }
        let mut anchors = AnchorScroller::attach(
            host,
            config.anchor.clone(),
            navbar.as_ref().map(|n| n.node()),
        );
        let reveal = RevealObserver::attach(host, config.reveal.clone(), sink);
        let menu = MobileMenu::attach(host, &mut anchors, sink);
        let parallax = ParallaxField::attach(host, config.parallax.clone(), scheduler.handle());
        let glow = CursorGlow::attach(host, config.glow.clone(), sink);
        let lazy = LazyImages::attach(host);

        tracing::debug!(
            links = anchors.link_count(),
            sections = reveal.section_count(),
            deferred = lazy.pending_count(),
            "page mounted"
        );

        Self {
            config,
            scheduler,
            navbar,
            anchors,
            reveal,
            menu,
            parallax,
            glow,
            lazy,
            counters: Vec::new(),
            typewriters: Vec::new(),
            scroll_offset: 0.0,
        }
    }

    /// Route a host event to the interested components
    pub fn dispatch(
        &mut self,
        event: PageEvent,
        host: &dyn HostDocument,
        sink: &mut dyn PresentationSink,
    ) {
        match event {
            PageEvent::Scroll { offset } => {
                self.scroll_offset = offset;
                if let Some(navbar) = &mut self.navbar {
                    navbar.on_scroll(offset);
                }
            }
            PageEvent::PointerMoved { x, y } => {
                if let Some(parallax) = &mut self.parallax {
                    parallax.on_pointer(x, y, host);
                }
                if let Some(glow) = &self.glow {
                    glow.on_pointer(x, y, sink);
                }
            }
            PageEvent::Activated { node } => {
                if let Some(menu) = &mut self.menu {
                    if menu.is_button(node) {
                        menu.toggle(sink);
                        return;
                    }
                }
                let navigated = self.anchors.on_activate(node, host, sink);
                // Any successful navigation dismisses the overlay; its
                // own links dismiss it even when their target is gone.
                if let Some(menu) = &mut self.menu {
                    if navigated || menu.is_link(node) {
                        menu.close(sink);
                    }
                }
            }
            PageEvent::Resized { width, .. } => {
                // Growing back to a desktop viewport dismisses the
                // overlay so the scroll lock cannot outlive it.
                if width >= self.config.glow.min_viewport_width {
                    if let Some(menu) = &mut self.menu {
                        menu.close(sink);
                    }
                }
            }
        }
    }

    /// Advance one frame: tick the scheduler, then every component
    pub fn on_frame(
        &mut self,
        dt_ms: f32,
        host: &dyn HostDocument,
        sink: &mut dyn PresentationSink,
    ) {
        self.scheduler.tick(dt_ms);

        if let Some(navbar) = &mut self.navbar {
            navbar.on_frame(sink);
        }
        self.reveal.on_frame(dt_ms, self.scroll_offset, host, sink);
        if let Some(parallax) = &mut self.parallax {
            parallax.on_frame(sink);
        }
        self.lazy.on_frame(self.scroll_offset, host, sink);

        self.counters.retain_mut(|binding| binding.on_frame(sink));
        self.typewriters.retain_mut(|binding| binding.on_frame(sink));
    }

    /// Start ramping `node`'s text from 0 up to `target`
    pub fn animate_counter(&mut self, node: NodeId, target: f64) {
        self.counters.push(CounterBinding::start(
            self.scheduler.handle(),
            node,
            target,
            self.config.counter.duration_ms,
        ));
    }

    /// Start revealing `text` in `node` character by character
    ///
    /// The node's existing text is cleared immediately.
    pub fn typewrite(
        &mut self,
        node: NodeId,
        text: impl Into<String>,
        sink: &mut dyn PresentationSink,
    ) {
        self.typewriters.push(TypewriterBinding::start(
            self.scheduler.handle(),
            node,
            text,
            self.config.typewriter.interval_ms,
            sink,
        ));
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.as_ref().is_some_and(|m| m.is_open())
    }

    pub fn navbar(&self) -> Option<&NavbarController> {
        self.navbar.as_ref()
    }

    pub fn menu(&self) -> Option<&MobileMenu> {
        self.menu.as_ref()
    }

    pub fn reveal(&self) -> &RevealObserver {
        &self.reveal
    }

    pub fn anchors(&self) -> &AnchorScroller {
        &self.anchors
    }

    pub fn active_text_bindings(&self) -> usize {
        self.counters.len() + self.typewriters.len()
    }
}
