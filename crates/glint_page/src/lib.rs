//! Glint Page Engine
//!
//! Wires scroll, pointer and frame events from a host document to the
//! interactive behaviors of a landing page: a scroll-reactive navbar,
//! smooth anchor scrolling, staggered viewport reveals, a mobile menu
//! overlay, pointer parallax and text micro-animations. All output
//! flows through a presentation sink, so the engine can be driven and
//! observed without a real document.
//!
//! # Example
//!
//! ```ignore
//! use glint_page::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = PageConfig::load("page.toml")?;
//!     let mut page = Page::mount(config, &mut host, &mut sink);
//!
//!     // Host event loop
//!     page.dispatch(PageEvent::Scroll { offset: 120.0 }, &host, &mut sink);
//!     page.on_frame(16.0, &host, &mut sink);
//!     Ok(())
//! }
//! ```

mod anchors;
mod bindings;
mod config;
mod error;
mod glow;
mod lazy;
mod menu;
mod navbar;
mod page;
mod parallax;
mod reveal;


pub use anchors::AnchorScroller;
pub use bindings::{CounterBinding, TypewriterBinding};
pub use config::{
    AnchorConfig, CounterConfig, GlowConfig, NavbarConfig, PageConfig, ParallaxConfig,
    RevealConfig, TypewriterConfig,
};
pub use error::{PageError, Result};
pub use glow::CursorGlow;
pub use lazy::LazyImages;
pub use menu::MobileMenu;
pub use navbar::NavbarController;
pub use page::Page;
pub use parallax::ParallaxField;
pub use reveal::RevealObserver;

/// Commonly used types for embedding the page engine
pub mod prelude {
    pub use crate::config::PageConfig;
    pub use crate::error::{PageError, Result};
    pub use crate::page::Page;
    pub use glint_core::{
        HostDocument, NodeId, PageEvent, PresentOp, PresentationSink, PresentationSinkExt,
        RecordingSink,
    };
}
