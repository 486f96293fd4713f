//! Landing page model: content, reveal wiring and copy feedback.
//!
//! This crate assembles the behavioral core into the actual page: static
//! section content, per-section reveal choreography, and the clipboard
//! collaborator behind the copy buttons. Rendering is the host's job; the
//! page only exposes phases, styles and feedback state.

pub mod clipboard;
pub mod content;
pub mod page;
pub mod sections;

pub use page::{example_target, LandingPage, INSTALL_TARGET};
pub use sections::Section;
