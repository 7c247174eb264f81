//! Page-shell rendering for generated HTML.
//!
//! Captures body output written through the shell and wraps it in a
//! shared page shell (head, themed header, navigation menu) when the
//! page finishes.

pub mod components;
mod config;
mod menu;
mod shell;
mod theme;

pub use config::Config;
pub use menu::{Menu, MenuItem};
pub use shell::PageShell;
pub use theme::{Header, Theme};
