//! Reusable HTML components for shell rendering
//!
//! This module provides Maud component functions shared by the render
//! pass: the navigation menu, the per-theme header block, and the full
//! document wrapper that stitches head, header, and captured body
//! together.

pub mod document;
pub mod header;
pub mod menu;
