//! Reusable UI components for the builder page.

pub mod canvas_component;
pub mod canvas_surface;
pub mod palette;
