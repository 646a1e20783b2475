//! Shared numeric constants for the canvas crate.

// ── Placement ───────────────────────────────────────────────────

/// Width given to a component whose kind has no table entry.
pub const FALLBACK_WIDTH: f64 = 150.0;

/// Height given to a component whose kind has no table entry.
pub const FALLBACK_HEIGHT: f64 = 100.0;

/// Left bound for every component's x position.
pub const MIN_X: f64 = 0.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Minimum grab extent in pixels for thin components such as dividers.
pub const MIN_HIT_EXTENT_PX: f64 = 8.0;

// ── Cursors ─────────────────────────────────────────────────────

/// Cursor shown while a component is being repositioned.
pub const CURSOR_GRABBING: &str = "grabbing";

/// Cursor restored once a reposition drag ends.
pub const CURSOR_DEFAULT: &str = "default";
