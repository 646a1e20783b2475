//! Interaction engine for the drag-and-drop page builder.
//!
//! The crate is pure state: it never touches the DOM except to measure the
//! canvas element's bounding box. The Leptos host forwards drag and pointer
//! events to [`engine::Engine`], which mutates the placed components and
//! reports what changed as a list of [`engine::Action`]s. Rendering is a pure
//! projection of the engine state into [`render::ComponentView`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level reducer over palette and pointer events |
//! | [`doc`] | Placed components and the ordered in-memory store |
//! | [`palette`] | Per-kind defaults table (label, content, size, shape) |
//! | [`frame`] | Canvas frame measurement and client-to-local conversion |
//! | [`input`] | Keys and the two drag state machines |
//! | [`hit`] | Hit-testing the topmost component under a point |
//! | [`render`] | View descriptions for each placed component |
//! | [`consts`] | Shared numeric constants (fallback sizes, hit slop, cursors) |

pub mod consts;
pub mod doc;
pub mod engine;
pub mod frame;
pub mod hit;
pub mod input;
pub mod palette;
pub mod render;
