//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser event plumbing from page and component
//! logic so the pure parts stay testable natively.

pub mod action_log;
pub mod drag_payload;
pub mod pointer;
