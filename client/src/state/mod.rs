//! Client-side state modules.
//!
//! DESIGN
//! ======
//! The builder's state lives in the `canvas` engine; only the drop-zone demo
//! keeps its reducer here.

pub mod dropzone;
