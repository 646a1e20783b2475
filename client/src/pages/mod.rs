//! Route-level pages, one per demo.

pub mod builder;
pub mod dropzone;
