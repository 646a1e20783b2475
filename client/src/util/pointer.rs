//! Pointer helpers: client coordinates and canvas measurement.

use canvas::frame::{CanvasFrame, Point};
use leptos::prelude::*;
use web_sys::MouseEvent;

/// Client-space position of a mouse, pointer, or drag event.
pub fn client_point(ev: &MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Measure the canvas element, or `None` while it isn't mounted.
pub fn measure_frame(canvas_ref: NodeRef<leptos::html::Div>) -> Option<CanvasFrame> {
    canvas_ref.get_untracked().map(|el| CanvasFrame::from_element(&el))
}
