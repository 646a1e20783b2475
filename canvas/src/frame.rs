#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

use crate::consts::MIN_X;

/// A point in either client (viewport) or canvas-local space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Distance from a component's top-left corner to the pointer that grabbed it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

/// Where the canvas element sits in the viewport.
///
/// `left` / `top` are the client-space coordinates of the canvas origin and
/// `width` is its rendered width, all in CSS pixels. The engine needs a frame
/// before it can place or move anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasFrame {
    pub left: f64,
    pub top: f64,
    pub width: f64,
}

impl CanvasFrame {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64) -> Self {
        Self { left, top, width }
    }

    /// Measure the frame from the canvas element's bounding box.
    #[must_use]
    pub fn from_element(element: &web_sys::Element) -> Self {
        let rect = element.get_bounding_client_rect();
        Self::new(rect.left(), rect.top(), rect.width())
    }

    /// Convert a client-space point to canvas-local coordinates.
    #[must_use]
    pub fn client_to_local(&self, client: Point) -> Point {
        Point { x: client.x - self.left, y: client.y - self.top }
    }

    /// Convert a canvas-local point back to client space.
    #[must_use]
    pub fn local_to_client(&self, local: Point) -> Point {
        Point { x: local.x + self.left, y: local.y + self.top }
    }

    /// Clamp `x` so a component of `width` stays inside the canvas horizontally.
    ///
    /// When the canvas is narrower than the component the lower bound wins.
    #[must_use]
    pub fn clamp_x(&self, x: f64, width: f64) -> f64 {
        x.min(self.width - width).max(MIN_X)
    }
}
