#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::MIN_HIT_EXTENT_PX;
use crate::doc::{CanvasComponent, ComponentId, DocStore};
use crate::frame::Point;

/// Test which component (if any) is under `local_pt`, topmost first.
///
/// Components thinner than [`MIN_HIT_EXTENT_PX`] are padded around their
/// center so dividers can still be grabbed.
#[must_use]
pub fn hit_test(local_pt: Point, doc: &DocStore) -> Option<ComponentId> {
    doc.components()
        .iter()
        .rev()
        .find(|c| contains(c, local_pt))
        .map(|c| c.id)
}

fn contains(c: &CanvasComponent, p: Point) -> bool {
    let pad_x = ((MIN_HIT_EXTENT_PX - c.width) / 2.0).max(0.0);
    let pad_y = ((MIN_HIT_EXTENT_PX - c.height) / 2.0).max(0.0);
    p.x >= c.x - pad_x && p.x <= c.x + c.width + pad_x && p.y >= c.y - pad_y && p.y <= c.y + c.height + pad_y
}
