use super::*;
use crate::doc::ComponentKind;

fn store_with(components: &[CanvasComponent]) -> DocStore {
    let mut doc = DocStore::new();
    for c in components {
        doc.push(c.clone());
    }
    doc
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn empty_doc_hits_nothing() {
    assert!(hit_test(pt(10.0, 10.0), &DocStore::new()).is_none());
}

#[test]
fn point_inside_body_hits() {
    let button = CanvasComponent::with_defaults(ComponentKind::Button, 50.0, 80.0);
    let doc = store_with(&[button.clone()]);
    assert_eq!(hit_test(pt(60.0, 90.0), &doc), Some(button.id));
}

#[test]
fn edges_are_inclusive() {
    let button = CanvasComponent::with_defaults(ComponentKind::Button, 50.0, 80.0);
    let doc = store_with(&[button.clone()]);
    assert_eq!(hit_test(pt(50.0, 80.0), &doc), Some(button.id));
    assert_eq!(hit_test(pt(170.0, 120.0), &doc), Some(button.id));
}

#[test]
fn point_outside_misses() {
    let button = CanvasComponent::with_defaults(ComponentKind::Button, 50.0, 80.0);
    let doc = store_with(&[button]);
    assert!(hit_test(pt(49.0, 90.0), &doc).is_none());
    assert!(hit_test(pt(60.0, 121.0), &doc).is_none());
}

#[test]
fn overlapping_components_prefer_last_placed() {
    let below = CanvasComponent::with_defaults(ComponentKind::Card, 0.0, 0.0);
    let above = CanvasComponent::with_defaults(ComponentKind::Text, 20.0, 20.0);
    let doc = store_with(&[below.clone(), above.clone()]);
    assert_eq!(hit_test(pt(30.0, 30.0), &doc), Some(above.id));
    assert_eq!(hit_test(pt(5.0, 5.0), &doc), Some(below.id));
}

#[test]
fn thin_divider_is_padded_vertically() {
    let divider = CanvasComponent::with_defaults(ComponentKind::Divider, 0.0, 100.0);
    let doc = store_with(&[divider.clone()]);
    assert_eq!(hit_test(pt(10.0, 98.0), &doc), Some(divider.id));
    assert_eq!(hit_test(pt(10.0, 104.0), &doc), Some(divider.id));
    assert!(hit_test(pt(10.0, 106.0), &doc).is_none());
}
