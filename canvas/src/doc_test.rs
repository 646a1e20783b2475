#![allow(clippy::float_cmp)]

use super::*;

fn component_at(kind: ComponentKind, x: f64, y: f64) -> CanvasComponent {
    CanvasComponent::with_defaults(kind, x, y)
}

// =============================================================
// ComponentKind
// =============================================================

#[test]
fn kind_round_trips_known_names() {
    for kind in [
        ComponentKind::Text,
        ComponentKind::Image,
        ComponentKind::Button,
        ComponentKind::Card,
        ComponentKind::Header,
        ComponentKind::Divider,
    ] {
        assert_eq!(ComponentKind::from_name(kind.as_str()), kind);
    }
}

#[test]
fn kind_from_name_ignores_case_and_whitespace() {
    assert_eq!(ComponentKind::from_name("  Button "), ComponentKind::Button);
    assert_eq!(ComponentKind::from_name("HEADER"), ComponentKind::Header);
}

#[test]
fn kind_from_name_maps_unrecognised_to_unknown() {
    assert_eq!(ComponentKind::from_name("carousel"), ComponentKind::Unknown);
    assert_eq!(ComponentKind::from_name(""), ComponentKind::Unknown);
}

#[test]
fn kind_serializes_lowercase() {
    let json = serde_json::to_string(&ComponentKind::Divider).unwrap();
    assert_eq!(json, "\"divider\"");
}

#[test]
fn kind_deserializes_unrecognised_as_unknown() {
    let kind: ComponentKind = serde_json::from_str("\"video\"").unwrap();
    assert_eq!(kind, ComponentKind::Unknown);
}

// =============================================================
// CanvasComponent
// =============================================================

#[test]
fn with_defaults_uses_kind_table() {
    let c = component_at(ComponentKind::Button, 50.0, 80.0);
    assert_eq!(c.kind, ComponentKind::Button);
    assert_eq!(c.x, 50.0);
    assert_eq!(c.y, 80.0);
    assert_eq!(c.width, 120.0);
    assert_eq!(c.height, 40.0);
    assert_eq!(c.content, "点击按钮");
}

#[test]
fn with_defaults_unknown_kind_falls_back() {
    let c = component_at(ComponentKind::Unknown, 0.0, 0.0);
    assert_eq!(c.content, "");
    assert_eq!(c.width, 150.0);
    assert_eq!(c.height, 100.0);
}

#[test]
fn with_defaults_generates_fresh_ids() {
    let a = component_at(ComponentKind::Text, 0.0, 0.0);
    let b = component_at(ComponentKind::Text, 0.0, 0.0);
    assert_ne!(a.id, b.id);
}

#[test]
fn component_serde_shape() {
    let c = component_at(ComponentKind::Header, 10.0, 20.0);
    let value = serde_json::to_value(&c).unwrap();
    assert_eq!(value["kind"], "header");
    assert_eq!(value["x"], 10.0);
    assert_eq!(value["content"], "页面标题");
    let back: CanvasComponent = serde_json::from_value(value).unwrap();
    assert_eq!(back, c);
}

// =============================================================
// DocStore
// =============================================================

#[test]
fn store_new_is_empty() {
    let store = DocStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

#[test]
fn store_push_preserves_order() {
    let mut store = DocStore::new();
    let a = component_at(ComponentKind::Text, 0.0, 0.0);
    let b = component_at(ComponentKind::Card, 0.0, 0.0);
    store.push(a.clone());
    store.push(b.clone());
    let ids: Vec<ComponentId> = store.components().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![a.id, b.id]);
}

#[test]
fn store_get_finds_by_id() {
    let mut store = DocStore::new();
    let a = component_at(ComponentKind::Image, 5.0, 6.0);
    store.push(a.clone());
    assert_eq!(store.get(&a.id), Some(&a));
    assert!(store.get(&Uuid::new_v4()).is_none());
}

#[test]
fn store_remove_returns_component() {
    let mut store = DocStore::new();
    let a = component_at(ComponentKind::Text, 0.0, 0.0);
    let b = component_at(ComponentKind::Text, 0.0, 0.0);
    store.push(a.clone());
    store.push(b.clone());
    assert_eq!(store.remove(&a.id), Some(a));
    assert_eq!(store.len(), 1);
    assert_eq!(store.components()[0].id, b.id);
}

#[test]
fn store_remove_missing_is_none() {
    let mut store = DocStore::new();
    store.push(component_at(ComponentKind::Text, 0.0, 0.0));
    assert!(store.remove(&Uuid::new_v4()).is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn store_set_position_updates_only_target() {
    let mut store = DocStore::new();
    let a = component_at(ComponentKind::Text, 0.0, 0.0);
    let b = component_at(ComponentKind::Text, 1.0, 1.0);
    store.push(a.clone());
    store.push(b.clone());
    assert!(store.set_position(&a.id, 30.0, 40.0));
    let moved = store.get(&a.id).unwrap();
    assert_eq!((moved.x, moved.y), (30.0, 40.0));
    let untouched = store.get(&b.id).unwrap();
    assert_eq!((untouched.x, untouched.y), (1.0, 1.0));
}

#[test]
fn store_set_position_missing_returns_false() {
    let mut store = DocStore::new();
    assert!(!store.set_position(&Uuid::new_v4(), 1.0, 1.0));
}

#[test]
fn store_clear_empties() {
    let mut store = DocStore::new();
    store.push(component_at(ComponentKind::Text, 0.0, 0.0));
    store.push(component_at(ComponentKind::Divider, 0.0, 0.0));
    store.clear();
    assert!(store.is_empty());
}
