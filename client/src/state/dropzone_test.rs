use super::*;

fn item(id: u32) -> Item {
    CATALOG.iter().copied().find(|i| i.id == id).unwrap()
}

// =============================================================
// Catalog
// =============================================================

#[test]
fn catalog_has_five_distinct_items() {
    assert_eq!(CATALOG.len(), 5);
    let ids: Vec<u32> = CATALOG.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(CATALOG[0].label, "组件 A");
    assert_eq!(CATALOG[4].tone, "pink");
}

#[test]
fn default_state_is_idle_and_empty() {
    let state = DropZoneState::default();
    assert_eq!(state.catalog, CATALOG);
    assert!(state.is_empty());
    assert!(state.dragging.is_none());
    assert!(!state.is_drop_target_active());
}

// =============================================================
// start_drag / drop_in_zone
// =============================================================

#[test]
fn start_drag_sets_dragging() {
    let mut state = DropZoneState::default();
    state.start_drag(item(2));
    assert_eq!(state.dragging, Some(item(2)));
    assert!(state.is_drop_target_active());
}

#[test]
fn start_drag_replaces_previous() {
    let mut state = DropZoneState::default();
    state.start_drag(item(2));
    state.start_drag(item(4));
    assert_eq!(state.dragging, Some(item(4)));
}

#[test]
fn drop_without_drag_leaves_placed_unchanged() {
    let mut state = DropZoneState::default();
    state.start_drag(item(1));
    state.drop_in_zone();
    let before = state.placed.clone();

    assert!(!state.drop_in_zone());
    assert_eq!(state.placed, before);
}

#[test]
fn drop_appends_copy_and_clears_dragging() {
    let mut state = DropZoneState::default();
    state.start_drag(item(3));
    assert!(state.drop_in_zone());

    assert_eq!(state.placed_count(), 1);
    assert_eq!(state.placed[0], item(3));
    assert_eq!(state.placed[0].label, "组件 C");
    assert_eq!(state.placed[0].tone, "purple");
    assert!(state.dragging.is_none());
}

#[test]
fn same_item_can_be_placed_repeatedly() {
    let mut state = DropZoneState::default();
    for _ in 0..3 {
        state.start_drag(item(5));
        state.drop_in_zone();
    }
    assert_eq!(state.placed_count(), 3);
    assert!(state.placed.iter().all(|i| i.id == 5));
}

#[test]
fn drop_never_mutates_catalog() {
    let mut state = DropZoneState::default();
    state.start_drag(item(1));
    state.drop_in_zone();
    state.remove_from_zone(1);
    assert_eq!(state.catalog, CATALOG);
}

// =============================================================
// end_drag
// =============================================================

#[test]
fn end_drag_without_drop_returns_to_idle() {
    let mut state = DropZoneState::default();
    state.start_drag(item(1));
    state.end_drag();
    assert!(!state.is_drop_target_active());
    assert!(!state.drop_in_zone());
    assert!(state.is_empty());
}

#[test]
fn end_drag_after_drop_is_harmless() {
    let mut state = DropZoneState::default();
    state.start_drag(item(1));
    state.drop_in_zone();
    state.end_drag();
    assert_eq!(state.placed_count(), 1);
}

// =============================================================
// remove_from_zone
// =============================================================

#[test]
fn remove_takes_every_entry_with_matching_id() {
    let mut state = DropZoneState::default();
    for id in [1, 3, 3] {
        state.start_drag(item(id));
        state.drop_in_zone();
    }

    assert_eq!(state.remove_from_zone(3), 2);
    assert_eq!(state.placed, vec![item(1)]);
}

#[test]
fn remove_missing_id_is_noop() {
    let mut state = DropZoneState::default();
    state.start_drag(item(1));
    state.drop_in_zone();
    assert_eq!(state.remove_from_zone(9), 0);
    assert_eq!(state.placed_count(), 1);
}

#[test]
fn remove_keeps_order_of_survivors() {
    let mut state = DropZoneState::default();
    for id in [4, 2, 1, 2, 5] {
        state.start_drag(item(id));
        state.drop_in_zone();
    }
    state.remove_from_zone(2);
    let ids: Vec<u32> = state.placed.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![4, 1, 5]);
}

#[test]
fn remove_does_not_touch_dragging() {
    let mut state = DropZoneState::default();
    state.start_drag(item(2));
    state.drop_in_zone();
    state.start_drag(item(2));
    state.remove_from_zone(2);
    assert_eq!(state.dragging, Some(item(2)));
}
