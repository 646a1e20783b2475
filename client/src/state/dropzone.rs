//! Drop-zone demo state: a fixed catalog, the items placed in the zone, and
//! the item currently being dragged.
//!
//! DESIGN
//! ======
//! Every operation is total. Placing copies the catalog item as-is, so repeated
//! drops of the same entry share an id, and removal by id takes all of them.

#[cfg(test)]
#[path = "dropzone_test.rs"]
mod dropzone_test;

/// A draggable catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Item {
    pub id: u32,
    pub label: &'static str,
    /// Colour tag; the view renders it as a `zone-tile--{tone}` modifier class.
    pub tone: &'static str,
}

/// The five entries offered by the demo.
pub const CATALOG: &[Item] = &[
    Item { id: 1, label: "组件 A", tone: "blue" },
    Item { id: 2, label: "组件 B", tone: "green" },
    Item { id: 3, label: "组件 C", tone: "purple" },
    Item { id: 4, label: "组件 D", tone: "orange" },
    Item { id: 5, label: "组件 E", tone: "pink" },
];

/// Drop-zone reducer state.
#[derive(Clone, Debug)]
pub struct DropZoneState {
    pub catalog: &'static [Item],
    pub placed: Vec<Item>,
    pub dragging: Option<Item>,
}

impl Default for DropZoneState {
    fn default() -> Self {
        Self { catalog: CATALOG, placed: Vec::new(), dragging: None }
    }
}

impl DropZoneState {
    /// Begin dragging `item`, replacing any drag already in flight.
    pub fn start_drag(&mut self, item: Item) {
        self.dragging = Some(item);
    }

    /// Place the dragged item in the zone. Returns false when nothing was being dragged.
    pub fn drop_in_zone(&mut self) -> bool {
        let Some(item) = self.dragging.take() else {
            return false;
        };
        self.placed.push(item);
        true
    }

    /// Native drag ended; forget the dragged item if it was never dropped.
    pub fn end_drag(&mut self) {
        self.dragging = None;
    }

    /// Remove every placed entry with `id`. Returns how many were removed.
    pub fn remove_from_zone(&mut self, id: u32) -> usize {
        let before = self.placed.len();
        self.placed.retain(|item| item.id != id);
        before - self.placed.len()
    }

    /// The zone highlights while a drag is in progress.
    pub fn is_drop_target_active(&self) -> bool {
        self.dragging.is_some()
    }

    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }
}
