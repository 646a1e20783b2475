//! Input model: keys, persistent selection, and the two drag state machines.
//!
//! The builder runs two independent `Idle → Dragging → Idle` machines.
//! `PaletteDrag` tracks a new component being dragged in from the palette and
//! carries only its kind. `InputState` tracks an already-placed component being
//! repositioned and carries the pointer offset captured at grab time, so the
//! component does not jump under the pointer while it moves.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::{ComponentId, ComponentKind};
use crate::frame::Offset;

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"Delete"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// The id of the currently selected component, if any.
    pub selected_id: Option<ComponentId>,
}

/// Drag of a new component from the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteDrag {
    /// Nothing is being dragged in.
    #[default]
    Idle,
    /// A palette entry is in flight and will create `kind` when dropped.
    Dragging { kind: ComponentKind },
}

impl PaletteDrag {
    /// The kind in flight, if a palette drag is active.
    #[must_use]
    pub fn kind(self) -> Option<ComponentKind> {
        match self {
            Self::Idle => None,
            Self::Dragging { kind } => Some(kind),
        }
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// Pointer gesture on already-placed components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    Idle,
    /// The user is repositioning a placed component.
    DraggingComponent {
        /// Id of the component being dragged.
        id: ComponentId,
        /// Pointer position relative to the component's top-left corner at grab time.
        grab_offset: Offset,
    },
}

impl InputState {
    /// Id of the component being repositioned, if any.
    #[must_use]
    pub fn dragging_id(&self) -> Option<ComponentId> {
        match self {
            Self::Idle => None,
            Self::DraggingComponent { id, .. } => Some(*id),
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::Idle
    }
}
