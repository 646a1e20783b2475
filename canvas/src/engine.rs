use crate::consts::{CURSOR_DEFAULT, CURSOR_GRABBING};
use crate::doc::{CanvasComponent, ComponentId, ComponentKind, DocStore};
use crate::frame::{CanvasFrame, Offset, Point};
use crate::hit;
use crate::input::{InputState, Key, PaletteDrag, UiState};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
///
/// An empty list means the event changed nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ComponentCreated(CanvasComponent),
    ComponentMoved { id: ComponentId, x: f64, y: f64 },
    ComponentDeleted { id: ComponentId },
    SelectionChanged(Option<ComponentId>),
    Cleared,
    SetCursor(String),
    RenderNeeded,
}

/// Builder engine state: placed components, selection, and both drag machines.
///
/// Every pointer coordinate handed to the engine is in client space; the engine
/// converts through `frame`, which the host refreshes from the canvas element.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    pub doc: DocStore,
    pub ui: UiState,
    pub input: InputState,
    pub palette: PaletteDrag,
    pub frame: Option<CanvasFrame>,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Frame ---

    /// Record where the canvas element currently sits, or `None` if it isn't mounted.
    pub fn set_frame(&mut self, frame: Option<CanvasFrame>) {
        self.frame = frame;
    }

    // --- Palette drag ---

    /// A palette entry started dragging; remember which kind to create on drop.
    pub fn start_palette_drag(&mut self, kind: ComponentKind) -> Vec<Action> {
        self.palette = PaletteDrag::Dragging { kind };
        vec![Action::RenderNeeded]
    }

    /// The palette drag ended somewhere other than the canvas.
    pub fn cancel_palette_drag(&mut self) -> Vec<Action> {
        if !self.palette.is_active() {
            return Vec::new();
        }
        self.palette = PaletteDrag::Idle;
        vec![Action::RenderNeeded]
    }

    /// Create a component of the in-flight palette kind under the pointer.
    ///
    /// No-op without an active palette drag or without a measured frame.
    pub fn drop_on_canvas(&mut self, client_pt: Point) -> Vec<Action> {
        let Some(kind) = self.palette.kind() else {
            return Vec::new();
        };
        let Some(frame) = self.frame else {
            return Vec::new();
        };

        let local = frame.client_to_local(client_pt);
        let mut component = CanvasComponent::with_defaults(kind, local.x, local.y);
        component.x = frame.clamp_x(component.x, component.width);

        self.doc.push(component.clone());
        self.palette = PaletteDrag::Idle;
        vec![Action::ComponentCreated(component), Action::RenderNeeded]
    }

    // --- Reposition drag ---

    /// Select a placed component and start dragging it.
    ///
    /// The pointer's offset from the component's top-left corner is captured
    /// here and held for the whole drag. Without a frame the component is
    /// selected but no drag begins.
    pub fn grab_existing(&mut self, id: &ComponentId, client_pt: Point) -> Vec<Action> {
        let Some(component) = self.doc.get(id) else {
            return Vec::new();
        };
        let (x, y) = (component.x, component.y);

        let mut actions = self.select(Some(*id));
        let Some(frame) = self.frame else {
            if !actions.is_empty() {
                actions.push(Action::RenderNeeded);
            }
            return actions;
        };

        let local = frame.client_to_local(client_pt);
        self.input = InputState::DraggingComponent {
            id: *id,
            grab_offset: Offset { dx: local.x - x, dy: local.y - y },
        };
        actions.push(Action::SetCursor(CURSOR_GRABBING.to_owned()));
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Move the dragged component so it keeps its grab offset under the pointer.
    ///
    /// x is clamped to the canvas width; y is not clamped.
    pub fn drag_move(&mut self, client_pt: Point) -> Vec<Action> {
        let InputState::DraggingComponent { id, grab_offset } = self.input else {
            return Vec::new();
        };
        let Some(frame) = self.frame else {
            return Vec::new();
        };
        let Some(component) = self.doc.get(&id) else {
            return Vec::new();
        };

        let local = frame.client_to_local(client_pt);
        let x = frame.clamp_x(local.x - grab_offset.dx, component.width);
        let y = local.y - grab_offset.dy;
        if (component.x - x).abs() < f64::EPSILON && (component.y - y).abs() < f64::EPSILON {
            return Vec::new();
        }

        self.doc.set_position(&id, x, y);
        vec![Action::ComponentMoved { id, x, y }, Action::RenderNeeded]
    }

    /// End the reposition drag (pointer-up or pointer leaving the canvas).
    pub fn release_drag(&mut self) -> Vec<Action> {
        if matches!(self.input, InputState::Idle) {
            return Vec::new();
        }
        self.input = InputState::Idle;
        vec![Action::SetCursor(CURSOR_DEFAULT.to_owned()), Action::RenderNeeded]
    }

    // --- Pointer / keyboard ---

    /// Pointer pressed on the canvas: grab the topmost component under it, or
    /// clear the selection when the press lands on empty canvas.
    pub fn on_pointer_down(&mut self, client_pt: Point) -> Vec<Action> {
        let Some(frame) = self.frame else {
            return Vec::new();
        };
        match hit::hit_test(frame.client_to_local(client_pt), &self.doc) {
            Some(id) => self.grab_existing(&id, client_pt),
            None => self.deselect(),
        }
    }

    /// `Delete` / `Backspace` remove the selected component; `Escape` drops
    /// the selection and any drag in progress.
    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        match key.0.as_str() {
            "Delete" | "Backspace" => match self.ui.selected_id {
                Some(id) => self.delete_component(&id),
                None => Vec::new(),
            },
            "Escape" => {
                let mut actions = self.release_drag();
                actions.extend(self.deselect());
                actions
            }
            _ => Vec::new(),
        }
    }

    // --- Selection / deletion ---

    /// Clear the selection.
    pub fn deselect(&mut self) -> Vec<Action> {
        let mut actions = self.select(None);
        if !actions.is_empty() {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    /// Remove a component, clearing the selection and drag if they pointed at it.
    pub fn delete_component(&mut self, id: &ComponentId) -> Vec<Action> {
        if self.doc.remove(id).is_none() {
            return Vec::new();
        }

        let mut actions = vec![Action::ComponentDeleted { id: *id }];
        if self.ui.selected_id.as_ref() == Some(id) {
            actions.extend(self.select(None));
        }
        if self.input.dragging_id().as_ref() == Some(id) {
            actions.extend(self.release_drag());
        } else {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    /// Remove every component and clear the selection.
    pub fn clear_all(&mut self) -> Vec<Action> {
        if self.doc.is_empty() && self.ui.selected_id.is_none() {
            return Vec::new();
        }
        self.doc.clear();
        self.ui.selected_id = None;
        self.input = InputState::Idle;
        vec![Action::Cleared, Action::RenderNeeded]
    }

    fn select(&mut self, id: Option<ComponentId>) -> Vec<Action> {
        if self.ui.selected_id == id {
            return Vec::new();
        }
        self.ui.selected_id = id;
        vec![Action::SelectionChanged(id)]
    }

    // --- Queries ---

    /// The currently selected component, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ComponentId> {
        self.ui.selected_id
    }

    /// Look up a component by ID.
    #[must_use]
    pub fn component(&self, id: &ComponentId) -> Option<&CanvasComponent> {
        self.doc.get(id)
    }

    /// All placed components in draw order.
    #[must_use]
    pub fn components(&self) -> &[CanvasComponent] {
        self.doc.components()
    }

    /// Whether a palette drag is in flight; the host highlights the canvas while it is.
    #[must_use]
    pub fn is_drop_target_active(&self) -> bool {
        self.palette.is_active()
    }

    /// Whether a placed component is being repositioned.
    #[must_use]
    pub fn is_dragging_component(&self) -> bool {
        self.input.dragging_id().is_some()
    }
}
