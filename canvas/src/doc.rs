//! Document model: placed components and the ordered in-memory store.
//!
//! This module defines what sits on the builder canvas (`CanvasComponent`,
//! `ComponentKind`) and the runtime store that owns every live component
//! (`DocStore`). List order is draw order: later components render on top and
//! win hit-tests.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::palette;

/// Unique identifier for a placed component.
pub type ComponentId = Uuid;

/// The kind of a placed component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Body text block.
    Text,
    /// Image placeholder.
    Image,
    /// Button shell.
    Button,
    /// Card with image, title and description.
    Card,
    /// Page heading.
    Header,
    /// Horizontal rule.
    Divider,
    /// Any kind name the builder does not recognise.
    #[serde(other)]
    Unknown,
}

impl ComponentKind {
    /// Wire name of the kind, as carried in drag payloads.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Button => "button",
            Self::Card => "card",
            Self::Header => "header",
            Self::Divider => "divider",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a wire name. Names that match no known kind map to [`Self::Unknown`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "text" => Self::Text,
            "image" => Self::Image,
            "button" => Self::Button,
            "card" => Self::Card,
            "header" => Self::Header,
            "divider" => Self::Divider,
            _ => Self::Unknown,
        }
    }
}

/// A component placed on the builder canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasComponent {
    /// Unique identifier for this component.
    pub id: ComponentId,
    /// What the component renders as.
    pub kind: ComponentKind,
    /// Left edge in canvas-local pixels.
    pub x: f64,
    /// Top edge in canvas-local pixels.
    pub y: f64,
    /// Text content; meaning depends on the kind.
    pub content: String,
    pub width: f64,
    pub height: f64,
}

impl CanvasComponent {
    /// Build a component of `kind` at `(x, y)` using the kind's defaults and a fresh id.
    #[must_use]
    pub fn with_defaults(kind: ComponentKind, x: f64, y: f64) -> Self {
        let spec = palette::spec(kind);
        Self {
            id: Uuid::new_v4(),
            kind,
            x,
            y,
            content: spec.content.to_owned(),
            width: spec.width,
            height: spec.height,
        }
    }
}

/// In-memory, ordered store of placed components.
#[derive(Debug, Clone, Default)]
pub struct DocStore {
    components: Vec<CanvasComponent>,
}

impl DocStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { components: Vec::new() }
    }

    /// Append a component on top of everything already placed.
    pub fn push(&mut self, component: CanvasComponent) {
        self.components.push(component);
    }

    /// Remove a component by id, returning it if it was present.
    pub fn remove(&mut self, id: &ComponentId) -> Option<CanvasComponent> {
        let index = self.components.iter().position(|c| c.id == *id)?;
        Some(self.components.remove(index))
    }

    /// Return a reference to a component by id.
    #[must_use]
    pub fn get(&self, id: &ComponentId) -> Option<&CanvasComponent> {
        self.components.iter().find(|c| c.id == *id)
    }

    /// Move a component. Returns false if the component doesn't exist.
    pub fn set_position(&mut self, id: &ComponentId, x: f64, y: f64) -> bool {
        let Some(component) = self.components.iter_mut().find(|c| c.id == *id) else {
            return false;
        };
        component.x = x;
        component.y = y;
        true
    }

    /// Remove every component.
    pub fn clear(&mut self) {
        self.components.clear();
    }

    /// All components in draw order (bottom first).
    #[must_use]
    pub fn components(&self) -> &[CanvasComponent] {
        &self.components
    }

    /// Number of components currently placed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if nothing is placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
