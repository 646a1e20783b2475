//! Rendering: projects placed components into view descriptions.
//!
//! This module never touches the DOM. It turns read-only engine state into
//! [`ComponentView`]s that the Leptos host maps one-to-one onto elements, so
//! the kind-to-shape dispatch stays testable without a browser.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::doc::{CanvasComponent, ComponentId, DocStore};
use crate::input::UiState;
use crate::palette::{self, Shape};

/// Glyph drawn inside image placeholders and card thumbnails.
pub const IMAGE_GLYPH: &str = "🖼️";

/// Description text shown under a card's title.
pub const CARD_BODY: &str = "这是卡片的描述内容";

/// Shape-specific content of a rendered component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeView {
    TextBlock { text: String },
    ImagePlaceholder { glyph: &'static str, caption: String },
    Button { label: String },
    Card { glyph: &'static str, title: String, body: &'static str },
    Heading { text: String },
    Divider,
    Blank,
}

/// Everything the host needs to draw one component.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentView {
    pub id: ComponentId,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Space-separated CSS classes.
    pub class: String,
    pub shape: ShapeView,
    /// The delete affordance is only offered on the selected component.
    pub show_delete: bool,
}

impl ComponentView {
    /// Inline absolute-position style for the component's wrapper element.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left: {}px; top: {}px; width: {}px; height: {}px;",
            self.left, self.top, self.width, self.height
        )
    }
}

/// Describe one component.
#[must_use]
pub fn describe(component: &CanvasComponent, is_selected: bool) -> ComponentView {
    let spec = palette::spec(component.kind);
    let content = component.content.clone();
    let shape = match spec.shape {
        Shape::TextBlock => ShapeView::TextBlock { text: content },
        Shape::ImagePlaceholder => ShapeView::ImagePlaceholder { glyph: IMAGE_GLYPH, caption: content },
        Shape::Button => ShapeView::Button { label: content },
        Shape::Card => ShapeView::Card { glyph: IMAGE_GLYPH, title: content, body: CARD_BODY },
        Shape::Heading => ShapeView::Heading { text: content },
        Shape::Divider => ShapeView::Divider,
        Shape::Blank => ShapeView::Blank,
    };

    let mut class = format!("canvas-component canvas-component--{}", component.kind.as_str());
    if is_selected {
        class.push_str(" canvas-component--selected");
    }

    ComponentView {
        id: component.id,
        left: component.x,
        top: component.y,
        width: component.width,
        height: component.height,
        class,
        shape,
        show_delete: is_selected,
    }
}

/// Describe every placed component in draw order (bottom first).
#[must_use]
pub fn describe_all(doc: &DocStore, ui: &UiState) -> Vec<ComponentView> {
    doc.components()
        .iter()
        .map(|c| describe(c, ui.selected_id == Some(c.id)))
        .collect()
}
