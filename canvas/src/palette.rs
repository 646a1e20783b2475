//! Per-kind defaults: the one table every kind-dependent value comes from.
//!
//! Placement (content, width, height), the palette label, and the render
//! shape all live in a single [`KindSpec`] row, so adding or editing a kind
//! touches exactly one place.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use crate::consts::{FALLBACK_HEIGHT, FALLBACK_WIDTH};
use crate::doc::ComponentKind;

/// Visual shape used when rendering a component of a given kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A block of body text.
    TextBlock,
    /// A framed placeholder glyph standing in for an image.
    ImagePlaceholder,
    /// A clickable button shell.
    Button,
    /// Placeholder image, title and description stacked in a card.
    Card,
    /// A page heading.
    Heading,
    /// A thin horizontal rule.
    Divider,
    /// An empty box, used for kinds without a table entry.
    Blank,
}

/// Defaults for one component kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindSpec {
    pub kind: ComponentKind,
    /// Label shown on the palette entry.
    pub label: &'static str,
    /// Initial content of a freshly dropped component.
    pub content: &'static str,
    pub width: f64,
    pub height: f64,
    pub shape: Shape,
}

const TEXT: KindSpec = KindSpec {
    kind: ComponentKind::Text,
    label: "文本",
    content: "这是一段文本",
    width: 200.0,
    height: 40.0,
    shape: Shape::TextBlock,
};

const IMAGE: KindSpec = KindSpec {
    kind: ComponentKind::Image,
    label: "图片",
    content: "图片占位",
    width: 200.0,
    height: 150.0,
    shape: Shape::ImagePlaceholder,
};

const BUTTON: KindSpec = KindSpec {
    kind: ComponentKind::Button,
    label: "按钮",
    content: "点击按钮",
    width: 120.0,
    height: 40.0,
    shape: Shape::Button,
};

const CARD: KindSpec = KindSpec {
    kind: ComponentKind::Card,
    label: "卡片",
    content: "卡片标题",
    width: 250.0,
    height: 200.0,
    shape: Shape::Card,
};

const HEADER: KindSpec = KindSpec {
    kind: ComponentKind::Header,
    label: "标题",
    content: "页面标题",
    width: 300.0,
    height: 60.0,
    shape: Shape::Heading,
};

const DIVIDER: KindSpec = KindSpec {
    kind: ComponentKind::Divider,
    label: "分割线",
    content: "",
    width: 400.0,
    height: 2.0,
    shape: Shape::Divider,
};

const UNKNOWN: KindSpec = KindSpec {
    kind: ComponentKind::Unknown,
    label: "",
    content: "",
    width: FALLBACK_WIDTH,
    height: FALLBACK_HEIGHT,
    shape: Shape::Blank,
};

/// Palette entries in display order.
pub const PALETTE: &[KindSpec] = &[TEXT, IMAGE, BUTTON, CARD, HEADER, DIVIDER];

/// Look up the defaults row for `kind`.
#[must_use]
pub fn spec(kind: ComponentKind) -> &'static KindSpec {
    match kind {
        ComponentKind::Text => &TEXT,
        ComponentKind::Image => &IMAGE,
        ComponentKind::Button => &BUTTON,
        ComponentKind::Card => &CARD,
        ComponentKind::Header => &HEADER,
        ComponentKind::Divider => &DIVIDER,
        ComponentKind::Unknown => &UNKNOWN,
    }
}
