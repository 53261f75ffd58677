//! Resolved UI nodes
//!
//! The toolkit-agnostic output of a build: anchors as normalized 0-1
//! pairs, pivot, pixel size deltas and positions, plus a discriminated
//! visual payload and an optional behavioral control. Nodes are produced
//! fresh by each render and never mutated by the engine afterward.

use serde::Serialize;
use sprig_geometry::Vec2;

use crate::providers::{FontHandle, SpriteHandle, TextureHandle};

/// One resolved UI node
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedNode {
    pub name: String,
    pub anchor_min: Vec2,
    pub anchor_max: Vec2,
    pub pivot: Vec2,
    pub size_delta: Vec2,
    pub anchored_position: Vec2,
    pub visual: Visual,
    pub control: Control,
    pub children: Vec<ResolvedNode>,
}

impl ResolvedNode {
    /// Node with centered anchors and pivot, zero geometry, no payload.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            anchor_min: Vec2::splat(0.5),
            anchor_max: Vec2::splat(0.5),
            pivot: Vec2::splat(0.5),
            size_delta: Vec2::ZERO,
            anchored_position: Vec2::ZERO,
            visual: Visual::None,
            control: Control::None,
            children: Vec::new(),
        }
    }

    /// Depth-first search by name, including this node.
    pub fn find(&self, name: &str) -> Option<&ResolvedNode> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }

    /// Depth-first search by name, including this node.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ResolvedNode> {
        if self.name == name {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(name))
    }

    /// Visit this node and every descendant, depth-first. Post-process
    /// hooks that tag whole trees use this.
    pub fn visit_mut(&mut self, visit: &mut impl FnMut(&mut ResolvedNode)) {
        visit(self);
        for child in &mut self.children {
            child.visit_mut(visit);
        }
    }

    /// Total node count, this node included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(ResolvedNode::count).sum::<usize>()
    }
}

/// Visual payload of a node
#[derive(Debug, Clone, Default, Serialize)]
pub enum Visual {
    #[default]
    None,
    Image(ImageVisual),
    Text(TextVisual),
}

impl Visual {
    pub fn is_image(&self) -> bool {
        matches!(self, Visual::Image(_))
    }
}

/// Image payload
#[derive(Debug, Clone, Serialize)]
pub struct ImageVisual {
    pub source: ImageSource,
    pub color: Rgba,
    pub raycast_target: bool,
    pub maskable: bool,
}

#[derive(Debug, Clone, Serialize)]
pub enum ImageSource {
    /// Atlas sprite; `sliced` selects nine-patch scaling
    Sprite { handle: SpriteHandle, sliced: bool },
    /// Raw texture, always simple-stretched
    RawTexture { handle: TextureHandle },
    /// Synthesized transparent 1x1 filler (list masks without an
    /// authored mask image)
    Filler,
}

/// Text payload
#[derive(Debug, Clone, Serialize)]
pub struct TextVisual {
    pub text: String,
    pub font: FontHandle,
    pub font_size: i32,
    pub color: Rgba,
    pub bold: bool,
    pub italic: bool,
    pub align: TextAlign,
    pub wrap: WrapMode,
    pub stroke: Option<Stroke>,
    pub shadow: Option<Shadow>,
    pub gradient: Option<Gradient>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Parse the exporter's alignment token. Unknown tokens fall back to
    /// center, the exporter's default.
    pub fn parse(token: &str) -> Self {
        match token {
            "left" => TextAlign::Left,
            "right" => TextAlign::Right,
            _ => TextAlign::Center,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WrapMode {
    /// Single line, overflowing the box (exporter default)
    Overflow,
    /// Wrap at the box edge (vertical-text exports)
    Wrap,
}

/// Optional text stroke
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Stroke {
    pub size: i32,
    pub color: Rgba,
}

/// Optional drop shadow
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Shadow {
    pub color: Rgba,
    pub distance: i32,
    pub blur: i32,
    pub angle: i32,
}

/// Optional two-stop gradient
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Gradient {
    pub angle: i32,
    pub color0: Rgba,
    pub color1: Rgba,
}

/// Behavioral control attached to a node
#[derive(Debug, Clone, Default, Serialize)]
pub enum Control {
    #[default]
    None,
    /// Interactive button; the node's own visual is the target graphic.
    Button { clip_children: bool, soft_clip: bool },
    /// Clips children to the node's bounds.
    Mask { show_graphic: bool, soft: bool },
    /// Scrollable viewport; the "Content" child holds the items.
    ScrollView { orientation: Option<Orientation> },
    /// Directional stacking layout on a scroll content node.
    Stack { orientation: Orientation },
    /// `fill` indexes into `children` when a fill graphic was found.
    Slider { fill: Option<usize>, interactable: bool },
    /// `handle` indexes into `children` when a handle graphic was found.
    Scrollbar {
        handle: Option<usize>,
        value: f32,
        direction: ScrollbarDirection,
    },
    /// `target`/`graphic` index into `children`.
    Toggle {
        target: Option<usize>,
        graphic: Option<usize>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScrollbarDirection {
    LeftToRight,
    RightToLeft,
    BottomToTop,
    TopToBottom,
}

/// Normalized RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
    pub const BLACK: Rgba = Rgba { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const TRANSPARENT: Rgba = Rgba { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(mut self, a: f32) -> Self {
        self.a = a;
        self
    }

    /// Parse `RRGGBB` or `RRGGBBAA`, with an optional leading `#`.
    /// Empty or malformed input falls back to opaque black, matching the
    /// exporter's behavior for unset colors.
    pub fn from_hex(hex: &str) -> Self {
        Self::try_from_hex(hex).unwrap_or(Rgba::BLACK)
    }

    fn try_from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 && hex.len() != 8 {
            return None;
        }
        let channel = |i: usize| -> Option<f32> {
            let byte = u8::from_str_radix(hex.get(i..i + 2)?, 16).ok()?;
            Some(byte as f32 / 255.0)
        };
        Some(Rgba::new(
            channel(0)?,
            channel(2)?,
            channel(4)?,
            if hex.len() == 8 { channel(6)? } else { 1.0 },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_colors() {
        assert_eq!(Rgba::from_hex("ff0000"), Rgba::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(Rgba::from_hex("#00ff00"), Rgba::new(0.0, 1.0, 0.0, 1.0));
        assert_eq!(Rgba::from_hex("00000080").a, 128.0 / 255.0);
        // Empty and malformed fall back to opaque black
        assert_eq!(Rgba::from_hex(""), Rgba::BLACK);
        assert_eq!(Rgba::from_hex("xyzxyz"), Rgba::BLACK);
    }

    #[test]
    fn test_find_by_name() {
        let mut root = ResolvedNode::new("Root");
        let mut panel = ResolvedNode::new("Panel");
        panel.children.push(ResolvedNode::new("Slot"));
        root.children.push(panel);

        assert!(root.find("Slot").is_some());
        assert!(root.find("Missing").is_none());

        if let Some(slot) = root.find_mut("Slot") {
            slot.children.push(ResolvedNode::new("Injected"));
        }
        assert_eq!(root.count(), 4);
    }

    #[test]
    fn test_visit_mut() {
        let mut root = ResolvedNode::new("Root");
        root.children.push(ResolvedNode::new("A"));
        root.children.push(ResolvedNode::new("B"));

        let mut seen = Vec::new();
        root.visit_mut(&mut |node| seen.push(node.name.clone()));
        assert_eq!(seen, ["Root", "A", "B"]);
    }
}
