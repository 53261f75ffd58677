//! Element trait and shared resolution machinery
//!
//! Every element goes through the same two passes: construction reads
//! its record (and recursively its children), caching any derived
//! geometry; rendering produces a `ResolvedNode` and then applies
//! stretch before pivot. Stretch changes the anchor box first; pivot
//! repositions relative to the already-stretched box and can override
//! the stretch-derived size delta axis by axis.

use sprig_document::Record;
use sprig_geometry::{Area, Vec2};

use crate::context::RenderContext;
use crate::error::ElementError;
use crate::node::{ImageSource, ResolvedNode, Visual};

/// A constructed element, ready to render once.
pub trait Element {
    fn name(&self) -> &str;

    /// Design-space bounding box of this element. Group-family elements
    /// cache the union of their children at construction time.
    fn calc_area(&self) -> Area;

    /// Produce this element's resolved node. Not idempotent in the
    /// allocation sense: each call yields a fresh subtree.
    fn render(
        &self,
        ctx: &mut RenderContext<'_>,
        parent: ParentInfo,
    ) -> Result<ResolvedNode, ElementError>;

    /// Group-family marker; lists require their items to be groups.
    fn is_group(&self) -> bool {
        false
    }

    /// Image marker; widgets wire specific image children by name.
    fn is_image(&self) -> bool {
        false
    }
}

/// What a child needs to know about its parent at render time
#[derive(Debug, Clone, Copy)]
pub struct ParentInfo {
    size: Option<Vec2>,
    is_root: bool,
}

impl ParentInfo {
    /// The root element has no parent.
    pub fn none() -> Self {
        Self {
            size: None,
            is_root: false,
        }
    }

    pub fn new(size: Vec2, is_root: bool) -> Self {
        Self {
            size: Some(size),
            is_root,
        }
    }

    /// Parent size, or the canvas size when there is no parent.
    pub fn size_or(&self, canvas: Vec2) -> Vec2 {
        self.size.unwrap_or(canvas)
    }

    /// Whether the direct parent is the Root element. Pivot resolution
    /// compensates for the Root's center-anchored frame only then.
    pub fn is_root(&self) -> bool {
        self.is_root
    }
}

/// Edge-snapping directive parsed from the `pivot` token
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PivotSpec {
    vertical: Option<VerticalPivot>,
    horizontal: Option<HorizontalPivot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VerticalPivot {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HorizontalPivot {
    Left,
    Right,
}

impl PivotSpec {
    /// Parse by substring, like the exporter writes combined tokens
    /// ("bottomleft"). Bottom wins over top, left over right.
    pub fn parse(token: &str) -> Self {
        let vertical = if token.contains("bottom") {
            Some(VerticalPivot::Bottom)
        } else if token.contains("top") {
            Some(VerticalPivot::Top)
        } else {
            None
        };
        let horizontal = if token.contains("left") {
            Some(HorizontalPivot::Left)
        } else if token.contains("right") {
            Some(HorizontalPivot::Right)
        } else {
            None
        };
        Self { vertical, horizontal }
    }

    pub fn is_none(&self) -> bool {
        self.vertical.is_none() && self.horizontal.is_none()
    }
}

/// Attributes common to every element variant
#[derive(Debug, Clone, Default)]
pub struct ElementCommon {
    pub name: String,
    pub pivot: PivotSpec,
    pub stretch_x: bool,
    pub stretch_y: bool,
    pub canvas_position: Vec2,
    pub size_delta: Vec2,
    pub is_native: bool,
    pub is_slice: bool,
}

impl ElementCommon {
    pub fn from_record(record: Record<'_>) -> Self {
        Self {
            name: record.str("name").to_string(),
            pivot: PivotSpec::parse(record.str("pivot")),
            stretch_x: record.has("stretchxy") || record.has("stretchx"),
            stretch_y: record.has("stretchxy") || record.has("stretchy"),
            canvas_position: record.vec2("x", "y"),
            size_delta: record.vec2("w", "h"),
            is_native: record.has("native"),
            is_slice: record.has("slice"),
        }
    }

    /// Final per-node fixups, in order: stretch, pivot, native size.
    pub fn finalize(
        &self,
        node: &mut ResolvedNode,
        own_area: Area,
        parent: ParentInfo,
        canvas: Vec2,
    ) {
        self.apply_stretch(node, own_area, parent, canvas);
        self.apply_pivot(node, own_area, parent, canvas);
        self.snap_native_size(node);
    }

    fn apply_stretch(
        &self,
        node: &mut ResolvedNode,
        own_area: Area,
        parent: ParentInfo,
        canvas: Vec2,
    ) {
        if !self.stretch_x && !self.stretch_y {
            return;
        }

        let parent_size = parent.size_or(canvas);
        let mut anchor_min = Vec2::splat(0.5);
        let mut anchor_max = Vec2::splat(0.5);
        let mut size_delta = node.size_delta;

        if self.stretch_x {
            anchor_min.x = 0.0;
            anchor_max.x = 1.0;
            // corrective delta so the stretched box still matches the
            // authored size at the current parent size
            size_delta.x = own_area.width() - parent_size.x;
        }
        if self.stretch_y {
            anchor_min.y = 0.0;
            anchor_max.y = 1.0;
            size_delta.y = own_area.height() - parent_size.y;
        }

        node.anchor_min = anchor_min;
        node.anchor_max = anchor_max;
        node.size_delta = size_delta;
    }

    fn apply_pivot(
        &self,
        node: &mut ResolvedNode,
        own_area: Area,
        parent: ParentInfo,
        canvas: Vec2,
    ) {
        let parent_size = parent.size_or(canvas);

        match self.pivot.vertical {
            Some(VerticalPivot::Bottom) => {
                node.anchor_min.y = 0.0;
                node.anchor_max.y = 0.0;
                node.size_delta.y = own_area.height();
                if parent.is_root() {
                    node.anchored_position.y += parent_size.y / 2.0;
                }
            }
            Some(VerticalPivot::Top) => {
                node.anchor_min.y = 1.0;
                node.anchor_max.y = 1.0;
                node.size_delta.y = own_area.height();
                if parent.is_root() {
                    node.anchored_position.y -= parent_size.y / 2.0;
                }
            }
            None => {}
        }

        match self.pivot.horizontal {
            Some(HorizontalPivot::Left) => {
                node.anchor_min.x = 0.0;
                node.anchor_max.x = 0.0;
                node.size_delta.x = own_area.width();
                if parent.is_root() {
                    node.anchored_position.x += parent_size.x / 2.0;
                }
            }
            Some(HorizontalPivot::Right) => {
                node.anchor_min.x = 1.0;
                node.anchor_max.x = 1.0;
                node.size_delta.x = own_area.width();
                if parent.is_root() {
                    node.anchored_position.x -= parent_size.x / 2.0;
                }
            }
            None => {}
        }
    }

    /// Reset an image node's displayed size to the asset's native pixel
    /// size. Nine-sliced sprites are exempt so border scaling survives;
    /// raw textures always snap.
    fn snap_native_size(&self, node: &mut ResolvedNode) {
        if !self.is_native {
            return;
        }

        let native = match &node.visual {
            Visual::Image(image) => match &image.source {
                ImageSource::Sprite { handle, .. } if !self.is_slice => Some(handle.native_size),
                ImageSource::RawTexture { handle } => Some(handle.native_size),
                _ => None,
            },
            _ => None,
        };
        if let Some(size) = native {
            node.size_delta = size;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pivot_parse() {
        assert!(PivotSpec::parse("").is_none());
        assert!(PivotSpec::parse("none").is_none());
        assert_eq!(
            PivotSpec::parse("bottomleft"),
            PivotSpec {
                vertical: Some(VerticalPivot::Bottom),
                horizontal: Some(HorizontalPivot::Left),
            }
        );
        assert_eq!(
            PivotSpec::parse("top"),
            PivotSpec {
                vertical: Some(VerticalPivot::Top),
                horizontal: None,
            }
        );
    }

    #[test]
    fn test_stretch_size_delta() {
        // Authored size (100, 50), own area matches, parent (80, 40):
        // final size delta must be (20, 10)
        let common = ElementCommon {
            stretch_x: true,
            stretch_y: true,
            size_delta: Vec2::new(100.0, 50.0),
            ..Default::default()
        };
        let mut node = ResolvedNode::new("n");
        node.size_delta = Vec2::new(100.0, 50.0);

        let own = Area::from_position_and_size(Vec2::ZERO, Vec2::new(100.0, 50.0));
        let parent = ParentInfo::new(Vec2::new(80.0, 40.0), false);
        common.finalize(&mut node, own, parent, Vec2::new(960.0, 640.0));

        assert_eq!(node.anchor_min, Vec2::ZERO);
        assert_eq!(node.anchor_max, Vec2::ONE);
        assert_eq!(node.size_delta, Vec2::new(20.0, 10.0));
    }

    #[test]
    fn test_pivot_root_compensation() {
        // Child of Root with pivot "bottom", parent height 800: anchors
        // pinned to the bottom edge, position shifted up by half
        let common = ElementCommon {
            pivot: PivotSpec::parse("bottom"),
            ..Default::default()
        };
        let mut node = ResolvedNode::new("n");
        node.anchored_position = Vec2::new(0.0, -150.0);

        let own = Area::from_position_and_size(Vec2::ZERO, Vec2::new(100.0, 50.0));
        let parent = ParentInfo::new(Vec2::new(0.0, 800.0), true);
        common.finalize(&mut node, own, parent, Vec2::new(960.0, 640.0));

        assert_eq!(node.anchor_min.y, 0.0);
        assert_eq!(node.anchor_max.y, 0.0);
        assert_eq!(node.size_delta.y, 50.0);
        assert_eq!(node.anchored_position.y, -150.0 + 400.0);
    }

    #[test]
    fn test_pivot_non_root_parent_not_compensated() {
        let common = ElementCommon {
            pivot: PivotSpec::parse("bottom"),
            ..Default::default()
        };
        let mut node = ResolvedNode::new("n");

        let own = Area::from_position_and_size(Vec2::ZERO, Vec2::new(100.0, 50.0));
        let parent = ParentInfo::new(Vec2::new(0.0, 800.0), false);
        common.finalize(&mut node, own, parent, Vec2::new(960.0, 640.0));

        assert_eq!(node.anchored_position.y, 0.0);
    }

    #[test]
    fn test_pivot_overrides_stretch_per_axis() {
        // Stretch both axes, then pivot "left": the x axis gets pinned
        // anchors and the element's own width, y keeps the stretch delta
        let common = ElementCommon {
            stretch_x: true,
            stretch_y: true,
            pivot: PivotSpec::parse("left"),
            ..Default::default()
        };
        let mut node = ResolvedNode::new("n");
        node.size_delta = Vec2::new(100.0, 50.0);

        let own = Area::from_position_and_size(Vec2::ZERO, Vec2::new(100.0, 50.0));
        let parent = ParentInfo::new(Vec2::new(80.0, 40.0), false);
        common.finalize(&mut node, own, parent, Vec2::new(960.0, 640.0));

        assert_eq!(node.anchor_min, Vec2::new(0.0, 0.0));
        assert_eq!(node.anchor_max, Vec2::new(0.0, 1.0));
        assert_eq!(node.size_delta, Vec2::new(100.0, 10.0));
    }
}
