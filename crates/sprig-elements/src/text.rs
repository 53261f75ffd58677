//! Text element
//!
//! Text is the one visual whose asset is load-bearing: a missing font
//! aborts the build, because text without a font cannot be rendered
//! meaningfully. Stroke, shadow and gradient are independently optional
//! decorations, attached when their trigger fields are present.

use sprig_document::Record;
use sprig_geometry::Area;

use crate::context::RenderContext;
use crate::element::{Element, ElementCommon, ParentInfo};
use crate::error::{ElementError, ElementErrorKind};
use crate::node::{
    Gradient, ResolvedNode, Rgba, Shadow, Stroke, TextAlign, TextVisual, Visual, WrapMode,
};
use crate::registry::ElementRegistry;

pub struct TextElement {
    common: ElementCommon,
    text: String,
    font: String,
    font_size: f32,
    align: TextAlign,
    color: Rgba,
    is_vertical: bool,
    is_italic: bool,
    stroke: Option<Stroke>,
    shadow: Option<Shadow>,
    gradient: Option<Gradient>,
}

impl TextElement {
    pub fn construct(
        record: Record<'_>,
        _registry: &ElementRegistry,
    ) -> Result<Box<dyn Element>, ElementError> {
        let stroke = record.has("strokeSize").then(|| Stroke {
            size: record.i32("strokeSize"),
            color: Rgba::from_hex(record.str("strokeColor")),
        });
        let shadow = record.has("shadowColor").then(|| Shadow {
            color: Rgba::from_hex(record.str("shadowColor")),
            distance: record.i32("shadowDis"),
            blur: record.i32("shadowBlur"),
            angle: record.i32("shadowAngle"),
        });
        let gradient = record.has("gradientAngle").then(|| Gradient {
            angle: record.i32("gradientAngle"),
            color0: Rgba::from_hex(record.str("gradientColor0")),
            color1: Rgba::from_hex(record.str("gradientColor1")),
        });

        Ok(Box::new(Self {
            common: ElementCommon::from_record(record),
            text: record.str("text").to_string(),
            font: record.str("font").to_string(),
            font_size: record.f32("size"),
            align: TextAlign::parse(record.str("align")),
            color: Rgba::from_hex(record.str("color")),
            is_vertical: record.has("vertical"),
            is_italic: record.has("isItalic"),
            stroke,
            shadow,
            gradient,
        }))
    }
}

impl Element for TextElement {
    fn name(&self) -> &str {
        &self.common.name
    }

    fn calc_area(&self) -> Area {
        Area::from_position_and_size(self.common.canvas_position, self.common.size_delta)
    }

    fn render(
        &self,
        ctx: &mut RenderContext<'_>,
        parent: ParentInfo,
    ) -> Result<ResolvedNode, ElementError> {
        let font = ctx
            .fonts()
            .resolve(&self.font)
            .ok_or_else(|| ctx.error(ElementErrorKind::FontNotFound(self.font.clone())))?;

        let mut node = ResolvedNode::new(&self.common.name);
        node.anchored_position = ctx
            .placement()
            .calc_position(self.common.canvas_position, self.common.size_delta);
        node.size_delta = self.common.size_delta + font.size_delta;

        node.visual = Visual::Text(TextVisual {
            text: self.text.clone(),
            font: font.handle,
            font_size: self.font_size.round() as i32,
            color: self.color,
            bold: font.bold,
            italic: self.is_italic,
            align: self.align,
            wrap: if self.is_vertical {
                WrapMode::Wrap
            } else {
                WrapMode::Overflow
            },
            stroke: self.stroke,
            shadow: self.shadow,
            gradient: self.gradient,
        });

        self.common
            .finalize(&mut node, self.calc_area(), parent, ctx.canvas_size());
        Ok(node)
    }
}
