//! Button and Mask elements
//!
//! Both scan their children for an implicit background: the first
//! Image-typed record is hoisted onto the parent (sprite, slice,
//! opacity, box) and dropped from the child list. If a later Image
//! displaces it, the previously hoisted element is reinserted as an
//! ordinary child. An explicit `image` field on the record itself
//! overrides any child-derived background.

use sprig_document::Record;
use sprig_geometry::{Area, Vec2};

use crate::context::RenderContext;
use crate::element::{Element, ElementCommon, ParentInfo};
use crate::error::{ElementError, WarningKind};
use crate::image::resolve_image_visual;
use crate::node::{Control, ResolvedNode};
use crate::registry::ElementRegistry;

/// Background hoisted from an Image child (or the record's own `image`
/// field)
pub(crate) struct Background {
    pub sprite_name: String,
    pub image_name: String,
    pub slice: String,
    pub opacity: f32,
    pub position: Vec2,
    pub size: Vec2,
}

impl Background {
    fn from_record(record: Record<'_>) -> Self {
        Self {
            sprite_name: record.str("image").to_string(),
            image_name: record.str("imageName").to_string(),
            slice: record.str("slice").to_string(),
            opacity: record.f32("opacity"),
            position: record.vec2("x", "y"),
            size: record.vec2("w", "h"),
        }
    }

    fn area(background: &Option<Background>) -> Area {
        let (position, size) = match background {
            Some(bg) => (bg.position, bg.size),
            None => (Vec2::ZERO, Vec2::ZERO),
        };
        Area::new(position, position + size)
    }
}

/// Construct children while hoisting the background. The displaced
/// element is only remembered when the displacing child is itself an
/// Image.
pub(crate) fn hoist_background(
    record: Record<'_>,
    registry: &ElementRegistry,
    owner: &str,
) -> Result<(Option<Background>, Vec<Box<dyn Element>>), ElementError> {
    let mut background: Option<Background> = None;
    let mut displaced: Option<Box<dyn Element>> = None;
    let mut children = Vec::new();

    for child in record.elements() {
        let element = registry.generate(child).map_err(|err| err.at(owner))?;
        if child.str("type") == "Image" {
            if background.is_some() {
                // bumped: the previously hoisted image becomes ordinary
                if let Some(previous) = displaced.take() {
                    children.push(previous);
                }
            }
            background = Some(Background::from_record(child));
            displaced = Some(element);
        } else {
            children.push(element);
        }
    }

    if record.has("image") {
        background = Some(Background::from_record(record));
    }

    children.reverse();
    Ok((background, children))
}

pub struct ButtonElement {
    common: ElementCommon,
    background: Option<Background>,
    children: Vec<Box<dyn Element>>,
    clip_children: bool,
    soft_clip: bool,
}

impl ButtonElement {
    pub fn construct(
        record: Record<'_>,
        registry: &ElementRegistry,
    ) -> Result<Box<dyn Element>, ElementError> {
        let common = ElementCommon::from_record(record);
        let (background, children) = hoist_background(record, registry, &common.name)?;
        Ok(Box::new(Self {
            common,
            background,
            children,
            clip_children: record.has("mask"),
            soft_clip: record.str("mask") == "soft",
        }))
    }
}

impl Element for ButtonElement {
    fn name(&self) -> &str {
        &self.common.name
    }

    fn calc_area(&self) -> Area {
        Background::area(&self.background)
    }

    fn render(
        &self,
        ctx: &mut RenderContext<'_>,
        parent: ParentInfo,
    ) -> Result<ResolvedNode, ElementError> {
        let mut node = ResolvedNode::new(&self.common.name);
        node.control = Control::Button {
            clip_children: self.clip_children,
            soft_clip: self.soft_clip,
        };

        if let Some(bg) = &self.background {
            node.anchored_position = ctx.placement().calc_position(bg.position, bg.size);
            node.size_delta = bg.size;
            // the background is the click target
            node.visual = resolve_image_visual(
                ctx,
                &bg.sprite_name,
                &bg.image_name,
                &bg.slice,
                bg.opacity,
                true,
            );
        } else {
            ctx.warn(WarningKind::MissingBackground);
        }

        let child_parent = ParentInfo::new(self.calc_area().size(), false);
        for child in &self.children {
            node.children.push(ctx.render_child(child.as_ref(), child_parent)?);
        }

        self.common
            .finalize(&mut node, self.calc_area(), parent, ctx.canvas_size());
        Ok(node)
    }

    fn is_group(&self) -> bool {
        true
    }
}

pub struct MaskElement {
    common: ElementCommon,
    background: Option<Background>,
    children: Vec<Box<dyn Element>>,
    soft: bool,
}

impl MaskElement {
    pub fn construct(
        record: Record<'_>,
        registry: &ElementRegistry,
    ) -> Result<Box<dyn Element>, ElementError> {
        let common = ElementCommon::from_record(record);
        let (background, children) = hoist_background(record, registry, &common.name)?;
        Ok(Box::new(Self {
            common,
            background,
            children,
            soft: record.str("mask") == "soft",
        }))
    }
}

impl Element for MaskElement {
    fn name(&self) -> &str {
        &self.common.name
    }

    fn calc_area(&self) -> Area {
        Background::area(&self.background)
    }

    fn render(
        &self,
        ctx: &mut RenderContext<'_>,
        parent: ParentInfo,
    ) -> Result<ResolvedNode, ElementError> {
        let mut node = ResolvedNode::new(&self.common.name);
        node.control = Control::Mask {
            show_graphic: true,
            soft: self.soft,
        };

        if let Some(bg) = &self.background {
            node.anchored_position = ctx.placement().calc_position(bg.position, bg.size);
            node.size_delta = bg.size;
            node.visual = resolve_image_visual(
                ctx,
                &bg.sprite_name,
                &bg.image_name,
                &bg.slice,
                bg.opacity,
                true,
            );
        } else {
            ctx.warn(WarningKind::MissingBackground);
        }

        let child_parent = ParentInfo::new(self.calc_area().size(), false);
        for child in &self.children {
            node.children.push(ctx.render_child(child.as_ref(), child_parent)?);
        }

        self.common
            .finalize(&mut node, self.calc_area(), parent, ctx.canvas_size());
        Ok(node)
    }

    fn is_group(&self) -> bool {
        true
    }
}
