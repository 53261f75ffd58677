//! Slider, Scrollbar and Toggle elements
//!
//! Group-shaped widgets that wire specific image children into their
//! control after rendering: a slider's "Fill", a scrollbar's "Handle",
//! a toggle's background and checkmark. Absence of a wired child is
//! tolerated; the control just carries no reference.

use sprig_document::Record;
use sprig_geometry::{Area, Vec2};

use crate::context::RenderContext;
use crate::element::{Element, ParentInfo};
use crate::error::ElementError;
use crate::group::GroupBody;
use crate::node::{Control, ResolvedNode, ScrollbarDirection};
use crate::registry::ElementRegistry;

/// First image child whose name matches, by index into the child list
fn find_image_child(body: &GroupBody, name: &str) -> Option<usize> {
    body.children
        .iter()
        .position(|child| child.is_image() && child.name().eq_ignore_ascii_case(name))
}

pub struct SliderElement {
    body: GroupBody,
}

impl SliderElement {
    pub fn construct(
        record: Record<'_>,
        registry: &ElementRegistry,
    ) -> Result<Box<dyn Element>, ElementError> {
        Ok(Box::new(Self {
            body: GroupBody::new(record, registry)?,
        }))
    }
}

impl Element for SliderElement {
    fn name(&self) -> &str {
        &self.body.common.name
    }

    fn calc_area(&self) -> Area {
        self.body.area()
    }

    fn render(
        &self,
        ctx: &mut RenderContext<'_>,
        parent: ParentInfo,
    ) -> Result<ResolvedNode, ElementError> {
        let mut node = self.body.create_self(ctx);
        self.body.render_children(ctx, &mut node)?;

        let fill = find_image_child(&self.body, "Fill");
        if let Some(index) = fill {
            // the fill tracks the slider's fraction: full-stretch
            // anchors, no local geometry of its own
            let child = &mut node.children[index];
            child.anchor_min = Vec2::ZERO;
            child.anchor_max = Vec2::ONE;
            child.anchored_position = Vec2::ZERO;
            child.size_delta = Vec2::ZERO;
        }
        node.control = Control::Slider {
            fill,
            interactable: false,
        };

        self.body
            .common
            .finalize(&mut node, self.calc_area(), parent, ctx.canvas_size());
        Ok(node)
    }

    fn is_group(&self) -> bool {
        true
    }
}

pub struct ScrollbarElement {
    body: GroupBody,
}

impl ScrollbarElement {
    pub fn construct(
        record: Record<'_>,
        registry: &ElementRegistry,
    ) -> Result<Box<dyn Element>, ElementError> {
        Ok(Box::new(Self {
            body: GroupBody::new(record, registry)?,
        }))
    }
}

impl Element for ScrollbarElement {
    fn name(&self) -> &str {
        &self.body.common.name
    }

    fn calc_area(&self) -> Area {
        self.body.area()
    }

    fn render(
        &self,
        ctx: &mut RenderContext<'_>,
        parent: ParentInfo,
    ) -> Result<ResolvedNode, ElementError> {
        let mut node = self.body.create_self(ctx);
        self.body.render_children(ctx, &mut node)?;

        let handle = find_image_child(&self.body, "Handle");
        if let Some(index) = handle {
            // horizontal band pinned to the bottom edge
            let child = &mut node.children[index];
            child.anchored_position = Vec2::ZERO;
            child.anchor_min = Vec2::new(0.0, 0.0);
            child.anchor_max = Vec2::new(1.0, 0.0);
            child.size_delta = Vec2::ZERO;
        }
        node.control = Control::Scrollbar {
            handle,
            value: 1.0,
            direction: ScrollbarDirection::BottomToTop,
        };

        self.body
            .common
            .finalize(&mut node, self.calc_area(), parent, ctx.canvas_size());
        Ok(node)
    }

    fn is_group(&self) -> bool {
        true
    }
}

pub struct ToggleElement {
    body: GroupBody,
}

impl ToggleElement {
    pub fn construct(
        record: Record<'_>,
        registry: &ElementRegistry,
    ) -> Result<Box<dyn Element>, ElementError> {
        Ok(Box::new(Self {
            body: GroupBody::new(record, registry)?,
        }))
    }
}

impl Element for ToggleElement {
    fn name(&self) -> &str {
        &self.body.common.name
    }

    fn calc_area(&self) -> Area {
        self.body.area()
    }

    fn render(
        &self,
        ctx: &mut RenderContext<'_>,
        parent: ParentInfo,
    ) -> Result<ResolvedNode, ElementError> {
        let mut node = self.body.create_self(ctx);
        self.body.render_children(ctx, &mut node)?;

        let mut target = None;
        let mut graphic = None;
        for (index, child) in self.body.children.iter().enumerate() {
            if !child.is_image() {
                continue;
            }
            if target.is_none() {
                target = Some(index);
            }
            if child.name().to_ascii_lowercase().contains("check") {
                graphic = Some(index);
            }
        }
        node.control = Control::Toggle { target, graphic };

        self.body
            .common
            .finalize(&mut node, self.calc_area(), parent, ctx.canvas_size());
        Ok(node)
    }

    fn is_group(&self) -> bool {
        true
    }
}
