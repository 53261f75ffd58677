//! Group-family elements: Group, Root, Null
//!
//! Group construction is where the tree takes shape: children are built
//! recursively, the child list is reversed (the document lists children
//! in back-to-front traversal order and sibling draw order is derived
//! from the reverse), and the union area of all children is computed
//! once and cached.

use sprig_document::Record;
use sprig_geometry::{Area, Vec2};

use crate::context::RenderContext;
use crate::element::{Element, ElementCommon, ParentInfo};
use crate::error::ElementError;
use crate::node::ResolvedNode;
use crate::registry::ElementRegistry;

/// Shared body for every element that owns a child list
pub(crate) struct GroupBody {
    pub common: ElementCommon,
    pub children: Vec<Box<dyn Element>>,
    area: Area,
}

impl GroupBody {
    pub fn new(record: Record<'_>, registry: &ElementRegistry) -> Result<Self, ElementError> {
        let common = ElementCommon::from_record(record);

        let mut children = Vec::new();
        for child in record.elements() {
            let element = registry
                .generate(child)
                .map_err(|err| err.at(&common.name))?;
            children.push(element);
        }
        children.reverse();

        let mut area = Area::none();
        for child in &children {
            area.merge(&child.calc_area());
        }

        Ok(Self {
            common,
            children,
            area,
        })
    }

    /// Cached union of the children's areas.
    pub fn area(&self) -> Area {
        self.area
    }

    /// Node whose geometry comes from the cached child union.
    pub fn create_self(&self, ctx: &RenderContext<'_>) -> ResolvedNode {
        let mut node = ResolvedNode::new(&self.common.name);
        node.size_delta = self.area.size();
        node.anchored_position = ctx
            .placement()
            .calc_position(self.area.min(), self.area.size());
        node
    }

    /// Render every child and attach it, in order.
    pub fn render_children(
        &self,
        ctx: &mut RenderContext<'_>,
        node: &mut ResolvedNode,
    ) -> Result<(), ElementError> {
        let parent = ParentInfo::new(self.area.size(), false);
        for child in &self.children {
            node.children.push(ctx.render_child(child.as_ref(), parent)?);
        }
        Ok(())
    }
}

/// Plain container
pub struct GroupElement {
    body: GroupBody,
}

impl GroupElement {
    pub fn construct(
        record: Record<'_>,
        registry: &ElementRegistry,
    ) -> Result<Box<dyn Element>, ElementError> {
        Ok(Box::new(Self {
            body: GroupBody::new(record, registry)?,
        }))
    }
}

impl Element for GroupElement {
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
        self.body
            .common
            .finalize(&mut node, self.calc_area(), parent, ctx.canvas_size());
        Ok(node)
    }

    fn is_group(&self) -> bool {
        true
    }
}

/// Document root: canvas-sized, centered, always fully stretched
pub struct RootElement {
    body: GroupBody,
}

impl RootElement {
    pub fn construct(
        record: Record<'_>,
        registry: &ElementRegistry,
    ) -> Result<Box<dyn Element>, ElementError> {
        let mut body = GroupBody::new(record, registry)?;
        // full stretch regardless of authored flags
        body.common.stretch_x = true;
        body.common.stretch_y = true;
        Ok(Box::new(Self { body }))
    }
}

impl Element for RootElement {
    fn name(&self) -> &str {
        &self.body.common.name
    }

    /// The root's area depends on the canvas, which is only known at
    /// render time; it is never merged into any ancestor union.
    fn calc_area(&self) -> Area {
        Area::none()
    }

    fn render(
        &self,
        ctx: &mut RenderContext<'_>,
        parent: ParentInfo,
    ) -> Result<ResolvedNode, ElementError> {
        let canvas = ctx.canvas_size();
        let own_area = Area::new(-canvas / 2.0, canvas / 2.0);

        let mut node = ResolvedNode::new(&self.body.common.name);
        node.size_delta = canvas;
        node.anchored_position = Vec2::ZERO;

        let child_parent = ParentInfo::new(own_area.size(), true);
        for child in &self.body.children {
            node.children.push(ctx.render_child(child.as_ref(), child_parent)?);
        }

        self.body
            .common
            .finalize(&mut node, own_area, parent, canvas);
        Ok(node)
    }

    fn is_group(&self) -> bool {
        true
    }
}

/// Empty anchored placeholder
pub struct NullElement {
    common: ElementCommon,
}

impl NullElement {
    pub fn construct(
        record: Record<'_>,
        _registry: &ElementRegistry,
    ) -> Result<Box<dyn Element>, ElementError> {
        Ok(Box::new(Self {
            common: ElementCommon::from_record(record),
        }))
    }
}

impl Element for NullElement {
    fn name(&self) -> &str {
        &self.common.name
    }

    fn calc_area(&self) -> Area {
        Area::none()
    }

    fn render(
        &self,
        ctx: &mut RenderContext<'_>,
        parent: ParentInfo,
    ) -> Result<ResolvedNode, ElementError> {
        let mut node = ResolvedNode::new(&self.common.name);
        self.common
            .finalize(&mut node, Area::none(), parent, ctx.canvas_size());
        Ok(node)
    }
}
