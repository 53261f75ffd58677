//! List element
//!
//! A List resolves to a scroll container: a clipped viewport wrapping a
//! "Content" node that stacks the item children along the scroll axis.
//! The first Image-typed child (if any) supplies the viewport's mask
//! shape and is never part of the scrollable content; without one, a
//! transparent filler stands in.

use sprig_document::Record;
use sprig_geometry::{Area, Vec2};

use crate::context::RenderContext;
use crate::element::{Element, ParentInfo};
use crate::error::{ElementError, ElementErrorKind};
use crate::group::GroupBody;
use crate::node::{Control, ImageSource, ImageVisual, Orientation, ResolvedNode, Rgba, Visual};
use crate::registry::ElementRegistry;

pub struct ListElement {
    body: GroupBody,
    orientation: Option<Orientation>,
    mask_image: Option<Box<dyn Element>>,
}

impl ListElement {
    pub fn construct(
        record: Record<'_>,
        registry: &ElementRegistry,
    ) -> Result<Box<dyn Element>, ElementError> {
        let mut body = GroupBody::new(record, registry)?;

        let orientation = match record.str("scroll") {
            "vertical" => Some(Orientation::Vertical),
            "horizontal" => Some(Orientation::Horizontal),
            _ => None,
        };

        // pull the mask image out before the item check
        let mask_image = body
            .children
            .iter()
            .position(|child| child.is_image())
            .map(|index| body.children.remove(index));

        // every remaining child is an item template and must be a group
        for child in &body.children {
            if !child.is_group() {
                return Err(ElementError::new(ElementErrorKind::NotAGroup {
                    child: child.name().to_string(),
                })
                .at(&body.common.name));
            }
        }

        Ok(Box::new(Self {
            body,
            orientation,
            mask_image,
        }))
    }

    fn mask_visual(
        &self,
        ctx: &mut RenderContext<'_>,
        parent: ParentInfo,
    ) -> Result<Visual, ElementError> {
        let visual = match &self.mask_image {
            Some(image) => ctx.render_child(image.as_ref(), parent)?.visual,
            None => Visual::Image(ImageVisual {
                source: ImageSource::Filler,
                color: Rgba::TRANSPARENT,
                raycast_target: false,
                maskable: false,
            }),
        };

        // the graphic only shapes the clip; it must not be seen
        Ok(match visual {
            Visual::Image(mut image) => {
                image.color = Rgba::TRANSPARENT;
                Visual::Image(image)
            }
            other => other,
        })
    }
}

impl Element for ListElement {
    fn name(&self) -> &str {
        &self.body.common.name
    }

    /// The authored box, not the child union: the viewport's size is
    /// what the designer drew, the content may exceed it.
    fn calc_area(&self) -> Area {
        Area::from_position_and_size(self.body.common.canvas_position, self.body.common.size_delta)
    }

    fn render(
        &self,
        ctx: &mut RenderContext<'_>,
        parent: ParentInfo,
    ) -> Result<ResolvedNode, ElementError> {
        let common = &self.body.common;

        let mut node = ResolvedNode::new(&common.name);
        node.size_delta = common.size_delta;
        node.anchored_position = ctx
            .placement()
            .calc_position(common.canvas_position, common.size_delta);
        node.control = Control::ScrollView {
            orientation: self.orientation,
        };

        let child_parent = ParentInfo::new(self.calc_area().size(), false);
        node.visual = self.mask_visual(ctx, child_parent)?;

        // content mirrors the viewport geometry, locally centered
        let mut content = ResolvedNode::new("Content");
        content.size_delta = node.size_delta;
        if let Some(orientation) = self.orientation {
            content.control = Control::Stack { orientation };
        }

        let mut offset = 0.0;
        for item in &self.body.children {
            let mut rendered = ctx.render_child(item.as_ref(), child_parent)?;
            match self.orientation {
                Some(Orientation::Vertical) => {
                    // stack downward from the top edge, zero gap
                    let height = rendered.size_delta.y;
                    rendered.anchor_min = Vec2::new(0.5, 1.0);
                    rendered.anchor_max = Vec2::new(0.5, 1.0);
                    rendered.anchored_position =
                        Vec2::new(rendered.anchored_position.x, -(offset + height / 2.0));
                    offset += height;
                }
                Some(Orientation::Horizontal) => {
                    // stack rightward from the left edge, zero gap
                    let width = rendered.size_delta.x;
                    rendered.anchor_min = Vec2::new(0.0, 0.5);
                    rendered.anchor_max = Vec2::new(0.0, 0.5);
                    rendered.anchored_position =
                        Vec2::new(offset + width / 2.0, rendered.anchored_position.y);
                    offset += width;
                }
                None => {}
            }
            content.children.push(rendered);
        }

        node.children.push(content);

        self.body
            .common
            .finalize(&mut node, self.calc_area(), parent, ctx.canvas_size());
        Ok(node)
    }

    fn is_group(&self) -> bool {
        true
    }
}
