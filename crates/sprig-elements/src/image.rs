//! Image element

use sprig_document::Record;
use sprig_geometry::Area;

use crate::context::RenderContext;
use crate::element::{Element, ElementCommon, ParentInfo};
use crate::error::{ElementError, WarningKind};
use crate::node::{ImageSource, ImageVisual, ResolvedNode, Rgba, Visual};
use crate::providers::SpriteAsset;
use crate::registry::ElementRegistry;

pub struct ImageElement {
    common: ElementCommon,
    sprite_name: String,
    image_name: String,
    slice: String,
    /// 0-100 scale in the source data
    opacity: f32,
}

impl ImageElement {
    pub fn construct(
        record: Record<'_>,
        _registry: &ElementRegistry,
    ) -> Result<Box<dyn Element>, ElementError> {
        Ok(Box::new(Self {
            common: ElementCommon::from_record(record),
            sprite_name: record.str("image").to_string(),
            image_name: record.str("imageName").to_string(),
            slice: record.str("slice").to_string(),
            opacity: record.f32("opacity"),
        }))
    }
}

impl Element for ImageElement {
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
        let mut node = ResolvedNode::new(&self.common.name);
        node.anchored_position = ctx
            .placement()
            .calc_position(self.common.canvas_position, self.common.size_delta);
        node.size_delta = self.common.size_delta;
        node.visual = resolve_image_visual(
            ctx,
            &self.sprite_name,
            &self.image_name,
            &self.slice,
            self.opacity,
            false,
        );

        self.common
            .finalize(&mut node, self.calc_area(), parent, ctx.canvas_size());
        Ok(node)
    }

    fn is_image(&self) -> bool {
        true
    }
}

/// Resolve a sprite lookup into an image visual. A failed lookup is a
/// warning, not an error: the node renders empty and the walk goes on.
pub(crate) fn resolve_image_visual(
    ctx: &mut RenderContext<'_>,
    sprite_name: &str,
    image_name: &str,
    slice: &str,
    opacity: f32,
    raycast_target: bool,
) -> Visual {
    let color = Rgba::WHITE.with_alpha(opacity / 100.0);
    match ctx.sprites().resolve(sprite_name, image_name, slice) {
        Some(SpriteAsset::Sprite(handle)) => Visual::Image(ImageVisual {
            source: ImageSource::Sprite {
                handle,
                sliced: !slice.is_empty(),
            },
            color,
            raycast_target,
            maskable: false,
        }),
        Some(SpriteAsset::RawTexture(handle)) => Visual::Image(ImageVisual {
            source: ImageSource::RawTexture { handle },
            color,
            raycast_target,
            maskable: false,
        }),
        None => {
            ctx.warn(WarningKind::SpriteNotFound {
                sprite: sprite_name.to_string(),
                image: image_name.to_string(),
            });
            Visual::None
        }
    }
}
