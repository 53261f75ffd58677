//! Prefab element
//!
//! References an externally supplied node template by name. The
//! instantiated template is renamed to this element and positioned from
//! the authored box (not the child union). When the template designates
//! a slot sub-node, this element's children render into the slot;
//! otherwise they land at the template's top level. A missing prefab is
//! a warning and yields a placeholder, never a failed build.

use sprig_document::Record;
use sprig_geometry::Area;

use crate::context::RenderContext;
use crate::element::{Element, ParentInfo};
use crate::error::{ElementError, WarningKind};
use crate::group::GroupBody;
use crate::node::ResolvedNode;
use crate::registry::ElementRegistry;

pub struct PrefabElement {
    body: GroupBody,
    prefab_name: String,
}

impl PrefabElement {
    pub fn construct(
        record: Record<'_>,
        registry: &ElementRegistry,
    ) -> Result<Box<dyn Element>, ElementError> {
        Ok(Box::new(Self {
            body: GroupBody::new(record, registry)?,
            prefab_name: record.str("prefabName").to_string(),
        }))
    }
}

impl Element for PrefabElement {
    fn name(&self) -> &str {
        &self.body.common.name
    }

    fn calc_area(&self) -> Area {
        Area::from_position_and_size(self.body.common.canvas_position, self.body.common.size_delta)
    }

    fn render(
        &self,
        ctx: &mut RenderContext<'_>,
        parent: ParentInfo,
    ) -> Result<ResolvedNode, ElementError> {
        let template = ctx.prefabs().resolve(&self.prefab_name);
        let (mut node, slot) = match template {
            Some(template) => (template.root, template.slot),
            None => {
                ctx.warn(WarningKind::PrefabNotFound(self.prefab_name.clone()));
                (ResolvedNode::new(""), None)
            }
        };
        node.name = self.body.common.name.clone();

        node.size_delta = self.body.common.size_delta;
        node.anchored_position = ctx
            .placement()
            .calc_position(self.body.common.canvas_position, self.body.common.size_delta);

        let child_parent = ParentInfo::new(self.calc_area().size(), false);
        let mut rendered = Vec::with_capacity(self.body.children.len());
        for child in &self.body.children {
            rendered.push(ctx.render_child(child.as_ref(), child_parent)?);
        }

        match slot.as_deref() {
            Some(slot_name) if node.find(slot_name).is_some() => {
                if let Some(slot_node) = node.find_mut(slot_name) {
                    slot_node.children.append(&mut rendered);
                }
            }
            _ => node.children.append(&mut rendered),
        }

        self.body
            .common
            .finalize(&mut node, self.calc_area(), parent, ctx.canvas_size());
        Ok(node)
    }

    fn is_group(&self) -> bool {
        true
    }
}
