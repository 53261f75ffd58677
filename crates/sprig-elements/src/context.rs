//! Render context
//!
//! Per-build state shared by every node during resolution: the coordinate
//! mapper, the injected asset providers, the warning sink, and the path
//! stack used to attribute errors and warnings to nodes.

use sprig_geometry::{Placement, Vec2};

use crate::element::{Element, ParentInfo};
use crate::error::{BuildWarning, ElementError, ElementErrorKind, NodePath, WarningKind};
use crate::node::ResolvedNode;
use crate::providers::{FontProvider, PrefabProvider, SpriteProvider};

pub struct RenderContext<'a> {
    placement: &'a Placement,
    sprites: &'a dyn SpriteProvider,
    fonts: &'a dyn FontProvider,
    prefabs: &'a dyn PrefabProvider,
    warnings: Vec<BuildWarning>,
    path: Vec<String>,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        placement: &'a Placement,
        sprites: &'a dyn SpriteProvider,
        fonts: &'a dyn FontProvider,
        prefabs: &'a dyn PrefabProvider,
    ) -> Self {
        Self {
            placement,
            sprites,
            fonts,
            prefabs,
            warnings: Vec::new(),
            path: Vec::new(),
        }
    }

    pub fn placement(&self) -> &Placement {
        self.placement
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.placement.canvas_size()
    }

    pub fn sprites(&self) -> &dyn SpriteProvider {
        self.sprites
    }

    pub fn fonts(&self) -> &dyn FontProvider {
        self.fonts
    }

    pub fn prefabs(&self) -> &dyn PrefabProvider {
        self.prefabs
    }

    /// Render one element with its name pushed onto the path stack, so
    /// anything it reports is attributed to the right node. All
    /// recursive render calls route through here.
    pub fn render_child(
        &mut self,
        element: &dyn Element,
        parent: ParentInfo,
    ) -> Result<ResolvedNode, ElementError> {
        self.path.push(element.name().to_string());
        let result = element.render(self, parent);
        self.path.pop();
        result
    }

    /// Record a non-fatal warning at the current node.
    pub fn warn(&mut self, kind: WarningKind) {
        let warning = BuildWarning {
            path: self.current_path(),
            kind,
        };
        tracing::warn!("{}", warning);
        self.warnings.push(warning);
    }

    /// Fatal error at the current node.
    pub fn error(&self, kind: ElementErrorKind) -> ElementError {
        ElementError::with_path(kind, self.current_path())
    }

    pub fn current_path(&self) -> NodePath {
        NodePath::from_names(self.path.iter().cloned())
    }

    pub fn into_warnings(self) -> Vec<BuildWarning> {
        self.warnings
    }
}
