//! Build driver
//!
//! One `Builder` turns one parsed design document into one resolved
//! node tree. The element registry and any post-processors are
//! injected per builder, so concurrent builds with different element
//! sets never share state.

use sprig_document::{DesignDocument, DocumentError, Record};
use sprig_elements::{
    BuildWarning, Element, ElementError, ElementRegistry, FontProvider, ParentInfo,
    PrefabProvider, RenderContext, ResolvedNode, SpriteProvider,
};
use sprig_geometry::Placement;

/// The asset backends one build resolves against
#[derive(Clone, Copy)]
pub struct Providers<'a> {
    pub sprites: &'a dyn SpriteProvider,
    pub fonts: &'a dyn FontProvider,
    pub prefabs: &'a dyn PrefabProvider,
}

/// Hook run over the finished tree, in registration order
pub type PostProcessor = Box<dyn Fn(&mut ResolvedNode) + Send + Sync>;

/// A completed build: the resolved tree plus every warning collected
/// along the way. Warnings never abort a build.
#[derive(Debug)]
pub struct BuildOutput {
    pub root: ResolvedNode,
    pub warnings: Vec<BuildWarning>,
}

/// Anything that aborts a build
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Element(#[from] ElementError),
}

pub struct Builder {
    registry: ElementRegistry,
    post_processors: Vec<PostProcessor>,
}

impl Builder {
    /// Builder with the builtin element set and no post-processors.
    pub fn new() -> Self {
        Self {
            registry: ElementRegistry::with_builtins(),
            post_processors: Vec::new(),
        }
    }

    /// Register an element constructor for a `type` tag, replacing any
    /// builtin under the same tag.
    pub fn register<F>(&mut self, tag: impl Into<String>, constructor: F)
    where
        F: for<'a> Fn(Record<'a>, &ElementRegistry) -> Result<Box<dyn Element>, ElementError>
            + Send
            + Sync
            + 'static,
    {
        self.registry.register(tag, constructor);
    }

    /// Add a hook that runs over the finished tree. Hooks run in
    /// registration order, after resolution and before the output is
    /// returned.
    pub fn add_post_processor<F>(&mut self, hook: F)
    where
        F: Fn(&mut ResolvedNode) + Send + Sync + 'static,
    {
        self.post_processors.push(Box::new(hook));
    }

    /// Parse and build in one step.
    pub fn build_str(&self, text: &str, providers: Providers<'_>) -> Result<BuildOutput, BuildError> {
        let document = DesignDocument::parse(text)?;
        self.build(&document, providers)
    }

    /// Resolve a parsed document into a node tree.
    pub fn build(
        &self,
        document: &DesignDocument,
        providers: Providers<'_>,
    ) -> Result<BuildOutput, BuildError> {
        let canvas = document.canvas();
        let placement = Placement::new(canvas.image_size, canvas.canvas_size, canvas.base_position);

        let root = self.registry.generate(document.root())?;

        let mut ctx = RenderContext::new(
            &placement,
            providers.sprites,
            providers.fonts,
            providers.prefabs,
        );
        let mut tree = ctx.render_child(root.as_ref(), ParentInfo::none())?;
        let warnings = ctx.into_warnings();

        for hook in &self.post_processors {
            hook(&mut tree);
        }

        tracing::debug!(
            nodes = tree.count(),
            warnings = warnings.len(),
            "Resolved document"
        );

        Ok(BuildOutput {
            root: tree,
            warnings,
        })
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}
