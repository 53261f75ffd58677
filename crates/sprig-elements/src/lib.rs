//! Sprig Elements
//!
//! The layout resolution engine: a polymorphic element tree built from
//! design records, resolved in two passes. Construction walks the
//! records top-down, building each variant and caching child-union
//! areas bottom-up; rendering walks the finished tree top-down,
//! producing anchored `ResolvedNode`s and applying stretch before pivot
//! at every node.
//!
//! Asset lookups go through injected providers; the engine itself does
//! no I/O. Missing sprites and prefabs degrade to warnings, missing
//! fonts abort the build.

mod button;
mod context;
mod element;
mod error;
mod group;
mod image;
mod list;
mod node;
mod prefab;
mod providers;
mod registry;
mod text;
mod widgets;

pub use button::{ButtonElement, MaskElement};
pub use context::RenderContext;
pub use element::{Element, ElementCommon, ParentInfo, PivotSpec};
pub use error::{BuildWarning, ElementError, ElementErrorKind, NodePath, WarningKind};
pub use group::{GroupElement, NullElement, RootElement};
pub use image::ImageElement;
pub use list::ListElement;
pub use node::{
    Control, Gradient, ImageSource, ImageVisual, Orientation, ResolvedNode, Rgba,
    ScrollbarDirection, Shadow, Stroke, TextAlign, TextVisual, Visual, WrapMode,
};
pub use prefab::PrefabElement;
pub use providers::{
    FontHandle, FontInfo, FontProvider, PrefabProvider, PrefabTemplate, SliceBorder, SpriteAsset,
    SpriteHandle, SpriteProvider, StaticFontProvider, StaticPrefabProvider, StaticSpriteProvider,
    TextureHandle,
};
pub use registry::ElementRegistry;
pub use text::TextElement;
pub use widgets::{ScrollbarElement, SliderElement, ToggleElement};
