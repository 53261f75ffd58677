//! Asset providers
//!
//! The engine performs no I/O of its own: sprites, fonts, and prefab
//! templates come from injected providers. Lookups are synchronous and
//! treated as final; the engine never retries. The `Static*Provider`
//! types are in-memory implementations for tests and offline tooling.

use std::collections::HashMap;

use serde::Serialize;
use sprig_geometry::Vec2;

use crate::node::ResolvedNode;

/// Nine-patch border widths in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SliceBorder {
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
    pub top: f32,
}

/// Handle to a sliced or plain sprite
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpriteHandle {
    pub id: String,
    pub native_size: Vec2,
    pub border: Option<SliceBorder>,
}

/// Handle to a raw (unsliced, unatlased) texture
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextureHandle {
    pub id: String,
    pub native_size: Vec2,
}

/// What a sprite lookup produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SpriteAsset {
    Sprite(SpriteHandle),
    RawTexture(TextureHandle),
}

/// Handle to a font asset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontHandle {
    pub id: String,
}

/// Font lookup result: handle plus per-font layout adjustments
#[derive(Debug, Clone)]
pub struct FontInfo {
    pub handle: FontHandle,
    pub bold: bool,
    /// Added to the authored text box size; some fonts need breathing
    /// room beyond what the exporter measured.
    pub size_delta: Vec2,
}

/// Prefab lookup result: a node template plus an optional slot name.
/// When a slot is named, the referencing element's children render into
/// that sub-node instead of the template's top level.
#[derive(Debug, Clone)]
pub struct PrefabTemplate {
    pub root: ResolvedNode,
    pub slot: Option<String>,
}

/// Resolves sprite names to concrete assets. `slice` is the raw slice
/// token from the record, empty for unsliced images.
pub trait SpriteProvider {
    fn resolve(&self, sprite_name: &str, image_name: &str, slice: &str) -> Option<SpriteAsset>;
}

/// Resolves font names. Implementations may remap names internally
/// (project font substitution lives here, not in the engine).
pub trait FontProvider {
    fn resolve(&self, font_name: &str) -> Option<FontInfo>;
}

/// Resolves prefab names to reusable node templates.
pub trait PrefabProvider {
    fn resolve(&self, prefab_name: &str) -> Option<PrefabTemplate>;
}

/// In-memory sprite provider
#[derive(Debug, Default)]
pub struct StaticSpriteProvider {
    sprites: HashMap<String, SpriteAsset>,
}

impl StaticSpriteProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, asset: SpriteAsset) {
        self.sprites.insert(name.into(), asset);
    }

    /// Register a plain sprite with a native size.
    pub fn insert_sprite(&mut self, name: &str, native_size: Vec2) {
        self.insert(
            name,
            SpriteAsset::Sprite(SpriteHandle {
                id: name.to_string(),
                native_size,
                border: None,
            }),
        );
    }
}

impl SpriteProvider for StaticSpriteProvider {
    fn resolve(&self, sprite_name: &str, _image_name: &str, _slice: &str) -> Option<SpriteAsset> {
        self.sprites.get(sprite_name).cloned()
    }
}

/// In-memory font provider
#[derive(Debug, Default)]
pub struct StaticFontProvider {
    fonts: HashMap<String, FontInfo>,
}

impl StaticFontProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, info: FontInfo) {
        self.fonts.insert(name.into(), info);
    }

    /// Register a font with no layout adjustments.
    pub fn insert_plain(&mut self, name: &str) {
        self.insert(
            name,
            FontInfo {
                handle: FontHandle { id: name.to_string() },
                bold: false,
                size_delta: Vec2::ZERO,
            },
        );
    }
}

impl FontProvider for StaticFontProvider {
    fn resolve(&self, font_name: &str) -> Option<FontInfo> {
        self.fonts.get(font_name).cloned()
    }
}

/// In-memory prefab provider
#[derive(Debug, Default)]
pub struct StaticPrefabProvider {
    prefabs: HashMap<String, PrefabTemplate>,
}

impl StaticPrefabProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, template: PrefabTemplate) {
        self.prefabs.insert(name.into(), template);
    }
}

impl PrefabProvider for StaticPrefabProvider {
    fn resolve(&self, prefab_name: &str) -> Option<PrefabTemplate> {
        self.prefabs.get(prefab_name).cloned()
    }
}
