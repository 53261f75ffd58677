//! Asset manifest
//!
//! A JSON description of the sprites and fonts a document may
//! reference, loaded into the in-memory providers. Prefab templates
//! have no offline representation; prefab references resolve to
//! placeholders and surface as warnings.
//!
//! ```json
//! {
//!     "sprites": {
//!         "btn_bg": { "w": 64, "h": 24, "border": { "left": 8, "bottom": 8, "right": 8, "top": 8 } }
//!     },
//!     "textures": {
//!         "splash": { "w": 960, "h": 640 }
//!     },
//!     "fonts": {
//!         "NotoSans": { "bold": false }
//!     }
//! }
//! ```

use std::collections::HashMap;

use serde::Deserialize;
use sprig_engine::elements::{
    FontHandle, FontInfo, SliceBorder, SpriteAsset, SpriteHandle, StaticFontProvider,
    StaticSpriteProvider, TextureHandle,
};
use sprig_engine::geometry::Vec2;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    sprites: HashMap<String, SpriteEntry>,
    #[serde(default)]
    textures: HashMap<String, TextureEntry>,
    #[serde(default)]
    fonts: HashMap<String, FontEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SpriteEntry {
    w: f32,
    h: f32,
    border: Option<BorderEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TextureEntry {
    w: f32,
    h: f32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FontEntry {
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    extra_w: f32,
    #[serde(default)]
    extra_h: f32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BorderEntry {
    left: f32,
    bottom: f32,
    right: f32,
    top: f32,
}

impl Manifest {
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Load the manifest entries into in-memory providers.
    pub fn into_providers(self) -> (StaticSpriteProvider, StaticFontProvider) {
        let mut sprites = StaticSpriteProvider::new();
        for (name, entry) in self.sprites {
            let handle = SpriteHandle {
                id: name.clone(),
                native_size: Vec2::new(entry.w, entry.h),
                border: entry.border.map(|b| SliceBorder {
                    left: b.left,
                    bottom: b.bottom,
                    right: b.right,
                    top: b.top,
                }),
            };
            sprites.insert(name, SpriteAsset::Sprite(handle));
        }
        for (name, entry) in self.textures {
            let handle = TextureHandle {
                id: name.clone(),
                native_size: Vec2::new(entry.w, entry.h),
            };
            sprites.insert(name, SpriteAsset::RawTexture(handle));
        }

        let mut fonts = StaticFontProvider::new();
        for (name, entry) in self.fonts {
            fonts.insert(
                name.clone(),
                FontInfo {
                    handle: FontHandle { id: name },
                    bold: entry.bold,
                    size_delta: Vec2::new(entry.extra_w, entry.extra_h),
                },
            );
        }

        (sprites, fonts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprig_engine::elements::{FontProvider, SpriteProvider};

    #[test]
    fn test_parse_and_resolve() {
        let manifest = Manifest::parse(
            r#"{
                "sprites": {
                    "btn_bg": { "w": 64, "h": 24, "border": { "left": 8, "bottom": 8, "right": 8, "top": 8 } },
                    "icon": { "w": 32, "h": 32 }
                },
                "textures": {
                    "splash": { "w": 960, "h": 640 }
                },
                "fonts": {
                    "NotoSans": { "bold": true, "extra_w": 2.0 }
                }
            }"#,
        )
        .unwrap();

        let (sprites, fonts) = manifest.into_providers();

        match sprites.resolve("btn_bg", "", "9").unwrap() {
            SpriteAsset::Sprite(handle) => {
                assert_eq!(handle.native_size, Vec2::new(64.0, 24.0));
                assert_eq!(handle.border.unwrap().left, 8.0);
            }
            other => panic!("unexpected asset {other:?}"),
        }
        assert!(matches!(
            sprites.resolve("splash", "", "").unwrap(),
            SpriteAsset::RawTexture(_)
        ));
        assert!(sprites.resolve("missing", "", "").is_none());

        let font = fonts.resolve("NotoSans").unwrap();
        assert!(font.bold);
        assert_eq!(font.size_delta, Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = Manifest::parse("{}").unwrap();
        let (sprites, fonts) = manifest.into_providers();

        assert!(sprites.resolve("anything", "", "").is_none());
        assert!(fonts.resolve("anything").is_none());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(Manifest::parse(r#"{ "atlases": {} }"#).is_err());
    }
}
