//! Integration tests - Full pipeline from document text to node tree
//!
//! Tests the complete workflow: JSON → DesignDocument → elements → ResolvedNode

use serde_json::{json, Value};
use sprig_engine::elements::{
    Control, ElementErrorKind, NullElement, PrefabTemplate, StaticFontProvider,
    StaticPrefabProvider, StaticSpriteProvider, Visual, WarningKind,
};
use sprig_engine::geometry::Vec2;
use sprig_engine::{BuildError, Builder, DocumentError, Providers, ResolvedNode};

// ============================================================================
// FIXTURES
// ============================================================================

/// Wrap a root record in a full document. Canvas and image are both
/// 960x640 with the base at the canvas center, so an element centered
/// at (480, 320) resolves to position (0, 0).
fn document(root: Value) -> String {
    json!({
        "info": {
            "version": "0.6.0",
            "canvas": {
                "image": { "w": 960, "h": 640 },
                "size": { "w": 960, "h": 640 },
                "base": { "x": 480, "y": 320 }
            }
        },
        "root": root
    })
    .to_string()
}

struct Assets {
    sprites: StaticSpriteProvider,
    fonts: StaticFontProvider,
    prefabs: StaticPrefabProvider,
}

impl Assets {
    fn new() -> Self {
        let mut sprites = StaticSpriteProvider::new();
        sprites.insert_sprite("icon", Vec2::new(32.0, 32.0));
        sprites.insert_sprite("panel_bg", Vec2::new(64.0, 64.0));

        let mut fonts = StaticFontProvider::new();
        fonts.insert_plain("NotoSans");

        Self {
            sprites,
            fonts,
            prefabs: StaticPrefabProvider::new(),
        }
    }

    fn providers(&self) -> Providers<'_> {
        Providers {
            sprites: &self.sprites,
            fonts: &self.fonts,
            prefabs: &self.prefabs,
        }
    }
}

fn image(name: &str, sprite: &str, x: f32, y: f32, w: f32, h: f32) -> Value {
    json!({
        "type": "Image", "name": name, "image": sprite, "imageName": sprite,
        "opacity": 100.0, "x": x, "y": y, "w": w, "h": h
    })
}

// ============================================================================
// FULL PIPELINE TESTS
// ============================================================================

#[test]
fn test_document_to_tree_basic() {
    let text = document(json!({
        "type": "Root", "name": "Screen",
        "elements": [
            { "type": "Group", "name": "Panel", "elements": [
                image("Icon", "icon", 430.0, 280.0, 100.0, 80.0),
                { "type": "Text", "name": "Label", "text": "Play",
                  "font": "NotoSans", "size": 12.7, "align": "center",
                  "color": "ffcc00",
                  "x": 430.0, "y": 360.0, "w": 100.0, "h": 20.0 }
            ]}
        ]
    }));

    let assets = Assets::new();
    let output = Builder::new()
        .build_str(&text, assets.providers())
        .unwrap();

    assert!(output.warnings.is_empty());
    assert_eq!(output.root.name, "Screen");
    // Screen, Panel, Icon, Label
    assert_eq!(output.root.count(), 4);

    // the root is fully stretched over the canvas
    assert_eq!(output.root.anchor_min, Vec2::ZERO);
    assert_eq!(output.root.anchor_max, Vec2::ONE);
    assert_eq!(output.root.size_delta, Vec2::ZERO);

    // an element centered on the base lands at the origin
    let icon = output.root.find("Icon").expect("icon node");
    assert_eq!(icon.anchored_position, Vec2::ZERO);
    assert_eq!(icon.size_delta, Vec2::new(100.0, 80.0));

    let label = output.root.find("Label").expect("label node");
    match &label.visual {
        Visual::Text(text) => {
            assert_eq!(text.text, "Play");
            assert_eq!(text.font.id, "NotoSans");
            // 12.7 rounds to 13
            assert_eq!(text.font_size, 13);
        }
        other => panic!("unexpected visual {other:?}"),
    }
}

#[test]
fn test_sibling_order_reversed_at_every_level() {
    let text = document(json!({
        "type": "Root", "name": "Screen",
        "elements": [
            { "type": "Null", "name": "A" },
            { "type": "Null", "name": "B" },
            { "type": "Null", "name": "C" }
        ]
    }));

    let assets = Assets::new();
    let output = Builder::new()
        .build_str(&text, assets.providers())
        .unwrap();

    let names: Vec<&str> = output
        .root
        .children
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, ["C", "B", "A"]);
}

#[test]
fn test_stretch_against_canvas() {
    // Panel union is (10,20)-(950,620): size (940, 600) against the
    // 960x640 canvas gives a corrective delta of (-20, -40)
    let text = document(json!({
        "type": "Root", "name": "Screen",
        "elements": [
            { "type": "Group", "name": "Panel", "stretchxy": true, "elements": [
                image("BG", "panel_bg", 10.0, 20.0, 940.0, 600.0)
            ]}
        ]
    }));

    let assets = Assets::new();
    let output = Builder::new()
        .build_str(&text, assets.providers())
        .unwrap();

    let panel = output.root.find("Panel").expect("panel node");
    assert_eq!(panel.anchor_min, Vec2::ZERO);
    assert_eq!(panel.anchor_max, Vec2::ONE);
    assert_eq!(panel.size_delta, Vec2::new(-20.0, -40.0));
}

#[test]
fn test_bottom_pivot_compensated_under_root() {
    // Group centered at (480, 600): position (0, -280); the bottom
    // pivot under the root shifts it up by half the canvas height
    let text = document(json!({
        "type": "Root", "name": "Screen",
        "elements": [
            { "type": "Group", "name": "Dock", "pivot": "bottom", "elements": [
                image("BG", "panel_bg", 430.0, 560.0, 100.0, 80.0)
            ]}
        ]
    }));

    let assets = Assets::new();
    let output = Builder::new()
        .build_str(&text, assets.providers())
        .unwrap();

    let dock = output.root.find("Dock").expect("dock node");
    assert_eq!(dock.anchor_min.y, 0.0);
    assert_eq!(dock.anchor_max.y, 0.0);
    assert_eq!(dock.size_delta.y, 80.0);
    assert_eq!(dock.anchored_position, Vec2::new(0.0, -280.0 + 320.0));
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[test]
fn test_unsupported_version_aborts() {
    let text = document(json!({ "type": "Root", "name": "Screen", "elements": [] }))
        .replace("0.6.0", "0.4.2");

    let assets = Assets::new();
    let err = Builder::new()
        .build_str(&text, assets.providers())
        .unwrap_err();

    assert!(matches!(
        err,
        BuildError::Document(DocumentError::UnsupportedVersion(v)) if v == "0.4.2"
    ));
}

#[test]
fn test_invalid_json_aborts() {
    let assets = Assets::new();
    let err = Builder::new()
        .build_str("{ not json", assets.providers())
        .unwrap_err();

    assert!(matches!(err, BuildError::Document(DocumentError::Json(_))));
}

#[test]
fn test_missing_font_aborts_with_path() {
    let text = document(json!({
        "type": "Root", "name": "Screen",
        "elements": [
            { "type": "Group", "name": "Box", "elements": [
                { "type": "Text", "name": "Label", "text": "x",
                  "font": "NoSuchFont", "size": 12.0, "align": "left",
                  "color": "ffffff", "x": 0.0, "y": 0.0, "w": 10.0, "h": 10.0 }
            ]}
        ]
    }));

    let assets = Assets::new();
    let err = Builder::new()
        .build_str(&text, assets.providers())
        .unwrap_err();

    let BuildError::Element(err) = err else {
        panic!("expected element error, got {err:?}");
    };
    assert!(matches!(
        err.kind,
        ElementErrorKind::FontNotFound(ref font) if font == "NoSuchFont"
    ));
    assert_eq!(err.path.to_string(), "Screen/Box/Label");
}

#[test]
fn test_missing_assets_warn_but_build_completes() {
    let text = document(json!({
        "type": "Root", "name": "Screen",
        "elements": [
            image("Ghost", "no_such_sprite", 0.0, 0.0, 10.0, 10.0),
            { "type": "Prefab", "name": "Card", "prefabName": "no_such_prefab",
              "x": 0.0, "y": 0.0, "w": 50.0, "h": 50.0 }
        ]
    }));

    let assets = Assets::new();
    let output = Builder::new()
        .build_str(&text, assets.providers())
        .unwrap();

    assert_eq!(output.warnings.len(), 2);
    // prefab renders first (reversed order), sprite second
    assert!(matches!(
        output.warnings[0].kind,
        WarningKind::PrefabNotFound(ref name) if name == "no_such_prefab"
    ));
    assert!(matches!(
        output.warnings[1].kind,
        WarningKind::SpriteNotFound { ref sprite, .. } if sprite == "no_such_sprite"
    ));
    assert_eq!(output.warnings[1].path.to_string(), "Screen/Ghost");

    // both nodes exist regardless
    assert!(output.root.find("Ghost").is_some());
    assert!(output.root.find("Card").is_some());
}

// ============================================================================
// EXTENSION POINTS
// ============================================================================

#[test]
fn test_post_processors_run_in_order() {
    let text = document(json!({
        "type": "Root", "name": "Screen",
        "elements": [ { "type": "Null", "name": "A" } ]
    }));

    let mut builder = Builder::new();
    builder.add_post_processor(|root: &mut ResolvedNode| {
        root.visit_mut(&mut |node| node.name.push('!'));
    });
    builder.add_post_processor(|root: &mut ResolvedNode| {
        root.name.push('?');
    });

    let assets = Assets::new();
    let output = builder.build_str(&text, assets.providers()).unwrap();

    assert_eq!(output.root.name, "Screen!?");
    assert_eq!(output.root.children[0].name, "A!");
}

#[test]
fn test_custom_element_tag() {
    let text = document(json!({
        "type": "Root", "name": "Screen",
        "elements": [ { "type": "Spacer", "name": "Gap" } ]
    }));

    let assets = Assets::new();

    // unknown without registration
    let err = Builder::new()
        .build_str(&text, assets.providers())
        .unwrap_err();
    let BuildError::Element(err) = err else {
        panic!("expected element error, got {err:?}");
    };
    assert!(matches!(
        err.kind,
        ElementErrorKind::UnknownElementType(ref tag) if tag == "Spacer"
    ));

    // registered per-builder, without touching any other builder
    let mut builder = Builder::new();
    builder.register("Spacer", NullElement::construct);
    let output = builder.build_str(&text, assets.providers()).unwrap();
    assert_eq!(output.root.children[0].name, "Gap");
}

#[test]
fn test_prefab_template_instantiated_through_build() {
    let mut template_root = ResolvedNode::new("Widget");
    template_root.children.push(ResolvedNode::new("Slot"));

    let mut assets = Assets::new();
    assets.prefabs.insert(
        "card",
        PrefabTemplate {
            root: template_root,
            slot: Some("Slot".to_string()),
        },
    );

    let text = document(json!({
        "type": "Root", "name": "Screen",
        "elements": [
            { "type": "Prefab", "name": "Card0", "prefabName": "card",
              "x": 430.0, "y": 280.0, "w": 100.0, "h": 80.0,
              "elements": [
                  { "type": "Group", "name": "Body", "elements": [
                      image("Icon", "icon", 440.0, 290.0, 32.0, 32.0)
                  ]}
              ]}
        ]
    }));

    let output = Builder::new()
        .build_str(&text, assets.providers())
        .unwrap();

    assert!(output.warnings.is_empty());
    let card = output.root.find("Card0").expect("card node");
    assert_eq!(card.size_delta, Vec2::new(100.0, 80.0));
    let slot = card.find("Slot").expect("slot node");
    assert_eq!(slot.children.len(), 1);
    assert_eq!(slot.children[0].name, "Body");
}

// ============================================================================
// CONTROLS THROUGH THE FULL PIPELINE
// ============================================================================

#[test]
fn test_scroll_list_resolves_to_viewport_and_content() {
    let text = document(json!({
        "type": "Root", "name": "Screen",
        "elements": [
            { "type": "List", "name": "Menu", "scroll": "vertical",
              "x": 400.0, "y": 100.0, "w": 160.0, "h": 400.0,
              "elements": [
                  { "type": "Group", "name": "Row1", "elements": [
                      image("bg", "icon", 400.0, 140.0, 160.0, 60.0)
                  ]},
                  { "type": "Group", "name": "Row0", "elements": [
                      image("bg", "icon", 400.0, 100.0, 160.0, 40.0)
                  ]}
              ]}
        ]
    }));

    let assets = Assets::new();
    let output = Builder::new()
        .build_str(&text, assets.providers())
        .unwrap();

    let menu = output.root.find("Menu").expect("menu node");
    assert!(matches!(menu.control, Control::ScrollView { .. }));
    assert_eq!(menu.size_delta, Vec2::new(160.0, 400.0));

    let content = menu.find("Content").expect("content node");
    assert!(matches!(content.control, Control::Stack { .. }));
    assert_eq!(content.children[0].name, "Row0");
    assert_eq!(content.children[0].anchored_position.y, -20.0);
    assert_eq!(content.children[1].name, "Row1");
    assert_eq!(content.children[1].anchored_position.y, -70.0);
}
