//! Sprig Design Document
//!
//! Parses the designer-exported layout document (JSON) and exposes it as
//! typed records. A document is `{ info: { version, canvas }, root }`;
//! the version is validated here, before any element is constructed.

mod record;

pub use record::Record;

use serde_json::Value;
use sprig_geometry::Vec2;

/// Document versions this resolver understands
pub const SUPPORTED_VERSIONS: &[&str] = &["0.6.0", "0.6.1"];

/// A parsed, version-validated design document
#[derive(Debug)]
pub struct DesignDocument {
    info: DocumentInfo,
    root: Value,
}

/// Document metadata from the `info` block
#[derive(Debug, Clone)]
pub struct DocumentInfo {
    pub version: String,
    pub canvas: CanvasInfo,
}

/// Canvas metadata: full source-image size, visible canvas size, and the
/// design-space base offset all positions are relative to
#[derive(Debug, Clone, Copy)]
pub struct CanvasInfo {
    pub image_size: Vec2,
    pub canvas_size: Vec2,
    pub base_position: Vec2,
}

impl DesignDocument {
    /// Parse a document from JSON text and validate its version.
    pub fn parse(text: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Build a document from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        let object = value
            .as_object()
            .ok_or(DocumentError::MissingField("document object"))?;

        let info = object
            .get("info")
            .and_then(Value::as_object)
            .ok_or(DocumentError::MissingField("info"))?;
        let version = info
            .get("version")
            .and_then(Value::as_str)
            .ok_or(DocumentError::MissingField("info.version"))?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(DocumentError::UnsupportedVersion(version.to_string()));
        }

        let canvas = info
            .get("canvas")
            .and_then(Value::as_object)
            .ok_or(DocumentError::MissingField("info.canvas"))?;
        let canvas = CanvasInfo {
            image_size: size_of(canvas, "image").ok_or(DocumentError::MissingField("info.canvas.image"))?,
            canvas_size: size_of(canvas, "size").ok_or(DocumentError::MissingField("info.canvas.size"))?,
            base_position: point_of(canvas, "base").ok_or(DocumentError::MissingField("info.canvas.base"))?,
        };

        let root = object
            .get("root")
            .cloned()
            .filter(Value::is_object)
            .ok_or(DocumentError::MissingField("root"))?;

        tracing::debug!("Parsed design document, version {}", version);

        Ok(Self {
            info: DocumentInfo {
                version: version.to_string(),
                canvas,
            },
            root,
        })
    }

    pub fn info(&self) -> &DocumentInfo {
        &self.info
    }

    pub fn canvas(&self) -> CanvasInfo {
        self.info.canvas
    }

    /// The root element record.
    pub fn root(&self) -> Record<'_> {
        // root is checked to be an object in from_value
        match Record::from_value(&self.root) {
            Some(record) => record,
            None => Record::empty(),
        }
    }
}

fn size_of(object: &serde_json::Map<String, Value>, key: &str) -> Option<Vec2> {
    let nested = object.get(key)?.as_object()?;
    Some(Vec2::new(
        nested.get("w")?.as_f64()? as f32,
        nested.get("h")?.as_f64()? as f32,
    ))
}

fn point_of(object: &serde_json::Map<String, Value>, key: &str) -> Option<Vec2> {
    let nested = object.get(key)?.as_object()?;
    Some(Vec2::new(
        nested.get("x")?.as_f64()? as f32,
        nested.get("y")?.as_f64()? as f32,
    ))
}

/// Document-level error: anything that stops a build before the first
/// element is constructed
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document is missing `{0}`")]
    MissingField(&'static str),

    #[error("document version {0} is not supported")]
    UnsupportedVersion(String),
}
