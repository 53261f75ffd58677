//! Sprig Engine
//!
//! Resolves designer-exported layout documents into anchor/pivot/size
//! UI node trees.
//!
//! # Example
//! ```rust,ignore
//! use sprig_engine::{Builder, Providers};
//!
//! let builder = Builder::new();
//! let output = builder.build_str(&text, providers)?;
//! for warning in &output.warnings {
//!     eprintln!("{warning}");
//! }
//! serde_json::to_writer_pretty(stdout, &output.root)?;
//! ```

mod builder;

pub use builder::{BuildError, BuildOutput, Builder, PostProcessor, Providers};

// Re-export sub-crates for advanced usage
pub use sprig_document as document;
pub use sprig_elements as elements;
pub use sprig_geometry as geometry;

pub use sprig_document::{DesignDocument, DocumentError};
pub use sprig_elements::{BuildWarning, ElementError, ResolvedNode};

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
