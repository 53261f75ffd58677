//! Sprig CLI support library
//!
//! The binary is a thin wrapper: everything that can be tested lives
//! here, mainly the asset manifest that stands in for a real asset
//! pipeline when resolving documents offline.

pub mod manifest;

pub use manifest::Manifest;
