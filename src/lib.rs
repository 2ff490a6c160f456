//! Core library for treedoc, rendering a resolved documentation model into a Markdown tree.
//!
//! The model (packages, libraries, classes and their members) is produced upstream and
//! consumed read-only. [`Renderer`] walks it and emits either one cross-linked page per
//! library and container, or one annotated page per source file.

/// Error type shared by the library.
pub mod error;

/// Read-only documentation model.
pub mod model;

/// Rendering logic that converts the model into Markdown documents.
pub mod render;

/// Destinations for finished documents.
pub mod sink;

pub use crate::error::{Result, TreedocError};
pub use crate::model::PackageGraph;
pub use crate::render::{Document, RenderMode, RenderSummary, Renderer};
pub use crate::sink::{DocumentSink, FileSink};
