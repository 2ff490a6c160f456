//! Rendering logic that converts a documentation model into Markdown documents.

/// Renderer configuration and entry points.
pub mod core;
/// Per-kind page and section renderers.
pub mod items;
/// Document buffers and Markdown helpers.
pub mod markdown;
/// Per-source-file grouping for simple mode.
pub mod simple;
/// Traversal state shared across renderers.
pub mod state;
/// Declaration signature formatting.
pub mod syntax;
/// Text helpers: markup stripping, file names, summaries.
pub mod utils;

pub use self::core::{RenderMode, RenderSummary, Renderer};
pub use self::markdown::Document;
