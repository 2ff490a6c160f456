use std::path::PathBuf;

use log::info;

use super::state::RenderState;
use crate::error::Result;
use crate::model::PackageGraph;
use crate::sink::{DocumentSink, FileSink};

/// Directory names whose contents are treated as copied-in dependency code.
pub const DEFAULT_EXCLUDED_DIRS: [&str; 3] = [".dart_tool", ".pub-cache", "vendor"];

/// Extension given to generated documents.
pub const DEFAULT_EXTENSION: &str = "md";

/// Layout strategy for the generated tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
	/// One cross-linked page per library and per container.
	#[default]
	Full,
	/// One page per source file, annotated with line numbers.
	Simple,
}

/// Paths written during a render pass, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSummary {
	/// Output-relative paths of every document.
	pub documents: Vec<PathBuf>,
}

/// Configurable renderer that turns a documentation model into a Markdown tree.
#[derive(Debug, Clone)]
pub struct Renderer {
	/// Destination root.
	pub output_dir: PathBuf,
	/// Layout strategy.
	pub mode: RenderMode,
	/// Log every written document.
	pub verbose: bool,
	/// Root that source paths are made relative to in simple mode.
	pub project_root: PathBuf,
	/// Directory names whose declarations are never documented.
	pub excluded_dirs: Vec<String>,
	/// Extension of generated documents, without the dot.
	pub extension: String,
}

impl Renderer {
	/// Create a renderer writing to `output_dir` with default settings.
	pub fn new(output_dir: impl Into<PathBuf>) -> Self {
		Self {
			output_dir: output_dir.into(),
			mode: RenderMode::Full,
			verbose: false,
			project_root: PathBuf::from("."),
			excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|dir| dir.to_string()).collect(),
			extension: DEFAULT_EXTENSION.to_string(),
		}
	}

	/// Select the layout strategy.
	pub fn with_mode(mut self, mode: RenderMode) -> Self {
		self.mode = mode;
		self
	}

	/// Log each written document.
	pub fn with_verbose(mut self, verbose: bool) -> Self {
		self.verbose = verbose;
		self
	}

	/// Set the project root used to relativize source paths.
	pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
		self.project_root = root.into();
		self
	}

	/// Replace the excluded dependency directory names.
	pub fn with_excluded_dirs<I, S>(mut self, dirs: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.excluded_dirs = dirs.into_iter().map(Into::into).collect();
		self
	}

	/// Change the extension of generated documents.
	pub fn with_extension(mut self, extension: &str) -> Self {
		self.extension = extension.trim_start_matches('.').to_string();
		self
	}

	/// Render `graph` to the configured output directory.
	pub fn render(&self, graph: &PackageGraph) -> Result<RenderSummary> {
		let mut sink = FileSink::create(&self.output_dir, self.verbose)?;
		let summary = self.render_into(graph, &mut sink)?;
		info!(
			"Wrote {} documents to {}",
			summary.documents.len(),
			self.output_dir.display()
		);
		Ok(summary)
	}

	/// Render `graph` into an arbitrary sink.
	pub fn render_into(&self, graph: &PackageGraph, sink: &mut dyn DocumentSink) -> Result<RenderSummary> {
		let package = graph.default_package()?;
		let state = RenderState::new(self, package);
		state.render(sink)
	}
}
