use std::path::{Path, PathBuf};

use log::debug;

use super::core::{RenderMode, RenderSummary, Renderer};
use super::items::{library, render_container_page};
use super::markdown::Document;
use super::simple::SourceGroups;
use super::utils::sanitize_file_name;
use crate::error::{Result, TreedocError};
use crate::model::{EntityInfo, Package};
use crate::sink::DocumentSink;

/// Base name of index pages.
pub const INDEX_STEM: &str = "README";

/// Rendering context shared by every page renderer during one pass.
pub struct RenderState<'a> {
	/// Immutable renderer configuration.
	pub config: &'a Renderer,
	/// Package being documented.
	pub package: &'a Package,
}

impl<'a> RenderState<'a> {
	/// Create a new render state.
	pub fn new(config: &'a Renderer, package: &'a Package) -> Self {
		Self { config, package }
	}

	/// Walk the package and hand every finished document to `sink`.
	pub fn render(&self, sink: &mut dyn DocumentSink) -> Result<RenderSummary> {
		let mut summary = RenderSummary::default();
		let mut emit = |document: Document| -> Result<()> {
			summary.documents.push(document.path().to_path_buf());
			sink.write(document)
		};

		match self.config.mode {
			RenderMode::Full => {
				emit(library::render_package_index(self))?;
				for lib in &self.package.libraries {
					if !self.includes(&lib.info) {
						continue;
					}
					emit(library::render_library_index(self, lib))?;
					for container in lib.containers() {
						if self.includes(container.info()) {
							emit(render_container_page(self, lib, container))?;
						}
					}
				}
			}
			RenderMode::Simple => {
				let groups = SourceGroups::collect(self)?;
				for (relative, group) in groups.iter() {
					emit(group.render(self, relative))?;
				}
			}
		}

		Ok(summary)
	}

	/// Whether an entity is documented and declared outside excluded directories.
	pub fn includes(&self, info: &EntityInfo) -> bool {
		if !info.is_documented {
			debug!("Skipping undocumented `{}`", info.name);
			return false;
		}
		if info.is_under_any(&self.config.project_root, &self.config.excluded_dirs) {
			debug!(
				"Skipping `{}` declared in excluded {}",
				info.name,
				info.source_path.display()
			);
			return false;
		}
		true
	}

	/// File name for a document named after `name`.
	pub fn file_name(&self, name: &str) -> String {
		format!("{}.{}", sanitize_file_name(name), self.config.extension)
	}

	/// Directory holding a library's pages.
	pub fn library_dir(&self, name: &str) -> PathBuf {
		PathBuf::from(sanitize_file_name(name))
	}

	/// Path of the index page inside `dir`.
	pub fn index_path(&self, dir: &Path) -> PathBuf {
		dir.join(self.file_name(INDEX_STEM))
	}

	/// Source path relative to the project root.
	pub fn relative_source(&self, source: &Path) -> Result<PathBuf> {
		if source.is_relative() {
			return Ok(source.to_path_buf());
		}
		source
			.strip_prefix(&self.config.project_root)
			.map(Path::to_path_buf)
			.map_err(|_| TreedocError::OutsideProjectRoot {
				path: source.to_path_buf(),
				root: self.config.project_root.clone(),
			})
	}
}
