//! Destinations for finished documents.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{Result, TreedocError};
use crate::render::markdown::Document;

/// Receives each completed document exactly once.
pub trait DocumentSink {
	/// Persist `document`. Errors abort the render pass.
	fn write(&mut self, document: Document) -> Result<()>;
}

/// In-memory sink, handy for dry runs and tests.
impl DocumentSink for Vec<Document> {
	fn write(&mut self, document: Document) -> Result<()> {
		self.push(document);
		Ok(())
	}
}

/// Writes documents below an output root, creating directories on demand.
#[derive(Debug)]
pub struct FileSink {
	root: PathBuf,
	verbose: bool,
	created: HashSet<PathBuf>,
}

impl FileSink {
	/// Create the output root (and parents) and return a sink writing below it.
	pub fn create(root: impl Into<PathBuf>, verbose: bool) -> Result<Self> {
		let mut sink = Self {
			root: root.into(),
			verbose,
			created: HashSet::new(),
		};
		let root = sink.root.clone();
		sink.ensure_dir(&root)?;
		Ok(sink)
	}

	fn ensure_dir(&mut self, dir: &Path) -> Result<()> {
		if self.created.contains(dir) {
			return Ok(());
		}
		fs::create_dir_all(dir).map_err(|source| TreedocError::CreateDir {
			path: dir.to_path_buf(),
			source,
		})?;
		self.created.insert(dir.to_path_buf());
		Ok(())
	}

	/// Write `content` to `relative` under the root, replacing any existing file.
	pub fn write_file(&mut self, relative: &Path, content: &str) -> Result<()> {
		let path = self.root.join(relative);
		if let Some(parent) = path.parent() {
			self.ensure_dir(parent)?;
		}
		fs::write(&path, content).map_err(|source| TreedocError::Write {
			path: path.clone(),
			source,
		})?;

		if self.verbose {
			info!("Generated {}", relative.display());
		} else {
			debug!("Generated {}", relative.display());
		}
		Ok(())
	}
}

impl DocumentSink for FileSink {
	fn write(&mut self, document: Document) -> Result<()> {
		let (path, body) = document.into_parts();
		self.write_file(&path, &body)
	}
}
