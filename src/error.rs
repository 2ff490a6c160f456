use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Aggregate errors produced while loading a model or generating documentation.
#[derive(Debug, Error)]
pub enum TreedocError {
	/// The graph does not contain the package it names as the documentation target.
	#[error("default package `{0}` is not present in the package graph")]
	MissingDefaultPackage(String),
	/// An absolute source path could not be made relative to the project root.
	#[error("source file {path} is outside the project root {root}")]
	OutsideProjectRoot {
		/// Offending source path.
		path: PathBuf,
		/// Configured project root.
		root: PathBuf,
	},
	/// Creating an output directory failed.
	#[error("failed to create directory {path}: {source}")]
	CreateDir {
		/// Directory that could not be created.
		path: PathBuf,
		/// Underlying IO error.
		source: io::Error,
	},
	/// Writing an output document failed.
	#[error("failed to write {path}: {source}")]
	Write {
		/// Document that could not be written.
		path: PathBuf,
		/// Underlying IO error.
		source: io::Error,
	},
	/// The model dump could not be decoded.
	#[error("failed to decode documentation model: {0}")]
	Model(#[from] serde_json::Error),
	/// Any other IO failure.
	#[error(transparent)]
	Io(#[from] io::Error),
}

/// Result type returned by the treedoc library.
pub type Result<T> = std::result::Result<T, TreedocError>;
