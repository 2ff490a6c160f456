//! Per-source-file layout.
//!
//! Entities are folded into groups keyed by their project-relative source path in a single
//! pass, then each group renders into one document mirroring the source file's location.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::items::others::{render_function_list, render_variable_list};
use super::items::render_container_section;
use super::markdown::Document;
use super::state::RenderState;
use crate::error::Result;
use crate::model::{Container, Function, Variable};

/// Everything documented that was declared in one source file.
#[derive(Debug, Default)]
pub struct FileGroup<'a> {
	/// Source path exactly as the model reports it.
	pub source: PathBuf,
	/// Classes, enums, mixins and extensions.
	pub containers: Vec<Container<'a>>,
	/// Top-level functions.
	pub functions: Vec<&'a Function>,
	/// Top-level variables.
	pub properties: Vec<&'a Variable>,
}

impl<'a> FileGroup<'a> {
	fn new(source: &Path) -> Self {
		Self {
			source: source.to_path_buf(),
			..Self::default()
		}
	}

	fn sort(&mut self) {
		self.containers.sort_by_key(|container| container.info().line);
		self.functions.sort_by_key(|function| function.info.line);
		self.properties.sort_by_key(|variable| variable.info.line);
	}

	/// Render the group into a document at `relative` with the configured extension.
	pub fn render(&self, state: &RenderState, relative: &Path) -> Document {
		let mut doc = Document::new(relative.with_extension(&state.config.extension));
		doc.heading(1, &relative.display().to_string());
		for container in &self.containers {
			render_container_section(state, &mut doc, *container, &self.source);
		}
		render_function_list(&mut doc, &self.functions);
		render_variable_list(&mut doc, &self.properties);
		doc
	}
}

/// Documented entities grouped by project-relative source path.
#[derive(Debug, Default)]
pub struct SourceGroups<'a> {
	groups: BTreeMap<PathBuf, FileGroup<'a>>,
}

impl<'a> SourceGroups<'a> {
	/// Fold every included entity of the package into its file's group.
	pub fn collect(state: &RenderState<'a>) -> Result<Self> {
		let mut this = Self::default();
		let package = state.package;
		for library in &package.libraries {
			if !state.includes(&library.info) {
				continue;
			}
			for container in library.containers() {
				if state.includes(container.info()) {
					this.group(state, &container.info().source_path)?
						.containers
						.push(container);
				}
			}
			for function in &library.functions {
				if state.includes(&function.info) {
					this.group(state, &function.info.source_path)?.functions.push(function);
				}
			}
			for variable in &library.properties {
				if state.includes(&variable.info) {
					this.group(state, &variable.info.source_path)?.properties.push(variable);
				}
			}
		}
		for group in this.groups.values_mut() {
			group.sort();
		}
		Ok(this)
	}

	fn group(&mut self, state: &RenderState, source: &Path) -> Result<&mut FileGroup<'a>> {
		let relative = state.relative_source(source)?;
		Ok(self
			.groups
			.entry(relative)
			.or_insert_with(|| FileGroup::new(source)))
	}

	/// Groups in path order.
	pub fn iter(&self) -> impl Iterator<Item = (&PathBuf, &FileGroup<'a>)> {
		self.groups.iter()
	}
}
