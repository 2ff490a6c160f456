use std::path::{Path, PathBuf};

use super::super::markdown::{Document, link};
use super::super::state::RenderState;
use super::super::utils::{SUMMARY_WIDTH, first_line};
use super::others::{render_function_section, render_variable_section};
use crate::model::{ContainerKind, EntityInfo, Library};

fn index_entry(info: &EntityInfo, target: &Path) -> String {
	let mut entry = link(&info.name, target);
	if let Some(summary) = info.summary() {
		entry.push_str(": ");
		entry.push_str(&first_line(summary, SUMMARY_WIDTH));
	}
	entry
}

/// Root index listing every documented library of the package.
pub fn render_package_index(state: &RenderState) -> Document {
	let package = state.package;
	let mut doc = Document::new(state.index_path(Path::new("")));
	doc.heading(1, &package.name);
	if let Some(docs) = package.documentation.as_deref() {
		doc.paragraph(docs);
	}

	let libraries: Vec<&Library> = package
		.libraries
		.iter()
		.filter(|library| state.includes(&library.info))
		.collect();
	if !libraries.is_empty() {
		doc.heading(2, "Libraries");
		for library in libraries {
			let target = state.index_path(&state.library_dir(&library.info.name));
			doc.bullet(&index_entry(&library.info, &target));
		}
	}
	doc
}

/// Per-library index: container links by category, then inline functions and variables.
pub fn render_library_index(state: &RenderState, library: &Library) -> Document {
	let dir = state.library_dir(&library.info.name);
	let mut doc = Document::new(state.index_path(&dir));
	doc.heading(1, &library.info.name);
	if let Some(docs) = library.info.docs() {
		doc.paragraph(docs);
	}

	for kind in [
		ContainerKind::Class,
		ContainerKind::Enum,
		ContainerKind::Mixin,
		ContainerKind::Extension,
	] {
		let entries: Vec<String> = library
			.containers()
			.filter(|container| container.kind() == kind && state.includes(container.info()))
			.map(|container| {
				let info = container.info();
				index_entry(info, &PathBuf::from(state.file_name(&info.name)))
			})
			.collect();
		if entries.is_empty() {
			continue;
		}
		doc.heading(2, kind.category());
		for entry in entries {
			doc.bullet(&entry);
		}
	}

	let functions: Vec<_> = library
		.functions
		.iter()
		.filter(|function| state.includes(&function.info))
		.collect();
	render_function_section(&mut doc, &functions);

	let (constants, properties): (Vec<_>, Vec<_>) = library
		.properties
		.iter()
		.filter(|variable| state.includes(&variable.info))
		.partition(|variable| variable.is_const());
	render_variable_section(&mut doc, "Constants", &constants);
	render_variable_section(&mut doc, "Properties", &properties);
	doc
}
