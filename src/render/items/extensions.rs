use std::path::Path;

use super::super::markdown::Document;
use super::super::state::RenderState;
use super::{
	field_members, listed_fields, listed_methods, method_members, relation_line, render_member_list,
	render_member_section, render_page_header, render_section_header,
};
use crate::model::{ContainerKind, Extension, Modifiers};

/// Declaration line: `extension Name on T`.
pub fn extension_declaration(extension: &Extension) -> String {
	format!(
		"extension {} on {}",
		extension.info.name,
		extension.extended_type.plain()
	)
}

/// Full-mode extension page.
pub fn render_extension_page(state: &RenderState, doc: &mut Document, extension: &Extension) {
	render_page_header(doc, ContainerKind::Extension, &extension.info, &extension_declaration(extension));
	render_member_section(doc, "Properties", field_members(state, &extension.fields));
	render_member_section(doc, "Methods", method_members(state, &extension.methods, |_| true));
}

/// Simple-mode extension section for the file `source`.
pub fn render_extension_section(state: &RenderState, doc: &mut Document, extension: &Extension, source: &Path) {
	render_section_header(doc, Modifiers::empty(), ContainerKind::Extension, &extension.info);
	relation_line(doc, "On", std::slice::from_ref(&extension.extended_type));
	render_member_list(doc, "Fields", listed_fields(state, &extension.fields, source, |_| true));
	render_member_list(doc, "Methods", listed_methods(state, &extension.methods, source));
}
