use std::path::Path;

use super::super::markdown::Document;
use super::super::state::RenderState;
use super::{
	field_members, listed_fields, listed_methods, method_members, plain_types, relation_line,
	render_member_list, render_member_section, render_page_header, render_section_header,
};
use crate::model::{ContainerKind, Mixin, Modifiers};

/// Declaration line: `mixin Name[ on C][ implements I]`.
pub fn mixin_declaration(mixin: &Mixin) -> String {
	let mut out = format!("mixin {}", mixin.info.name);
	if !mixin.on.is_empty() {
		out.push_str(" on ");
		out.push_str(&plain_types(&mixin.on).join(", "));
	}
	if !mixin.interfaces.is_empty() {
		out.push_str(" implements ");
		out.push_str(&plain_types(&mixin.interfaces).join(", "));
	}
	out
}

/// Full-mode mixin page.
pub fn render_mixin_page(state: &RenderState, doc: &mut Document, mixin: &Mixin) {
	render_page_header(doc, ContainerKind::Mixin, &mixin.info, &mixin_declaration(mixin));
	render_member_section(doc, "Properties", field_members(state, &mixin.fields));
	render_member_section(doc, "Methods", method_members(state, &mixin.methods, |_| true));
}

/// Simple-mode mixin section for the file `source`.
pub fn render_mixin_section(state: &RenderState, doc: &mut Document, mixin: &Mixin, source: &Path) {
	render_section_header(doc, Modifiers::empty(), ContainerKind::Mixin, &mixin.info);
	relation_line(doc, "On", &mixin.on);
	relation_line(doc, "Implements", &mixin.interfaces);
	render_member_list(doc, "Fields", listed_fields(state, &mixin.fields, source, |_| true));
	render_member_list(doc, "Methods", listed_methods(state, &mixin.methods, source));
}
