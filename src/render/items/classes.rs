use std::path::Path;

use super::super::markdown::Document;
use super::super::state::RenderState;
use super::{
	CHAIN_SEPARATOR, constructor_members, explicit_supertypes, field_members, listed_constructors,
	listed_fields, listed_methods, method_members, plain_types, relation_line, render_member_list,
	render_member_section, render_page_header, render_section_header,
};
use crate::model::{Class, ContainerKind, Modifiers, PropertyKind};

/// Declaration line: `[abstract ]class Name[ extends S][ with M][ implements I]`.
pub fn class_declaration(class: &Class) -> String {
	let mut out = String::new();
	if class.modifiers.contains(Modifiers::ABSTRACT) {
		out.push_str("abstract ");
	}
	out.push_str("class ");
	out.push_str(&class.info.name);
	if let Some(superclass) = explicit_supertypes(&class.superchain).first() {
		out.push_str(" extends ");
		out.push_str(superclass);
	}
	if !class.mixins.is_empty() {
		out.push_str(" with ");
		out.push_str(&plain_types(&class.mixins).join(", "));
	}
	if !class.interfaces.is_empty() {
		out.push_str(" implements ");
		out.push_str(&plain_types(&class.interfaces).join(", "));
	}
	out
}

/// Full-mode class page.
pub fn render_class_page(state: &RenderState, doc: &mut Document, class: &Class) {
	render_page_header(doc, ContainerKind::Class, &class.info, &class_declaration(class));

	render_member_section(doc, "Constructors", constructor_members(state, &class.constructors));
	render_member_section(doc, "Properties", field_members(state, &class.fields));
	render_member_section(
		doc,
		"Methods",
		method_members(state, &class.methods, |m| !m.is_static() && !m.is_operator),
	);
	render_member_section(
		doc,
		"Static Methods",
		method_members(state, &class.methods, |m| m.is_static() && !m.is_operator),
	);
	render_member_section(
		doc,
		"Operators",
		method_members(state, &class.methods, |m| m.is_operator),
	);
}

/// Simple-mode class section for the file `source`.
pub fn render_class_section(state: &RenderState, doc: &mut Document, class: &Class, source: &Path) {
	render_section_header(doc, class.modifiers, ContainerKind::Class, &class.info);

	let supertypes = explicit_supertypes(&class.superchain);
	if !supertypes.is_empty() {
		doc.paragraph(&format!("Extends: {}", supertypes.join(CHAIN_SEPARATOR)));
	}
	relation_line(doc, "Mixins", &class.mixins);
	relation_line(doc, "Implements", &class.interfaces);
	relation_line(doc, "Subclasses", &class.subclasses);

	render_member_list(doc, "Constructors", listed_constructors(state, &class.constructors, source));
	render_member_list(
		doc,
		"Fields",
		listed_fields(state, &class.fields, source, |f| f.kind == PropertyKind::Field),
	);
	render_member_list(
		doc,
		"Getters",
		listed_fields(state, &class.fields, source, |f| f.kind == PropertyKind::Getter),
	);
	render_member_list(
		doc,
		"Setters",
		listed_fields(state, &class.fields, source, |f| f.kind == PropertyKind::Setter),
	);
	render_member_list(doc, "Methods", listed_methods(state, &class.methods, source));
}
