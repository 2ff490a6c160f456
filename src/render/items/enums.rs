use std::path::Path;

use super::super::markdown::{Document, inline_code};
use super::super::state::RenderState;
use super::super::utils::{SUMMARY_WIDTH, first_line};
use super::{
	ListedMember, constructor_members, field_members, listed_constructors, listed_fields, listed_in,
	listed_methods, method_members, plain_types, relation_line, render_member_list, render_member_section,
	render_page_header, render_section_header,
};
use crate::model::{ContainerKind, Enum, Modifiers};

/// Declaration line: `enum Name[ with M][ implements I]`.
pub fn enum_declaration(enum_: &Enum) -> String {
	let mut out = format!("enum {}", enum_.info.name);
	if !enum_.mixins.is_empty() {
		out.push_str(" with ");
		out.push_str(&plain_types(&enum_.mixins).join(", "));
	}
	if !enum_.interfaces.is_empty() {
		out.push_str(" implements ");
		out.push_str(&plain_types(&enum_.interfaces).join(", "));
	}
	out
}

/// Full-mode enum page.
pub fn render_enum_page(state: &RenderState, doc: &mut Document, enum_: &Enum) {
	render_page_header(doc, ContainerKind::Enum, &enum_.info, &enum_declaration(enum_));

	let values: Vec<_> = enum_.values.iter().filter(|value| state.includes(&value.info)).collect();
	if !values.is_empty() {
		doc.heading(2, "Values");
		for value in values {
			let mut entry = inline_code(&value.info.name);
			if let Some(summary) = value.info.summary() {
				entry.push_str(": ");
				entry.push_str(&first_line(summary, SUMMARY_WIDTH));
			}
			doc.bullet(&entry);
		}
	}

	render_member_section(doc, "Constructors", constructor_members(state, &enum_.constructors));
	render_member_section(doc, "Properties", field_members(state, &enum_.fields));
	render_member_section(doc, "Methods", method_members(state, &enum_.methods, |_| true));
}

/// Simple-mode enum section for the file `source`.
pub fn render_enum_section(state: &RenderState, doc: &mut Document, enum_: &Enum, source: &Path) {
	render_section_header(doc, Modifiers::empty(), ContainerKind::Enum, &enum_.info);
	relation_line(doc, "Mixins", &enum_.mixins);
	relation_line(doc, "Implements", &enum_.interfaces);

	let values = enum_
		.values
		.iter()
		.filter(|value| listed_in(state, &value.info, source))
		.map(|value| ListedMember {
			signature: value.info.name.clone(),
			line: value.info.line,
			modifiers: Modifiers::empty(),
		})
		.collect();
	render_member_list(doc, "Values", values);
	render_member_list(doc, "Constructors", listed_constructors(state, &enum_.constructors, source));
	render_member_list(doc, "Fields", listed_fields(state, &enum_.fields, source, |_| true));
	render_member_list(doc, "Methods", listed_methods(state, &enum_.methods, source));
}
