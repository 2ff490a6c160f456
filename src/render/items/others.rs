use super::super::markdown::Document;
use super::super::syntax::{function_signature, variable_signature};
use super::{ListedMember, PageMember, member_line, render_member_section};
use crate::model::{Function, Variable};

/// Declaration of a top-level variable, with the initializer of constants.
pub fn variable_declaration(variable: &Variable) -> String {
	let mut out = variable_signature(variable, true);
	if let Some(value) = &variable.constant_value {
		out.push_str(" = ");
		out.push_str(value.trim());
	}
	out
}

/// Full-mode `Functions` section with inline signature blocks.
pub fn render_function_section(doc: &mut Document, functions: &[&Function]) {
	let members = functions
		.iter()
		.map(|function| PageMember {
			info: &function.info,
			signature: function_signature(function),
		})
		.collect();
	render_member_section(doc, "Functions", members);
}

/// Full-mode variable section titled `title` with inline declaration blocks.
pub fn render_variable_section(doc: &mut Document, title: &str, variables: &[&Variable]) {
	let members = variables
		.iter()
		.map(|variable| PageMember {
			info: &variable.info,
			signature: variable_declaration(variable),
		})
		.collect();
	render_member_section(doc, title, members);
}

/// Simple-mode one-line summaries of top-level functions.
pub fn render_function_list(doc: &mut Document, functions: &[&Function]) {
	let members = functions
		.iter()
		.map(|function| ListedMember {
			signature: function_signature(function),
			line: function.info.line,
			modifiers: function.modifiers,
		})
		.collect();
	render_list_at(doc, "Functions", members);
}

/// Simple-mode one-line summaries of top-level variables.
pub fn render_variable_list(doc: &mut Document, variables: &[&Variable]) {
	let members = variables
		.iter()
		.map(|variable| ListedMember {
			signature: variable_signature(variable, false),
			line: variable.info.line,
			modifiers: variable.modifiers,
		})
		.collect();
	render_list_at(doc, "Properties", members);
}

// Top-level lists sit beside container sections, one heading level up.
fn render_list_at(doc: &mut Document, title: &str, members: Vec<ListedMember>) {
	if members.is_empty() {
		return;
	}
	doc.heading(2, title);
	for member in members {
		doc.bullet(&member_line(&member.signature, member.line, member.modifiers));
	}
}
