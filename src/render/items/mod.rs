/// Class pages and sections.
pub mod classes;
/// Enum pages and sections.
pub mod enums;
/// Extension pages and sections.
pub mod extensions;
/// Package and library index pages.
pub mod library;
/// Mixin pages and sections.
pub mod mixins;
/// Top-level functions and variables.
pub mod others;

use std::path::Path;

use super::markdown::{Document, inline_code};
use super::state::RenderState;
use super::syntax::{constructor_signature, field_signature, method_signature};
use super::utils::{SUMMARY_WIDTH, first_line};
use crate::model::{Constructor, Container, ContainerKind, EntityInfo, Field, Library, Method, Modifiers, TypeRef};

/// Name of the implicit root of every class hierarchy.
pub const ROOT_TYPE: &str = "Object";

/// Separator between supertypes on `Extends` lines.
pub const CHAIN_SEPARATOR: &str = " → ";

/// Render the full-mode page for a container in `library`.
pub fn render_container_page(state: &RenderState, library: &Library, container: Container) -> Document {
	let path = state
		.library_dir(&library.info.name)
		.join(state.file_name(&container.info().name));
	let mut doc = Document::new(path);
	match container {
		Container::Class(class) => classes::render_class_page(state, &mut doc, class),
		Container::Enum(enum_) => enums::render_enum_page(state, &mut doc, enum_),
		Container::Mixin(mixin) => mixins::render_mixin_page(state, &mut doc, mixin),
		Container::Extension(extension) => extensions::render_extension_page(state, &mut doc, extension),
	}
	doc
}

/// Append the simple-mode section for a container declared in `source`.
pub fn render_container_section(state: &RenderState, doc: &mut Document, container: Container, source: &Path) {
	match container {
		Container::Class(class) => classes::render_class_section(state, doc, class, source),
		Container::Enum(enum_) => enums::render_enum_section(state, doc, enum_, source),
		Container::Mixin(mixin) => mixins::render_mixin_section(state, doc, mixin, source),
		Container::Extension(extension) => extensions::render_extension_section(state, doc, extension, source),
	}
}

/// Page header shared by every container page: title, declaration and prose.
pub(crate) fn render_page_header(doc: &mut Document, kind: ContainerKind, info: &EntityInfo, declaration: &str) {
	doc.heading(1, &format!("{} {}", kind.keyword(), info.name));
	doc.code_block(declaration);
	if let Some(docs) = info.docs() {
		doc.paragraph(docs);
	}
}

/// Simple-mode section heading with modifiers and declaration line.
pub(crate) fn render_section_header(doc: &mut Document, modifiers: Modifiers, kind: ContainerKind, info: &EntityInfo) {
	let mut words = modifiers.keywords();
	words.push(kind.keyword());
	doc.heading(
		2,
		&format!("{} {} (line {})", words.join(" "), info.name, info.line),
	);
	if let Some(summary) = info.summary() {
		doc.paragraph(&first_line(summary, SUMMARY_WIDTH));
	}
}

/// Type names with markup removed.
pub(crate) fn plain_types(types: &[TypeRef]) -> Vec<String> {
	types.iter().map(TypeRef::plain).collect()
}

/// `Label: A, B` paragraph, omitted when `types` is empty.
pub(crate) fn relation_line(doc: &mut Document, label: &str, types: &[TypeRef]) {
	if types.is_empty() {
		return;
	}
	doc.paragraph(&format!("{label}: {}", plain_types(types).join(", ")));
}

/// Supertypes below the implicit root.
pub(crate) fn explicit_supertypes(superchain: &[TypeRef]) -> Vec<String> {
	superchain
		.iter()
		.map(TypeRef::plain)
		.take_while(|name| name != ROOT_TYPE)
		.collect()
}

/// A member rendered on a full-mode page.
pub(crate) struct PageMember<'a> {
	pub info: &'a EntityInfo,
	pub signature: String,
}

/// `## Title` followed by one `### name` subsection per member; omitted when empty.
pub(crate) fn render_member_section(doc: &mut Document, title: &str, members: Vec<PageMember>) {
	if members.is_empty() {
		return;
	}
	doc.heading(2, title);
	for member in members {
		doc.heading(3, &member.info.name);
		doc.code_block(&member.signature);
		if let Some(docs) = member.info.docs() {
			doc.paragraph(docs);
		}
	}
}

/// Documented constructors as page members.
pub(crate) fn constructor_members<'a>(state: &RenderState, constructors: &'a [Constructor]) -> Vec<PageMember<'a>> {
	constructors
		.iter()
		.filter(|constructor| state.includes(&constructor.info))
		.map(|constructor| PageMember {
			info: &constructor.info,
			signature: constructor_signature(constructor, true),
		})
		.collect()
}

/// Documented fields as page members.
pub(crate) fn field_members<'a>(state: &RenderState, fields: &'a [Field]) -> Vec<PageMember<'a>> {
	fields
		.iter()
		.filter(|field| state.includes(&field.info))
		.map(|field| PageMember {
			info: &field.info,
			signature: field_signature(field, true),
		})
		.collect()
}

/// Documented methods accepted by `keep` as page members.
pub(crate) fn method_members<'a>(
	state: &RenderState,
	methods: &'a [Method],
	keep: impl Fn(&Method) -> bool,
) -> Vec<PageMember<'a>> {
	methods
		.iter()
		.filter(|method| keep(*method) && state.includes(&method.info))
		.map(|method| PageMember {
			info: &method.info,
			signature: method_signature(method, true),
		})
		.collect()
}

/// Bullet text for a simple-mode member: signature, line and modifiers.
pub(crate) fn member_line(signature: &str, line: u32, modifiers: Modifiers) -> String {
	let mut out = format!("{} (line {line})", inline_code(signature));
	if let Some(list) = modifiers.render_list() {
		out.push_str(&format!(" [{list}]"));
	}
	out
}

/// A member listed in a simple-mode section.
pub(crate) struct ListedMember {
	pub signature: String,
	pub line: u32,
	pub modifiers: Modifiers,
}

/// `### Title` followed by one bullet per member; omitted when empty.
pub(crate) fn render_member_list(doc: &mut Document, title: &str, members: Vec<ListedMember>) {
	if members.is_empty() {
		return;
	}
	doc.heading(3, title);
	for member in members {
		doc.bullet(&member_line(&member.signature, member.line, member.modifiers));
	}
}

/// Whether a member belongs in the section for `source`.
pub(crate) fn listed_in(state: &RenderState, info: &EntityInfo, source: &Path) -> bool {
	info.source_path == source && state.includes(info)
}

/// Constructors declared in `source`.
pub(crate) fn listed_constructors(state: &RenderState, constructors: &[Constructor], source: &Path) -> Vec<ListedMember> {
	constructors
		.iter()
		.filter(|constructor| listed_in(state, &constructor.info, source))
		.map(|constructor| ListedMember {
			signature: constructor_signature(constructor, false),
			line: constructor.info.line,
			modifiers: constructor.modifiers,
		})
		.collect()
}

/// Fields declared in `source` accepted by `keep`.
pub(crate) fn listed_fields(
	state: &RenderState,
	fields: &[Field],
	source: &Path,
	keep: impl Fn(&Field) -> bool,
) -> Vec<ListedMember> {
	fields
		.iter()
		.filter(|field| keep(*field) && listed_in(state, &field.info, source))
		.map(|field| ListedMember {
			signature: field_signature(field, false),
			line: field.info.line,
			modifiers: field.modifiers,
		})
		.collect()
}

/// Methods declared in `source`.
pub(crate) fn listed_methods(state: &RenderState, methods: &[Method], source: &Path) -> Vec<ListedMember> {
	methods
		.iter()
		.filter(|method| listed_in(state, &method.info, source))
		.map(|method| ListedMember {
			signature: method_signature(method, false),
			line: method.info.line,
			modifiers: method.modifiers,
		})
		.collect()
}
