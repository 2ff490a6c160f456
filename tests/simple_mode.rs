//! Integration tests for the per-source-file layout.
mod utils;

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use treedoc::model::{Modifiers, PropertyKind, TypeRef};
use treedoc::{Document, RenderMode, Renderer, TreedocError};
use utils::*;

fn simple() -> Renderer {
	Renderer::new("out").with_mode(RenderMode::Simple)
}

#[test]
fn vector_file_renders_with_line_numbers() -> Result<(), Box<dyn std::error::Error>> {
	let temp_dir = TempDir::new()?;
	let out = temp_dir.path().join("docs");
	Renderer::new(&out)
		.with_mode(RenderMode::Simple)
		.render(&vector_graph())?;

	let tree = read_tree(&out);
	assert_eq!(tree.keys().cloned().collect::<Vec<_>>(), vec!["lib/vector.md"]);
	assert_eq!(
		tree["lib/vector.md"],
		"# lib/vector.dart\n\n## class Vector (line 10)\n\nDocs for Vector.\n\n\
		 ### Methods\n\n- `Vector add(Vector other)` (line 15)\n"
	);
	Ok(())
}

#[test]
fn absolute_sources_are_relativized() {
	let root = std::env::temp_dir().join("geometry-project");
	let path = root.join("lib").join("src").join("vector.dart");
	let path = path.to_str().unwrap();

	let mut lib = library("mathutils", path);
	lib.classes.push(class("Vector", path, 10));

	let mut sink: Vec<Document> = Vec::new();
	simple()
		.with_project_root(&root)
		.render_into(&graph(vec![lib]), &mut sink)
		.unwrap();
	assert_eq!(sink.len(), 1);
	assert_eq!(sink[0].path(), Path::new("lib").join("src").join("vector.md"));
}

#[test]
fn sources_outside_the_root_abort_the_run() {
	let root = std::env::temp_dir().join("geometry-project");
	let path = std::env::temp_dir().join("elsewhere").join("vector.dart");
	let path = path.to_str().unwrap();

	let mut lib = library("mathutils", path);
	lib.classes.push(class("Vector", path, 10));

	let mut sink: Vec<Document> = Vec::new();
	let err = simple()
		.with_project_root(&root)
		.render_into(&graph(vec![lib]), &mut sink)
		.unwrap_err();
	assert!(matches!(err, TreedocError::OutsideProjectRoot { .. }));
}

#[test]
fn class_section_lists_relations_and_members() {
	let path = "lib/shapes.dart";
	let mut square = class("Square", path, 3);
	square.modifiers = Modifiers::ABSTRACT;
	square.superchain = vec![linked("Rectangle"), linked("Shape"), TypeRef::new("Object")];
	square.mixins = vec![linked("Printable")];
	square.interfaces = vec![linked("Comparable"), linked("Hashable")];
	square.subclasses = vec![linked("UnitSquare")];

	let mut named = constructor("Square.unit", path, 4, Vec::new());
	named.modifiers = Modifiers::CONST;
	square.constructors.push(named);
	square.fields.push(field(
		"max",
		"int",
		path,
		5,
		Modifiers::STATIC | Modifiers::CONST | Modifiers::FINAL,
	));
	let mut area = field("area", "double", path, 6, Modifiers::OVERRIDE);
	area.kind = PropertyKind::Getter;
	square.fields.push(area);
	let mut side = field("side", "double", path, 7, Modifiers::empty());
	side.kind = PropertyKind::Setter;
	square.fields.push(side);
	let mut scale = method("scale", "Square", path, 8, vec![positional("factor", "double")]);
	scale.modifiers = Modifiers::ABSTRACT;
	square.methods.push(scale);

	let mut lib = library("shapes", path);
	lib.classes.push(square);

	let mut sink: Vec<Document> = Vec::new();
	simple().render_into(&graph(vec![lib]), &mut sink).unwrap();
	assert_eq!(
		sink[0].body(),
		"# lib/shapes.dart\n\n\
		 ## abstract class Square (line 3)\n\n\
		 Docs for Square.\n\n\
		 Extends: Rectangle → Shape\n\n\
		 Mixins: Printable\n\n\
		 Implements: Comparable, Hashable\n\n\
		 Subclasses: UnitSquare\n\n\
		 ### Constructors\n\n- `Square.unit()` (line 4) [const]\n\n\
		 ### Fields\n\n- `int max` (line 5) [static, const, final]\n\n\
		 ### Getters\n\n- `double area` (line 6) [override]\n\n\
		 ### Setters\n\n- `double side` (line 7)\n\n\
		 ### Methods\n\n- `Square scale(double factor)` (line 8) [abstract]\n"
	);
}

#[test]
fn extends_line_is_omitted_for_root_only_chain() {
	let mut sink: Vec<Document> = Vec::new();
	simple().render_into(&vector_graph(), &mut sink).unwrap();
	assert!(!sink[0].body().contains("Extends:"));
}

#[test]
fn members_declared_in_other_files_are_dropped() {
	let path = "lib/vector.dart";
	let mut vector = class("Vector", path, 10);
	vector.methods.push(method("add", "Vector", path, 15, Vec::new()));
	vector
		.methods
		.push(method("dot", "double", "lib/vector_ops.dart", 3, Vec::new()));
	let mut lib = library("mathutils", path);
	lib.classes.push(vector);

	let mut sink: Vec<Document> = Vec::new();
	simple().render_into(&graph(vec![lib]), &mut sink).unwrap();
	assert_eq!(sink.len(), 1);
	let body = sink[0].body();
	assert!(body.contains("`Vector add()` (line 15)"));
	assert!(!body.contains("dot"));
}

#[test]
fn entities_group_by_file_in_line_order() {
	let a = "lib/a.dart";
	let b = "lib/b.dart";
	let mut lib = library("mixed", a);
	lib.classes.push(class("Late", a, 30));
	lib.classes.push(class("Other", b, 1));
	lib.enums.push(enum_("Color", a, 5, &["red"]));
	lib.mixins.push(mixin("Walker", a, 20));
	let mut on_string = extension("StringX", "String", b, 8);
	on_string
		.methods
		.push(method("shout", "String", b, 9, Vec::new()));
	lib.extensions.push(on_string);
	lib.functions.push(function("clamp", "int", a, 50, vec![positional("v", "int")]));
	lib.properties.push(variable("pi", "double", a, 2, Modifiers::CONST, Some("3.14")));

	let mut sink: Vec<Document> = Vec::new();
	simple().render_into(&graph(vec![lib]), &mut sink).unwrap();
	let paths: Vec<PathBuf> = sink.iter().map(|doc| doc.path().to_path_buf()).collect();
	assert_eq!(paths, vec![PathBuf::from("lib/a.md"), PathBuf::from("lib/b.md")]);

	let a_body = sink[0].body();
	let headers: Vec<usize> = [
		"## enum Color (line 5)",
		"## mixin Walker (line 20)",
		"## class Late (line 30)",
		"## Functions",
		"## Properties",
	]
	.iter()
	.map(|header| a_body.find(header).expect(header))
	.collect();
	assert!(headers.windows(2).all(|pair| pair[0] < pair[1]), "{a_body}");
	assert!(a_body.contains("### Values\n\n- `red` (line 6)"));
	assert!(a_body.contains("## Functions\n\n- `int clamp(int v)` (line 50)"));
	assert!(a_body.contains("## Properties\n\n- `double pi` (line 2) [const]"));

	let b_body = sink[1].body();
	assert!(b_body.contains("## extension StringX (line 8)\n\nDocs for StringX.\n\nOn: String\n\n### Methods\n\n- `String shout()` (line 9)"));
}
