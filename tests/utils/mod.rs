//! Model fixtures shared by the integration tests.
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use treedoc::model::{
	Class, Constructor, EntityInfo, Enum, EnumValue, Extension, Field, Function, Library, Method,
	Mixin, Modifiers, Package, PackageGraph, Parameter, ParameterKind, PropertyKind, TypeRef,
	Variable,
};

pub fn info(name: &str, path: &str, line: u32) -> EntityInfo {
	EntityInfo {
		name: name.into(),
		one_line_doc: Some(format!("Docs for {name}.")),
		documentation: Some(format!("Docs for {name}.\n\nMore about {name}.")),
		source_path: PathBuf::from(path),
		line,
		is_documented: true,
	}
}

pub fn undocumented(mut info: EntityInfo) -> EntityInfo {
	info.is_documented = false;
	info.one_line_doc = None;
	info.documentation = None;
	info
}

pub fn linked(name: &str) -> TypeRef {
	TypeRef::new(format!("<a href=\"{name}-class.html\">{name}</a>"))
}

pub fn positional(name: &str, ty: &str) -> Parameter {
	Parameter {
		name: name.into(),
		ty: linked(ty),
		kind: ParameterKind::Positional,
		is_required: true,
		default_value: None,
	}
}

pub fn method(name: &str, ret: &str, path: &str, line: u32, parameters: Vec<Parameter>) -> Method {
	Method {
		info: info(name, path, line),
		return_type: linked(ret),
		parameters,
		modifiers: Modifiers::empty(),
		is_operator: false,
	}
}

pub fn field(name: &str, ty: &str, path: &str, line: u32, modifiers: Modifiers) -> Field {
	Field {
		info: info(name, path, line),
		ty: linked(ty),
		kind: PropertyKind::Field,
		modifiers,
	}
}

pub fn class(name: &str, path: &str, line: u32) -> Class {
	Class {
		info: info(name, path, line),
		modifiers: Modifiers::empty(),
		superchain: vec![TypeRef::new("Object")],
		mixins: Vec::new(),
		interfaces: Vec::new(),
		subclasses: Vec::new(),
		constructors: Vec::new(),
		fields: Vec::new(),
		methods: Vec::new(),
	}
}

pub fn constructor(name: &str, path: &str, line: u32, parameters: Vec<Parameter>) -> Constructor {
	Constructor {
		info: info(name, path, line),
		modifiers: Modifiers::empty(),
		parameters,
	}
}

pub fn enum_(name: &str, path: &str, line: u32, values: &[&str]) -> Enum {
	Enum {
		info: info(name, path, line),
		values: values
			.iter()
			.enumerate()
			.map(|(i, value)| EnumValue {
				info: info(value, path, line + 1 + i as u32),
			})
			.collect(),
		mixins: Vec::new(),
		interfaces: Vec::new(),
		constructors: Vec::new(),
		fields: Vec::new(),
		methods: Vec::new(),
	}
}

pub fn mixin(name: &str, path: &str, line: u32) -> Mixin {
	Mixin {
		info: info(name, path, line),
		on: Vec::new(),
		interfaces: Vec::new(),
		fields: Vec::new(),
		methods: Vec::new(),
	}
}

pub fn extension(name: &str, on: &str, path: &str, line: u32) -> Extension {
	Extension {
		info: info(name, path, line),
		extended_type: linked(on),
		fields: Vec::new(),
		methods: Vec::new(),
	}
}

pub fn function(name: &str, ret: &str, path: &str, line: u32, parameters: Vec<Parameter>) -> Function {
	Function {
		info: info(name, path, line),
		return_type: linked(ret),
		parameters,
		modifiers: Modifiers::empty(),
	}
}

pub fn variable(name: &str, ty: &str, path: &str, line: u32, modifiers: Modifiers, value: Option<&str>) -> Variable {
	Variable {
		info: info(name, path, line),
		ty: linked(ty),
		modifiers,
		constant_value: value.map(Into::into),
	}
}

pub fn library(name: &str, path: &str) -> Library {
	Library {
		info: info(name, path, 1),
		classes: Vec::new(),
		enums: Vec::new(),
		mixins: Vec::new(),
		extensions: Vec::new(),
		functions: Vec::new(),
		properties: Vec::new(),
	}
}

pub fn graph(libraries: Vec<Library>) -> PackageGraph {
	PackageGraph {
		default_package: "geometry".into(),
		packages: vec![
			Package {
				name: "geometry".into(),
				documentation: Some("Geometry helpers.".into()),
				libraries,
			},
			Package {
				name: "collection".into(),
				documentation: None,
				libraries: vec![library("collection", "lib/collection.dart")],
			},
		],
	}
}

/// `mathutils` library holding the documented `Vector` class with an `add` method.
pub fn vector_graph() -> PackageGraph {
	let path = "lib/vector.dart";
	let mut vector = class("Vector", path, 10);
	vector.methods.push(method(
		"add",
		"Vector",
		path,
		15,
		vec![positional("other", "Vector")],
	));
	let mut lib = library("mathutils", path);
	lib.classes.push(vector);
	graph(vec![lib])
}

/// Every file below `root`, keyed by `/`-separated relative path.
pub fn read_tree(root: &Path) -> BTreeMap<String, String> {
	fn walk(root: &Path, dir: &Path, out: &mut BTreeMap<String, String>) {
		for entry in fs::read_dir(dir).expect("read_dir") {
			let path = entry.expect("dir entry").path();
			if path.is_dir() {
				walk(root, &path, out);
			} else {
				let relative = path
					.strip_prefix(root)
					.expect("strip root")
					.components()
					.map(|c| c.as_os_str().to_string_lossy().into_owned())
					.collect::<Vec<_>>()
					.join("/");
				out.insert(relative, fs::read_to_string(&path).expect("read file"));
			}
		}
	}

	let mut out = BTreeMap::new();
	walk(root, root, &mut out);
	out
}
