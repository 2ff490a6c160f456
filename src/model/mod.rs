//! Read-only documentation model consumed by the renderer.
//!
//! The graph is built upstream (source parsing, type resolution, inheritance) and handed over
//! fully resolved. Every entity already knows whether it is documented, where it was declared,
//! and how its types render. The renderer only borrows it.

/// Modifier keyword sets attached to declarations.
pub mod modifiers;

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use self::modifiers::{Modifier, Modifiers};
use crate::error::{Result, TreedocError};
use crate::render::utils::strip_markup;

/// Root of the resolved model: the target package plus everything reachable from it.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageGraph {
	/// Name of the package being documented.
	pub default_package: String,
	/// Every package in the graph, including third-party dependencies.
	pub packages: Vec<Package>,
}

impl PackageGraph {
	/// Parse a graph from the JSON dump written by the model builder.
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}

	/// The package whose documentation is being generated.
	pub fn default_package(&self) -> Result<&Package> {
		self.packages
			.iter()
			.find(|package| package.name == self.default_package)
			.ok_or_else(|| TreedocError::MissingDefaultPackage(self.default_package.clone()))
	}

	/// All packages known to the graph.
	pub fn packages(&self) -> impl Iterator<Item = &Package> {
		self.packages.iter()
	}
}

/// A named package and its libraries.
#[derive(Debug, Clone, Deserialize)]
pub struct Package {
	/// Package name.
	pub name: String,
	/// Package-level prose documentation.
	#[serde(default)]
	pub documentation: Option<String>,
	/// Libraries in declaration order.
	#[serde(default)]
	pub libraries: Vec<Library>,
}

/// Common documentable capability shared by every entity.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityInfo {
	/// Declared name.
	pub name: String,
	/// Summary line, when upstream computed one.
	#[serde(default)]
	pub one_line_doc: Option<String>,
	/// Full prose documentation.
	#[serde(default)]
	pub documentation: Option<String>,
	/// File the entity was declared in.
	pub source_path: PathBuf,
	/// 1-based declaration line.
	pub line: u32,
	/// Whether the entity is eligible for output.
	#[serde(default)]
	pub is_documented: bool,
}

impl EntityInfo {
	/// Full documentation, ignoring blank strings.
	pub fn docs(&self) -> Option<&str> {
		self.documentation.as_deref().map(str::trim).filter(|docs| !docs.is_empty())
	}

	/// Summary line, falling back to the first line of the full documentation.
	pub fn summary(&self) -> Option<&str> {
		self.one_line_doc
			.as_deref()
			.map(str::trim)
			.filter(|line| !line.is_empty())
			.or_else(|| self.docs())
	}

	/// Whether the declaration lives under any of the given directory names below `root`.
	///
	/// Directories above the project root never count, so a checkout inside `vendor/` keeps its
	/// own declarations.
	pub fn is_under_any(&self, root: &Path, segments: &[String]) -> bool {
		let path = self.source_path.strip_prefix(root).unwrap_or(&self.source_path);
		path_has_segment(path, segments)
	}
}

pub(crate) fn path_has_segment(path: &Path, segments: &[String]) -> bool {
	path.components().any(|component| {
		let component = component.as_os_str();
		segments.iter().any(|segment| component == segment.as_str())
	})
}

/// A type name pre-rendered upstream, possibly containing link markup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TypeRef(pub String);

impl TypeRef {
	/// Create a type reference from rendered markup.
	pub fn new(markup: impl Into<String>) -> Self {
		Self(markup.into())
	}

	/// The type name with markup removed.
	pub fn plain(&self) -> String {
		strip_markup(&self.0)
	}
}

/// How a parameter is passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
	/// Required positional parameter.
	#[default]
	Positional,
	/// Optional positional parameter.
	OptionalPositional,
	/// Named parameter.
	Named,
}

/// One parameter of a callable.
#[derive(Debug, Clone, Deserialize)]
pub struct Parameter {
	/// Parameter name.
	pub name: String,
	/// Declared type.
	#[serde(rename = "type")]
	pub ty: TypeRef,
	/// Positional or named.
	#[serde(default)]
	pub kind: ParameterKind,
	/// Whether a caller must supply it.
	#[serde(default)]
	pub is_required: bool,
	/// Default value expression, verbatim.
	#[serde(default)]
	pub default_value: Option<String>,
}

impl Parameter {
	/// Named parameters the caller must supply carry the `required` keyword.
	pub fn is_required_named(&self) -> bool {
		self.kind == ParameterKind::Named && self.is_required
	}
}

/// A compilation unit and its top-level declarations.
#[derive(Debug, Clone, Deserialize)]
pub struct Library {
	/// Name, docs and location of the library itself.
	#[serde(flatten)]
	pub info: EntityInfo,
	/// Classes in declaration order.
	#[serde(default)]
	pub classes: Vec<Class>,
	/// Enums in declaration order.
	#[serde(default)]
	pub enums: Vec<Enum>,
	/// Mixins in declaration order.
	#[serde(default)]
	pub mixins: Vec<Mixin>,
	/// Extensions in declaration order.
	#[serde(default)]
	pub extensions: Vec<Extension>,
	/// Top-level functions.
	#[serde(default)]
	pub functions: Vec<Function>,
	/// Top-level variables and constants.
	#[serde(default)]
	pub properties: Vec<Variable>,
}

impl Library {
	/// Every container declared in the library, grouped by kind in model order.
	pub fn containers(&self) -> impl Iterator<Item = Container<'_>> {
		self.classes
			.iter()
			.map(Container::Class)
			.chain(self.enums.iter().map(Container::Enum))
			.chain(self.mixins.iter().map(Container::Mixin))
			.chain(self.extensions.iter().map(Container::Extension))
	}
}

/// A class declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct Class {
	/// Common entity data.
	#[serde(flatten)]
	pub info: EntityInfo,
	/// Declaration modifiers (`abstract`, ...).
	#[serde(default)]
	pub modifiers: Modifiers,
	/// Supertypes from the direct superclass upward.
	#[serde(default)]
	pub superchain: Vec<TypeRef>,
	/// Mixed-in types.
	#[serde(default)]
	pub mixins: Vec<TypeRef>,
	/// Directly implemented interfaces.
	#[serde(default)]
	pub interfaces: Vec<TypeRef>,
	/// Known direct subclasses.
	#[serde(default)]
	pub subclasses: Vec<TypeRef>,
	/// Constructors.
	#[serde(default)]
	pub constructors: Vec<Constructor>,
	/// Fields, getters and setters.
	#[serde(default)]
	pub fields: Vec<Field>,
	/// Instance methods, static methods and operators.
	#[serde(default)]
	pub methods: Vec<Method>,
}

/// An enum declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct Enum {
	/// Common entity data.
	#[serde(flatten)]
	pub info: EntityInfo,
	/// Enum values in declaration order.
	#[serde(default)]
	pub values: Vec<EnumValue>,
	/// Mixed-in types.
	#[serde(default)]
	pub mixins: Vec<TypeRef>,
	/// Directly implemented interfaces.
	#[serde(default)]
	pub interfaces: Vec<TypeRef>,
	/// Constructors of enhanced enums.
	#[serde(default)]
	pub constructors: Vec<Constructor>,
	/// Fields and getters.
	#[serde(default)]
	pub fields: Vec<Field>,
	/// Methods.
	#[serde(default)]
	pub methods: Vec<Method>,
}

/// A single enum value.
#[derive(Debug, Clone, Deserialize)]
pub struct EnumValue {
	/// Common entity data.
	#[serde(flatten)]
	pub info: EntityInfo,
}

/// A mixin declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct Mixin {
	/// Common entity data.
	#[serde(flatten)]
	pub info: EntityInfo,
	/// Superclass constraints (`on` clause).
	#[serde(default)]
	pub on: Vec<TypeRef>,
	/// Directly implemented interfaces.
	#[serde(default)]
	pub interfaces: Vec<TypeRef>,
	/// Fields and getters.
	#[serde(default)]
	pub fields: Vec<Field>,
	/// Methods.
	#[serde(default)]
	pub methods: Vec<Method>,
}

/// An extension declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct Extension {
	/// Common entity data.
	#[serde(flatten)]
	pub info: EntityInfo,
	/// The type being extended.
	pub extended_type: TypeRef,
	/// Fields and getters.
	#[serde(default)]
	pub fields: Vec<Field>,
	/// Methods.
	#[serde(default)]
	pub methods: Vec<Method>,
}

/// A constructor of a class or enum.
#[derive(Debug, Clone, Deserialize)]
pub struct Constructor {
	/// Common entity data. The name includes the class name (`Vector.zero`).
	#[serde(flatten)]
	pub info: EntityInfo,
	/// `const`, `factory`.
	#[serde(default)]
	pub modifiers: Modifiers,
	/// Parameters in declaration order.
	#[serde(default)]
	pub parameters: Vec<Parameter>,
}

/// Whether a property is a plain field or an explicit accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
	/// Storage-backed field.
	#[default]
	Field,
	/// Explicit getter.
	Getter,
	/// Explicit setter.
	Setter,
}

/// A field or accessor on a container.
#[derive(Debug, Clone, Deserialize)]
pub struct Field {
	/// Common entity data.
	#[serde(flatten)]
	pub info: EntityInfo,
	/// Declared type.
	#[serde(rename = "type")]
	pub ty: TypeRef,
	/// Field, getter or setter.
	#[serde(default)]
	pub kind: PropertyKind,
	/// `static`, `const`, `final`, `late`, `override`, `abstract`.
	#[serde(default)]
	pub modifiers: Modifiers,
}

/// A method or operator on a container.
#[derive(Debug, Clone, Deserialize)]
pub struct Method {
	/// Common entity data. Operators are named by their symbol (`+`).
	#[serde(flatten)]
	pub info: EntityInfo,
	/// Declared return type.
	pub return_type: TypeRef,
	/// Parameters in declaration order.
	#[serde(default)]
	pub parameters: Vec<Parameter>,
	/// `static`, `override`, `abstract`.
	#[serde(default)]
	pub modifiers: Modifiers,
	/// Whether this is an operator overload.
	#[serde(default)]
	pub is_operator: bool,
}

impl Method {
	/// Static methods are grouped separately from instance methods.
	pub fn is_static(&self) -> bool {
		self.modifiers.contains(Modifiers::STATIC)
	}
}

/// A top-level function.
#[derive(Debug, Clone, Deserialize)]
pub struct Function {
	/// Common entity data.
	#[serde(flatten)]
	pub info: EntityInfo,
	/// Declared return type.
	pub return_type: TypeRef,
	/// Parameters in declaration order.
	#[serde(default)]
	pub parameters: Vec<Parameter>,
	/// Declaration modifiers.
	#[serde(default)]
	pub modifiers: Modifiers,
}

/// A top-level variable or constant.
#[derive(Debug, Clone, Deserialize)]
pub struct Variable {
	/// Common entity data.
	#[serde(flatten)]
	pub info: EntityInfo,
	/// Declared type.
	#[serde(rename = "type")]
	pub ty: TypeRef,
	/// `const`, `final`, `late`.
	#[serde(default)]
	pub modifiers: Modifiers,
	/// Initializer of a constant, verbatim.
	#[serde(default)]
	pub constant_value: Option<String>,
}

impl Variable {
	/// Constants are listed separately from mutable properties.
	pub fn is_const(&self) -> bool {
		self.modifiers.contains(Modifiers::CONST)
	}
}

/// Kind tag for the container entities that get their own page or section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
	/// `class`
	Class,
	/// `enum`
	Enum,
	/// `mixin`
	Mixin,
	/// `extension`
	Extension,
}

impl ContainerKind {
	/// Declaration keyword, also used as the page and section title prefix.
	pub fn keyword(self) -> &'static str {
		match self {
			Self::Class => "class",
			Self::Enum => "enum",
			Self::Mixin => "mixin",
			Self::Extension => "extension",
		}
	}

	/// Heading used for the category on library index pages.
	pub fn category(self) -> &'static str {
		match self {
			Self::Class => "Classes",
			Self::Enum => "Enums",
			Self::Mixin => "Mixins",
			Self::Extension => "Extensions",
		}
	}
}

/// Closed set of container entities sharing one rendering pipeline.
#[derive(Debug, Clone, Copy)]
pub enum Container<'a> {
	/// A class.
	Class(&'a Class),
	/// An enum.
	Enum(&'a Enum),
	/// A mixin.
	Mixin(&'a Mixin),
	/// An extension.
	Extension(&'a Extension),
}

impl<'a> Container<'a> {
	/// Common entity data of the wrapped container.
	pub fn info(&self) -> &'a EntityInfo {
		match self {
			Self::Class(class) => &class.info,
			Self::Enum(enum_) => &enum_.info,
			Self::Mixin(mixin) => &mixin.info,
			Self::Extension(extension) => &extension.info,
		}
	}

	/// Kind tag.
	pub fn kind(&self) -> ContainerKind {
		match self {
			Self::Class(_) => ContainerKind::Class,
			Self::Enum(_) => ContainerKind::Enum,
			Self::Mixin(_) => ContainerKind::Mixin,
			Self::Extension(_) => ContainerKind::Extension,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn graph_deserializes_with_defaults() {
		let json = r#"{
			"default_package": "geometry",
			"packages": [{
				"name": "geometry",
				"libraries": [{
					"name": "shapes",
					"source_path": "lib/shapes.dart",
					"line": 1,
					"is_documented": true,
					"classes": [{
						"name": "Circle",
						"source_path": "lib/shapes.dart",
						"line": 4,
						"is_documented": true,
						"modifiers": ["abstract"],
						"fields": [{
							"name": "radius",
							"type": "<a href=\"double.html\">double</a>",
							"source_path": "lib/shapes.dart",
							"line": 5,
							"modifiers": ["final"]
						}]
					}]
				}]
			}]
		}"#;

		let graph = PackageGraph::from_json(json).unwrap();
		let package = graph.default_package().unwrap();
		let class = &package.libraries[0].classes[0];
		assert!(class.modifiers.contains(Modifiers::ABSTRACT));
		assert!(class.superchain.is_empty());
		let field = &class.fields[0];
		assert_eq!(field.ty.plain(), "double");
		assert_eq!(field.kind, PropertyKind::Field);
		assert!(!field.info.is_documented);
	}

	#[test]
	fn missing_default_package_is_an_error() {
		let graph = PackageGraph {
			default_package: "absent".into(),
			packages: Vec::new(),
		};
		assert!(matches!(
			graph.default_package(),
			Err(TreedocError::MissingDefaultPackage(name)) if name == "absent"
		));
	}

	#[test]
	fn segment_match_is_per_component() {
		let segments = vec!["vendor".to_string()];
		assert!(path_has_segment(Path::new("lib/vendor/x.dart"), &segments));
		assert!(!path_has_segment(Path::new("lib/vendored/x.dart"), &segments));
		assert!(!path_has_segment(Path::new("lib/my_vendor.dart"), &segments));
	}

	#[test]
	fn exclusion_ignores_directories_above_the_root() {
		let segments = vec!["vendor".to_string()];
		let root = std::env::temp_dir().join("vendor").join("app");
		let at = |path: PathBuf| EntityInfo {
			name: "x".into(),
			one_line_doc: None,
			documentation: None,
			source_path: path,
			line: 1,
			is_documented: true,
		};
		assert!(!at(root.join("lib").join("a.dart")).is_under_any(&root, &segments));
		assert!(at(root.join("lib").join("vendor").join("a.dart")).is_under_any(&root, &segments));
		assert!(at(PathBuf::from("lib/vendor/a.dart")).is_under_any(&root, &segments));
	}

	#[test]
	fn summary_prefers_one_line_doc() {
		let info = EntityInfo {
			name: "x".into(),
			one_line_doc: Some("  Short.  ".into()),
			documentation: Some("Short.\n\nLong body.".into()),
			source_path: PathBuf::from("lib/x.dart"),
			line: 1,
			is_documented: true,
		};
		assert_eq!(info.summary(), Some("Short."));

		let bare = EntityInfo {
			one_line_doc: None,
			..info
		};
		assert_eq!(bare.summary(), Some("Short.\n\nLong body."));
	}
}
