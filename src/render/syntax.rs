//! Single-line declaration signatures.

use crate::model::{Constructor, Field, Function, Method, Modifiers, Parameter, TypeRef, Variable};

/// Keyword that changes how a declaration line reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
	/// `static` before the declaration.
	Static,
	/// `const` before the declaration.
	Const,
	/// `factory` before a constructor.
	Factory,
	/// `operator` between the return type and the name.
	Operator,
}

impl Keyword {
	fn as_str(self) -> &'static str {
		match self {
			Self::Static => "static",
			Self::Const => "const",
			Self::Factory => "factory",
			Self::Operator => "operator",
		}
	}
}

/// What is being rendered.
#[derive(Debug, Clone, Copy)]
pub enum Signature<'a> {
	/// Something with a parameter list. Constructors have no return type.
	Callable {
		/// Declared return type.
		return_type: Option<&'a TypeRef>,
		/// Declared name.
		name: &'a str,
		/// Parameters in declaration order.
		parameters: &'a [Parameter],
	},
	/// A field, accessor or variable.
	Property {
		/// Declared type.
		ty: &'a TypeRef,
		/// Declared name.
		name: &'a str,
	},
}

/// Render a declaration line, stripping type markup.
pub fn format_signature(signature: Signature<'_>, keyword: Option<Keyword>) -> String {
	let mut parts: Vec<String> = Vec::new();
	if let Some(keyword) = keyword
		&& keyword != Keyword::Operator
	{
		parts.push(keyword.as_str().to_string());
	}

	match signature {
		Signature::Callable {
			return_type,
			name,
			parameters,
		} => {
			if let Some(return_type) = return_type {
				parts.push(return_type.plain());
			}
			let name = if keyword == Some(Keyword::Operator) {
				format!("operator {name}")
			} else {
				name.to_string()
			};
			parts.push(format!("{name}({})", render_parameters(parameters)));
		}
		Signature::Property { ty, name } => {
			parts.push(ty.plain());
			parts.push(name.to_string());
		}
	}

	parts.retain(|part| !part.is_empty());
	parts.join(" ")
}

/// Render a parameter list without the surrounding parentheses.
pub fn render_parameters(parameters: &[Parameter]) -> String {
	parameters
		.iter()
		.map(render_parameter)
		.collect::<Vec<_>>()
		.join(", ")
}

/// Render one parameter as `[required ]<type> <name>[ = <default>]`.
pub fn render_parameter(parameter: &Parameter) -> String {
	let mut out = String::new();
	if parameter.is_required_named() {
		out.push_str("required ");
	}
	let ty = parameter.ty.plain();
	if !ty.is_empty() {
		out.push_str(&ty);
		out.push(' ');
	}
	out.push_str(&parameter.name);
	if let Some(default) = &parameter.default_value {
		out.push_str(" = ");
		out.push_str(default.trim());
	}
	out
}

fn property_keyword(modifiers: Modifiers) -> Option<Keyword> {
	if modifiers.contains(Modifiers::STATIC) {
		Some(Keyword::Static)
	} else if modifiers.contains(Modifiers::CONST) {
		Some(Keyword::Const)
	} else {
		None
	}
}

/// Keyword applying to a method declaration.
pub fn method_keyword(method: &Method) -> Option<Keyword> {
	if method.is_operator {
		Some(Keyword::Operator)
	} else if method.is_static() {
		Some(Keyword::Static)
	} else {
		None
	}
}

/// Keyword applying to a constructor declaration.
pub fn constructor_keyword(constructor: &Constructor) -> Option<Keyword> {
	if constructor.modifiers.contains(Modifiers::FACTORY) {
		Some(Keyword::Factory)
	} else if constructor.modifiers.contains(Modifiers::CONST) {
		Some(Keyword::Const)
	} else {
		None
	}
}

/// Method signature, optionally with its `static` keyword. Operators always keep `operator`.
pub fn method_signature(method: &Method, with_keyword: bool) -> String {
	format_signature(
		Signature::Callable {
			return_type: Some(&method.return_type),
			name: &method.info.name,
			parameters: &method.parameters,
		},
		method_keyword(method).filter(|keyword| with_keyword || *keyword == Keyword::Operator),
	)
}

/// Constructor signature, optionally with its `const`/`factory` keyword.
pub fn constructor_signature(constructor: &Constructor, with_keyword: bool) -> String {
	format_signature(
		Signature::Callable {
			return_type: None,
			name: &constructor.info.name,
			parameters: &constructor.parameters,
		},
		if with_keyword { constructor_keyword(constructor) } else { None },
	)
}

/// Top-level function signature.
pub fn function_signature(function: &Function) -> String {
	format_signature(
		Signature::Callable {
			return_type: Some(&function.return_type),
			name: &function.info.name,
			parameters: &function.parameters,
		},
		None,
	)
}

/// Field signature, optionally with its `static`/`const` keyword.
pub fn field_signature(field: &Field, with_keyword: bool) -> String {
	format_signature(
		Signature::Property {
			ty: &field.ty,
			name: &field.info.name,
		},
		if with_keyword { property_keyword(field.modifiers) } else { None },
	)
}

/// Top-level variable signature, optionally with its `static`/`const` keyword.
pub fn variable_signature(variable: &Variable, with_keyword: bool) -> String {
	format_signature(
		Signature::Property {
			ty: &variable.ty,
			name: &variable.info.name,
		},
		if with_keyword { property_keyword(variable.modifiers) } else { None },
	)
}
