use bitflags::bitflags;
use serde::{Deserialize, Deserializer};

bitflags! {
	/// Declaration modifiers recorded by the model builder.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
	pub struct Modifiers: u16 {
		/// `abstract`
		const ABSTRACT = 1 << 0;
		/// `static`
		const STATIC = 1 << 1;
		/// `const`
		const CONST = 1 << 2;
		/// `final`
		const FINAL = 1 << 3;
		/// `late`
		const LATE = 1 << 4;
		/// `override`
		const OVERRIDE = 1 << 5;
		/// `factory`
		const FACTORY = 1 << 6;
	}
}

impl Default for Modifiers {
	fn default() -> Self {
		Self::empty()
	}
}

/// A single modifier keyword as spelled in the model dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
	/// `static`
	Static,
	/// `const`
	Const,
	/// `final`
	Final,
	/// `late`
	Late,
	/// `factory`
	Factory,
	/// `override`
	Override,
	/// `abstract`
	Abstract,
}

impl Modifier {
	/// Canonical rendering order.
	pub const ORDER: [Modifier; 7] = [
		Modifier::Static,
		Modifier::Const,
		Modifier::Final,
		Modifier::Late,
		Modifier::Factory,
		Modifier::Override,
		Modifier::Abstract,
	];

	/// Source keyword.
	pub fn keyword(self) -> &'static str {
		match self {
			Self::Static => "static",
			Self::Const => "const",
			Self::Final => "final",
			Self::Late => "late",
			Self::Factory => "factory",
			Self::Override => "override",
			Self::Abstract => "abstract",
		}
	}

	/// Flag bit for this keyword.
	pub fn flag(self) -> Modifiers {
		match self {
			Self::Static => Modifiers::STATIC,
			Self::Const => Modifiers::CONST,
			Self::Final => Modifiers::FINAL,
			Self::Late => Modifiers::LATE,
			Self::Factory => Modifiers::FACTORY,
			Self::Override => Modifiers::OVERRIDE,
			Self::Abstract => Modifiers::ABSTRACT,
		}
	}
}

impl Modifiers {
	/// Keywords present in the set, in canonical order.
	pub fn keywords(self) -> Vec<&'static str> {
		Modifier::ORDER
			.iter()
			.filter(|modifier| self.contains(modifier.flag()))
			.map(|modifier| modifier.keyword())
			.collect()
	}

	/// Keywords joined with `, `, or `None` when the set is empty.
	pub fn render_list(self) -> Option<String> {
		(!self.is_empty()).then(|| self.keywords().join(", "))
	}
}

impl FromIterator<Modifier> for Modifiers {
	fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
		iter.into_iter().fold(Self::empty(), |acc, modifier| acc | modifier.flag())
	}
}

impl<'de> Deserialize<'de> for Modifiers {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let keywords = Vec::<Modifier>::deserialize(deserializer)?;
		Ok(keywords.into_iter().collect())
	}
}
