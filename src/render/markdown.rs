use std::path::{Path, PathBuf};

/// Language tag placed on fenced declaration blocks.
pub const CODE_LANG: &str = "dart";

/// An output document under construction.
///
/// Blocks are separated by exactly one blank line. Bullets and bare lines added back to back
/// stay in the same block so lists render contiguously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
	path: PathBuf,
	body: String,
	in_list: bool,
}

impl Document {
	/// Start an empty document destined for `path`, relative to the output root.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			body: String::new(),
			in_list: false,
		}
	}

	/// Relative output path.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Rendered text, always terminated by a single newline when non-empty.
	pub fn body(&self) -> &str {
		&self.body
	}

	/// Consume the buffer, returning its path and text.
	pub fn into_parts(self) -> (PathBuf, String) {
		(self.path, self.body)
	}

	fn begin_block(&mut self) {
		if !self.body.is_empty() {
			self.body.push('\n');
		}
		self.in_list = false;
	}

	/// `#`-style heading at `level` (1-based).
	pub fn heading(&mut self, level: usize, text: &str) -> &mut Self {
		self.begin_block();
		self.body.push_str(&"#".repeat(level.max(1)));
		self.body.push(' ');
		self.body.push_str(text.trim());
		self.body.push('\n');
		self
	}

	/// Prose paragraph. Empty text is ignored.
	pub fn paragraph(&mut self, text: &str) -> &mut Self {
		let text = text.trim();
		if text.is_empty() {
			return self;
		}
		self.begin_block();
		self.body.push_str(text);
		self.body.push('\n');
		self
	}

	/// Fenced code block.
	pub fn code_block(&mut self, code: &str) -> &mut Self {
		self.begin_block();
		self.body.push_str("```");
		self.body.push_str(CODE_LANG);
		self.body.push('\n');
		self.body.push_str(code.trim_end());
		self.body.push_str("\n```\n");
		self
	}

	/// Bullet list item; consecutive bullets form one list.
	pub fn bullet(&mut self, text: &str) -> &mut Self {
		if !self.in_list {
			self.begin_block();
			self.in_list = true;
		}
		self.body.push_str("- ");
		self.body.push_str(text);
		self.body.push('\n');
		self
	}
}

/// Wrap `text` in inline code backticks.
pub fn inline_code(text: &str) -> String {
	if text.contains('`') {
		format!("`` {text} ``")
	} else {
		format!("`{text}`")
	}
}

/// Markdown link, with `/` separators regardless of platform.
///
/// Destinations containing whitespace or parentheses are wrapped in `<...>`.
pub fn link(text: &str, target: &Path) -> String {
	let target = target
		.components()
		.map(|component| component.as_os_str().to_string_lossy())
		.collect::<Vec<_>>()
		.join("/");
	if target.contains(|c: char| c.is_whitespace() || c == '(' || c == ')') {
		format!("[{text}](<{target}>)")
	} else {
		format!("[{text}]({target})")
	}
}
