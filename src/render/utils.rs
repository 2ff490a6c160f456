use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that are not allowed in file names on common filesystems.
pub const RESERVED_FILE_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Default summary width used by [`first_line`].
pub const SUMMARY_WIDTH: usize = 80;

/// Inline HTML elements that appear in pre-rendered type names and docs.
const MARKUP_TAGS: &str = "a|abbr|b|br|code|em|i|pre|span|strong|sub|sup";

// Only known element names count as tags, so generics such as `List<int>` or `Map<K, V>` survive.
static TAG: Lazy<Regex> =
	Lazy::new(|| Regex::new(&format!(r"</?(?:{MARKUP_TAGS})(?:[ \t\r\n][^<>]*)?/?>")).unwrap());

/// Remove inline HTML tags from `text`, leaving entities and type arguments untouched.
pub fn strip_tags(text: &str) -> String {
	TAG.replace_all(text, "").into_owned()
}

/// Remove markup tags and decode `&lt;`, `&gt;` and `&amp;`.
///
/// Unbalanced tags are left as-is. `&amp;` is decoded last so `&amp;lt;` yields `&lt;`.
pub fn strip_markup(text: &str) -> String {
	strip_tags(text)
		.replace("&lt;", "<")
		.replace("&gt;", ">")
		.replace("&amp;", "&")
}

/// Replace characters that are invalid in file names with `_`.
pub fn sanitize_file_name(name: &str) -> String {
	name.chars()
		.map(|c| if RESERVED_FILE_CHARS.contains(&c) { '_' } else { c })
		.collect()
}

/// Trimmed first line of `text`, truncated to `max_len` characters with a trailing `...`.
pub fn first_line(text: &str, max_len: usize) -> String {
	let line = text.trim().lines().next().unwrap_or_default().trim();
	if line.chars().count() <= max_len {
		return line.to_string();
	}
	let mut truncated: String = line.chars().take(max_len.saturating_sub(3)).collect();
	truncated.push_str("...");
	truncated
}
