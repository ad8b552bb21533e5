use std::collections::BTreeSet;

use skelanim::skel::AnimationRecord;

/// Name of the table the generated chunk returns.
pub const TABLE_NAME: &str = "SpineAnimations";

const INDENT: &str = "    ";

const KEYWORDS: [&str; 22] = [
	"and", "break", "do", "else", "elseif", "end", "false", "for", "function", "goto", "if", "in", "local", "nil", "not", "or", "repeat", "return", "then",
	"true", "until", "while",
];

/// One file's worth of animations in the generated config.
#[derive(Debug, Clone, Copy)]
pub struct LuaEntry<'a> {
	/// Output key, used as the table key.
	pub key: &'a str,
	/// Root-relative skeleton path.
	pub path: &'a str,
	/// Animations to emit, in order.
	pub records: &'a [AnimationRecord],
}

/// Render the Lua config chunk. Output depends only on the entries.
pub fn render(entries: &[LuaEntry<'_>], scanned: usize) -> String {
	let mut out = String::new();
	out.push_str("-- Spine animation settings generated by skelanim.\n");
	out.push_str(&format!("-- files scanned: {scanned}, entries: {}\n", entries.len()));
	out.push('\n');
	out.push_str(&format!("local {TABLE_NAME} = {{\n"));

	for entry in entries {
		out.push_str(&format!("{INDENT}[\"{}\"] = {{\n", escape(entry.key)));
		out.push_str(&format!("{INDENT}{INDENT}path = \"{}\",\n", escape(entry.path)));
		out.push_str(&format!("{INDENT}{INDENT}Animation = {{\n"));
		let mut emitted = BTreeSet::new();
		for record in entry.records {
			out.push_str(&format!(
				"{INDENT}{INDENT}{INDENT}{} = {{ name = \"{}\", isLoop = {}, time = {:.2} }},\n",
				table_key(&unique_ident(&to_snake_case_upper(&record.name), &mut emitted)),
				escape(&record.name),
				record.is_loop(),
				record.duration
			));
		}
		out.push_str(&format!("{INDENT}{INDENT}}},\n"));
		out.push_str(&format!("{INDENT}}},\n"));
	}

	out.push_str("}\n\n");
	out.push_str(&format!("return {TABLE_NAME}\n"));
	out
}

/// Convert a mixed-case name to upper snake case: `BigWin_End` becomes `BIG_WIN_END`.
///
/// Runs of capitals stay together until a lowercase letter follows, so `HTTPServer`
/// becomes `HTTP_SERVER`.
pub fn to_snake_case_upper(name: &str) -> String {
	let mut out: Vec<char> = Vec::with_capacity(name.len() + 4);
	let mut last_was_upper = false;

	for ch in name.chars() {
		if ch.is_uppercase() {
			if !last_was_upper && out.last().is_some_and(|prev| *prev != '_') {
				out.push('_');
			}
			out.push(ch);
			last_was_upper = true;
		} else if ch == '_' {
			out.push('_');
			last_was_upper = false;
		} else {
			if last_was_upper && out.len() > 1 && out[out.len() - 2] != '_' {
				out.insert(out.len() - 1, '_');
			}
			out.extend(ch.to_uppercase());
			last_was_upper = false;
		}
	}

	out.into_iter().collect()
}

/// Claim `ident` in `emitted`, suffixing `_2`, `_3`, ... while it is taken.
///
/// Names like `Idle` and `idle` share one identifier; without a suffix the later
/// field would overwrite the earlier one in the table constructor.
pub fn unique_ident(ident: &str, emitted: &mut BTreeSet<String>) -> String {
	let mut candidate = ident.to_owned();
	let mut suffix = 2_usize;
	while !emitted.insert(candidate.clone()) {
		candidate = format!("{ident}_{suffix}");
		suffix += 1;
	}
	candidate
}

/// Render a table key: bare when it is a valid identifier, bracketed otherwise.
///
/// Keys starting with a digit get a leading `_` first.
pub fn table_key(ident: &str) -> String {
	let ident = if ident.starts_with(|ch: char| ch.is_ascii_digit()) {
		format!("_{ident}")
	} else {
		ident.to_owned()
	};

	if is_identifier(&ident) { ident } else { format!("[\"{}\"]", escape(&ident)) }
}

fn is_identifier(text: &str) -> bool {
	let mut chars = text.chars();
	chars.next().is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
		&& chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
		&& !KEYWORDS.contains(&text)
}

/// Escape text for a double-quoted Lua string literal.
pub fn escape(input: &str) -> String {
	let mut out = String::with_capacity(input.len());
	for ch in input.chars() {
		match ch {
			'"' => out.push_str("\\\""),
			'\\' => out.push_str("\\\\"),
			'\n' => out.push_str("\\n"),
			'\r' => out.push_str("\\r"),
			'\t' => out.push_str("\\t"),
			c if c.is_ascii_control() => out.push_str(&format!("\\{:03}", c as u32)),
			c => out.push(c),
		}
	}
	out
}
