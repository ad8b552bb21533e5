//! Text heuristics over the raw file contents.
//!
//! Useful when a file is actually a text export, or when names are embedded in
//! metadata blocks the structured decoders cannot reach.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::skel::Result;
use crate::skel::names::is_valid_name;
use crate::skel::record::AnimationRecord;

/// Common animation names accepted when they appear quoted.
pub const COMMON_NAMES: [&str; 22] = [
	"idle", "walk", "run", "attack", "jump", "death", "hit", "spawn", "start", "end", "loop", "stand", "fall", "crouch", "shoot", "aim", "reload", "hurt",
	"swim", "climb", "victory", "defeat",
];

static JSON_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""name"\s*:\s*"([^"]+)""#).expect("json name pattern compiles"));
static ATTR_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"name\s*=\s*"([^"]+)""#).expect("attribute name pattern compiles"));

/// Collect animation-name candidates from text patterns. Every record gets the default duration.
///
/// Never fails; an input with no matches yields an empty list.
pub fn scan_text(bytes: &[u8]) -> Result<Vec<AnimationRecord>> {
	let content = String::from_utf8_lossy(bytes);
	let mut found = BTreeSet::new();

	for line in content.lines() {
		if line_mentions_animations(line) {
			adjacent_names(line, &mut found);
		}
	}

	let mut attr_values = BTreeSet::new();
	for caps in JSON_NAME.captures_iter(&content) {
		accept(&caps[1], &mut found);
	}
	for caps in ATTR_NAME.captures_iter(&content) {
		attr_values.insert(caps[1].to_owned());
		accept(&caps[1], &mut found);
	}

	for word in COMMON_NAMES {
		let quoted = content.contains(&format!("\"{word}\"")) || content.contains(&format!("'{word}'"));
		if quoted || attr_values.contains(word) {
			found.insert(word.to_owned());
		}
	}

	debug!(candidates = found.len(), "text scan finished");
	Ok(found.into_iter().map(AnimationRecord::named).collect())
}

fn line_mentions_animations(line: &str) -> bool {
	(line.contains("animation") && line.contains("name")) || line.contains("\"animations\"") || line.contains("'animations'")
}

/// First double-quoted and first single-quoted value after the first `name` token.
fn adjacent_names(line: &str, found: &mut BTreeSet<String>) {
	let Some(at) = line.find("name") else {
		return;
	};
	let tail = line[at + "name".len()..].trim_start();

	for quote in ['"', '\''] {
		// A quote directly after the token closes the token itself, as in `"name": "idle"`.
		let tail = tail.strip_prefix(quote).unwrap_or(tail);
		if let Some(value) = first_quoted(tail, quote) {
			accept(value, found);
		}
	}
}

fn first_quoted(text: &str, quote: char) -> Option<&str> {
	let start = text.find(quote)? + quote.len_utf8();
	let len = text[start..].find(quote)?;
	Some(&text[start..start + len])
}

fn accept(candidate: &str, found: &mut BTreeSet<String>) {
	if is_valid_name(candidate) {
		found.insert(candidate.to_owned());
	}
}

#[cfg(test)]
mod tests;
