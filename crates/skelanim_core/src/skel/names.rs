use std::sync::LazyLock;

use regex::Regex;

/// Longest accepted animation name, in characters.
pub const MAX_NAME_CHARS: usize = 50;

const RESERVED: [&str; 6] = ["null", "undefined", "true", "false", "NaN", "Infinity"];

static UUID: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$").expect("uuid pattern compiles"));

/// Return whether `name` is plausible as an animation name.
///
/// Shared by every strategy that derives names from raw text.
pub fn is_valid_name(name: &str) -> bool {
	if name.is_empty() || name.chars().count() > MAX_NAME_CHARS {
		return false;
	}
	if name.chars().any(char::is_control) {
		return false;
	}
	if UUID.is_match(name) || is_numeric(name) {
		return false;
	}
	!RESERVED.contains(&name)
}

/// Return whether every byte is printable ASCII (`0x20..=0x7E`).
pub fn is_printable_ascii(name: &str) -> bool {
	name.bytes().all(|byte| (0x20..=0x7E).contains(&byte))
}

/// Digits, optionally in dot-separated groups like a version tag.
fn is_numeric(name: &str) -> bool {
	name.split('.').all(|group| !group.is_empty() && group.bytes().all(|byte| byte.is_ascii_digit()))
}

#[cfg(test)]
mod tests;
