use std::collections::BTreeSet;

use tracing::debug;

use crate::skel::Result;
use crate::skel::names::{is_printable_ascii, is_valid_name};
use crate::skel::record::AnimationRecord;

/// Exclusive upper bound for a length prefix considered by the raw scan.
pub const MAX_RAW_LEN: i32 = 100;

/// Scan every byte offset for a short length-prefixed printable string.
///
/// Assumes nothing about layout, so it also surfaces bone, slot and skin names;
/// it only runs after the structured and text strategies came up empty.
pub fn scan_raw(bytes: &[u8]) -> Result<Vec<AnimationRecord>> {
	let mut found = BTreeSet::new();

	for at in 0..bytes.len().saturating_sub(4) {
		let Some(candidate) = string_at(bytes, at) else {
			continue;
		};
		if is_printable_ascii(candidate) && is_valid_name(candidate) {
			found.insert(candidate.to_owned());
		}
	}

	debug!(len = bytes.len(), candidates = found.len(), "raw scan finished");
	Ok(found.into_iter().map(AnimationRecord::named).collect())
}

fn string_at(bytes: &[u8], at: usize) -> Option<&str> {
	let prefix: [u8; 4] = bytes.get(at..at + 4)?.try_into().ok()?;
	let len = i32::from_le_bytes(prefix);
	if len <= 0 || len >= MAX_RAW_LEN {
		return None;
	}

	let start = at + 4;
	let end = start + len as usize;
	if end > bytes.len() {
		return None;
	}
	std::str::from_utf8(&bytes[start..end - 1]).ok()
}

#[cfg(test)]
mod tests;
