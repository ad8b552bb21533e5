use std::path::{Path, PathBuf};

use skelanim::skel::{Result, SkelError};
use tracing::warn;
use walkdir::WalkDir;

/// One discovered skeleton file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkelFile {
	/// Absolute or root-joined path used for reading.
	pub path: PathBuf,
	/// Path relative to the discovery root.
	pub relative: PathBuf,
	/// Output key: relative path with `/` separators and no extension.
	pub key: String,
}

/// Recursively collect files under `root` whose extension matches `ext`, ignoring case.
///
/// Entries come back sorted by file name within each directory. Unreadable entries are skipped.
pub fn discover(root: &Path, ext: &str) -> Result<Vec<SkelFile>> {
	if !root.is_dir() {
		return Err(SkelError::InvalidDirectory { path: root.to_path_buf() });
	}

	let ext = ext.trim_start_matches('.');
	let mut files = Vec::new();
	for entry in WalkDir::new(root).sort_by_file_name() {
		let entry = match entry {
			Ok(entry) => entry,
			Err(err) => {
				warn!(error = %err, "skipping unreadable entry");
				continue;
			}
		};
		if !entry.file_type().is_file() || !has_extension(entry.path(), ext) {
			continue;
		}

		let relative = entry.path().strip_prefix(root).unwrap_or(entry.path()).to_path_buf();
		files.push(SkelFile {
			key: output_key(&relative),
			path: entry.into_path(),
			relative,
		});
	}

	Ok(files)
}

/// Return whether `path` has extension `ext`, ignoring ASCII case.
pub fn has_extension(path: &Path, ext: &str) -> bool {
	path.extension()
		.and_then(|value| value.to_str())
		.is_some_and(|value| value.eq_ignore_ascii_case(ext))
}

/// Build the output key for a root-relative path.
pub fn output_key(relative: &Path) -> String {
	display_relative(&relative.with_extension(""))
}

/// Render a root-relative path with `/` separators.
pub fn display_relative(relative: &Path) -> String {
	relative
		.components()
		.map(|component| component.as_os_str().to_string_lossy())
		.collect::<Vec<_>>()
		.join("/")
}

#[cfg(test)]
mod tests;
