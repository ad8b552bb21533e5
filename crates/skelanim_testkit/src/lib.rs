//! Shared test helpers for workspace crates.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Little-endian byte builder for synthetic skeleton buffers.
#[derive(Debug, Clone, Default)]
pub struct SkelBuilder {
	bytes: Vec<u8>,
}

impl SkelBuilder {
	/// Create an empty builder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append one raw byte.
	pub fn u8(mut self, value: u8) -> Self {
		self.bytes.push(value);
		self
	}

	/// Append a little-endian `i32`.
	pub fn i32(mut self, value: i32) -> Self {
		self.bytes.extend_from_slice(&value.to_le_bytes());
		self
	}

	/// Append a little-endian `f32`.
	pub fn f32(mut self, value: f32) -> Self {
		self.bytes.extend_from_slice(&value.to_le_bytes());
		self
	}

	/// Append raw bytes.
	pub fn raw(mut self, bytes: &[u8]) -> Self {
		self.bytes.extend_from_slice(bytes);
		self
	}

	/// Append `n` copies of `byte`.
	pub fn fill(mut self, byte: u8, n: usize) -> Self {
		self.bytes.resize(self.bytes.len() + n, byte);
		self
	}

	/// Append a length-prefixed string; the prefix counts a trailing zero terminator.
	pub fn string(self, text: &str) -> Self {
		let len = i32::try_from(text.len() + 1).expect("test string fits i32");
		self.i32(len).raw(text.as_bytes()).u8(0)
	}

	/// Append the versioned header: version tag, no hash, scale `1.0`, empty default skin.
	pub fn versioned_header(self, version: &str) -> Self {
		self.string(version).u8(0).f32(1.0).i32(0)
	}

	/// Append zero counts for every section preceding the animation table.
	pub fn empty_sections(self) -> Self {
		(0..7).fold(self, |builder, _| builder.i32(0))
	}

	/// Append one versioned animation entry whose timeline payload exactly fills the tail skip.
	pub fn versioned_animation(self, name: &str, duration: f32) -> Self {
		self.string(name).f32(duration).i32(0).fill(0, 2000)
	}

	/// Return current length.
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	/// Return whether nothing has been appended.
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Finish and return the bytes.
	pub fn build(self) -> Vec<u8> {
		self.bytes
	}
}

/// Create a temporary directory populated with `(relative path, bytes)` files.
pub fn fixture_tree(files: &[(&str, &[u8])]) -> tempfile::TempDir {
	let dir = tempfile::tempdir().expect("temp dir creates");
	for (relative, bytes) in files {
		write_fixture(dir.path(), relative, bytes);
	}
	dir
}

/// Write one fixture file, creating parent directories.
pub fn write_fixture(root: &Path, relative: &str, bytes: &[u8]) -> PathBuf {
	let path = root.join(relative);
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent).expect("fixture parent creates");
	}
	fs::write(&path, bytes).expect("fixture writes");
	path
}

/// Path to a workspace binary, building it first unless cargo already exported
/// `CARGO_BIN_EXE_<name>`.
pub fn cargo_bin(name: &str) -> PathBuf {
	if let Some(path) = std::env::var_os(format!("CARGO_BIN_EXE_{name}")) {
		return PathBuf::from(path);
	}

	let status = Command::new("cargo")
		.current_dir(workspace_root())
		.args(["build", "--quiet", "--bin", name])
		.status()
		.expect("cargo build executes");
	let bin = target_dir().join("debug").join(format!("{name}{}", std::env::consts::EXE_SUFFIX));
	assert!(status.success(), "failed to build {name} binary at {}", bin.display());
	bin
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}
