use std::path::{Path, PathBuf};

/// Duration substituted for implausible or missing values, in seconds.
pub const DEFAULT_DURATION: f32 = 1.0;

/// One recovered animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationRecord {
	/// Animation name as stored in the file.
	pub name: String,
	/// Duration in seconds.
	pub duration: f32,
}

impl AnimationRecord {
	/// Create a record.
	pub fn new(name: impl Into<String>, duration: f32) -> Self {
		Self {
			name: name.into(),
			duration,
		}
	}

	/// Create a record with [`DEFAULT_DURATION`].
	pub fn named(name: impl Into<String>) -> Self {
		Self::new(name, DEFAULT_DURATION)
	}

	/// Whether the name marks a looping animation.
	pub fn is_loop(&self) -> bool {
		self.name.to_ascii_lowercase().contains("loop")
	}
}

/// Replace durations outside `[0, ceiling]` (or non-finite) with [`DEFAULT_DURATION`].
///
/// `-0.0` comes back as `0.0`, so the result never carries a sign bit.
pub fn clamp_duration(duration: f32, ceiling: f32) -> f32 {
	if duration.is_finite() && (0.0..=ceiling).contains(&duration) {
		duration.abs()
	} else {
		DEFAULT_DURATION
	}
}

/// Extraction strategy family that produced an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strategy {
	/// Schema-driven decode of the animation table.
	Structured,
	/// Text heuristics over the raw file contents.
	Text,
	/// Byte-stride scan for length-prefixed strings.
	RawScan,
	/// Filename-keyed canned list.
	Predefined,
}

impl Strategy {
	/// Render strategy as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Structured => "structured",
			Self::Text => "text",
			Self::RawScan => "raw_scan",
			Self::Predefined => "predefined",
		}
	}
}

/// One executed cascade step.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyAttempt {
	/// Cascade step label, for example `structured-versioned`.
	pub step: &'static str,
	/// Strategy family of the step; `None` for the file read.
	pub strategy: Option<Strategy>,
	/// Number of records the step returned.
	pub found: usize,
	/// Error message when the step failed outright.
	pub error: Option<String>,
}

/// Final result for one input file.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionOutcome {
	/// Path the outcome was produced for.
	pub source_path: PathBuf,
	/// Records sorted and deduplicated by name.
	pub records: Vec<AnimationRecord>,
	/// Strategy that produced `records`; `None` when nothing was recovered.
	pub strategy: Option<Strategy>,
	/// Whether any strategy produced records.
	pub ok: bool,
	/// Every step that ran, in order.
	pub attempts: Vec<StrategyAttempt>,
}

impl ExtractionOutcome {
	/// Build a successful outcome, normalizing record order.
	pub fn success(source_path: PathBuf, mut records: Vec<AnimationRecord>, strategy: Strategy, attempts: Vec<StrategyAttempt>) -> Self {
		records.sort_by(|left, right| left.name.cmp(&right.name));
		records.dedup_by(|later, earlier| later.name == earlier.name);
		Self {
			source_path,
			records,
			strategy: Some(strategy),
			ok: true,
			attempts,
		}
	}

	/// Build an outcome with no records.
	pub fn failure(source_path: PathBuf, attempts: Vec<StrategyAttempt>) -> Self {
		Self {
			source_path,
			records: Vec::new(),
			strategy: None,
			ok: false,
			attempts,
		}
	}

	/// Whether the predefined fallback produced this outcome.
	pub fn used_predefined(&self) -> bool {
		self.strategy == Some(Strategy::Predefined)
	}
}

/// Lowercased file name and parent-directory name used by the predefined fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileIdentity {
	/// Lowercased file name including extension.
	pub file_name: String,
	/// Lowercased name of the immediate parent directory, or empty.
	pub parent_dir: String,
}

impl FileIdentity {
	/// Create an identity from raw names; both are lowercased.
	pub fn new(file_name: &str, parent_dir: &str) -> Self {
		Self {
			file_name: file_name.to_lowercase(),
			parent_dir: parent_dir.to_lowercase(),
		}
	}

	/// Derive an identity from a path.
	pub fn from_path(path: &Path) -> Self {
		let file_name = path.file_name().map(|name| name.to_string_lossy()).unwrap_or_default();
		let parent_dir = path
			.parent()
			.and_then(Path::file_name)
			.map(|name| name.to_string_lossy())
			.unwrap_or_default();
		Self::new(&file_name, &parent_dir)
	}
}

#[cfg(test)]
mod tests;
