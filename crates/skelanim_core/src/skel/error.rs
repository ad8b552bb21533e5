use std::path::PathBuf;

use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, SkelError>;

/// Errors produced while decoding and scanning skeleton data.
///
/// Every variant except `InvalidDirectory` is local to one strategy attempt; the
/// extractor records it and moves on to the next strategy.
#[derive(Debug, Error)]
pub enum SkelError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Not enough bytes remained for a requested read.
	#[error("buffer underrun at offset {at}, need {need} bytes, remaining {rem}")]
	BufferUnderrun {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// A section or entry count fell outside its plausibility window.
	#[error("implausible {section} count {count} (expected 0..={max})")]
	ImplausibleCount {
		/// Section whose count was read.
		section: &'static str,
		/// Parsed signed count.
		count: i32,
		/// Inclusive upper bound of the window.
		max: i32,
	},
	/// Forward scan ran out of bytes without finding a plausible animation count.
	#[error("no plausible animation count after offset {from} ({scanned} candidates scanned)")]
	UnrecoverablePosition {
		/// Offset the scan started from.
		from: usize,
		/// Number of candidate integers inspected.
		scanned: usize,
	},
	/// Length-prefixed string failed its sanity probe or UTF-8 decode.
	#[error("name decode failed at offset {at}: {reason}")]
	NameDecodeFailure {
		/// Offset of the length prefix.
		at: usize,
		/// Short description of the rejected input.
		reason: String,
	},
	/// Input root is missing or not a directory.
	#[error("directory is not valid: {}", path.display())]
	InvalidDirectory {
		/// User-provided root path.
		path: PathBuf,
	},
}
