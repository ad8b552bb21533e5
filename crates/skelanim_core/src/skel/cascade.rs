use crate::skel::Result;
use crate::skel::anim::{decode_generic, decode_versioned};
use crate::skel::raw::scan_raw;
use crate::skel::record::{AnimationRecord, Strategy};
use crate::skel::text::scan_text;

/// Byte-level strategy signature shared by every cascade step.
pub type StrategyFn = fn(&[u8]) -> Result<Vec<AnimationRecord>>;

/// One step in the extraction cascade.
#[derive(Debug, Clone, Copy)]
pub struct CascadeStep {
	/// Stable step label, used in logs and attempt records.
	pub label: &'static str,
	/// Strategy family reported when this step wins.
	pub strategy: Strategy,
	/// Strategy entry point.
	pub run: StrategyFn,
}

impl CascadeStep {
	/// Create a step.
	pub const fn new(label: &'static str, strategy: Strategy, run: StrategyFn) -> Self {
		Self { label, strategy, run }
	}
}

/// Ordered list of strategies tried before the predefined fallback.
pub type Cascade = Vec<CascadeStep>;

/// Default cascade, most to least structured.
pub fn default_cascade() -> Cascade {
	vec![
		CascadeStep::new("structured-versioned", Strategy::Structured, decode_versioned),
		CascadeStep::new("structured-generic", Strategy::Structured, decode_generic),
		CascadeStep::new("text", Strategy::Text, scan_text),
		CascadeStep::new("raw-scan", Strategy::RawScan, scan_raw),
	]
}
