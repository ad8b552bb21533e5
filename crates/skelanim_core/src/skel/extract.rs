//! Extraction orchestrator: runs the cascade per file and keeps batch state.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::skel::SkelError;
use crate::skel::cascade::{Cascade, default_cascade};
use crate::skel::predefined::{lookup, lookup_entry};
use crate::skel::record::{ExtractionOutcome, FileIdentity, Strategy, StrategyAttempt};

/// Step label recorded when the file itself could not be read.
pub const READ_STEP: &str = "read";
/// Step label recorded for the predefined fallback.
pub const PREDEFINED_STEP: &str = "predefined";

/// Per-step diagnostics go to `info` in debug mode and `debug` otherwise.
macro_rules! step_event {
	($debug:expr, $($arg:tt)+) => {
		if $debug {
			tracing::info!($($arg)+);
		} else {
			tracing::debug!($($arg)+);
		}
	};
}

/// Options controlling fallback behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractPolicy {
	/// Skip every strategy and use the predefined list directly.
	pub force_predefined: bool,
	/// Use the predefined list when every strategy comes up empty.
	pub auto_predefined: bool,
	/// Raise per-step diagnostics to `info`.
	pub debug: bool,
}

impl Default for ExtractPolicy {
	fn default() -> Self {
		Self {
			force_predefined: false,
			auto_predefined: true,
			debug: false,
		}
	}
}

/// Batch counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
	/// Files processed.
	pub attempted: usize,
	/// Files with at least one record, predefined included.
	pub succeeded: usize,
	/// Successful files whose records came from the predefined list.
	pub predefined: usize,
	/// Files with no records.
	pub failed: usize,
}

/// Runs the strategy cascade over files and collects outcomes by key.
#[derive(Debug)]
pub struct Extractor {
	policy: ExtractPolicy,
	cascade: Cascade,
	stats: ExtractStats,
	outcomes: BTreeMap<String, ExtractionOutcome>,
}

impl Extractor {
	/// Create an extractor with the default cascade.
	pub fn new(policy: ExtractPolicy) -> Self {
		Self::with_cascade(policy, default_cascade())
	}

	/// Create an extractor with a custom cascade.
	pub fn with_cascade(policy: ExtractPolicy, cascade: Cascade) -> Self {
		Self {
			policy,
			cascade,
			stats: ExtractStats::default(),
			outcomes: BTreeMap::new(),
		}
	}

	/// Return the active policy.
	pub fn policy(&self) -> &ExtractPolicy {
		&self.policy
	}

	/// Run the cascade over in-memory bytes. Does not touch batch state.
	///
	/// `path` is only used for the predefined lookup and the outcome's source path.
	pub fn extract_bytes(&self, path: &Path, bytes: &[u8]) -> ExtractionOutcome {
		if self.policy.force_predefined {
			return self.predefined(path, Vec::new());
		}

		let mut attempts = Vec::with_capacity(self.cascade.len() + 1);
		for step in &self.cascade {
			match (step.run)(bytes) {
				Ok(records) if !records.is_empty() => {
					step_event!(self.policy.debug, path = %path.display(), step = step.label, found = records.len(), "strategy succeeded");
					attempts.push(StrategyAttempt {
						step: step.label,
						strategy: Some(step.strategy),
						found: records.len(),
						error: None,
					});
					return ExtractionOutcome::success(path.to_path_buf(), records, step.strategy, attempts);
				}
				Ok(_) => {
					step_event!(self.policy.debug, path = %path.display(), step = step.label, "strategy found nothing");
					attempts.push(StrategyAttempt {
						step: step.label,
						strategy: Some(step.strategy),
						found: 0,
						error: None,
					});
				}
				Err(err) => {
					step_event!(self.policy.debug, path = %path.display(), step = step.label, error = %err, "strategy failed");
					attempts.push(StrategyAttempt {
						step: step.label,
						strategy: Some(step.strategy),
						found: 0,
						error: Some(err.to_string()),
					});
				}
			}
		}

		self.fallback(path, attempts)
	}

	/// Read and extract one file, update counters, and store the outcome under `key`.
	///
	/// Under forced predefined mode the file is never opened.
	pub fn process_file(&mut self, path: &Path, key: impl Into<String>) -> &ExtractionOutcome {
		let key = key.into();
		let outcome = if self.policy.force_predefined {
			self.predefined(path, Vec::new())
		} else {
			match fs::read(path) {
				Ok(bytes) => self.extract_bytes(path, &bytes),
				Err(err) => {
					let err = SkelError::from(err);
					warn!(path = %path.display(), error = %err, "failed to read file");
					let attempts = vec![StrategyAttempt {
						step: READ_STEP,
						strategy: None,
						found: 0,
						error: Some(err.to_string()),
					}];
					self.fallback(path, attempts)
				}
			}
		};

		self.stats.attempted += 1;
		if outcome.ok {
			self.stats.succeeded += 1;
			if outcome.used_predefined() {
				self.stats.predefined += 1;
			}
			info!(
				%key,
				strategy = outcome.strategy.map_or("none", Strategy::as_str),
				animations = outcome.records.len(),
				"processed"
			);
		} else {
			self.stats.failed += 1;
			warn!(%key, attempts = outcome.attempts.len(), "no animations recovered");
		}

		match self.outcomes.entry(key) {
			Entry::Occupied(mut slot) => {
				slot.insert(outcome);
				slot.into_mut()
			}
			Entry::Vacant(slot) => slot.insert(outcome),
		}
	}

	/// Return batch counters.
	pub fn stats(&self) -> ExtractStats {
		self.stats
	}

	/// Return stored outcomes in key order.
	pub fn outcomes(&self) -> &BTreeMap<String, ExtractionOutcome> {
		&self.outcomes
	}

	/// Consume the extractor and return stored outcomes.
	pub fn into_outcomes(self) -> BTreeMap<String, ExtractionOutcome> {
		self.outcomes
	}

	fn fallback(&self, path: &Path, attempts: Vec<StrategyAttempt>) -> ExtractionOutcome {
		if self.policy.auto_predefined {
			return self.predefined(path, attempts);
		}
		step_event!(self.policy.debug, path = %path.display(), "all strategies failed, predefined fallback disabled");
		ExtractionOutcome::failure(path.to_path_buf(), attempts)
	}

	fn predefined(&self, path: &Path, mut attempts: Vec<StrategyAttempt>) -> ExtractionOutcome {
		let identity = FileIdentity::from_path(path);
		let records = lookup(&identity);
		let entry = lookup_entry(&identity).map_or("default", |entry| entry.label);
		info!(path = %path.display(), entry, animations = records.len(), "using predefined animations");

		attempts.push(StrategyAttempt {
			step: PREDEFINED_STEP,
			strategy: Some(Strategy::Predefined),
			found: records.len(),
			error: None,
		});
		ExtractionOutcome::success(path.to_path_buf(), records, Strategy::Predefined, attempts)
	}
}
