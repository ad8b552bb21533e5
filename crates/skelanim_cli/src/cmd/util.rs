use std::path::Path;

use skelanim::skel::{ExtractPolicy, ExtractionOutcome, Strategy};

/// Fallback flags shared by every command that runs the cascade.
#[derive(clap::Args, Debug, Clone)]
pub struct PolicyArgs {
	#[arg(long = "force-predefined")]
	pub force_predefined: bool,
	#[arg(long = "no-auto-predefined")]
	pub no_auto_predefined: bool,
	#[arg(long)]
	pub debug: bool,
}

impl PolicyArgs {
	pub fn to_policy(&self) -> ExtractPolicy {
		ExtractPolicy {
			force_predefined: self.force_predefined,
			auto_predefined: !self.no_auto_predefined,
			debug: self.debug,
		}
	}
}

/// Print a serializable value as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(value: &T) {
	match serde_json::to_string_pretty(value) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: failed to serialize json: {err}"),
	}
}

pub(crate) fn strategy_label(strategy: Option<Strategy>) -> &'static str {
	strategy.map_or("none", Strategy::as_str)
}

pub(crate) fn outcome_json(key: &str, relative_path: &Path, outcome: &ExtractionOutcome) -> OutcomeJson {
	OutcomeJson {
		key: key.to_owned(),
		path: relative_path.display().to_string(),
		ok: outcome.ok,
		strategy: outcome.strategy.map(Strategy::as_str),
		animations: outcome
			.records
			.iter()
			.map(|record| AnimationJson {
				name: record.name.clone(),
				duration: record.duration,
				is_loop: record.is_loop(),
			})
			.collect(),
		attempts: outcome
			.attempts
			.iter()
			.map(|attempt| AttemptJson {
				step: attempt.step,
				found: attempt.found,
				error: attempt.error.clone(),
			})
			.collect(),
	}
}

#[derive(serde::Serialize)]
pub(crate) struct AnimationJson {
	name: String,
	duration: f32,
	is_loop: bool,
}

#[derive(serde::Serialize)]
pub(crate) struct AttemptJson {
	step: &'static str,
	found: usize,
	error: Option<String>,
}

#[derive(serde::Serialize)]
pub(crate) struct OutcomeJson {
	key: String,
	path: String,
	ok: bool,
	strategy: Option<&'static str>,
	animations: Vec<AnimationJson>,
	attempts: Vec<AttemptJson>,
}
