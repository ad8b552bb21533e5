use std::path::PathBuf;

use skelanim::skel::{Extractor, Result};

use crate::cmd::util::{PolicyArgs, emit_json, outcome_json, strategy_label};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long)]
	pub json: bool,
	#[command(flatten)]
	pub policy: PolicyArgs,
}

/// Run the cascade on one file and print every attempt and the recovered animations.
pub fn run(args: Args) -> Result<()> {
	let Args { file, json, policy } = args;

	let key = file.file_stem().map(|stem| stem.to_string_lossy().into_owned()).unwrap_or_default();
	let mut extractor = Extractor::new(policy.to_policy());
	let outcome = extractor.process_file(&file, key.clone());

	if json {
		emit_json(&outcome_json(&key, &file, outcome));
		return Ok(());
	}

	println!("path: {}", file.display());
	println!("strategy: {}", strategy_label(outcome.strategy));
	println!("attempts:");
	for attempt in &outcome.attempts {
		match &attempt.error {
			Some(err) => println!("  {}: error: {err}", attempt.step),
			None => println!("  {}: found={}", attempt.step, attempt.found),
		}
	}
	println!("animations: {}", outcome.records.len());
	for (index, record) in outcome.records.iter().enumerate() {
		println!("{}. {} (Duration: {:.2} seconds)", index + 1, record.name, record.duration);
	}

	Ok(())
}

#[cfg(test)]
mod tests;
