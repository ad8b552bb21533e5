use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use skelanim::skel::{ExtractStats, Extractor, Result};
use tracing::info;

use crate::cmd::discover::{discover, display_relative};
use crate::cmd::lua::{LuaEntry, render};
use crate::cmd::util::{OutcomeJson, PolicyArgs, emit_json, outcome_json};

/// Default Lua file name, written inside the scanned directory.
pub const DEFAULT_LUA_OUTPUT: &str = "output.lua";

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
	Lua,
	Json,
}

#[derive(clap::Args)]
pub struct Args {
	pub dir: PathBuf,
	/// Output file; `-` writes to stdout. Lua defaults to `<dir>/output.lua`, JSON to stdout.
	#[arg(long, short)]
	pub output: Option<String>,
	#[arg(long, value_enum, default_value_t = OutputFormat::Lua)]
	pub format: OutputFormat,
	#[arg(long, default_value = "skel")]
	pub ext: String,
	#[command(flatten)]
	pub policy: PolicyArgs,
}

/// Extract animations for every skeleton file under a directory and write a config.
pub fn run(args: Args) -> Result<()> {
	let Args {
		dir,
		output,
		format,
		ext,
		policy,
	} = args;

	let files = discover(&dir, &ext)?;
	info!(root = %dir.display(), files = files.len(), "discovered skeleton files");

	let mut extractor = Extractor::new(policy.to_policy());
	let mut paths = BTreeMap::new();
	for file in &files {
		extractor.process_file(&file.path, file.key.clone());
		paths.insert(file.key.clone(), display_relative(&file.relative));
	}
	let stats = extractor.stats();

	let target = output_target(&dir, output.as_deref(), format);
	match format {
		OutputFormat::Lua => {
			let entries: Vec<LuaEntry<'_>> = extractor
				.outcomes()
				.iter()
				.filter(|(_, outcome)| outcome.ok)
				.map(|(key, outcome)| LuaEntry {
					key,
					path: paths.get(key).map_or("", String::as_str),
					records: &outcome.records,
				})
				.collect();
			write_output(target.as_deref(), &render(&entries, files.len()))?;
		}
		OutputFormat::Json => {
			let payload = ExtractJson {
				root: dir.display().to_string(),
				summary: SummaryJson::from(stats),
				files: extractor
					.outcomes()
					.iter()
					.map(|(key, outcome)| outcome_json(key, Path::new(paths.get(key).map_or("", String::as_str)), outcome))
					.collect(),
			};
			match target.as_deref() {
				None => emit_json(&payload),
				Some(path) => {
					let text = serde_json::to_string_pretty(&payload).map_err(std::io::Error::other)?;
					write_output(Some(path), &format!("{text}\n"))?;
				}
			}
		}
	}

	let summary = summary_line(stats);
	match target {
		Some(path) => {
			println!("output: {}", path.display());
			println!("{summary}");
		}
		None => eprintln!("{summary}"),
	}

	Ok(())
}

/// Resolve where output goes; `None` means stdout.
fn output_target(dir: &Path, output: Option<&str>, format: OutputFormat) -> Option<PathBuf> {
	match (output, format) {
		(Some("-"), _) => None,
		(Some(path), _) => Some(PathBuf::from(path)),
		(None, OutputFormat::Lua) => Some(dir.join(DEFAULT_LUA_OUTPUT)),
		(None, OutputFormat::Json) => None,
	}
}

fn write_output(target: Option<&Path>, body: &str) -> Result<()> {
	match target {
		None => print!("{body}"),
		Some(path) => {
			fs::write(path, body)?;
			info!(path = %path.display(), bytes = body.len(), "output written");
		}
	}
	Ok(())
}

fn summary_line(stats: ExtractStats) -> String {
	format!(
		"processed: attempted={} succeeded={} (predefined={}) failed={}",
		stats.attempted, stats.succeeded, stats.predefined, stats.failed
	)
}

#[derive(serde::Serialize)]
struct SummaryJson {
	attempted: usize,
	succeeded: usize,
	predefined: usize,
	failed: usize,
}

impl From<ExtractStats> for SummaryJson {
	fn from(stats: ExtractStats) -> Self {
		Self {
			attempted: stats.attempted,
			succeeded: stats.succeeded,
			predefined: stats.predefined,
			failed: stats.failed,
		}
	}
}

#[derive(serde::Serialize)]
struct ExtractJson {
	root: String,
	summary: SummaryJson,
	files: Vec<OutcomeJson>,
}
