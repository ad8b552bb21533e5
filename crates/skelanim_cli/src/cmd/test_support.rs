use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use skelanim_testkit::{SkelBuilder, cargo_bin};

static SKELANIM_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn run_skelanim(args: &[&str]) -> Output {
	Command::new(skelanim_bin()).args(args).output().expect("skelanim command executes")
}

pub(crate) fn run_skelanim_json(args: &[&str]) -> serde_json::Value {
	let output = run_skelanim(args);
	assert!(
		output.status.success(),
		"skelanim command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

/// Versioned skeleton bytes holding `Idle` (1.5s) and `Run_Loop` (0.8s).
pub(crate) fn hero_skel() -> Vec<u8> {
	SkelBuilder::new()
		.versioned_header("3.8.99")
		.empty_sections()
		.i32(2)
		.versioned_animation("Idle", 1.5)
		.versioned_animation("Run_Loop", 0.8)
		.build()
}

fn skelanim_bin() -> &'static PathBuf {
	SKELANIM_BIN.get_or_init(|| cargo_bin("skelanim"))
}
