use skelanim_testkit::fixture_tree;

use crate::cmd::test_support::{hero_skel, run_skelanim, run_skelanim_json};

#[test]
fn prints_numbered_animation_list() {
	let hero = hero_skel();
	let dir = fixture_tree(&[("hero.skel", hero.as_slice())]);
	let file = dir.path().join("hero.skel").to_string_lossy().into_owned();

	let output = run_skelanim(&["inspect", &file]);
	assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("strategy: structured"));
	assert!(stdout.contains("  structured-versioned: found=2"));
	assert!(stdout.contains("1. Idle (Duration: 1.50 seconds)"));
	assert!(stdout.contains("2. Run_Loop (Duration: 0.80 seconds)"));
}

#[test]
fn json_lists_failed_attempts_before_fallback() {
	let dir = fixture_tree(&[("ui/jp_panel.skel", [0xFF_u8; 32].as_slice())]);
	let file = dir.path().join("ui").join("jp_panel.skel").to_string_lossy().into_owned();

	let json = run_skelanim_json(&["inspect", &file, "--json"]);
	assert_eq!(json["key"], "jp_panel");
	assert_eq!(json["strategy"], "predefined");
	assert_eq!(json["attempts"][0]["step"], "structured-versioned");
	assert!(json["attempts"][0]["error"].as_str().is_some_and(|err| err.contains("name decode failed")));
	assert_eq!(json["attempts"][4]["step"], "predefined");
	assert_eq!(json["animations"].as_array().map(Vec::len), Some(7));
}

#[test]
fn missing_file_without_fallback_reports_read_failure() {
	let dir = fixture_tree(&[]);
	let file = dir.path().join("absent.skel").to_string_lossy().into_owned();

	let json = run_skelanim_json(&["inspect", &file, "--json", "--no-auto-predefined"]);
	assert_eq!(json["ok"], false);
	assert_eq!(json["attempts"][0]["step"], "read");
	assert!(json["animations"].as_array().is_some_and(|items| items.is_empty()));
}
