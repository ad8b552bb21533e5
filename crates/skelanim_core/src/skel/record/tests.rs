use std::path::PathBuf;

use crate::skel::record::{AnimationRecord, ExtractionOutcome, Strategy, clamp_duration};

#[test]
fn clamp_keeps_in_range_durations() {
	assert_eq!(clamp_duration(0.0, 300.0), 0.0);
	assert_eq!(clamp_duration(300.0, 300.0), 300.0);
	assert_eq!(clamp_duration(300.5, 300.0), 1.0);
	assert_eq!(clamp_duration(-0.1, 100.0), 1.0);
	assert_eq!(clamp_duration(f32::INFINITY, 100.0), 1.0);
	assert_eq!(clamp_duration(f32::NAN, 100.0), 1.0);
}

#[test]
fn clamp_drops_negative_zero_sign() {
	let clamped = clamp_duration(-0.0, 300.0);

	assert_eq!(clamped, 0.0);
	assert!(clamped.is_sign_positive());
	assert_eq!(format!("{clamped:.2}"), "0.00");
}

#[test]
fn loop_detection_ignores_case() {
	assert!(AnimationRecord::named("Track1_Coin_Loop").is_loop());
	assert!(AnimationRecord::named("FrameLOOP").is_loop());
	assert!(!AnimationRecord::named("Lock").is_loop());
}

#[test]
fn success_sorts_and_dedups_by_name() {
	let records = vec![AnimationRecord::new("walk", 1.0), AnimationRecord::new("Idle", 2.0), AnimationRecord::new("walk", 3.0)];
	let outcome = ExtractionOutcome::success(PathBuf::from("a.skel"), records, Strategy::Text, Vec::new());

	assert!(outcome.ok);
	assert_eq!(outcome.records, vec![AnimationRecord::new("Idle", 2.0), AnimationRecord::new("walk", 1.0)]);
	assert!(!outcome.used_predefined());
}

#[test]
fn failure_has_no_strategy() {
	let outcome = ExtractionOutcome::failure(PathBuf::from("a.skel"), Vec::new());

	assert!(!outcome.ok);
	assert_eq!(outcome.strategy, None);
	assert!(outcome.records.is_empty());
}

#[test]
fn strategy_labels() {
	let labels: Vec<_> = [Strategy::Structured, Strategy::Text, Strategy::RawScan, Strategy::Predefined]
		.into_iter()
		.map(Strategy::as_str)
		.collect();
	assert_eq!(labels, vec!["structured", "text", "raw_scan", "predefined"]);
}
