use skelanim_testkit::SkelBuilder;

use crate::skel::anim::{decode_generic, decode_versioned, decode_versioned_with};
use crate::skel::layout::{SkipProfile, VERSIONED_TAG};
use crate::skel::{AnimationRecord, SkelError};

fn versioned_table() -> SkelBuilder {
	SkelBuilder::new().versioned_header(VERSIONED_TAG).empty_sections()
}

#[test]
fn decodes_versioned_table() {
	let bytes = versioned_table().i32(2).versioned_animation("idle", 1.5).versioned_animation("walk", 0.75).build();

	let records = decode_versioned(&bytes).expect("decode succeeds");
	assert_eq!(records, vec![AnimationRecord::new("idle", 1.5), AnimationRecord::new("walk", 0.75)]);
}

#[test]
fn zero_animations_is_empty_success() {
	let bytes = versioned_table().i32(0).build();

	assert!(decode_versioned(&bytes).expect("decode succeeds").is_empty());
}

#[test]
fn versioned_durations_clamp_above_three_hundred() {
	let bytes = versioned_table()
		.i32(4)
		.versioned_animation("a", 250.0)
		.versioned_animation("b", 350.0)
		.versioned_animation("c", -2.0)
		.versioned_animation("d", f32::NAN)
		.build();

	let durations: Vec<f32> = decode_versioned(&bytes).expect("decode succeeds").iter().map(|record| record.duration).collect();
	assert_eq!(durations, vec![250.0, 1.0, 1.0, 1.0]);
}

#[test]
fn generic_durations_clamp_above_one_hundred() {
	let bytes = SkelBuilder::new()
		.versioned_header("2.1.27")
		.i32(2)
		.string("run")
		.f32(150.0)
		.fill(0, 500)
		.string("walk")
		.f32(99.5)
		.fill(0, 500)
		.build();

	let records = decode_generic(&bytes).expect("decode succeeds");
	assert_eq!(records, vec![AnimationRecord::new("run", 1.0), AnimationRecord::new("walk", 99.5)]);
}

#[test]
fn short_buffers_fail_cleanly() {
	for len in 0..8 {
		let bytes = vec![0x41_u8; len];
		assert!(matches!(decode_versioned(&bytes), Err(SkelError::BufferUnderrun { .. })), "versioned len={len}");
		assert!(matches!(decode_generic(&bytes), Err(SkelError::BufferUnderrun { .. })), "generic len={len}");
	}
}

#[test]
fn failed_walk_resynchronizes() {
	let bytes = SkelBuilder::new()
		.versioned_header(VERSIONED_TAG)
		.i32(5000)
		.i32(-1)
		.i32(1)
		.versioned_animation("hit", 0.5)
		.build();

	let records = decode_versioned(&bytes).expect("resync recovers");
	assert_eq!(records, vec![AnimationRecord::new("hit", 0.5)]);
}

#[test]
fn failed_resync_is_unrecoverable() {
	let bytes = SkelBuilder::new().versioned_header(VERSIONED_TAG).i32(5000).fill(0xFF, 16).build();

	assert!(matches!(decode_versioned(&bytes), Err(SkelError::UnrecoverablePosition { .. })));
}

#[test]
fn failed_timeline_skip_keeps_partial_table() {
	let bytes = versioned_table()
		.i32(3)
		.string("idle")
		.f32(1.25)
		.i32(5000)
		.versioned_animation("never", 1.0)
		.build();

	let records = decode_versioned(&bytes).expect("partial decode succeeds");
	assert_eq!(records, vec![AnimationRecord::new("idle", 1.25)]);
}

#[test]
fn failed_name_read_fails_whole_table() {
	let bytes = versioned_table().i32(2).versioned_animation("idle", 1.0).i32(0).fill(b'x', 8).build();

	assert!(matches!(decode_versioned(&bytes), Err(SkelError::NameDecodeFailure { .. })));
}

#[test]
fn overlong_name_is_rejected() {
	let name = "n".repeat(51);
	let bytes = versioned_table().i32(1).versioned_animation(&name, 1.0).build();

	assert!(matches!(decode_versioned(&bytes), Err(SkelError::NameDecodeFailure { .. })));
}

#[test]
fn implausible_animation_count_is_rejected() {
	let bytes = versioned_table().i32(1001).fill(0, 16).build();

	assert!(matches!(
		decode_versioned(&bytes),
		Err(SkelError::ImplausibleCount {
			section: "animation",
			count: 1001,
			..
		})
	));
}

#[test]
fn custom_profile_changes_skip_widths() {
	let bytes = SkelBuilder::new()
		.versioned_header(VERSIONED_TAG)
		.i32(0)
		.i32(0)
		.i32(1)
		.string("aim")
		.fill(0, 8)
		.fill(0, 16)
		.i32(1)
		.string("shoot")
		.f32(0.4)
		.i32(0)
		.fill(0, 100)
		.build();
	let profile = SkipProfile {
		ik_payload: 8,
		animation_tail_cap: 100,
		..SkipProfile::default()
	};

	let records = decode_versioned_with(&bytes, &profile).expect("decode succeeds");
	assert_eq!(records, vec![AnimationRecord::new("shoot", 0.4)]);
}
