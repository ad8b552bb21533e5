use skelanim_testkit::SkelBuilder;

use crate::skel::raw::scan_raw;

fn names(bytes: &[u8]) -> Vec<String> {
	scan_raw(bytes).expect("raw scan never fails").into_iter().map(|record| record.name).collect()
}

#[test]
fn finds_length_prefixed_strings() {
	let bytes = SkelBuilder::new().string("Idle").string("Run_Fast").build();

	let records = scan_raw(&bytes).expect("raw scan never fails");
	assert_eq!(records.iter().map(|record| record.name.as_str()).collect::<Vec<_>>(), vec!["Idle", "Run_Fast"]);
	assert!(records.iter().all(|record| record.duration == 1.0));
}

#[test]
fn rejects_unprintable_and_filtered_candidates() {
	let bytes = SkelBuilder::new()
		.i32(4)
		.raw(&[b'a', 0x01, b'b', 0])
		.i32(3)
		.raw(&[0xC3, 0xA9, 0])
		.string("12345")
		.string("null")
		.build();

	assert!(names(&bytes).is_empty());
}

#[test]
fn ignores_lengths_past_the_end() {
	let bytes = SkelBuilder::new().i32(50).raw(b"abc").build();

	assert!(names(&bytes).is_empty());
}

#[test]
fn ignores_version_tag() {
	let bytes = SkelBuilder::new().versioned_header("3.8.99").empty_sections().i32(0).build();

	assert!(names(&bytes).is_empty());
}

#[test]
fn output_is_sorted_and_unique() {
	let bytes = SkelBuilder::new().string("walk").string("Attack").string("walk").build();

	assert_eq!(names(&bytes), vec!["Attack", "walk"]);
}

#[test]
fn tiny_inputs_yield_nothing() {
	for len in 0..=4 {
		assert!(names(&vec![1_u8; len]).is_empty());
	}
}
