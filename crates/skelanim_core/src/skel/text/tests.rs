use crate::skel::AnimationRecord;
use crate::skel::text::scan_text;

fn names(bytes: &[u8]) -> Vec<String> {
	scan_text(bytes).expect("text scan never fails").into_iter().map(|record| record.name).collect()
}

#[test]
fn json_name_attribute_yields_only_that_name() {
	let records = scan_text(br#"{"name": "idle_loop"}"#).expect("text scan never fails");
	assert_eq!(records, vec![AnimationRecord::new("idle_loop", 1.0)]);
}

#[test]
fn dictionary_words_require_quotes() {
	assert!(names(b"idle run walk without quotes").is_empty());
	assert_eq!(names(b"state = 'walk'; next \"jump\""), vec!["jump", "walk"]);
}

#[test]
fn xml_style_attribute_is_captured() {
	assert_eq!(names(br#"<anim name="Attack_01" loop="true"/>"#), vec!["Attack_01"]);
}

#[test]
fn keyword_adjacent_values_are_captured() {
	assert_eq!(names(b"animations: name 'Spin_Fast'"), vec!["Spin_Fast"]);
	assert_eq!(names(br#"animation entry name: "Hop""#), vec!["Hop"]);
}

#[test]
fn adjacency_skips_quote_closing_the_name_token() {
	assert_eq!(names(br#"{"animations": [{"name": "Intro", "mix": false}]}"#), vec!["Intro"]);
}

#[test]
fn invalid_candidates_are_filtered() {
	let input = br#"{"name": "12345"} {"name": "null"} {"name": "0badf00d-1234-5678-9abc-def012345678"}"#;
	assert!(names(input).is_empty());
}

#[test]
fn tolerates_binary_noise() {
	let mut input = vec![0xFF, 0xFE, 0x00, 0x81];
	input.extend_from_slice(br#""name":"Fly""#);
	input.extend_from_slice(&[0xC3, 0x28]);

	assert_eq!(names(&input), vec!["Fly"]);
}

#[test]
fn output_is_sorted_and_unique() {
	let input = br#""name": "walk" "name": "Attack" 'walk' "idle""#;
	assert_eq!(names(input), vec!["Attack", "idle", "walk"]);
}
