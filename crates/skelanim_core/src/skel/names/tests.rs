use crate::skel::names::{is_printable_ascii, is_valid_name};

#[test]
fn accepts_ordinary_names() {
	for name in ["idle", "BigWin_Start", "run 2", "Track_Txt_Loop", "攻撃"] {
		assert!(is_valid_name(name), "{name} should be accepted");
	}
}

#[test]
fn rejects_empty_and_overlong() {
	assert!(!is_valid_name(""));
	assert!(is_valid_name(&"a".repeat(50)));
	assert!(!is_valid_name(&"a".repeat(51)));
}

#[test]
fn rejects_uuid_shapes() {
	assert!(!is_valid_name("123e4567-e89b-12d3-a456-426614174000"));
	assert!(!is_valid_name("123E4567-E89B-12D3-A456-426614174000"));
	assert!(is_valid_name("123e4567-e89b-12d3-a456"));
}

#[test]
fn rejects_numeric_tokens() {
	assert!(!is_valid_name("42"));
	assert!(!is_valid_name("3.8.99"));
	assert!(is_valid_name("Lv1"));
	assert!(is_valid_name("1."), "trailing dot is not a digit group");
}

#[test]
fn rejects_reserved_words_exactly() {
	for word in ["null", "undefined", "true", "false", "NaN", "Infinity"] {
		assert!(!is_valid_name(word), "{word} should be rejected");
	}
	assert!(is_valid_name("True"));
	assert!(is_valid_name("nullable"));
}

#[test]
fn rejects_control_characters() {
	assert!(!is_valid_name("idle\u{1}"));
	assert!(!is_valid_name("walk\n"));
}

#[test]
fn printable_ascii_bounds() {
	assert!(is_printable_ascii("Idle ~"));
	assert!(!is_printable_ascii("idle\u{7f}"));
	assert!(!is_printable_ascii("é"));
}
