use std::path::Path;

use skelanim::skel::SkelError;
use skelanim_testkit::fixture_tree;

use crate::cmd::discover::{discover, display_relative, has_extension, output_key};

#[test]
fn finds_matching_files_recursively_in_name_order() {
	let dir = fixture_tree(&[
		("b/Hero.SKEL", b"x".as_slice()),
		("a/villain.skel", b"x".as_slice()),
		("a/notes.txt", b"x".as_slice()),
		("root.skel", b"x".as_slice()),
	]);

	let files = discover(dir.path(), "skel").expect("discovery succeeds");
	let keys: Vec<_> = files.iter().map(|file| file.key.as_str()).collect();
	assert_eq!(keys, vec!["a/villain", "b/Hero", "root"]);
	assert_eq!(files[0].relative, Path::new("a").join("villain.skel"));
	assert_eq!(files[0].path, dir.path().join("a").join("villain.skel"));
}

#[test]
fn extension_argument_may_carry_a_dot() {
	let dir = fixture_tree(&[("one.json", b"{}".as_slice()), ("two.skel", b"x".as_slice())]);

	let files = discover(dir.path(), ".json").expect("discovery succeeds");
	assert_eq!(files.len(), 1);
	assert_eq!(files[0].key, "one");
}

#[test]
fn missing_or_file_root_is_invalid() {
	let dir = fixture_tree(&[("file.skel", b"x".as_slice())]);

	for root in [dir.path().join("missing"), dir.path().join("file.skel")] {
		let err = discover(&root, "skel").expect_err("root rejected");
		assert!(matches!(err, SkelError::InvalidDirectory { .. }));
	}
}

#[test]
fn empty_directory_yields_no_files() {
	let dir = fixture_tree(&[]);

	assert!(discover(dir.path(), "skel").expect("discovery succeeds").is_empty());
}

#[test]
fn path_helpers() {
	assert!(has_extension(Path::new("a/B.Skel"), "skel"));
	assert!(!has_extension(Path::new("a/b.skel.bak"), "skel"));
	assert!(!has_extension(Path::new("skel"), "skel"));
	assert_eq!(output_key(&Path::new("fx").join("bigwin_front.skel")), "fx/bigwin_front");
	assert_eq!(display_relative(&Path::new("fx").join("bigwin_front.skel")), "fx/bigwin_front.skel");
}
