//! Filename-keyed animation lists for known asset families.
//!
//! Last-resort fallback when no strategy could read the file. Entries are checked
//! in order and the first match wins; unmatched files get [`DEFAULT_LIST`].

use crate::skel::record::{AnimationRecord, FileIdentity};

/// One asset family in the predefined table.
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeEntry {
	/// Short label used in logs and attempt records.
	pub label: &'static str,
	/// Match rule over the lowercased file identity.
	pub matches: fn(&FileIdentity) -> bool,
	/// Canned `(name, duration)` list.
	pub records: &'static [(&'static str, f32)],
}

/// List used when no entry matches.
pub const DEFAULT_LIST: &[(&str, f32)] = &[("Idle", 1.0), ("Start", 1.0), ("Loop", 2.0), ("End", 1.0), ("Win", 1.5)];

const BIGWIN_TIERS: &[(&str, f32)] = &[
	("BigWin_Start", 2.0),
	("BigWin_End", 1.0),
	("MegaWin_Start", 2.5),
	("MegaWin_End", 1.5),
	("SuperWin_Start", 3.0),
	("SuperWin_End", 1.8),
	("LegendaryWin_Start", 3.5),
	("LegendaryWin_End", 2.0),
];

const BIGWIN_WITH_TRACKS: &[(&str, f32)] = &[
	("BigWin_Start", 2.0),
	("BigWin_End", 1.0),
	("MegaWin_Start", 2.5),
	("MegaWin_End", 1.5),
	("SuperWin_Start", 3.0),
	("SuperWin_End", 1.8),
	("LegendaryWin_Start", 3.5),
	("LegendaryWin_End", 2.0),
	("Track1_Coin_Start", 1.0),
	("Track1_Coin_Loop", 2.0),
	("Track1_Coin_End", 1.0),
	("Track2_L", 1.5),
	("Track2_M", 1.5),
	("Track2_S", 1.5),
];

const POT_TXT: &[(&str, f32)] = &[("Track_Txt_End", 1.0), ("Track_Txt_Loop", 2.0), ("Track_Txt_Win", 1.5)];

const POT: &[(&str, f32)] = &[
	("Hit", 0.5),
	("Lv1", 2.0),
	("Lv2", 2.0),
	("Lv3", 2.0),
	("Lv4", 2.0),
	("NearWin", 1.5),
	("Track_Golden", 1.8),
	("Track_Txt_End", 1.0),
	("Track_Txt_Loop", 2.0),
	("Track_Txt_Win", 1.5),
	("Turn_Gold", 1.2),
	("Upgrade", 1.0),
	("Win", 1.5),
	("Win2", 1.8),
];

const START_LOOP_END: &[(&str, f32)] = &[("Start", 1.5), ("Loop", 2.0), ("End", 1.5)];

const FG_COMPLIMENT: &[(&str, f32)] = &[
	("Start", 1.5),
	("Loop", 2.0),
	("End", 1.5),
	("Trace_1B", 1.0),
	("Trace_1G", 1.0),
	("Trace_1R", 1.0),
	("Track_2BG", 1.5),
	("Track_2BR", 1.5),
	("Track_2RG", 1.5),
];

/// Ordered predefined table; the first matching entry wins.
pub static ENTRIES: [KnowledgeEntry; 21] = [
	KnowledgeEntry {
		label: "bg",
		matches: |id| id.file_name.contains("bg"),
		records: &[("MG", 2.0), ("FG", 2.0), ("Idle", 2.0)],
	},
	KnowledgeEntry {
		label: "bigwin-front",
		matches: |id| id.file_name.contains("bigwin") && id.file_name.contains("front"),
		records: BIGWIN_TIERS,
	},
	KnowledgeEntry {
		label: "bigwin",
		matches: |id| id.file_name.contains("bigwin"),
		records: BIGWIN_WITH_TRACKS,
	},
	KnowledgeEntry {
		label: "pot-txt",
		matches: |id| id.file_name.contains("pot_") && id.file_name.contains("txt") && id.parent_dir.contains("character"),
		records: POT_TXT,
	},
	KnowledgeEntry {
		label: "pot",
		matches: |id| id.file_name.contains("pot_") && id.parent_dir.contains("character"),
		records: POT,
	},
	KnowledgeEntry {
		label: "jp-panel",
		matches: |id| id.file_name.contains("jp_panel"),
		records: &[
			("BetUp", 0.5),
			("BetUp_Lock", 0.5),
			("Idle", 2.0),
			("Idle_Lock", 2.0),
			("Lock", 0.6),
			("UnLock", 0.6),
			("Win", 1.5),
		],
	},
	KnowledgeEntry {
		label: "fx-click",
		matches: |id| id.file_name.contains("fx_click"),
		records: &[("Hit", 0.3), ("Click", 0.3)],
	},
	KnowledgeEntry {
		label: "extrabet",
		matches: |id| id.file_name.contains("extrabet"),
		records: &[("Extrabet", 1.0), ("On", 1.0)],
	},
	KnowledgeEntry {
		label: "omen",
		matches: |id| id.file_name.contains("omen"),
		records: &[("Start", 2.0)],
	},
	KnowledgeEntry {
		label: "randomwild",
		matches: |id| id.file_name.contains("randomwild"),
		records: &[("Start", 2.0)],
	},
	KnowledgeEntry {
		label: "declare",
		matches: |id| id.file_name.contains("declare"),
		records: START_LOOP_END,
	},
	KnowledgeEntry {
		label: "compliment-fg",
		matches: |id| id.file_name.contains("compliment") && id.file_name.contains("fg_"),
		records: FG_COMPLIMENT,
	},
	KnowledgeEntry {
		label: "compliment",
		matches: |id| id.file_name.contains("compliment"),
		records: START_LOOP_END,
	},
	KnowledgeEntry {
		label: "scatter-fx",
		matches: |id| is_scatter(id) && id.file_name.contains("fx"),
		records: &[("Switch", 0.5), ("Win", 1.5)],
	},
	KnowledgeEntry {
		label: "scatter",
		matches: is_scatter,
		records: &[("JP", 1.5), ("JP_Multiply", 1.5), ("JP_Multiply_Start", 1.0), ("Num", 1.0), ("Num_Start", 0.8)],
	},
	KnowledgeEntry {
		label: "respin",
		matches: |id| id.file_name.contains("respin"),
		records: &[("End", 1.0), ("Hit", 0.8)],
	},
	KnowledgeEntry {
		label: "nearwin",
		matches: |id| id.file_name.contains("nearwin"),
		records: &[("Start", 1.0), ("Loop", 2.0), ("End", 1.0)],
	},
	KnowledgeEntry {
		label: "fullreward",
		matches: |id| id.file_name.contains("fullreward"),
		records: &[("Start", 2.5)],
	},
	KnowledgeEntry {
		label: "symbol",
		matches: |id| id.file_name.contains("symbol_") && id.parent_dir.contains("symbols"),
		records: &[("Idle", 1.0), ("Win", 1.5), ("Frame", 1.2), ("FrameLoop", 1.0)],
	},
	KnowledgeEntry {
		label: "reel",
		matches: |id| id.file_name.contains("reel"),
		records: &[("Idle", 2.0)],
	},
	KnowledgeEntry {
		label: "gameintro",
		matches: |id| id.file_name.contains("gameintro"),
		records: &[("Start", 3.0)],
	},
];

fn is_scatter(id: &FileIdentity) -> bool {
	id.file_name.contains("scatter") && (id.file_name.contains("jp") || id.parent_dir.contains("symbols"))
}

/// Return the first entry matching `identity`, if any.
pub fn lookup_entry(identity: &FileIdentity) -> Option<&'static KnowledgeEntry> {
	ENTRIES.iter().find(|entry| (entry.matches)(identity))
}

/// Return the canned list for `identity`, falling back to [`DEFAULT_LIST`].
pub fn lookup(identity: &FileIdentity) -> Vec<AnimationRecord> {
	let records = lookup_entry(identity).map_or(DEFAULT_LIST, |entry| entry.records);
	to_records(records)
}

fn to_records(records: &[(&str, f32)]) -> Vec<AnimationRecord> {
	records.iter().map(|(name, duration)| AnimationRecord::new(*name, *duration)).collect()
}
