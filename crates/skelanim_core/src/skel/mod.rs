mod anim;
mod bytes;
mod cascade;
mod error;
mod extract;
mod layout;
mod names;
mod predefined;
mod raw;
mod record;
mod resync;
mod text;

/// Structured animation-table decoders.
pub use anim::{GENERIC_ANIMATION_SKIP, decode_animation_table, decode_generic, decode_versioned, decode_versioned_with};
/// Bounded little-endian cursor and string limits.
pub use bytes::{Cursor, MAX_STRING_LEN, PROBE_LEN};
/// Strategy cascade types and the default ordering.
pub use cascade::{Cascade, CascadeStep, StrategyFn, default_cascade};
/// Error and result aliases.
pub use error::{Result, SkelError};
/// Extraction orchestrator, policy, and counters.
pub use extract::{ExtractPolicy, ExtractStats, Extractor, PREDEFINED_STEP, READ_STEP};
/// Header reading, plausibility windows, and the structural walk.
pub use layout::{
	CountWindow, GENERIC_PROBE_SKIP, GENERIC_PROBES, SchemaVariant, SkelHeader, SkipProfile, VERSIONED_TAG, is_plausible_animation_count,
	probe_animation_count, skip_to_animations,
};
/// Animation-name filter.
pub use names::{MAX_NAME_CHARS, is_printable_ascii, is_valid_name};
/// Filename-keyed fallback table.
pub use predefined::{DEFAULT_LIST, ENTRIES, KnowledgeEntry, lookup, lookup_entry};
/// Byte-stride string scanner.
pub use raw::{MAX_RAW_LEN, scan_raw};
/// Records, outcomes, and file identity.
pub use record::{AnimationRecord, DEFAULT_DURATION, ExtractionOutcome, FileIdentity, Strategy, StrategyAttempt, clamp_duration};
/// Forward scan for an animation count after a failed walk.
pub use resync::resynchronize;
/// Text-pattern scanner.
pub use text::{COMMON_NAMES, scan_text};
