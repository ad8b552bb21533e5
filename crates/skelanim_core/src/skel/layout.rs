//! Structural walk from the file header to the animation table.
//!
//! Section payloads are skipped, not interpreted. Counts are checked against
//! plausibility windows, which is the main signal that the assumed layout is wrong.

use tracing::debug;

use crate::skel::bytes::Cursor;
use crate::skel::{Result, SkelError};

/// Version tag of the layout the versioned walk is modelled on.
pub const VERSIONED_TAG: &str = "3.8.99";

/// Generic layout: number of probes for an animation count.
pub const GENERIC_PROBES: usize = 20;
/// Generic layout: bytes skipped after a rejected probe.
pub const GENERIC_PROBE_SKIP: usize = 50;

/// Inclusive `0..=max` window for a section count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountWindow {
	/// Section label used in errors and logs.
	pub section: &'static str,
	/// Largest plausible count.
	pub max: i32,
}

impl CountWindow {
	const fn new(section: &'static str, max: i32) -> Self {
		Self { section, max }
	}

	/// Read a count and check it against the window.
	pub fn read(self, cursor: &mut Cursor<'_>) -> Result<usize> {
		let count = cursor.read_i32_le()?;
		if !(0..=self.max).contains(&count) {
			return Err(SkelError::ImplausibleCount {
				section: self.section,
				count,
				max: self.max,
			});
		}
		Ok(count as usize)
	}
}

/// Bone count window.
pub const BONES: CountWindow = CountWindow::new("bone", 1000);
/// Slot count window.
pub const SLOTS: CountWindow = CountWindow::new("slot", 1000);
/// IK constraint count window.
pub const IK_CONSTRAINTS: CountWindow = CountWindow::new("ik constraint", 100);
/// Path constraint count window.
pub const PATH_CONSTRAINTS: CountWindow = CountWindow::new("path constraint", 100);
/// Transform constraint count window.
pub const TRANSFORM_CONSTRAINTS: CountWindow = CountWindow::new("transform constraint", 100);
/// Skin count window.
pub const SKINS: CountWindow = CountWindow::new("skin", 1000);
/// Per-skin slot attachment count window.
pub const SKIN_ATTACHMENTS: CountWindow = CountWindow::new("skin attachment", 10_000);
/// Per-slot attachment entry count window.
pub const ATTACHMENT_ENTRIES: CountWindow = CountWindow::new("attachment entry", 1000);
/// Event count window.
pub const EVENTS: CountWindow = CountWindow::new("event", 100);
/// Animation count window.
pub const ANIMATIONS: CountWindow = CountWindow::new("animation", 1000);
/// Per-animation timeline slot count window.
pub const TIMELINE_SLOTS: CountWindow = CountWindow::new("timeline slot", 1000);
/// Per-slot timeline count window.
pub const TIMELINES: CountWindow = CountWindow::new("timeline", 1000);

/// Schema hypothesis a structured decode runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVariant {
	/// Version-tagged layout with per-section fixed widths.
	Versioned,
	/// Looser layout located by probing.
	Generic,
}

impl SchemaVariant {
	/// Largest plausible animation duration, in seconds.
	pub fn duration_ceiling(self) -> f32 {
		match self {
			Self::Versioned => 300.0,
			Self::Generic => 100.0,
		}
	}

	/// Render variant as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Versioned => "versioned",
			Self::Generic => "generic",
		}
	}
}

/// Fixed skip widths for the versioned walk and timeline skipping.
///
/// These are approximations, not a format description; complex rigs are skipped lossily.
#[derive(Debug, Clone)]
pub struct SkipProfile {
	/// Bone transform floats after the parent index.
	pub bone_transform: usize,
	/// IK constraint payload after its name.
	pub ik_payload: usize,
	/// Path constraint payload after its name.
	pub path_payload: usize,
	/// Transform constraint payload after its name.
	pub transform_payload: usize,
	/// Event payload after its name.
	pub event_payload: usize,
	/// Cap on bytes skipped per attachment entry after its type byte.
	pub attachment_cap: usize,
	/// Cap on bytes skipped per timeline after its type byte.
	pub timeline_cap: usize,
	/// Cap on bytes skipped after an animation's timeline slots.
	pub animation_tail_cap: usize,
}

impl Default for SkipProfile {
	fn default() -> Self {
		Self {
			bone_transform: 20,
			ik_payload: 16,
			path_payload: 20,
			transform_payload: 24,
			event_payload: 16,
			attachment_cap: 200,
			timeline_cap: 200,
			animation_tail_cap: 2000,
		}
	}
}

/// Fields read from the start of a skeleton file.
#[derive(Debug, Clone, PartialEq)]
pub struct SkelHeader {
	/// Leading version string.
	pub version: String,
	/// Skeleton scale, when enough bytes remained to read it.
	pub scale: Option<f32>,
}

impl SkelHeader {
	/// Minimum number of bytes for any structured decode.
	pub const MIN_SIZE: usize = 8;

	/// Read the header and leave the cursor at the first section count.
	pub fn read(cursor: &mut Cursor<'_>, variant: SchemaVariant) -> Result<Self> {
		if cursor.remaining() < Self::MIN_SIZE {
			return Err(SkelError::BufferUnderrun {
				at: cursor.pos(),
				need: Self::MIN_SIZE,
				rem: cursor.remaining(),
			});
		}

		let version = cursor.read_string()?;
		match variant {
			SchemaVariant::Versioned if version != VERSIONED_TAG => {
				debug!(%version, expected = VERSIONED_TAG, "version tag differs, continuing with versioned layout");
			}
			SchemaVariant::Generic if cursor.remaining() < 4 => {
				return Err(SkelError::BufferUnderrun {
					at: cursor.pos(),
					need: 4,
					rem: cursor.remaining(),
				});
			}
			_ => {}
		}

		if cursor.read_u8()? != 0 {
			cursor.skip_string();
		}

		let scale = if cursor.remaining() >= 4 { Some(cursor.read_f32_le()?) } else { None };
		cursor.skip_string();

		debug!(variant = variant.as_str(), %version, ?scale, at = cursor.pos(), "header read");
		Ok(Self { version, scale })
	}
}

/// Walk the versioned sections so the cursor lands on the animation count.
pub fn skip_to_animations(cursor: &mut Cursor<'_>, profile: &SkipProfile) -> Result<()> {
	let bones = BONES.read(cursor)?;
	for _ in 0..bones {
		cursor.skip_string();
		cursor.skip(4)?;
		cursor.skip(profile.bone_transform)?;
		skip_optional_color(cursor)?;
	}

	let slots = SLOTS.read(cursor)?;
	for _ in 0..slots {
		cursor.skip_string();
		cursor.skip(4)?;
		skip_optional_color(cursor)?;
		skip_optional_color(cursor)?;
		cursor.skip(1)?;
	}

	let ik = skip_named_section(cursor, IK_CONSTRAINTS, profile.ik_payload)?;
	let paths = skip_named_section(cursor, PATH_CONSTRAINTS, profile.path_payload)?;
	let transforms = skip_named_section(cursor, TRANSFORM_CONSTRAINTS, profile.transform_payload)?;

	let skins = SKINS.read(cursor)?;
	for _ in 0..skins {
		cursor.skip_string();
		let attachments = SKIN_ATTACHMENTS.read(cursor)?;
		for _ in 0..attachments {
			cursor.skip(4)?;
			let entries = ATTACHMENT_ENTRIES.read(cursor)?;
			for _ in 0..entries {
				cursor.skip_string();
				cursor.skip_string();
				cursor.read_u8()?;
				cursor.skip_clamped(profile.attachment_cap);
			}
		}
	}

	let events = skip_named_section(cursor, EVENTS, profile.event_payload)?;

	debug!(bones, slots, ik, paths, transforms, skins, events, at = cursor.pos(), "positioned at animation table");
	Ok(())
}

/// Probe the generic layout for an animation count, leaving the cursor on it.
pub fn probe_animation_count(cursor: &mut Cursor<'_>) -> Result<()> {
	let from = cursor.pos();
	let mut scanned = 0;
	while scanned < GENERIC_PROBES && cursor.remaining() > 4 {
		let value = cursor.read_i32_le()?;
		scanned += 1;
		if is_plausible_animation_count(value) {
			cursor.rewind(4)?;
			debug!(probe = scanned, count = value, at = cursor.pos(), "generic probe found animation count");
			return Ok(());
		}
		cursor.skip_clamped(GENERIC_PROBE_SKIP);
	}

	Err(SkelError::UnrecoverablePosition { from, scanned })
}

/// Whether `value` could be a non-empty animation count.
pub fn is_plausible_animation_count(value: i32) -> bool {
	value > 0 && value < ANIMATIONS.max
}

fn skip_named_section(cursor: &mut Cursor<'_>, window: CountWindow, payload: usize) -> Result<usize> {
	let count = window.read(cursor)?;
	for _ in 0..count {
		cursor.skip_string();
		cursor.skip(payload)?;
	}
	Ok(count)
}

fn skip_optional_color(cursor: &mut Cursor<'_>) -> Result<()> {
	if cursor.read_u8()? != 0 {
		cursor.skip(4)?;
	}
	Ok(())
}
