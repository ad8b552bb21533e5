use tracing::debug;

use crate::skel::bytes::Cursor;
use crate::skel::layout::{ANIMATIONS, SchemaVariant, SkelHeader, SkipProfile, TIMELINE_SLOTS, TIMELINES, probe_animation_count, skip_to_animations};
use crate::skel::names::MAX_NAME_CHARS;
use crate::skel::record::{AnimationRecord, DEFAULT_DURATION, clamp_duration};
use crate::skel::resync::resynchronize;
use crate::skel::{Result, SkelError};

/// Generic layout: bytes skipped after each animation entry.
pub const GENERIC_ANIMATION_SKIP: usize = 500;

/// Decode the animation table assuming the versioned layout with default skip widths.
pub fn decode_versioned(bytes: &[u8]) -> Result<Vec<AnimationRecord>> {
	decode_versioned_with(bytes, &SkipProfile::default())
}

/// Decode the animation table assuming the versioned layout with custom skip widths.
///
/// A failed structural walk falls back to [`resynchronize`] from wherever the walk stopped.
pub fn decode_versioned_with(bytes: &[u8], profile: &SkipProfile) -> Result<Vec<AnimationRecord>> {
	let mut cursor = Cursor::new(bytes);
	SkelHeader::read(&mut cursor, SchemaVariant::Versioned)?;

	if let Err(err) = skip_to_animations(&mut cursor, profile) {
		debug!(error = %err, at = cursor.pos(), "structural walk failed, resynchronizing");
		resynchronize(&mut cursor)?;
	}

	decode_animation_table(&mut cursor, SchemaVariant::Versioned, profile)
}

/// Decode the animation table assuming the generic layout.
pub fn decode_generic(bytes: &[u8]) -> Result<Vec<AnimationRecord>> {
	let mut cursor = Cursor::new(bytes);
	SkelHeader::read(&mut cursor, SchemaVariant::Generic)?;
	probe_animation_count(&mut cursor)?;
	decode_animation_table(&mut cursor, SchemaVariant::Generic, &SkipProfile::default())
}

/// Read the animation count and entries from a positioned cursor.
///
/// A failed name read fails the whole table. A failed timeline skip stops the
/// table early and keeps the entries decoded so far.
pub fn decode_animation_table(cursor: &mut Cursor<'_>, variant: SchemaVariant, profile: &SkipProfile) -> Result<Vec<AnimationRecord>> {
	let count = ANIMATIONS.read(cursor)?;
	let ceiling = variant.duration_ceiling();

	let mut records = Vec::with_capacity(count);
	for index in 0..count {
		let name = read_animation_name(cursor)?;

		let duration = if cursor.remaining() >= 4 {
			let raw = cursor.read_f32_le()?;
			let clamped = clamp_duration(raw, ceiling);
			if clamped.to_bits() != raw.to_bits() {
				debug!(%name, raw, ceiling, "implausible duration replaced with default");
			}
			clamped
		} else {
			DEFAULT_DURATION
		};

		debug!(variant = variant.as_str(), index, %name, duration, "animation decoded");
		records.push(AnimationRecord::new(name, duration));

		if let Err(err) = skip_timelines(cursor, variant, profile) {
			debug!(index, error = %err, "timeline skip failed, keeping {} decoded animations", records.len());
			break;
		}
	}

	Ok(records)
}

fn read_animation_name(cursor: &mut Cursor<'_>) -> Result<String> {
	let at = cursor.pos();
	let name = cursor.read_string()?;
	let chars = name.chars().count();
	if chars == 0 || chars > MAX_NAME_CHARS {
		cursor.rewind(cursor.pos() - at)?;
		return Err(SkelError::NameDecodeFailure {
			at,
			reason: format!("animation name length {chars} outside 1..={MAX_NAME_CHARS}"),
		});
	}
	Ok(name)
}

fn skip_timelines(cursor: &mut Cursor<'_>, variant: SchemaVariant, profile: &SkipProfile) -> Result<()> {
	match variant {
		SchemaVariant::Versioned => {
			let slots = TIMELINE_SLOTS.read(cursor)?;
			for _ in 0..slots {
				cursor.skip(4)?;
				let timelines = TIMELINES.read(cursor)?;
				for _ in 0..timelines {
					cursor.read_u8()?;
					cursor.skip_clamped(profile.timeline_cap);
				}
			}
			cursor.skip_clamped(profile.animation_tail_cap);
		}
		SchemaVariant::Generic => {
			cursor.skip_clamped(GENERIC_ANIMATION_SKIP);
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests;
