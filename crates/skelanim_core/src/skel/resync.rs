use tracing::debug;

use crate::skel::bytes::Cursor;
use crate::skel::layout::is_plausible_animation_count;
use crate::skel::{Result, SkelError};

/// Scan forward at a 4-byte stride for a plausible animation count.
///
/// On success the cursor is left on the count so the table decoder reads it like
/// a structurally located one. Returns the count found.
pub fn resynchronize(cursor: &mut Cursor<'_>) -> Result<i32> {
	let from = cursor.pos();
	let mut scanned = 0;
	while cursor.remaining() >= 4 {
		let value = cursor.read_i32_le()?;
		scanned += 1;
		if is_plausible_animation_count(value) {
			cursor.rewind(4)?;
			debug!(from, at = cursor.pos(), count = value, "resynchronized on animation count");
			return Ok(value);
		}
	}

	Err(SkelError::UnrecoverablePosition { from, scanned })
}
