use crate::skel::{Result, SkelError};

/// Upper bound accepted for a length prefix; anything larger is treated as corruption.
pub const MAX_STRING_LEN: i32 = 10_000;
/// Number of leading string bytes inspected before committing to a string read.
pub const PROBE_LEN: usize = 20;

/// Bounded little-endian cursor over an immutable byte slice.
///
/// Failed reads never move the cursor.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return total length of the underlying slice.
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	/// Return whether the underlying slice is empty.
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(self.underrun(n));
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Advance by exactly `n` bytes.
	pub fn skip(&mut self, n: usize) -> Result<()> {
		self.read_exact(n).map(|_| ())
	}

	/// Advance by up to `n` bytes, stopping at the end of the buffer. Returns bytes skipped.
	pub fn skip_clamped(&mut self, n: usize) -> usize {
		let step = n.min(self.remaining());
		self.pos += step;
		step
	}

	/// Move back by `n` bytes.
	pub fn rewind(&mut self, n: usize) -> Result<()> {
		if n > self.pos {
			return Err(SkelError::BufferUnderrun {
				at: self.pos,
				need: n,
				rem: self.pos,
			});
		}
		self.pos -= n;
		Ok(())
	}

	/// Read one byte.
	pub fn read_u8(&mut self) -> Result<u8> {
		Ok(self.read_exact(1)?[0])
	}

	/// Read a little-endian `i32`.
	pub fn read_i32_le(&mut self) -> Result<i32> {
		Ok(i32::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `f32`.
	pub fn read_f32_le(&mut self) -> Result<f32> {
		Ok(f32::from_le_bytes(self.read_array()?))
	}

	/// Read a length-prefixed, terminator-suffixed UTF-8 string.
	///
	/// The prefix counts the terminator byte. On any failure the cursor is restored to the
	/// position of the prefix.
	pub fn read_string(&mut self) -> Result<String> {
		let start = self.pos;
		let len = self.read_i32_le()?;
		let result = self.read_string_body(start, len);
		if result.is_err() {
			self.pos = start;
		}
		result
	}

	/// Skip a length-prefixed string without validating it.
	///
	/// Non-positive lengths consume only the prefix; oversized lengths run to the end.
	pub fn skip_string(&mut self) {
		if self.remaining() < 4 {
			return;
		}
		let Ok(len) = self.read_i32_le() else {
			return;
		};
		if len > 0 {
			self.skip_clamped(len as usize);
		}
	}

	fn read_string_body(&mut self, at: usize, len: i32) -> Result<String> {
		if len <= 0 || len > MAX_STRING_LEN {
			return Err(SkelError::NameDecodeFailure {
				at,
				reason: format!("length {len} out of range"),
			});
		}

		let len = len as usize;
		if len > self.remaining() + 1 {
			return Err(SkelError::NameDecodeFailure {
				at,
				reason: format!("length {len} exceeds remaining {}", self.remaining()),
			});
		}

		let body_len = len - 1;
		let probe_end = self.pos + body_len.min(PROBE_LEN).min(self.remaining());
		if let Some(byte) = self.bytes[self.pos..probe_end].iter().copied().find(|byte| is_rejected_control(*byte)) {
			return Err(SkelError::NameDecodeFailure {
				at,
				reason: format!("control byte 0x{byte:02x} in string body"),
			});
		}

		let body = self.read_exact(body_len)?;
		let text = std::str::from_utf8(body).map_err(|err| SkelError::NameDecodeFailure {
			at,
			reason: format!("invalid utf-8: {err}"),
		})?;
		self.skip(1)?;
		Ok(text.to_owned())
	}

	fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let raw = self.read_exact(N)?;
		let mut buf = [0_u8; N];
		buf.copy_from_slice(raw);
		Ok(buf)
	}

	fn underrun(&self, need: usize) -> SkelError {
		SkelError::BufferUnderrun {
			at: self.pos,
			need,
			rem: self.remaining(),
		}
	}
}

fn is_rejected_control(byte: u8) -> bool {
	byte < 0x20 && !matches!(byte, 0x00 | b'\t' | b'\n' | b'\r')
}
