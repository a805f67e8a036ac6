//! The `$2a$cc$salt22hash31` composite hash string: parser and formatter.

use core::fmt;

use crate::base64;
use crate::error::{Error, HashStringError, Result};
use crate::salt::Salt;
use crate::work_factor::WorkFactor;

/// Bytes of raw digest encoded into a hash string (the 24th raw-digest byte
/// is discarded by historical OpenBSD convention).
pub const HASH_PAYLOAD_SIZE: usize = 23;

const SALT_CHARS: usize = 22;
const HASH_CHARS: usize = 31;
const FORMATTED_LEN: usize = 60;

/// An owned, formatted `$2a$cc$salt22hash31` string. Stack-allocated: this
/// crate has no `alloc` dependency.
#[derive(Clone, Copy)]
pub struct HashString {
	buf: [u8; FORMATTED_LEN],
}

impl HashString {
	/// Formats `cost`, `salt`, and a 23-byte truncated digest into the
	/// canonical `$2a$cc$...` string (always 60 characters; this crate never
	/// emits the legacy `$2$` form, only accepts it on parse).
	pub fn format(cost: WorkFactor, salt: &Salt, digest: &[u8; HASH_PAYLOAD_SIZE]) -> Self {
		let mut buf = [0_u8; FORMATTED_LEN];

		buf[0..4].copy_from_slice(b"$2a$");

		let log_rounds = cost.log_rounds();
		buf[4] = b'0' + (log_rounds / 10) as u8;
		buf[5] = b'0' + (log_rounds % 10) as u8;
		buf[6] = b'$';

		let salt_bytes = salt.to_bytes();
		base64::encode(&salt_bytes, salt_bytes.len(), &mut buf[7..7 + SALT_CHARS]);
		base64::encode(digest, digest.len(), &mut buf[7 + SALT_CHARS..FORMATTED_LEN]);

		Self { buf }
	}

	/// Parses either a `$2a$` (60-byte) or legacy `$2$` (59-byte) hash
	/// string into its cost, salt, and truncated digest.
	pub fn parse(s: &str) -> Result<ParsedHash> {
		let bytes = s.as_bytes();

		if bytes.len() < 28 {
			return Err(Error::HashStringMalformed(HashStringError::Length));
		}

		let prefix_len = if bytes.starts_with(b"$2a$") {
			4
		} else if bytes.starts_with(b"$2$") {
			3
		} else {
			return Err(Error::HashStringMalformed(HashStringError::UnknownVersion));
		};

		let expected_len = prefix_len + 2 + 1 + SALT_CHARS + HASH_CHARS;
		if bytes.len() != expected_len {
			return Err(Error::HashStringMalformed(HashStringError::Length));
		}

		let cost_digits = &bytes[prefix_len..prefix_len + 2];
		if !cost_digits.iter().all(u8::is_ascii_digit) {
			return Err(Error::HashStringMalformed(HashStringError::CostNotNumeric));
		}
		let cost_value = u32::from(cost_digits[0] - b'0') * 10 + u32::from(cost_digits[1] - b'0');

		let separator_at = prefix_len + 2;
		if bytes[separator_at] != b'$' {
			return Err(Error::HashStringMalformed(HashStringError::MissingSeparator));
		}

		let salt_start = separator_at + 1;
		let salt_chars = &bytes[salt_start..salt_start + SALT_CHARS];
		let mut salt_bytes = [0_u8; 16];
		base64::decode(salt_chars, SALT_CHARS, &mut salt_bytes)?;

		let hash_start = salt_start + SALT_CHARS;
		let hash_chars = &bytes[hash_start..hash_start + HASH_CHARS];
		let mut digest = [0_u8; HASH_PAYLOAD_SIZE];
		base64::decode(hash_chars, HASH_CHARS, &mut digest)?;

		let cost = WorkFactor::new(cost_value)?;
		let salt = Salt::from_bytes(&salt_bytes);

		Ok(ParsedHash { cost, salt, digest })
	}

	pub fn as_str(&self) -> &str {
		// Every byte was produced by ASCII literals or the radix-64 alphabet,
		// so this is always valid UTF-8.
		core::str::from_utf8(&self.buf).unwrap()
	}
}

impl AsRef<str> for HashString {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}

impl fmt::Display for HashString {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl fmt::Debug for HashString {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_tuple("HashString").field(&self.as_str()).finish()
	}
}

impl PartialEq for HashString {
	fn eq(&self, other: &Self) -> bool {
		self.buf == other.buf
	}
}
impl Eq for HashString {}

/// The fields recovered by [`HashString::parse`].
pub struct ParsedHash {
	pub cost: WorkFactor,
	pub salt: Salt,
	pub digest: [u8; HASH_PAYLOAD_SIZE],
}
