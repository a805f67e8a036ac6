//! Password-to-key normalization (spec §4.6 / SPEC_FULL §4.6 "C7") and a
//! zeroizing buffer for the result.

/// Bytes beyond this offset are dropped before the null terminator is appended.
const MAX_PASSWORD_BYTES: usize = 71;

/// The largest key `bcrypt` itself will accept (71 password bytes + the
/// terminator).
pub const KEY_SIZE_MAX: usize = 72;

/// Clears a `u32` buffer with a volatile write, the same technique the
/// xous-core bcrypt port uses on its plaintext copy, adapted to words.
pub(crate) fn zero_u32_slice(words: &mut [u32]) {
	for w in words.iter_mut() {
		unsafe {
			core::ptr::write_volatile(w, 0);
		}
	}
	core::sync::atomic::compiler_fence(core::sync::atomic::Ordering::SeqCst);
}

fn zero_u8_slice(bytes: &mut [u8]) {
	for b in bytes.iter_mut() {
		unsafe {
			core::ptr::write_volatile(b, 0);
		}
	}
	core::sync::atomic::compiler_fence(core::sync::atomic::Ordering::SeqCst);
}

/// A normalized bcrypt key: 1 to 72 bytes, always null-terminated if it came
/// from a password. Zeroed on drop.
pub struct Key {
	bytes: [u8; KEY_SIZE_MAX],
	len: usize,
}

impl Key {
	/// Normalizes a UTF-8 password into a bcrypt key: truncate to 71 bytes,
	/// append one zero byte. An empty password becomes the 1-byte key `[0]`.
	pub fn from_password(password: &str) -> Self {
		Self::from_password_bytes(password.as_bytes())
	}

	/// As [`Self::from_password`], but takes already-encoded bytes. Useful
	/// when the UTF-16-to-UTF-8 conversion happened outside this crate.
	pub fn from_password_bytes(password: &[u8]) -> Self {
		let truncated = &password[..password.len().min(MAX_PASSWORD_BYTES)];

		let mut bytes = [0_u8; KEY_SIZE_MAX];
		bytes[..truncated.len()].copy_from_slice(truncated);
		// bytes[truncated.len()] is already 0: the null terminator.

		Self {
			bytes,
			len: truncated.len() + 1,
		}
	}

	pub(crate) fn as_bytes(&self) -> &[u8] {
		&self.bytes[..self.len]
	}
}

impl Drop for Key {
	fn drop(&mut self) {
		zero_u8_slice(&mut self.bytes);
	}
}

#[cfg(test)]
mod tests {
	use super::Key;
	use std::format;

	#[test]
	fn empty_password_is_single_null_byte() {
		assert_eq!(Key::from_password("").as_bytes(), &[0]);
	}

	#[test]
	fn appends_null_terminator() {
		assert_eq!(Key::from_password("abc").as_bytes(), b"abc\0");
	}

	#[test]
	fn truncates_and_terminates_long_passwords_identically() {
		let base = "x".repeat(71);
		let p71 = base.clone();
		let p72 = format!("{}y", base);
		let p73 = format!("{}yz", base);

		// The truncation law (spec §8 property 6): hashes (and thus keys) of
		// passwords sharing the first 71 bytes are identical once terminated.
		assert_eq!(Key::from_password(&p71).as_bytes(), Key::from_password(&p72).as_bytes());
		assert_eq!(Key::from_password(&p72).as_bytes(), Key::from_password(&p73).as_bytes());
	}
}
