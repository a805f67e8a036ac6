//! The bcrypt digest proper: derive the EksBlowfish schedule, then encrypt
//! the fixed 24-byte constant 64 times in ECB.

use crate::eks::eks_setup;
use crate::error::Result;
use crate::salt::Salt;
use crate::work_factor::WorkFactor;

/// The number of raw digest bytes bcrypt produces (three Blowfish blocks).
pub const RAW_DIGEST_SIZE: usize = 24;

const ROUNDS: u32 = 64;

const BCRYPT_MESSAGE: [u32; 6] = {
	const fn u32_from_be_bytes(bytes: [u8; 4]) -> u32 {
		(bytes[0] as u32) << 24 | (bytes[1] as u32) << 16 | (bytes[2] as u32) << 8 | (bytes[3] as u32)
	}

	[
		u32_from_be_bytes(*b"Orph"),
		u32_from_be_bytes(*b"eanB"),
		u32_from_be_bytes(*b"ehol"),
		u32_from_be_bytes(*b"derS"),
		u32_from_be_bytes(*b"cryD"),
		u32_from_be_bytes(*b"oubt"),
	]
};

/// `CryptCore(cost, key, salt) -> [u8; 24]`: the raw bcrypt digest. `key`
/// must already be normalized (1 to 72 bytes, e.g. via [`crate::key::Key`]).
pub fn crypt_core(cost: WorkFactor, key: &[u8], salt: &Salt) -> Result<[u8; RAW_DIGEST_SIZE]> {
	let state = eks_setup(cost, salt, key)?;

	let mut ctext = BCRYPT_MESSAGE;

	for _ in 0..ROUNDS {
		for i in (0..BCRYPT_MESSAGE.len()).step_by(2) {
			let (l, r) = state.encipher(ctext[i], ctext[i + 1]);
			ctext[i] = l;
			ctext[i + 1] = r;
		}
	}

	let mut result = [0_u8; RAW_DIGEST_SIZE];
	for (b, w) in result.chunks_exact_mut(4).zip(ctext.iter().copied()) {
		b.copy_from_slice(&w.to_be_bytes());
	}

	Ok(result)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::key::Key;
	use std::format;

	fn digest(password: &str, salt_bytes: &[u8; 16], cost: u32) -> [u8; 24] {
		let key = Key::from_password(password);
		let salt = Salt::from_bytes(salt_bytes);
		let work_factor = WorkFactor::exp(cost).unwrap();
		crypt_core(work_factor, key.as_bytes(), &salt).unwrap()
	}

	#[test]
	fn deterministic_for_same_inputs() {
		let a = digest("correct horse", &[7; 16], 4);
		let b = digest("correct horse", &[7; 16], 4);
		assert_eq!(a, b);
	}

	#[test]
	fn differs_across_passwords() {
		let a = digest("password-one", &[3; 16], 4);
		let b = digest("password-two", &[3; 16], 4);
		assert_ne!(a, b);
	}

	#[test]
	fn differs_across_salts() {
		let a = digest("same password", &[1; 16], 4);
		let b = digest("same password", &[2; 16], 4);
		assert_ne!(a, b);
	}

	#[test]
	fn truncation_law_holds_on_the_raw_digest() {
		// Property 6: passwords sharing their first 71 bytes collide.
		let base = "q".repeat(71);
		let p71 = base.clone();
		let p72 = format!("{}r", base);
		let p73 = format!("{}rs", base);

		let salt = [9_u8; 16];
		assert_eq!(digest(&p71, &salt, 4), digest(&p72, &salt, 4));
		assert_eq!(digest(&p72, &salt, 4), digest(&p73, &salt, 4));
	}

	#[test]
	fn fifty_five_through_fifty_seven_byte_passwords_all_differ() {
		let salt = [4_u8; 16];
		let p55 = "z".repeat(55);
		let p56 = "z".repeat(56);
		let p57 = "z".repeat(57);

		let d55 = digest(&p55, &salt, 4);
		let d56 = digest(&p56, &salt, 4);
		let d57 = digest(&p57, &salt, 4);

		assert_ne!(d55, d56);
		assert_ne!(d56, d57);
		assert_ne!(d55, d57);
	}
}
