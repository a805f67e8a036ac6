//! The "expensive key schedule" (EksBlowfish) that turns a Blowfish state,
//! a key, and a salt into the key-dependent schedule bcrypt encrypts under.

use crate::blowfish::BlowfishState;
use crate::error::{Error, Result};
use crate::salt::Salt;
use crate::work_factor::WorkFactor;

const BLF_N: usize = 16;
const ZERO_SALT: [u32; 4] = [0; 4];

/// An iterator yielding the bytes of `key`, cyclically, forever.
struct KeyCycle<'a> {
	key: &'a [u8],
	index: usize,
}

impl<'a> Iterator for KeyCycle<'a> {
	type Item = u8;

	fn next(&mut self) -> Option<u8> {
		if self.index == self.key.len() {
			self.index = 0;
		}

		let result = self.key[self.index];
		self.index += 1;
		Some(result)
	}
}

fn read_u32_be(bytes: &mut impl Iterator<Item = u8>) -> u32 {
	u32::from(bytes.next().unwrap()) << 24
		| u32::from(bytes.next().unwrap()) << 16
		| u32::from(bytes.next().unwrap()) << 8
		| u32::from(bytes.next().unwrap())
}

/// Folds `key` cyclically, 4 bytes at a time big-endian, XORing into every
/// P-array word.
fn fold_key_into_p(state: &mut BlowfishState, key: &[u8]) {
	debug_assert!(!key.is_empty());
	let mut cycle = KeyCycle { key, index: 0 };

	for pi in &mut state.p {
		*pi ^= read_u32_be(&mut cycle);
	}
}

/// Runs the toggle-XOR/encipher/assign chain that overwrites P and then all
/// four S-boxes, XORing `salt` (as alternating 8-byte halves) into the
/// running block before each encryption. `salt == ZERO_SALT` makes the XOR a
/// no-op, matching the spec's "salt of length 0" exception.
fn absorb_into_schedule(state: &mut BlowfishState, salt: &[u32; 4]) {
	let mut l = 0_u32;
	let mut r = 0_u32;

	for i in (0..BLF_N + 2).step_by(2) {
		l ^= salt[i % 4];
		r ^= salt[i % 4 + 1];
		let (next_l, next_r) = state.encipher(l, r);
		l = next_l;
		r = next_r;

		state.p[i] = l;
		state.p[i + 1] = r;
	}

	for s_box in 0..4 {
		for k in (0..256).step_by(2) {
			l ^= salt[(k + 2) % 4];
			r ^= salt[(k + 2) % 4 + 1];
			let (next_l, next_r) = state.encipher(l, r);
			l = next_l;
			r = next_r;

			state.s[s_box][k] = l;
			state.s[s_box][k + 1] = r;
		}
	}
}

/// `ExpandKey(state, salt, key)`: absorbs `key` into the P-array, then runs
/// the salt-toggled chain through P and all four S-boxes.
pub(crate) fn expand_key(state: &mut BlowfishState, salt: &[u32; 4], key: &[u8]) {
	fold_key_into_p(state, key);
	absorb_into_schedule(state, salt);
}

/// `EksBlowfishSetup(cost, salt, key)`: the expensive key schedule. Runs
/// `expand_key` once with the real salt and key, then `2^cost` more times
/// alternating a zero-salted pass over `key` and a zero-salted pass treating
/// the salt's own bytes as the key.
pub(crate) fn eks_setup(cost: WorkFactor, salt: &Salt, key: &[u8]) -> Result<BlowfishState> {
	if key.is_empty() || key.len() > crate::key::KEY_SIZE_MAX {
		return Err(Error::KeyLengthInvalid { actual: key.len() });
	}

	let mut state = BlowfishState::new();
	let salt_bytes = salt.to_bytes();

	expand_key(&mut state, &salt.be, key);

	for _ in 0..cost.linear_rounds() {
		expand_key(&mut state, &ZERO_SALT, key);
		expand_key(&mut state, &ZERO_SALT, &salt_bytes);
	}

	Ok(state)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rejects_empty_and_oversized_keys() {
		let salt = Salt::from_bytes(&[0; 16]);
		let cost = WorkFactor::exp(4).unwrap();

		assert_eq!(eks_setup(cost, &salt, &[]).err(), Some(Error::KeyLengthInvalid { actual: 0 }));
		assert_eq!(
			eks_setup(cost, &salt, &[1; 73]).err(),
			Some(Error::KeyLengthInvalid { actual: 73 })
		);
	}

	#[test]
	fn different_salts_give_different_schedules() {
		let cost = WorkFactor::exp(4).unwrap();
		let key = b"password\0";

		let salt_a = Salt::from_bytes(&[0xaa; 16]);
		let salt_b = Salt::from_bytes(&[0xbb; 16]);

		let state_a = eks_setup(cost, &salt_a, key).unwrap();
		let state_b = eks_setup(cost, &salt_b, key).unwrap();

		assert_ne!(state_a.p, state_b.p);
	}
}
