//! The OpenBSD bcrypt password hash.
//!
//! This crate implements the three tightly coupled pieces that make up
//! bcrypt: the EksBlowfish ("expensive key schedule") variant of Blowfish,
//! the 64-round digest built on top of it, and the non-standard radix-64
//! `$2a$cc$salt‖hash` hash-string encoding OpenBSD's password file uses.
//!
//! It does **not** choose a cost factor for you (no benchmarking, no
//! Moore's-law slider), does not convert text encodings, and only
//! understands the `$2$`/`$2a$` version tags. `$2b$`/`$2x$`/`$2y$` are a
//! separate, opt-in concern this crate doesn't take on.
//!
//! ```
//! # fn main() -> Result<(), obcrypt::Error> {
//! let hash = obcrypt::hash_password_with_cost("hunter2", obcrypt::WorkFactor::EXP4)?;
//! assert!(obcrypt::check_password("hunter2", hash.as_str())?);
//! assert!(!obcrypt::check_password("wrong", hash.as_str())?);
//! # Ok(())
//! # }
//! ```

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod base64;
mod blowfish;
mod digest;
mod eks;
mod error;
mod hash_string;
mod key;
mod salt;
mod work_factor;


pub use crate::digest::RAW_DIGEST_SIZE;
pub use crate::error::{Error, HashStringError};
pub use crate::hash_string::{HashString, ParsedHash, HASH_PAYLOAD_SIZE};
pub use crate::key::KEY_SIZE_MAX;
pub use crate::salt::{Salt, SALT_SIZE};
pub use crate::work_factor::WorkFactor;

#[cfg(feature = "getrandom")]
pub use crate::salt::generate_salt;

use crate::key::Key;
use subtle::ConstantTimeEq;

/// The cost used by [`hash_password`] in the absence of a benchmarking
/// heuristic: at least 11, per this crate's external-collaborator contract.
pub const DEFAULT_COST: WorkFactor = WorkFactor::DEFAULT;

/// Computes the raw 24-byte bcrypt digest of `password` under `salt` and
/// `cost`. This is the deterministic primitive everything else is built on.
pub fn hash_raw(password: &str, salt: &Salt, cost: WorkFactor) -> error::Result<[u8; RAW_DIGEST_SIZE]> {
	let key = Key::from_password(password);
	digest::crypt_core(cost, key.as_bytes(), salt)
}

/// Hashes `password` under the given salt and cost, truncating the raw
/// digest to 23 bytes and framing it as a `$2a$cc$...` string.
pub fn hash_with_salt(password: &str, salt: &Salt, cost: WorkFactor) -> error::Result<HashString> {
	let raw = hash_raw(password, salt, cost)?;
	let mut truncated = [0_u8; HASH_PAYLOAD_SIZE];
	truncated.copy_from_slice(&raw[..HASH_PAYLOAD_SIZE]);
	Ok(HashString::format(cost, salt, &truncated))
}

/// Hashes `password` under a freshly generated salt and the given `cost`,
/// returning a formatted `$2a$cc$...` hash string.
#[cfg(feature = "getrandom")]
pub fn hash_password_with_cost(password: &str, cost: WorkFactor) -> error::Result<HashString> {
	let salt = Salt::generate()?;
	hash_with_salt(password, &salt, cost)
}

/// Hashes `password` at [`DEFAULT_COST`] under a freshly generated salt.
#[cfg(feature = "getrandom")]
pub fn hash_password(password: &str) -> error::Result<HashString> {
	hash_password_with_cost(password, DEFAULT_COST)
}

/// Checks `password` against a formatted `$2a$cc$...` (or legacy `$2$...`)
/// hash string.
///
/// Parse failures in `expected` are propagated as errors; a parsed-but-wrong
/// password returns `Ok(false)`, never an error. Comparison is on the parsed
/// `(cost, salt, digest)` tuple rather than the reformatted string, so a
/// legacy `$2$` hash verifies correctly even though this crate only ever
/// *emits* `$2a$` (see `DESIGN.md` for why).
pub fn check_password(password: &str, expected: &str) -> error::Result<bool> {
	let parsed = HashString::parse(expected)?;

	let key = Key::from_password(password);
	let raw = digest::crypt_core(parsed.cost, key.as_bytes(), &parsed.salt)?;

	Ok(bool::from(raw[..HASH_PAYLOAD_SIZE].ct_eq(&parsed.digest)))
}

/// Checks a password against a raw 24-byte digest computed under the given
/// salt and cost, comparing in constant time.
pub fn check_password_raw(
	password: &str,
	salt: &Salt,
	expected: &[u8; RAW_DIGEST_SIZE],
	cost: WorkFactor,
) -> error::Result<bool> {
	let actual = hash_raw(password, salt, cost)?;
	Ok(bool::from(actual.ct_eq(expected)))
}
