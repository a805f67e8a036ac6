//! The 16-byte bcrypt salt, and (behind the `getrandom` feature) a CSPRNG
//! source for fresh ones.

use core::convert::TryInto;

use crate::error::{Error, Result};

/// The number of bytes in a bcrypt salt.
pub const SALT_SIZE: usize = 16;

/// A bcrypt salt: exactly 16 bytes, stored as four big-endian words so
/// `expand_key` can XOR it into the P-array and S-boxes without re-parsing
/// bytes on every round.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Salt {
	pub(crate) be: [u32; 4],
}

impl Salt {
	/// Creates a bcrypt salt from exactly 16 bytes.
	pub fn from_bytes(bytes: &[u8; SALT_SIZE]) -> Self {
		let mut be = [0_u32; 4];

		for i in 0..4 {
			be[i] = u32::from_be_bytes([
				bytes[4 * i],
				bytes[4 * i + 1],
				bytes[4 * i + 2],
				bytes[4 * i + 3],
			]);
		}

		Self { be }
	}

	/// Creates a bcrypt salt from a slice, validating its length.
	pub fn from_slice(bytes: &[u8]) -> Result<Self> {
		let array: &[u8; SALT_SIZE] = bytes
			.try_into()
			.map_err(|_| Error::SaltLengthInvalid { actual: bytes.len() })?;

		Ok(Self::from_bytes(array))
	}

	/// Gets the bytes making up a bcrypt salt.
	pub fn to_bytes(&self) -> [u8; SALT_SIZE] {
		let mut bytes = [0_u8; SALT_SIZE];

		for (b, w) in bytes.chunks_exact_mut(4).zip(self.be.iter().copied()) {
			b.copy_from_slice(&w.to_be_bytes());
		}

		bytes
	}

	/// Generates a fresh salt from the platform CSPRNG.
	#[cfg(feature = "getrandom")]
	pub fn generate() -> Result<Self> {
		let mut bytes = [0_u8; SALT_SIZE];
		getrandom::fill(&mut bytes).map_err(|_| Error::PlatformRandomnessFailed)?;
		Ok(Self::from_bytes(&bytes))
	}
}

/// Generates a fresh 16-byte bcrypt salt from the platform CSPRNG.
#[cfg(feature = "getrandom")]
pub fn generate_salt() -> Result<Salt> {
	Salt::generate()
}
