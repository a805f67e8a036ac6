use crate::error::{Error, Result};

/// A bcrypt work factor: the base-2 logarithm of the number of `expand_key`
/// rekeyings performed during expensive key setup.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct WorkFactor(u32);

impl WorkFactor {
	pub const EXP4: Self = Self(4);
	pub const EXP5: Self = Self(5);
	pub const EXP6: Self = Self(6);
	pub const EXP7: Self = Self(7);
	pub const EXP8: Self = Self(8);
	pub const EXP9: Self = Self(9);
	pub const EXP10: Self = Self(10);
	pub const EXP11: Self = Self(11);
	pub const EXP12: Self = Self(12);
	pub const EXP13: Self = Self(13);
	pub const EXP14: Self = Self(14);
	pub const EXP15: Self = Self(15);
	pub const EXP16: Self = Self(16);
	pub const EXP17: Self = Self(17);
	pub const EXP18: Self = Self(18);
	pub const EXP19: Self = Self(19);
	pub const EXP20: Self = Self(20);
	pub const EXP21: Self = Self(21);
	pub const EXP22: Self = Self(22);
	pub const EXP23: Self = Self(23);
	pub const EXP24: Self = Self(24);
	pub const EXP25: Self = Self(25);
	pub const EXP26: Self = Self(26);
	pub const EXP27: Self = Self(27);
	pub const EXP28: Self = Self(28);
	pub const EXP29: Self = Self(29);
	pub const EXP30: Self = Self(30);
	pub const EXP31: Self = Self(31);

	/// The default cost used by [`crate::hash_password`] when the caller has no
	/// benchmarking heuristic of their own: at least 11, per the spec's floor.
	pub const DEFAULT: Self = Self(12);

	/// Creates a bcrypt work factor from a base-2 exponent between 4 and 31
	/// (inclusive). The number of rounds is `2.pow(log_rounds)`.
	pub fn exp(log_rounds: u32) -> Option<Self> {
		if log_rounds >= 4 && log_rounds <= 31 {
			Some(Self(log_rounds))
		} else {
			None
		}
	}

	/// Like [`Self::exp`], but returns `Error::CostOutOfRange` instead of `None`.
	pub fn new(log_rounds: u32) -> Result<Self> {
		Self::exp(log_rounds).ok_or(Error::CostOutOfRange { cost: log_rounds })
	}

	/// The base-2 logarithm of the number of rounds represented by this work factor.
	pub const fn log_rounds(self) -> u32 {
		self.0
	}

	/// The number of rounds represented by this work factor.
	pub const fn linear_rounds(self) -> u32 {
		1 << self.0
	}
}

#[cfg(test)]
mod tests {
	use super::WorkFactor;
	use crate::error::Error;

	#[test]
	fn rejects_out_of_range() {
		assert_eq!(WorkFactor::exp(3), None);
		assert_eq!(WorkFactor::exp(32), None);
		assert_eq!(WorkFactor::new(3), Err(Error::CostOutOfRange { cost: 3 }));
		assert_eq!(WorkFactor::new(32), Err(Error::CostOutOfRange { cost: 32 }));
	}

	#[test]
	fn accepts_boundary() {
		assert_eq!(WorkFactor::exp(4).map(|f| f.log_rounds()), Some(4));
		assert_eq!(WorkFactor::exp(31).map(|f| f.linear_rounds()), Some(2147483648));
	}

	#[test]
	fn default_meets_spec_floor() {
		assert!(WorkFactor::DEFAULT.log_rounds() >= 11);
	}
}
