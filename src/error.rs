use core::fmt;

/// Why a `$2a$`/`$2$` hash string failed to parse.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum HashStringError {
	/// Fewer than 28 bytes, or not exactly 59/60 bytes for the matched version.
	Length,

	/// Neither `$2$` nor `$2a$`.
	UnknownVersion,

	/// The two cost characters weren't ASCII decimal digits.
	CostNotNumeric,

	/// A `$` separator was missing where the grammar requires one.
	MissingSeparator,
}

impl fmt::Display for HashStringError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", match self {
			HashStringError::Length => "hash string has the wrong length",
			HashStringError::UnknownVersion => "unrecognized bcrypt version tag",
			HashStringError::CostNotNumeric => "cost field is not decimal digits",
			HashStringError::MissingSeparator => "missing '$' separator",
		})
	}
}

/// Everything that can go wrong computing or checking a bcrypt hash.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Error {
	/// The cost factor wasn't in `4..=31`.
	CostOutOfRange {
		/// The rejected cost.
		cost: u32,
	},

	/// The salt wasn't exactly 16 bytes.
	SaltLengthInvalid {
		/// The rejected length.
		actual: usize,
	},

	/// The key (post password-normalization) was empty or longer than 72 bytes.
	KeyLengthInvalid {
		/// The rejected length.
		actual: usize,
	},

	/// A `$2a$cc$…` hash string didn't match the grammar.
	HashStringMalformed(HashStringError),

	/// A character outside the radix-64 alphabet (or with ordinal > 127) appeared
	/// where encoded salt or digest bytes were expected.
	Base64DecodeInvalid {
		/// Byte offset of the offending character within the decoded string.
		at: usize,
	},

	/// The platform CSPRNG refused to produce random bytes.
	PlatformRandomnessFailed,
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Error::CostOutOfRange { cost } => write!(f, "cost {} is outside the valid range 4..=31", cost),
			Error::SaltLengthInvalid { actual } => write!(f, "salt must be 16 bytes, got {}", actual),
			Error::KeyLengthInvalid { actual } => write!(f, "key must be 1..=72 bytes, got {}", actual),
			Error::HashStringMalformed(inner) => write!(f, "malformed hash string: {}", inner),
			Error::Base64DecodeInvalid { at } => write!(f, "invalid radix-64 character at offset {}", at),
			Error::PlatformRandomnessFailed => write!(f, "the platform RNG failed to produce random bytes"),
		}
	}
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<HashStringError> for Error {
	fn from(inner: HashStringError) -> Self {
		Error::HashStringMalformed(inner)
	}
}

pub type Result<T> = core::result::Result<T, Error>;
