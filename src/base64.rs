//! The OpenBSD radix-64 alphabet used by `$2a$` hash strings. Not RFC 4648
//! Base64: `.` and `/` sit at positions 0 and 1, and digits come last.
//!
//! Both directions work over caller-supplied buffers: this crate has no
//! `alloc` dependency, matching the teacher primitive's stack-only style.

use crate::error::{Error, Result};

const ALPHABET: &[u8; 64] = b"./ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

const INVALID: u8 = 0xff;

/// `DECODE[c as usize]` is the 6-bit value of ASCII character `c`, or
/// `INVALID` if `c` isn't in the alphabet.
const DECODE: [u8; 128] = {
	let mut table = [INVALID; 128];
	let mut i = 0;
	while i < ALPHABET.len() {
		table[ALPHABET[i] as usize] = i as u8;
		i += 1;
	}
	table
};

/// The number of radix-64 characters needed to encode `len` bytes, with no
/// padding: full triples take 4 characters, a 1-byte remainder takes 2, a
/// 2-byte remainder takes 3.
pub(crate) const fn encoded_len(len: usize) -> usize {
	let (triples, rem) = (len / 3, len % 3);
	triples * 4 + if rem == 0 { 0 } else { rem + 1 }
}

/// Encodes the first `len` bytes of `input` using the OpenBSD radix-64
/// alphabet, writing ASCII characters into `out`. Returns the number of
/// characters written (== [`encoded_len`]`(len)`). `out` must be at least
/// that long.
fn push_sextets(n: u32, count: usize, out: &mut [u8], written: &mut usize) {
	for i in 0..count {
		let shift = 18 - 6 * i;
		out[*written] = ALPHABET[((n >> shift) & 0x3f) as usize];
		*written += 1;
	}
}

pub(crate) fn encode(input: &[u8], len: usize, out: &mut [u8]) -> usize {
	let input = &input[..len];
	let mut written = 0;

	let mut chunks = input.chunks_exact(3);
	for chunk in &mut chunks {
		let n = (u32::from(chunk[0]) << 16) | (u32::from(chunk[1]) << 8) | u32::from(chunk[2]);
		push_sextets(n, 4, out, &mut written);
	}

	match chunks.remainder() {
		[b0] => push_sextets(u32::from(*b0) << 16, 2, out, &mut written),
		[b0, b1] => push_sextets((u32::from(*b0) << 16) | (u32::from(*b1) << 8), 3, out, &mut written),
		_ => {}
	}

	written
}

/// Decodes `len` characters of `input` (an OpenBSD radix-64 string) into
/// `out`, returning the number of bytes written: 2 chars -> 1 byte, 3 chars
/// -> 2 bytes, 4 chars -> 3 bytes, and so on. Requires `len >= 2`.
pub(crate) fn decode(input: &[u8], len: usize, out: &mut [u8]) -> Result<usize> {
	debug_assert!(len >= 2);

	let sextet = |at: usize| -> Result<u8> {
		let c = input[at];
		if c >= 128 {
			return Err(Error::Base64DecodeInvalid { at });
		}
		match DECODE[c as usize] {
			INVALID => Err(Error::Base64DecodeInvalid { at }),
			v => Ok(v),
		}
	};

	let mut written = 0;
	let mut i = 0;

	while i + 2 <= len {
		let remaining = len - i;
		let c0 = sextet(i)?;
		let c1 = sextet(i + 1)?;

		out[written] = (c0 << 2) | (c1 >> 4);
		written += 1;

		if remaining == 2 {
			break;
		}

		let c2 = sextet(i + 2)?;
		out[written] = (c1 << 4) | (c2 >> 2);
		written += 1;

		if remaining == 3 {
			break;
		}

		let c3 = sextet(i + 3)?;
		out[written] = (c2 << 6) | c3;
		written += 1;

		i += 4;
	}

	Ok(written)
}
