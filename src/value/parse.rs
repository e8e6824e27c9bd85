/*!
# Tartan: Literal Parsing.

Integer literals follow the usual base-prefix conventions: `0x`/`0X` for hex,
`0o`/`0O` (or a bare leading `0`) for octal, `0b`/`0B` for binary, decimal
otherwise. Signed types accept a leading `+` or `-`; unsigned types accept
neither.
*/

use crate::{
	Duration,
	ErrorKind,
};



/// # Parse Unsigned Digits.
///
/// Parse the (sign-free) literal, failing with [`ErrorKind::Range`] the moment
/// the running total exceeds `max`.
fn parse_digits(raw: &[u8], max: u64) -> Result<u64, ErrorKind> {
	let (base, digits): (u64, &[u8]) = match raw {
		[b'0', b'x' | b'X', rest @ ..] => (16, rest),
		[b'0', b'b' | b'B', rest @ ..] => (2, rest),
		[b'0', b'o' | b'O', rest @ ..] => (8, rest),
		[b'0', rest @ ..] if ! rest.is_empty() => (8, rest),
		_ => (10, raw),
	};

	if digits.is_empty() { return Err(ErrorKind::Syntax); }

	let mut out = 0_u64;
	for &b in digits {
		let d = match b {
			b'0'..=b'9' => u64::from(b - b'0'),
			b'a'..=b'z' => u64::from(b - b'a') + 10,
			b'A'..=b'Z' => u64::from(b - b'A') + 10,
			_ => return Err(ErrorKind::Syntax),
		};
		if base <= d { return Err(ErrorKind::Syntax); }

		out = out.checked_mul(base)
			.and_then(|n| n.checked_add(d))
			.filter(|n| *n <= max)
			.ok_or(ErrorKind::Range)?;
	}

	Ok(out)
}

/// # Parse Signed Integer.
///
/// Parse a signed integer that must fit in `bits` bits (`1..=64`).
pub(crate) fn parse_int(raw: &str, bits: u32) -> Result<i64, ErrorKind> {
	let (neg, body) = match raw.as_bytes() {
		[b'-', rest @ ..] => (true, rest),
		[b'+', rest @ ..] => (false, rest),
		rest => (false, rest),
	};

	// The magnitude of the most negative value.
	let cutoff = 1_u64 << (bits - 1);
	let max = if neg { cutoff } else { cutoff - 1 };
	let n = parse_digits(body, max)?;

	if neg {
		// The cutoff itself is only representable as a negative.
		if n == cutoff { Ok(i64::MIN >> (64 - bits)) }
		else { Ok(-(n as i64)) }
	}
	else { Ok(n as i64) }
}

/// # Parse Unsigned Integer.
///
/// Parse an unsigned integer that must fit in `bits` bits (`1..=64`).
pub(crate) fn parse_uint(raw: &str, bits: u32) -> Result<u64, ErrorKind> {
	let max = if bits == 64 { u64::MAX } else { (1_u64 << bits) - 1 };
	parse_digits(raw.as_bytes(), max)
}

/// # Is Infinity Literal?
fn is_inf_literal(raw: &str) -> bool {
	let raw = raw.strip_prefix(['+', '-']).unwrap_or(raw);
	raw.eq_ignore_ascii_case("inf") || raw.eq_ignore_ascii_case("infinity")
}

/// # Parse Float (64).
///
/// Overflow to infinity is reported as [`ErrorKind::Range`] unless the literal
/// actually spelled out an infinity.
pub(crate) fn parse_f64(raw: &str) -> Result<f64, ErrorKind> {
	let v: f64 = raw.parse().map_err(|_| ErrorKind::Syntax)?;
	if v.is_infinite() && ! is_inf_literal(raw) { Err(ErrorKind::Range) }
	else { Ok(v) }
}

/// # Parse Float (32).
pub(crate) fn parse_f32(raw: &str) -> Result<f32, ErrorKind> {
	let v: f32 = raw.parse().map_err(|_| ErrorKind::Syntax)?;
	if v.is_infinite() && ! is_inf_literal(raw) { Err(ErrorKind::Range) }
	else { Ok(v) }
}

/// # Parse Bool.
///
/// The vocabulary is case-insensitive: `1`, `t`, `y`, `true`, `yes` are
/// truthy; `0`, `f`, `n`, `false`, `no` are falsy.
pub(crate) fn parse_bool(raw: &str) -> Result<bool, ErrorKind> {
	let raw = raw.as_bytes();
	if raw.len() <= 5 {
		let mut buf = [0_u8; 5];
		let buf = &mut buf[..raw.len()];
		buf.copy_from_slice(raw);
		buf.make_ascii_lowercase();
		match &*buf {
			b"1" | b"t" | b"y" | b"true" | b"yes" => return Ok(true),
			b"0" | b"f" | b"n" | b"false" | b"no" => return Ok(false),
			_ => {},
		}
	}

	Err(ErrorKind::Syntax)
}

#[must_use]
/// # Is Bool-Like?
///
/// Returns `true` if the text belongs to the boolean vocabulary accepted by
/// `bool` values. The parser uses this to decide whether a bare token
/// following a boolean flag is that flag's value.
///
/// ## Examples
///
/// ```
/// assert!(tartan::is_bool_like("YES"));
/// assert!(tartan::is_bool_like("f"));
/// assert!(! tartan::is_bool_like("abcd"));
/// ```
pub fn is_bool_like(raw: &str) -> bool { parse_bool(raw).is_ok() }

#[must_use]
/// # Is Number?
///
/// Returns `true` if the text parses as a 64-bit signed or unsigned integer
/// (any base) or as a float. Dash-prefixed numbers like `-42` are values, not
/// flags.
///
/// ## Examples
///
/// ```
/// assert!(tartan::is_number("-42"));
/// assert!(tartan::is_number("-0x1A"));
/// assert!(tartan::is_number("-1.5e3"));
/// assert!(! tartan::is_number("-x"));
/// ```
pub fn is_number(raw: &str) -> bool {
	parse_int(raw, 64).is_ok() ||
	parse_f64(raw).is_ok() ||
	parse_uint(raw, 64).is_ok()
}

#[must_use]
/// # Is Duration?
///
/// Returns `true` if the text parses as a [`Duration`], e.g. `-5s`.
pub fn is_duration(raw: &str) -> bool { raw.parse::<Duration>().is_ok() }

#[inline]
#[must_use]
/// # Looks Like a Value?
///
/// Numbers and durations are never mistaken for flags.
pub(crate) fn is_value_like(raw: &str) -> bool { is_number(raw) || is_duration(raw) }



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_parse_int() {
		for (raw, expected) in [
			("0", 0),
			("-0", 0),
			("+7", 7),
			("1337", 1337),
			("-7331", -7331),
			("0xABC", 0xABC),
			("-0xCBA", -0xCBA),
			("0b10111011", 0b1011_1011),
			("-0b11011101", -0b1101_1101),
			("0o17", 0o17),
			("017", 0o17),
			("9223372036854775807", i64::MAX),
			("-9223372036854775808", i64::MIN),
		] {
			assert_eq!(parse_int(raw, 64), Ok(expected), "Bug: {raw:?} should parse.");
		}

		for raw in ["", "-", "+", "abcd", "1337a", "true", "12.34", "-43.21", "0x", "08", "1_000", "--1"] {
			assert_eq!(parse_int(raw, 64), Err(ErrorKind::Syntax), "Bug: {raw:?} should be bad syntax.");
		}

		for raw in ["9223372036854775808", "-9223372036854775809", "99999999999999999999999"] {
			assert_eq!(parse_int(raw, 64), Err(ErrorKind::Range), "Bug: {raw:?} should be out of range.");
		}

		// Narrow widths.
		assert_eq!(parse_int("127", 8), Ok(127));
		assert_eq!(parse_int("-128", 8), Ok(-128));
		assert_eq!(parse_int("128", 8), Err(ErrorKind::Range));
		assert_eq!(parse_int("-129", 8), Err(ErrorKind::Range));
		assert_eq!(parse_int("-2147483648", 32), Ok(i64::from(i32::MIN)));
		assert_eq!(parse_int("2147483648", 32), Err(ErrorKind::Range));
	}

	#[test]
	fn t_parse_uint() {
		assert_eq!(parse_uint("0", 64), Ok(0));
		assert_eq!(parse_uint("0xABC", 64), Ok(0xABC));
		assert_eq!(parse_uint("18446744073709551615", 64), Ok(u64::MAX));
		assert_eq!(parse_uint("18446744073709551616", 64), Err(ErrorKind::Range));
		assert_eq!(parse_uint("255", 8), Ok(255));
		assert_eq!(parse_uint("256", 8), Err(ErrorKind::Range));

		// Signs aren't allowed at all.
		assert_eq!(parse_uint("-0", 64), Err(ErrorKind::Syntax));
		assert_eq!(parse_uint("-7331", 64), Err(ErrorKind::Syntax));
		assert_eq!(parse_uint("+1", 64), Err(ErrorKind::Syntax));
	}

	#[test]
	fn t_parse_float() {
		assert_eq!(parse_f64("1337"), Ok(1337.0));
		assert_eq!(parse_f64("-7331"), Ok(-7331.0));
		assert_eq!(parse_f64(&f64::MAX.to_string()), Ok(f64::MAX));
		assert_eq!(parse_f64("1.79769e+309"), Err(ErrorKind::Range));
		assert_eq!(parse_f32("3.40282e+39"), Err(ErrorKind::Range));
		assert_eq!(parse_f64("-inf"), Ok(f64::NEG_INFINITY));
		for raw in ["", "abcd", "12.43a", "true"] {
			assert_eq!(parse_f64(raw), Err(ErrorKind::Syntax), "Bug: {raw:?} should be bad syntax.");
		}
	}

	#[test]
	fn t_parse_bool() {
		for raw in ["1", "t", "T", "true", "True", "TrUe", "y", "Y", "yes", "YEs"] {
			assert_eq!(parse_bool(raw), Ok(true), "Bug: {raw:?} should be true.");
		}
		for raw in ["0", "f", "F", "false", "FALSE", "n", "N", "no", "nO"] {
			assert_eq!(parse_bool(raw), Ok(false), "Bug: {raw:?} should be false.");
		}
		for raw in ["", "2", "abcd", "yess", "truee", "-1", "on"] {
			assert!(! is_bool_like(raw), "Bug: {raw:?} shouldn't be bool-like.");
		}
	}

	#[test]
	fn t_is_value_like() {
		for raw in ["-42", "-0", "-0x1A", "-1.5", "-1e9", "-5s", "-2h45m", "-1.5µs", "18446744073709551615"] {
			assert!(is_value_like(raw), "Bug: {raw:?} should look like a value.");
		}
		for raw in ["-", "--", "-a", "-abc", "--long", "-5x", "-s5"] {
			assert!(! is_value_like(raw), "Bug: {raw:?} shouldn't look like a value.");
		}
	}
}
