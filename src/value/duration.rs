/*!
# Tartan: Duration.
*/

use crate::ErrorKind;
use std::{
	fmt,
	str::FromStr,
};



/// # Nanoseconds Per Unit.
const NS: u64 = 1;
/// # Nanoseconds Per Microsecond.
const US: u64 = 1_000 * NS;
/// # Nanoseconds Per Millisecond.
const MS: u64 = 1_000 * US;
/// # Nanoseconds Per Second.
const SEC: u64 = 1_000 * MS;
/// # Nanoseconds Per Minute.
const MIN: u64 = 60 * SEC;
/// # Nanoseconds Per Hour.
const HOUR: u64 = 60 * MIN;

/// # Magnitude of `i64::MIN`.
const NEG_LIMIT: u64 = 1 << 63;



#[derive(Debug, Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// # Signed Duration.
///
/// A span of time with nanosecond precision that, unlike
/// [`std::time::Duration`], may be negative.
///
/// Text is a sequence of decimal numbers, each with an optional fraction and a
/// unit suffix, optionally preceded by a sign: `300ms`, `-1.5h`, `2h45m`.
/// Valid units are `ns`, `us` (or `µs`), `ms`, `s`, `m`, and `h`. A bare `0`
/// is also accepted.
///
/// ## Examples
///
/// ```
/// use tartan::Duration;
///
/// let d: Duration = "2h45m".parse().unwrap();
/// assert_eq!(d.as_nanos(), (2 * 3600 + 45 * 60) * 1_000_000_000);
/// assert_eq!(d.to_string(), "2h45m0s");
///
/// let d: Duration = "-1.5us".parse().unwrap();
/// assert_eq!(d.to_string(), "-1.5µs");
/// ```
pub struct Duration(i64);

impl fmt::Display for Duration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.0 < 0 { f.write_str("-")?; }
		let mut u = self.0.unsigned_abs();

		// Sub-second values get a single, smaller unit.
		if u < SEC {
			return
				if u == 0 { f.write_str("0s") }
				else if u < US { write!(f, "{u}ns") }
				else if u < MS { write_frac(f, u, US, 3, "µs") }
				else { write_frac(f, u, MS, 6, "ms") };
		}

		let secs = u % MIN;
		u /= MIN;
		if 0 < u {
			let mins = u % 60;
			u /= 60;
			if 0 < u { write!(f, "{u}h")?; }
			write!(f, "{mins}m")?;
		}

		write_frac(f, secs, SEC, 9, "s")
	}
}

impl FromStr for Duration {
	type Err = ErrorKind;

	fn from_str(src: &str) -> Result<Self, Self::Err> {
		parse_duration(src).map(Self)
	}
}

impl From<std::time::Duration> for Duration {
	/// # From Unsigned.
	///
	/// Values too large to fit are saturated.
	fn from(src: std::time::Duration) -> Self {
		Self(i64::try_from(src.as_nanos()).unwrap_or(i64::MAX))
	}
}

impl Duration {
	/// # Zero.
	pub const ZERO: Self = Self(0);

	#[must_use]
	/// # From Nanoseconds.
	pub const fn from_nanos(nanos: i64) -> Self { Self(nanos) }

	#[must_use]
	/// # From Milliseconds (Saturating).
	pub const fn from_millis(millis: i64) -> Self {
		Self(millis.saturating_mul(MS as i64))
	}

	#[must_use]
	/// # From Seconds (Saturating).
	pub const fn from_secs(secs: i64) -> Self {
		Self(secs.saturating_mul(SEC as i64))
	}

	#[must_use]
	/// # As Nanoseconds.
	pub const fn as_nanos(self) -> i64 { self.0 }

	#[must_use]
	/// # Is Negative?
	pub const fn is_negative(self) -> bool { self.0 < 0 }

	#[must_use]
	/// # Absolute Value.
	///
	/// Return the magnitude as a standard (unsigned) duration.
	pub const fn unsigned_abs(self) -> std::time::Duration {
		std::time::Duration::from_nanos(self.0.unsigned_abs())
	}
}



/// # Write Fraction.
///
/// Write `v / scale` with up to `prec` fractional digits, trailing zeroes
/// trimmed, followed by the unit.
fn write_frac(f: &mut fmt::Formatter<'_>, v: u64, scale: u64, prec: usize, unit: &str)
-> fmt::Result {
	let whole = v / scale;
	let frac = v % scale;
	if frac == 0 { write!(f, "{whole}{unit}") }
	else {
		let digits = format!("{frac:0prec$}");
		write!(f, "{whole}.{}{unit}", digits.trim_end_matches('0'))
	}
}

/// # Unit Multiplier.
fn unit_scale(unit: &str) -> Option<u64> {
	match unit {
		"ns" => Some(NS),
		"us" | "µs" | "μs" => Some(US),
		"ms" => Some(MS),
		"s" => Some(SEC),
		"m" => Some(MIN),
		"h" => Some(HOUR),
		_ => None,
	}
}

/// # Parse Duration.
fn parse_duration(src: &str) -> Result<i64, ErrorKind> {
	let (neg, mut s) = match src.as_bytes().first() {
		Some(b'-') => (true, &src[1..]),
		Some(b'+') => (false, &src[1..]),
		_ => (false, src),
	};

	if s == "0" { return Ok(0); }
	if s.is_empty() { return Err(ErrorKind::Syntax); }

	let mut total = 0_u64;
	while ! s.is_empty() {
		// Each component starts with a digit or decimal point.
		if ! matches!(s.as_bytes()[0], b'0'..=b'9' | b'.') {
			return Err(ErrorKind::Syntax);
		}

		// The whole part.
		let len = s.bytes().take_while(u8::is_ascii_digit).count();
		let pre = 0 < len;
		let mut whole = 0_u64;
		for b in s[..len].bytes() {
			whole = whole.checked_mul(10)
				.and_then(|n| n.checked_add(u64::from(b - b'0')))
				.filter(|n| *n <= NEG_LIMIT)
				.ok_or(ErrorKind::Range)?;
		}
		s = &s[len..];

		// The fractional part, if any. Digits beyond what fits are ignored.
		let mut frac = 0_u64;
		let mut scale = 1.0_f64;
		let mut post = false;
		if let Some(rest) = s.strip_prefix('.') {
			let len = rest.bytes().take_while(u8::is_ascii_digit).count();
			post = 0 < len;
			let mut overflow = false;
			for b in rest[..len].bytes() {
				if overflow { continue; }
				match frac.checked_mul(10).and_then(|n| n.checked_add(u64::from(b - b'0'))) {
					Some(n) if n <= NEG_LIMIT => {
						frac = n;
						scale *= 10.0;
					},
					_ => { overflow = true; },
				}
			}
			s = &rest[len..];
		}

		// No digits at all, e.g. ".s".
		if ! pre && ! post { return Err(ErrorKind::Syntax); }

		// The unit runs until the next digit or decimal point.
		let len = s.find(|c: char| c == '.' || c.is_ascii_digit()).unwrap_or(s.len());
		let unit = unit_scale(&s[..len]).ok_or(ErrorKind::Syntax)?;
		s = &s[len..];

		let mut v = whole.checked_mul(unit)
			.filter(|n| *n <= NEG_LIMIT)
			.ok_or(ErrorKind::Range)?;
		if 0 < frac {
			let extra = (frac as f64 * (unit as f64 / scale)) as u64;
			v = v.checked_add(extra)
				.filter(|n| *n <= NEG_LIMIT)
				.ok_or(ErrorKind::Range)?;
		}

		total = total.checked_add(v)
			.filter(|n| *n <= NEG_LIMIT)
			.ok_or(ErrorKind::Range)?;
	}

	if neg {
		if total == NEG_LIMIT { Ok(i64::MIN) }
		else { Ok(-(total as i64)) }
	}
	else { i64::try_from(total).map_err(|_| ErrorKind::Range) }
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_parse() {
		for (raw, expected) in [
			("0", 0),
			("-0", 0),
			("0ns", 0),
			("123ns", 123),
			("0s", 0),
			("5s", 5 * SEC as i64),
			("-5s", -5 * SEC as i64),
			("2h45m", (2 * HOUR + 45 * MIN) as i64),
			("+2h45m", (2 * HOUR + 45 * MIN) as i64),
			("4.1s", (4 * SEC + 100 * MS) as i64),
			(".5s", (500 * MS) as i64),
			("1.5us", 1_500),
			("1.5µs", 1_500),
			("1.5μs", 1_500),
			("1h1m1s1ms1us1ns", (HOUR + MIN + SEC + MS + US + NS) as i64),
			("-9223372036854775808ns", i64::MIN),
			("9223372036854775807ns", i64::MAX),
		] {
			assert_eq!(parse_duration(raw), Ok(expected), "Bug: {raw:?} should parse.");
		}

		for raw in ["", "-", "100", "100sm", "true", "false", "1d", ".s", "s", "5s-", "1..5s"] {
			assert_eq!(parse_duration(raw), Err(ErrorKind::Syntax), "Bug: {raw:?} should be bad syntax.");
		}

		for raw in ["9223372036854775808ns", "3000000h", "99999999999999999999s"] {
			assert_eq!(parse_duration(raw), Err(ErrorKind::Range), "Bug: {raw:?} should be out of range.");
		}
	}

	#[test]
	fn t_display() {
		for (nanos, expected) in [
			(0, "0s"),
			(1, "1ns"),
			(999, "999ns"),
			(1_500, "1.5µs"),
			(1_000_000, "1ms"),
			(1_100_000, "1.1ms"),
			(SEC as i64, "1s"),
			(-5 * SEC as i64, "-5s"),
			((4 * SEC + 100 * MS) as i64, "4.1s"),
			(MIN as i64, "1m0s"),
			((2 * HOUR + 45 * MIN) as i64, "2h45m0s"),
			((HOUR + 500 * MS) as i64, "1h0m0.5s"),
			(i64::MIN, "-2562047h47m16.854775808s"),
		] {
			assert_eq!(Duration(nanos).to_string(), expected);
		}
	}

	#[test]
	fn t_round_trip() {
		for raw in ["90m", "-1.25h", "1500ms", "0.000001s"] {
			let d: Duration = raw.parse().expect("Duration failed to parse.");
			let canon = d.to_string();
			let again: Duration = canon.parse().expect("Canonical duration failed to parse.");
			assert_eq!(d, again, "Bug: {raw:?} didn't survive the round trip.");
			assert_eq!(canon, again.to_string());
		}
	}
}
