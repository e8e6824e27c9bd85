/*!
# Tartan: Values

A [`Value`] converts between a typed program variable and its textual form.
Flags, arguments, and rest collectors each own one, and the parser writes to
it by calling [`Value::set`] with whatever text the command line supplied.

Most programs will only ever need the two generic wrappers:
* [`Single`] holds one [`Scalar`] (`bool`, integers, floats, `String`, [`Duration`]);
* [`Multi`] holds a `Vec` of them, splitting each `set` call on commas and accumulating across repeats.
*/

pub(crate) mod duration;
pub(crate) mod parse;

use crate::{
	Duration,
	ErrorKind,
	ParseValueError,
};
use std::{
	any::Any,
	borrow::Cow,
	fmt,
};



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Numeric Width.
pub enum Width {
	/// # Machine Width.
	Size,

	/// # 8 Bits.
	W8,

	/// # 16 Bits.
	W16,

	/// # 32 Bits.
	W32,

	/// # 64 Bits.
	W64,
}

impl Width {
	#[must_use]
	/// # Bits.
	pub const fn bits(self) -> u32 {
		match self {
			Self::Size => usize::BITS,
			Self::W8 => 8,
			Self::W16 => 16,
			Self::W32 => 32,
			Self::W64 => 64,
		}
	}

	/// # Name Suffix.
	const fn suffix(self) -> &'static str {
		match self {
			Self::Size => "",
			Self::W8 => "8",
			Self::W16 => "16",
			Self::W32 => "32",
			Self::W64 => "64",
		}
	}
}



#[derive(Debug, Clone, Eq, Hash, PartialEq)]
/// # Value Kind.
///
/// This is what the parser consults to decide how greedy a flag should be:
/// boolean flags never require a value, and string flags accept an empty
/// following token.
pub enum ValueKind {
	/// # Boolean.
	Bool,

	/// # Signed Integer.
	Int(Width),

	/// # Unsigned Integer.
	UInt(Width),

	/// # Float (`W32` or `W64`).
	Float(Width),

	/// # String.
	String,

	/// # Duration.
	Duration,

	/// # Comma-Accumulating List.
	Multi(Box<ValueKind>),

	/// # Something Else.
	///
	/// The string is the semantic type name, used for error reporting and help
	/// screens.
	Custom(&'static str),
}

impl fmt::Display for ValueKind {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.type_name())
	}
}

impl ValueKind {
	#[must_use]
	/// # Type Name.
	///
	/// ## Examples
	///
	/// ```
	/// use tartan::{ValueKind, Width};
	///
	/// assert_eq!(ValueKind::Int(Width::Size).type_name(), "int");
	/// assert_eq!(ValueKind::UInt(Width::W16).type_name(), "uint16");
	/// assert_eq!(
	///     ValueKind::Multi(Box::new(ValueKind::Float(Width::W64))).type_name(),
	///     "[]float64",
	/// );
	/// ```
	pub fn type_name(&self) -> Cow<'static, str> {
		match self {
			Self::Bool => Cow::Borrowed("bool"),
			Self::Int(w) =>
				if matches!(w, Width::Size) { Cow::Borrowed("int") }
				else { Cow::Owned(format!("int{}", w.suffix())) },
			Self::UInt(w) =>
				if matches!(w, Width::Size) { Cow::Borrowed("uint") }
				else { Cow::Owned(format!("uint{}", w.suffix())) },
			Self::Float(w) => Cow::Owned(format!("float{}", w.suffix())),
			Self::String => Cow::Borrowed("string"),
			Self::Duration => Cow::Borrowed("duration"),
			Self::Multi(k) => Cow::Owned(format!("[]{}", k.type_name())),
			Self::Custom(s) => Cow::Borrowed(s),
		}
	}

	#[must_use]
	/// # Is Multi?
	pub const fn is_multi(&self) -> bool { matches!(self, Self::Multi(_)) }
}



/// # Value.
///
/// The textual form is the [`Display`](fmt::Display) implementation; it is
/// used for default snapshots and for re-joining multi-values.
///
/// Custom types can implement this directly, though it is usually easier to
/// implement [`Scalar`] and let [`Single`]/[`Multi`] do the rest.
pub trait Value: fmt::Display + fmt::Debug {
	/// # Set From Text.
	///
	/// Parse `raw` and overwrite (or, for lists, extend) the held value.
	///
	/// ## Errors
	///
	/// Returns a [`ParseValueError`] if the text cannot be converted. The held
	/// value is left as it was (lists keep any segments parsed before the bad
	/// one).
	fn set(&mut self, raw: &str) -> Result<(), ParseValueError>;

	/// # Add One.
	///
	/// Record `raw` as a single item. Rest collectors use this for each
	/// overflow positional so tokens are taken verbatim. By default this is
	/// the same as [`Value::set`]; list types push exactly one parsed item
	/// without splitting on commas.
	///
	/// ## Errors
	///
	/// Same as [`Value::set`].
	fn add(&mut self, raw: &str) -> Result<(), ParseValueError> { self.set(raw) }

	/// # Kind.
	fn kind(&self) -> ValueKind;

	/// # Get.
	///
	/// Return the held value for dynamic retrieval. See [`Getter`] for the
	/// typed equivalent.
	fn get(&self) -> &dyn Any;

	/// # Is Empty?
	///
	/// By default this checks whether the textual form is empty.
	fn is_empty(&self) -> bool { self.to_string().is_empty() }

	/// # Is Bool Flag?
	///
	/// When `true`, a flag holding this value needs no explicit value token,
	/// and will only claim a following token that is itself bool-like.
	fn is_bool_flag(&self) -> bool { matches!(self.kind(), ValueKind::Bool) }

	/// # Is String Flag?
	///
	/// When `true`, an explicitly empty following token is accepted as this
	/// flag's value.
	fn is_string_flag(&self) -> bool { matches!(self.kind(), ValueKind::String) }
}

/// # Typed Getter.
///
/// Binds a [`Value`] to the concrete type it holds so registration can hand
/// back a typed [`Handle`](crate::Handle).
pub trait Getter: Value + 'static {
	/// # Output Type.
	type Output: 'static;

	/// # Value.
	fn value(&self) -> &Self::Output;
}



/// # Scalar.
///
/// A single-valued type that [`Single`] and [`Multi`] know how to parse and
/// format.
pub trait Scalar: Clone + Default + fmt::Debug + 'static {
	/// # Kind.
	fn kind() -> ValueKind;

	/// # Parse.
	///
	/// ## Errors
	///
	/// Returns [`ErrorKind::Syntax`] for malformed text or [`ErrorKind::Range`]
	/// for literals the type cannot hold.
	fn parse_scalar(raw: &str) -> Result<Self, ErrorKind>;

	/// # Format.
	///
	/// ## Errors
	///
	/// Bubbles up formatter errors.
	fn fmt_scalar(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl Scalar for bool {
	fn kind() -> ValueKind { ValueKind::Bool }
	fn parse_scalar(raw: &str) -> Result<Self, ErrorKind> { parse::parse_bool(raw) }
	fn fmt_scalar(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(if *self { "true" } else { "false" })
	}
}

impl Scalar for String {
	fn kind() -> ValueKind { ValueKind::String }
	fn parse_scalar(raw: &str) -> Result<Self, ErrorKind> { Ok(raw.to_owned()) }
	fn fmt_scalar(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self) }
}

impl Scalar for Duration {
	fn kind() -> ValueKind { ValueKind::Duration }
	fn parse_scalar(raw: &str) -> Result<Self, ErrorKind> { raw.parse() }
	fn fmt_scalar(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(self, f)
	}
}

impl Scalar for f32 {
	fn kind() -> ValueKind { ValueKind::Float(Width::W32) }
	fn parse_scalar(raw: &str) -> Result<Self, ErrorKind> { parse::parse_f32(raw) }
	fn fmt_scalar(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt_float(*self, f64::from(self.abs()), f)
	}
}

impl Scalar for f64 {
	fn kind() -> ValueKind { ValueKind::Float(Width::W64) }
	fn parse_scalar(raw: &str) -> Result<Self, ErrorKind> { parse::parse_f64(raw) }
	fn fmt_scalar(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt_float(*self, self.abs(), f)
	}
}

/// # Helper: Signed Scalars.
macro_rules! scalar_int {
	($($ty:ty, $width:ident),+ $(,)?) => ($(
		impl Scalar for $ty {
			fn kind() -> ValueKind { ValueKind::Int(Width::$width) }
			#[allow(
				clippy::cast_possible_truncation,
				trivial_numeric_casts,
				reason = "Range-checked by the parser; 64-bit widths cast to themselves.",
			)]
			fn parse_scalar(raw: &str) -> Result<Self, ErrorKind> {
				parse::parse_int(raw, Width::$width.bits()).map(|n| n as Self)
			}
			fn fmt_scalar(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				fmt::Display::fmt(self, f)
			}
		}
	)+);
}

/// # Helper: Unsigned Scalars.
macro_rules! scalar_uint {
	($($ty:ty, $width:ident),+ $(,)?) => ($(
		impl Scalar for $ty {
			fn kind() -> ValueKind { ValueKind::UInt(Width::$width) }
			#[allow(
				clippy::cast_possible_truncation,
				trivial_numeric_casts,
				reason = "Range-checked by the parser; 64-bit widths cast to themselves.",
			)]
			fn parse_scalar(raw: &str) -> Result<Self, ErrorKind> {
				parse::parse_uint(raw, Width::$width.bits()).map(|n| n as Self)
			}
			fn fmt_scalar(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				fmt::Display::fmt(self, f)
			}
		}
	)+);
}

scalar_int!(i8, W8, i16, W16, i32, W32, i64, W64, isize, Size);
scalar_uint!(u8, W8, u16, W16, u32, W32, u64, W64, usize, Size);

/// # Format Float.
///
/// Print the shortest form at the value's own precision. Very large and very
/// small magnitudes switch to exponent notation so defaults stay readable.
fn fmt_float<F>(v: F, abs: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result
where F: fmt::Display + fmt::LowerExp {
	if 0.0 < abs && abs.is_finite() && ! (1e-4..1e21).contains(&abs) { write!(f, "{v:e}") }
	else { write!(f, "{v}") }
}



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Single Value.
///
/// Each `set` overwrites the previous value.
///
/// ## Examples
///
/// ```
/// use tartan::{Single, Value};
///
/// let mut v = Single::<u8>::default();
/// v.set("0x1A").unwrap();
/// assert_eq!(*v, 26);
/// assert_eq!(v.to_string(), "26");
///
/// assert!(v.set("256").is_err());
/// assert_eq!(*v, 26); // Unchanged.
/// ```
pub struct Single<T>(T);

impl<T> std::ops::Deref for Single<T> {
	type Target = T;
	#[inline]
	fn deref(&self) -> &Self::Target { &self.0 }
}

impl<T: Scalar> fmt::Display for Single<T> {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.0.fmt_scalar(f) }
}

impl<T: Scalar> From<T> for Single<T> {
	#[inline]
	fn from(src: T) -> Self { Self(src) }
}

impl<T: Scalar> Value for Single<T> {
	fn set(&mut self, raw: &str) -> Result<(), ParseValueError> {
		self.0 = T::parse_scalar(raw)
			.map_err(|kind| ParseValueError::new(T::kind().type_name(), kind))?;
		Ok(())
	}

	#[inline]
	fn kind(&self) -> ValueKind { T::kind() }

	#[inline]
	fn get(&self) -> &dyn Any { &self.0 }
}

impl<T: Scalar> Getter for Single<T> {
	type Output = T;

	#[inline]
	fn value(&self) -> &T { &self.0 }
}

impl<T> Single<T> {
	#[must_use]
	/// # New.
	///
	/// The starting value doubles as the default shown on help screens.
	pub const fn new(src: T) -> Self { Self(src) }

	#[must_use]
	/// # Into Inner.
	pub fn into_inner(self) -> T { self.0 }
}



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Multi Value.
///
/// Each `set` splits its input on commas and appends one parsed value per
/// segment, so repeated flags accumulate. Empty segments are parsed like any
/// other, which means they're only valid for strings.
///
/// A `Multi<bool>` behaves like a boolean flag, so `-v -v -v` collects three
/// `true`s.
///
/// ```
/// use tartan::{Multi, Value};
///
/// let mut v = Multi::<i32>::default();
/// v.set("1").unwrap();
/// v.set("2,-3,4").unwrap();
/// assert_eq!(v.as_slice(), &[1, 2, -3, 4]);
/// assert_eq!(v.to_string(), "1,2,-3,4");
///
/// // Add takes one item, commas and all.
/// let mut v = Multi::<String>::default();
/// v.add("a,b.txt").unwrap();
/// assert_eq!(v.len(), 1);
/// ```
pub struct Multi<T>(Vec<T>);

impl<T> std::ops::Deref for Multi<T> {
	type Target = [T];
	#[inline]
	fn deref(&self) -> &Self::Target { &self.0 }
}

impl<T: Scalar> fmt::Display for Multi<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut iter = self.0.iter();
		if let Some(first) = iter.next() {
			first.fmt_scalar(f)?;
			for v in iter {
				f.write_str(",")?;
				v.fmt_scalar(f)?;
			}
		}
		Ok(())
	}
}

impl<T: Scalar> From<Vec<T>> for Multi<T> {
	#[inline]
	fn from(src: Vec<T>) -> Self { Self(src) }
}

impl<T: Scalar> Value for Multi<T> {
	fn set(&mut self, raw: &str) -> Result<(), ParseValueError> {
		// Every segment counts, empty ones included.
		for seg in raw.split(',') { self.add(seg)?; }
		Ok(())
	}

	fn add(&mut self, raw: &str) -> Result<(), ParseValueError> {
		let v = T::parse_scalar(raw)
			.map_err(|kind| ParseValueError::new(self.kind().type_name(), kind))?;
		self.0.push(v);
		Ok(())
	}

	#[inline]
	fn kind(&self) -> ValueKind { ValueKind::Multi(Box::new(T::kind())) }

	#[inline]
	fn get(&self) -> &dyn Any { &self.0 }

	#[inline]
	fn is_empty(&self) -> bool { self.0.is_empty() }

	#[inline]
	fn is_bool_flag(&self) -> bool { matches!(T::kind(), ValueKind::Bool) }
}

impl<T: Scalar> Getter for Multi<T> {
	type Output = Vec<T>;

	#[inline]
	fn value(&self) -> &Vec<T> { &self.0 }
}

impl<T> Multi<T> {
	#[must_use]
	/// # New.
	pub const fn new(src: Vec<T>) -> Self { Self(src) }

	#[must_use]
	/// # As Slice.
	pub fn as_slice(&self) -> &[T] { &self.0 }

	#[must_use]
	/// # Into Inner.
	pub fn into_inner(self) -> Vec<T> { self.0 }
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_type_names() {
		assert_eq!(bool::kind().type_name(), "bool");
		assert_eq!(isize::kind().type_name(), "int");
		assert_eq!(i8::kind().type_name(), "int8");
		assert_eq!(u64::kind().type_name(), "uint64");
		assert_eq!(usize::kind().type_name(), "uint");
		assert_eq!(f32::kind().type_name(), "float32");
		assert_eq!(String::kind().type_name(), "string");
		assert_eq!(Duration::kind().type_name(), "duration");
		assert_eq!(Multi::<i16>::default().kind().type_name(), "[]int16");
		assert_eq!(ValueKind::Custom("ip").type_name(), "ip");
	}

	#[test]
	fn t_single_round_trip() {
		/// # Set, Stringify, Compare.
		fn check<T: Scalar>(raw: &str, canon: &str) {
			let mut v = Single::<T>::default();
			assert!(v.set(raw).is_ok(), "Bug: {raw:?} should parse as {}.", T::kind());
			assert_eq!(v.to_string(), canon, "Bug: {raw:?} has the wrong canonical form.");

			// And the canonical form is stable.
			let mut v2 = Single::<T>::default();
			assert!(v2.set(canon).is_ok());
			assert_eq!(v2.to_string(), canon);
		}

		check::<bool>("Y", "true");
		check::<bool>("no", "false");
		check::<isize>("0x1A", "26");
		check::<i8>("-0b101", "-5");
		check::<i64>("-0xCBA", "-3258");
		check::<u16>("0o777", "511");
		check::<usize>("1337", "1337");
		check::<f32>("1.5", "1.5");
		check::<f32>("1.1", "1.1");
		check::<f32>("0.1", "0.1");
		check::<f32>("-3.4028235e38", "-3.4028235e38");
		check::<f32>("0.00001", "1e-5");
		check::<f64>("0.1", "0.1");
		check::<f64>("-7331", "-7331");
		check::<f64>("1e300", "1e300");
		check::<String>("hello world", "hello world");
		check::<Duration>("90m", "1h30m0s");
	}

	#[test]
	fn t_single_errors() {
		let mut v = Single::<isize>::new(5);
		assert_eq!(
			v.set("1337a"),
			Err(ParseValueError::new("int", ErrorKind::Syntax)),
		);
		assert_eq!(*v, 5, "Failed sets should leave the value alone.");

		let mut v = Single::<u32>::default();
		assert_eq!(
			v.set("4294967296"),
			Err(ParseValueError::new("uint32", ErrorKind::Range)),
		);

		let mut v = Single::<bool>::default();
		assert_eq!(
			v.set("abcd"),
			Err(ParseValueError::new("bool", ErrorKind::Syntax)),
		);

		let mut v = Single::<Duration>::default();
		assert_eq!(
			v.set("100"),
			Err(ParseValueError::new("duration", ErrorKind::Syntax)),
		);
	}

	#[test]
	fn t_multi() {
		let mut v = Multi::<i64>::default();
		assert!(v.is_empty());
		assert_eq!(v.to_string(), "");

		v.set("1").expect("Multi::set failed.");
		v.set("2,-3,4").expect("Multi::set failed.");
		assert_eq!(v.as_slice(), &[1, 2, -3, 4]);
		assert_eq!(v.to_string(), "1,2,-3,4");

		// Empty segments are numbers too, i.e. not numbers.
		let empty = Err(ParseValueError::new("[]int64", ErrorKind::Syntax));
		assert_eq!(v.set(""), empty);
		assert_eq!(v.set("5,"), empty);
		assert_eq!(v.add(""), empty);
		assert_eq!(v.value(), &vec![1, 2, -3, 4, 5], "Good segments before a bad one stick.");

		assert_eq!(v.set("6,x,7"), Err(ParseValueError::new("[]int64", ErrorKind::Syntax)));
		assert_eq!(v.value(), &vec![1, 2, -3, 4, 5, 6]);

		// Adding never splits.
		assert_eq!(v.add("7,8"), Err(ParseValueError::new("[]int64", ErrorKind::Syntax)));
		assert!(v.add("7").is_ok());
		assert_eq!(v.value(), &vec![1, 2, -3, 4, 5, 6, 7]);

		// Empty segments are real (empty) strings.
		let mut v = Multi::<String>::default();
		v.set("a,,b").expect("Multi::set failed.");
		v.set("").expect("Multi::set failed.");
		v.add("c,d").expect("Multi::add failed.");
		assert_eq!(
			v.as_slice(),
			&["a".to_owned(), String::new(), "b".to_owned(), String::new(), "c,d".to_owned()],
		);
	}

	#[test]
	fn t_markers() {
		assert!(Single::<bool>::default().is_bool_flag());
		assert!(Multi::<bool>::default().is_bool_flag());
		assert!(! Multi::<u8>::default().is_bool_flag());
		assert!(Single::<String>::default().is_string_flag());
		assert!(! Single::<i8>::default().is_string_flag());
		assert!(! Multi::<String>::default().is_string_flag());
	}
}
