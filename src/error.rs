/*!
# Tartan: Errors

Registration and parsing failures are reported through a single [`Error`]
enum, but each variant carries enough context to pinpoint the flag, argument,
or token at fault. The underlying reason is always one of the [`ErrorKind`]
codes, which is what a CLI driver should match on when choosing messages and
exit codes.
*/

use std::{
	borrow::Cow,
	fmt,
};



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Error Kind.
///
/// The root reason behind any [`Error`].
pub enum ErrorKind {
	/// # Name already in use.
	Duplicate,

	/// # Flag/argument has no name.
	MissingName,

	/// # Name contains forbidden characters.
	InvalidName,

	/// # Required flag/argument was never set.
	NotProvided,

	/// # Required argument registered after an optional one.
	RequiredAfterOptional,

	/// # Argument registered after the rest collector.
	ArgAfterRest,

	/// # Unrecognized flag or positional.
	Unknown,

	/// # Malformed token or literal.
	Syntax,

	/// # Literal out of range for its type.
	Range,
}

impl AsRef<str> for ErrorKind {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for ErrorKind {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl ErrorKind {
	#[must_use]
	/// # As Str.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Duplicate => "duplicate",
			Self::MissingName => "missing name",
			Self::InvalidName => "invalid name",
			Self::NotProvided => "not provided",
			Self::RequiredAfterOptional => "required after optional",
			Self::ArgAfterRest => "arg after rest",
			Self::Unknown => "unknown",
			Self::Syntax => "invalid syntax",
			Self::Range => "value out of range",
		}
	}
}



#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("parse {type_name} value: {kind}")]
/// # Value Conversion Error.
///
/// Returned by [`Value::set`](crate::Value::set) when text cannot be
/// converted. The kind is either [`ErrorKind::Syntax`] or
/// [`ErrorKind::Range`].
pub struct ParseValueError {
	/// # Semantic Type Name.
	pub type_name: Cow<'static, str>,

	/// # Reason.
	pub kind: ErrorKind,
}

impl ParseValueError {
	#[must_use]
	/// # New.
	pub fn new<S>(type_name: S, kind: ErrorKind) -> Self
	where S: Into<Cow<'static, str>> {
		Self { type_name: type_name.into(), kind }
	}
}



#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
/// # Scoped Cause.
///
/// The inner error carried by [`FlagError`], [`ArgError`], and
/// [`RestArgsError`].
pub enum Cause {
	#[error("{0}")]
	/// # Plain Reason.
	Kind(ErrorKind),

	#[error(transparent)]
	/// # Value Conversion.
	Value(#[from] ParseValueError),
}

impl From<ErrorKind> for Cause {
	#[inline]
	fn from(src: ErrorKind) -> Self { Self::Kind(src) }
}

impl Cause {
	#[must_use]
	/// # Kind.
	pub const fn kind(&self) -> ErrorKind {
		match self {
			Self::Kind(k) => *k,
			Self::Value(e) => e.kind,
		}
	}
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Flag Error.
///
/// Registration, conversion, or validation failure tied to a declared flag.
pub struct FlagError {
	/// # Short Name.
	pub short: Option<char>,

	/// # Long Name.
	pub long: Option<String>,

	/// # Cause.
	pub cause: Cause,
}

impl std::error::Error for FlagError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		Some(&self.cause)
	}
}

impl fmt::Display for FlagError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match (self.short, self.long.as_deref()) {
			(Some(s), Some(l)) => write!(f, "flag error: '{s}' '{l}': {}", self.cause),
			(Some(s), None) => write!(f, "flag error: '{s}': {}", self.cause),
			(None, Some(l)) => write!(f, "flag error: '{l}': {}", self.cause),
			(None, None) => write!(f, "flag error: {}", self.cause),
		}
	}
}

impl FlagError {
	/// # New.
	pub(crate) fn new<C>(short: Option<char>, long: Option<&str>, cause: C) -> Self
	where C: Into<Cause> {
		Self {
			short,
			long: long.map(String::from),
			cause: cause.into(),
		}
	}
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Argument Error.
///
/// Registration, conversion, or validation failure tied to a declared
/// positional argument. The index is the argument's position (or the
/// position it would have taken, for registration failures).
pub struct ArgError {
	/// # Name.
	pub name: String,

	/// # Position.
	pub index: usize,

	/// # Cause.
	pub cause: Cause,
}

impl std::error::Error for ArgError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		Some(&self.cause)
	}
}

impl fmt::Display for ArgError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.name.is_empty() {
			write!(f, "arg error: #{}: {}", self.index, self.cause)
		}
		else {
			write!(f, "arg error: '{}': {}", self.name, self.cause)
		}
	}
}

impl ArgError {
	/// # New.
	pub(crate) fn new<C>(name: &str, index: usize, cause: C) -> Self
	where C: Into<Cause> {
		Self { name: name.to_owned(), index, cause: cause.into() }
	}
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Rest Arguments Error.
pub struct RestArgsError {
	/// # Name.
	pub name: String,

	/// # Cause.
	pub cause: Cause,
}

impl std::error::Error for RestArgsError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		Some(&self.cause)
	}
}

impl fmt::Display for RestArgsError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.name.is_empty() { write!(f, "rest args error: {}", self.cause) }
		else { write!(f, "rest args error: '{}': {}", self.name, self.cause) }
	}
}

impl RestArgsError {
	/// # New.
	pub(crate) fn new<C>(name: &str, cause: C) -> Self
	where C: Into<Cause> {
		Self { name: name.to_owned(), cause: cause.into() }
	}
}



#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("parse flag error: '{name}': {kind}")]
/// # Flag Token Error.
///
/// The token itself was malformed ([`ErrorKind::Syntax`]) or named a flag
/// nobody registered ([`ErrorKind::Unknown`]). For unknown flags, the name
/// keeps its dash prefix, e.g. `-x` or `--nope`.
pub struct ParseFlagError {
	/// # Name (as typed).
	pub name: String,

	/// # Reason.
	pub kind: ErrorKind,
}

impl ParseFlagError {
	/// # New.
	pub(crate) fn new<S>(name: S, kind: ErrorKind) -> Self
	where S: Into<String> {
		Self { name: name.into(), kind }
	}
}



#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("parse arg error: '{arg}' (#{index}): {kind}")]
/// # Positional Token Error.
///
/// A positional value arrived with no argument slot or rest collector to
/// receive it.
pub struct ParseArgError {
	/// # Raw Token.
	pub arg: String,

	/// # Position.
	pub index: usize,

	/// # Reason.
	pub kind: ErrorKind,
}



#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
/// # Error!
pub enum Error {
	#[error(transparent)]
	/// # Flag.
	Flag(#[from] FlagError),

	#[error(transparent)]
	/// # Argument.
	Arg(#[from] ArgError),

	#[error(transparent)]
	/// # Rest Arguments.
	Rest(#[from] RestArgsError),

	#[error(transparent)]
	/// # Flag Token.
	ParseFlag(#[from] ParseFlagError),

	#[error(transparent)]
	/// # Positional Token.
	ParseArg(#[from] ParseArgError),

	#[error("command error: {0}")]
	/// # Command Resolution.
	///
	/// Raised by [`Commander`](crate::Commander) implementations.
	Command(String),
}

impl Error {
	#[must_use]
	/// # Kind.
	///
	/// Return the root [`ErrorKind`], if any. Command resolution failures are
	/// opaque and return `None`.
	pub const fn kind(&self) -> Option<ErrorKind> {
		match self {
			Self::Flag(e) => Some(e.cause.kind()),
			Self::Arg(e) => Some(e.cause.kind()),
			Self::Rest(e) => Some(e.cause.kind()),
			Self::ParseFlag(e) => Some(e.kind),
			Self::ParseArg(e) => Some(e.kind),
			Self::Command(_) => None,
		}
	}

	#[must_use]
	/// # Exit code.
	pub const fn exit_code(&self) -> i32 { 1 }

	#[must_use]
	/// # Registration Error?
	///
	/// Returns `true` for failures that can only arise while declaring flags
	/// and arguments, i.e. programmer mistakes rather than user input.
	pub const fn is_registration(&self) -> bool {
		matches!(
			self.kind(),
			Some(
				ErrorKind::Duplicate |
				ErrorKind::MissingName |
				ErrorKind::InvalidName |
				ErrorKind::RequiredAfterOptional |
				ErrorKind::ArgAfterRest
			)
		)
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_display() {
		let e = Error::from(FlagError::new(Some('v'), Some("verbose"), ErrorKind::Duplicate));
		assert_eq!(e.to_string(), "flag error: 'v' 'verbose': duplicate");

		let e = Error::from(FlagError::new(None, None, ErrorKind::MissingName));
		assert_eq!(e.to_string(), "flag error: missing name");

		let e = Error::from(FlagError::new(
			None,
			Some("count"),
			ParseValueError::new("int", ErrorKind::Range),
		));
		assert_eq!(e.to_string(), "flag error: 'count': parse int value: value out of range");

		let e = Error::from(ArgError::new("path", 0, ErrorKind::NotProvided));
		assert_eq!(e.to_string(), "arg error: 'path': not provided");

		let e = Error::from(ParseFlagError::new("-x", ErrorKind::Unknown));
		assert_eq!(e.to_string(), "parse flag error: '-x': unknown");

		let e = Error::from(ParseArgError { arg: "c".to_owned(), index: 2, kind: ErrorKind::Unknown });
		assert_eq!(e.to_string(), "parse arg error: 'c' (#2): unknown");
	}

	#[test]
	fn t_kind() {
		let e = Error::from(ArgError::new(
			"n",
			1,
			ParseValueError::new("uint8", ErrorKind::Syntax),
		));
		assert_eq!(e.kind(), Some(ErrorKind::Syntax));
		assert!(! e.is_registration());

		let e = Error::from(RestArgsError::new("rest", ErrorKind::Duplicate));
		assert_eq!(e.kind(), Some(ErrorKind::Duplicate));
		assert!(e.is_registration());

		let e = Error::Command("nope".to_owned());
		assert_eq!(e.kind(), None);
		assert_eq!(e.exit_code(), 1);
	}
}
