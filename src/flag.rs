/*!
# Tartan: Flags, Arguments, Rest.

These are the declarative records a [`Register`](crate::Register) stores.
Each binds a boxed [`Value`] to its name(s), usage text, and necessity, and
tracks whether the parser ever wrote to it.
*/

use crate::Value;
use std::fmt;



#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq)]
/// # Necessity.
///
/// Flags are optional unless marked [`Necessary::Required`]; positional
/// arguments are required unless marked [`Necessary::Optional`].
pub enum Necessary {
	#[default]
	/// # Unspecified.
	Unset,

	/// # Optional.
	Optional,

	/// # Required.
	Required,
}



/// # Default Snapshot.
///
/// The textual form of a value at the time it was registered, unless it was
/// empty.
fn snapshot(value: &dyn Value) -> Option<String> {
	if value.is_empty() { None }
	else { Some(value.to_string()) }
}



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Flag Options.
///
/// ## Examples
///
/// ```
/// use tartan::FlagOptions;
///
/// // One character is a short name, anything longer is a long name.
/// let opts = FlagOptions::new("v");
/// assert_eq!(opts.short_name(), Some('v'));
/// assert_eq!(opts.long_name(), None);
///
/// let opts = FlagOptions::new("verbose").short('v').usage("Be chatty.");
/// assert_eq!(opts.short_name(), Some('v'));
/// assert_eq!(opts.long_name(), Some("verbose"));
/// ```
pub struct FlagOptions {
	/// # Short Name.
	short: Option<char>,

	/// # Long Name.
	long: Option<String>,

	/// # Usage.
	usage: String,

	/// # Necessity.
	necessary: Necessary,

	/// # Command Flag?
	command: bool,
}

impl FlagOptions {
	#[must_use]
	/// # New.
	///
	/// A one-character name is treated as a short name; anything longer is a
	/// long name. An empty name sets neither.
	pub fn new(name: &str) -> Self {
		let mut chars = name.chars();
		let mut out = Self::default();
		match (chars.next(), chars.next()) {
			(None, _) => {},
			(Some(c), None) => { out.short = Some(c); },
			_ => { out.long = Some(name.to_owned()); },
		}
		out
	}

	#[must_use]
	/// # With Short Name.
	pub const fn short(mut self, short: char) -> Self {
		self.short = Some(short);
		self
	}

	#[must_use]
	/// # With Long Name.
	pub fn long(mut self, long: &str) -> Self {
		self.long = if long.is_empty() { None } else { Some(long.to_owned()) };
		self
	}

	#[must_use]
	/// # With Usage.
	pub fn usage(mut self, usage: &str) -> Self {
		usage.clone_into(&mut self.usage);
		self
	}

	#[must_use]
	/// # Required.
	pub const fn required(mut self) -> Self {
		self.necessary = Necessary::Required;
		self
	}

	#[must_use]
	/// # Optional.
	pub const fn optional(mut self) -> Self {
		self.necessary = Necessary::Optional;
		self
	}

	#[must_use]
	/// # Command Flag.
	///
	/// When a command flag is set, the parser skips required-field validation
	/// so a driver can act on it (think `--help` or `--version`) instead.
	pub const fn command(mut self) -> Self {
		self.command = true;
		self
	}

	#[must_use]
	/// # Short Name.
	pub const fn short_name(&self) -> Option<char> { self.short }

	#[must_use]
	/// # Long Name.
	pub fn long_name(&self) -> Option<&str> { self.long.as_deref() }
}



/// # Flag.
///
/// A named option, e.g. `-v` or `--verbose`.
pub struct Flag {
	/// # Value.
	value: Box<dyn Value>,

	/// # Short Name.
	short: Option<char>,

	/// # Long Name.
	long: Option<String>,

	/// # Usage.
	usage: String,

	/// # Necessity.
	necessary: Necessary,

	/// # Command Flag?
	command: bool,

	/// # Set During Parse?
	set: bool,

	/// # Default Snapshot.
	default: Option<String>,
}

impl fmt::Debug for Flag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Flag")
			.field("short", &self.short)
			.field("long", &self.long)
			.field("kind", &self.value.kind())
			.field("necessary", &self.necessary)
			.field("set", &self.set)
			.finish_non_exhaustive()
	}
}

impl Flag {
	#[must_use]
	/// # New.
	pub fn new<V>(value: V, opts: FlagOptions) -> Self
	where V: Value + 'static {
		let FlagOptions { short, long, usage, necessary, command } = opts;
		Self {
			value: Box::new(value),
			short,
			long,
			usage,
			necessary,
			command,
			set: false,
			default: None,
		}
	}

	#[must_use]
	/// # Short Name.
	pub const fn short(&self) -> Option<char> { self.short }

	#[must_use]
	/// # Long Name.
	pub fn long(&self) -> Option<&str> { self.long.as_deref() }

	#[must_use]
	/// # Usage.
	pub fn usage(&self) -> &str { &self.usage }

	#[must_use]
	/// # Necessity.
	pub const fn necessary(&self) -> Necessary { self.necessary }

	#[must_use]
	/// # Required?
	pub const fn is_required(&self) -> bool {
		matches!(self.necessary, Necessary::Required)
	}

	#[must_use]
	/// # Command Flag?
	pub const fn is_command(&self) -> bool { self.command }

	#[must_use]
	/// # Was It Set?
	pub const fn is_set(&self) -> bool { self.set }

	#[must_use]
	/// # Default Value.
	///
	/// The value's textual form as it was when registered, or `None` if that
	/// was empty.
	pub fn default_value(&self) -> Option<&str> { self.default.as_deref() }

	#[must_use]
	/// # Value.
	pub fn value(&self) -> &dyn Value { &*self.value }

	/// # Capture Default.
	pub(crate) fn capture_default(&mut self) {
		self.default = snapshot(&*self.value);
	}

	/// # Set Value.
	///
	/// Mark the flag set only if the conversion succeeded.
	pub(crate) fn set_value(&mut self, raw: &str) -> Result<(), crate::ParseValueError> {
		self.value.set(raw)?;
		self.set = true;
		Ok(())
	}
}



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Argument Options.
pub struct ArgOptions {
	/// # Name.
	name: String,

	/// # Usage.
	usage: String,

	/// # Necessity.
	necessary: Necessary,
}

impl ArgOptions {
	#[must_use]
	/// # New.
	pub fn new(name: &str) -> Self {
		Self { name: name.to_owned(), ..Self::default() }
	}

	#[must_use]
	/// # With Usage.
	pub fn usage(mut self, usage: &str) -> Self {
		usage.clone_into(&mut self.usage);
		self
	}

	#[must_use]
	/// # Required.
	pub const fn required(mut self) -> Self {
		self.necessary = Necessary::Required;
		self
	}

	#[must_use]
	/// # Optional.
	pub const fn optional(mut self) -> Self {
		self.necessary = Necessary::Optional;
		self
	}
}



/// # Argument.
///
/// A positional value, filled in the order arguments were registered.
pub struct Arg {
	/// # Value.
	value: Box<dyn Value>,

	/// # Name.
	name: String,

	/// # Usage.
	usage: String,

	/// # Necessity.
	necessary: Necessary,

	/// # Set During Parse?
	set: bool,

	/// # Default Snapshot.
	default: Option<String>,
}

impl fmt::Debug for Arg {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Arg")
			.field("name", &self.name)
			.field("kind", &self.value.kind())
			.field("necessary", &self.necessary)
			.field("set", &self.set)
			.finish_non_exhaustive()
	}
}

impl Arg {
	#[must_use]
	/// # New.
	pub fn new<V>(value: V, opts: ArgOptions) -> Self
	where V: Value + 'static {
		let ArgOptions { name, usage, necessary } = opts;
		Self {
			value: Box::new(value),
			name,
			usage,
			necessary,
			set: false,
			default: None,
		}
	}

	#[must_use]
	/// # Name.
	pub fn name(&self) -> &str { &self.name }

	#[must_use]
	/// # Usage.
	pub fn usage(&self) -> &str { &self.usage }

	#[must_use]
	/// # Necessity.
	pub const fn necessary(&self) -> Necessary { self.necessary }

	#[must_use]
	/// # Required?
	///
	/// Arguments are required unless explicitly optional.
	pub const fn is_required(&self) -> bool {
		! matches!(self.necessary, Necessary::Optional)
	}

	#[must_use]
	/// # Was It Set?
	pub const fn is_set(&self) -> bool { self.set }

	#[must_use]
	/// # Default Value.
	pub fn default_value(&self) -> Option<&str> { self.default.as_deref() }

	#[must_use]
	/// # Value.
	pub fn value(&self) -> &dyn Value { &*self.value }

	/// # Capture Default.
	pub(crate) fn capture_default(&mut self) {
		self.default = snapshot(&*self.value);
	}

	/// # Set Value.
	pub(crate) fn set_value(&mut self, raw: &str) -> Result<(), crate::ParseValueError> {
		self.value.set(raw)?;
		self.set = true;
		Ok(())
	}
}



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Rest Options.
pub struct RestOptions {
	/// # Name.
	name: String,

	/// # Usage.
	usage: String,
}

impl RestOptions {
	#[must_use]
	/// # New.
	pub fn new(name: &str) -> Self {
		Self { name: name.to_owned(), usage: String::new() }
	}

	#[must_use]
	/// # With Usage.
	pub fn usage(mut self, usage: &str) -> Self {
		usage.clone_into(&mut self.usage);
		self
	}
}



/// # Rest Arguments.
///
/// The sink for positionals beyond the registered arguments. Its value should
/// be a list type like [`Multi`](crate::Multi). Each overflow token is
/// passed to [`Value::add`] as-is, so `a,b.txt` stays one entry.
pub struct RestArgs {
	/// # Value.
	value: Box<dyn Value>,

	/// # Name.
	name: String,

	/// # Usage.
	usage: String,

	/// # Set During Parse?
	set: bool,
}

impl fmt::Debug for RestArgs {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RestArgs")
			.field("name", &self.name)
			.field("kind", &self.value.kind())
			.field("set", &self.set)
			.finish_non_exhaustive()
	}
}

impl RestArgs {
	#[must_use]
	/// # New.
	pub fn new<V>(value: V, opts: RestOptions) -> Self
	where V: Value + 'static {
		let RestOptions { name, usage } = opts;
		Self { value: Box::new(value), name, usage, set: false }
	}

	#[must_use]
	/// # Name.
	pub fn name(&self) -> &str { &self.name }

	#[must_use]
	/// # Usage.
	pub fn usage(&self) -> &str { &self.usage }

	#[must_use]
	/// # Was Anything Collected?
	pub const fn is_set(&self) -> bool { self.set }

	#[must_use]
	/// # Value.
	pub fn value(&self) -> &dyn Value { &*self.value }

	/// # Add.
	pub(crate) fn add(&mut self, raw: &str) -> Result<(), crate::ParseValueError> {
		self.value.add(raw)?;
		self.set = true;
		Ok(())
	}
}
