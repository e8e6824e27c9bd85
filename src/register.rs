/*!
# Tartan: Register.
*/

use crate::{
	Arg,
	ArgError,
	ArgOptions,
	Error,
	ErrorKind,
	Flag,
	FlagError,
	FlagOptions,
	Getter,
	Multi,
	RestArgs,
	RestArgsError,
	RestOptions,
	Scalar,
	Single,
};
use std::{
	collections::BTreeMap,
	fmt,
	marker::PhantomData,
};



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Handle Slot.
enum Slot {
	/// # Flag.
	Flag,

	/// # Argument.
	Arg,

	/// # Rest.
	Rest,
}



/// # Value Handle.
///
/// Returned by the typed registration helpers, this is how results are read
/// back out of a [`Register`] once parsing has finished. See
/// [`Register::get`].
///
/// Handles are only meaningful for the register that issued them.
pub struct Handle<T> {
	/// # Slot.
	slot: Slot,

	/// # Index.
	idx: usize,

	/// # Output Type.
	_type: PhantomData<fn() -> T>,
}

impl<T> Clone for Handle<T> {
	#[inline]
	fn clone(&self) -> Self { *self }
}

impl<T> Copy for Handle<T> {}

impl<T> fmt::Debug for Handle<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Handle")
			.field("slot", &self.slot)
			.field("idx", &self.idx)
			.finish()
	}
}

impl<T> Eq for Handle<T> {}

impl<T> PartialEq for Handle<T> {
	#[inline]
	fn eq(&self, other: &Self) -> bool {
		self.slot == other.slot && self.idx == other.idx
	}
}

impl<T> Handle<T> {
	/// # New.
	const fn new(slot: Slot, idx: usize) -> Self {
		Self { slot, idx, _type: PhantomData }
	}
}



#[derive(Debug, Clone, Copy)]
/// # Flag Lookup Result.
///
/// Just enough for the parser to decide how greedy to be.
pub(crate) struct FlagRef {
	/// # Index.
	pub(crate) idx: usize,

	/// # Bool Flag?
	pub(crate) bool_flag: bool,

	/// # String Flag?
	pub(crate) string_flag: bool,
}



#[derive(Debug, Default)]
/// # Register.
///
/// The flags, positional arguments, and rest collector for a single command
/// scope.
///
/// Registration is checked as it happens. Every registration method returns
/// its own `Result`, but the first failure is also cached (see
/// [`Register::err`]) so a parse will refuse to run against a half-built
/// register even if the caller ignored an error along the way.
///
/// ## Examples
///
/// ```
/// use tartan::{ArgOptions, FlagOptions, Parser, Register};
///
/// let mut reg = Register::new();
/// let verbose = reg.add_flag::<bool>(FlagOptions::new("verbose").short('v')).unwrap();
/// let level = reg.add_flag::<u8>(FlagOptions::new("level")).unwrap();
/// let path = reg.add_arg::<String>(ArgOptions::new("path")).unwrap();
///
/// Parser::default().parse(None, &mut reg, &["-v", "--level=3", "/tmp"]).unwrap();
///
/// assert_eq!(reg.get(verbose), Some(&true));
/// assert_eq!(reg.get(level), Some(&3));
/// assert_eq!(reg.get(path).map(String::as_str), Some("/tmp"));
/// ```
pub struct Register {
	/// # Flags.
	flags: Vec<Flag>,

	/// # Short Index.
	shorts: BTreeMap<char, usize>,

	/// # Long Index.
	longs: BTreeMap<String, usize>,

	/// # Arguments.
	args: Vec<Arg>,

	/// # Argument Name Index.
	names: BTreeMap<String, usize>,

	/// # Rest.
	rest: Option<RestArgs>,

	/// # Seen an Optional Arg?
	optional: bool,

	/// # First Registration Error.
	err: Option<Error>,

	/// # First Command Flag Set.
	fired: Option<usize>,

	/// # Command Flag Set in a Parent Scope.
	inherited: Option<Box<Flag>>,
}

impl Register {
	#[must_use]
	/// # New.
	pub fn new() -> Self { Self::default() }

	/// # Register Flag.
	///
	/// ## Errors
	///
	/// Returns a [`FlagError`] if the flag has no name, an invalid name, or a
	/// name already in use.
	pub fn register_flag(&mut self, flag: Flag) -> Result<(), Error> {
		let res = self.try_register_flag(flag);
		self.remember(res)
	}

	/// # Register Argument.
	///
	/// ## Errors
	///
	/// Returns an [`ArgError`] if a required argument follows an optional one,
	/// if a rest collector has already been registered, or if the name is
	/// missing, invalid, or already in use, in that order.
	pub fn register_arg(&mut self, arg: Arg) -> Result<(), Error> {
		let res = self.try_register_arg(arg);
		self.remember(res)
	}

	/// # Register Rest Collector.
	///
	/// ## Errors
	///
	/// Returns a [`RestArgsError`] if the name is missing or invalid, or if a
	/// rest collector already exists.
	pub fn register_rest_args(&mut self, rest: RestArgs) -> Result<(), Error> {
		let res = self.try_register_rest(rest);
		self.remember(res)
	}

	/// # Cache First Error.
	fn remember(&mut self, res: Result<(), Error>) -> Result<(), Error> {
		if let Err(e) = &res {
			tracing::debug!(error = %e, "registration failed");
			if self.err.is_none() { self.err = Some(e.clone()); }
		}
		res
	}

	/// # Register Flag (Uncached).
	fn try_register_flag(&mut self, mut flag: Flag) -> Result<(), Error> {
		let short = flag.short();
		let long = flag.long();

		if short.is_none() && long.is_none() {
			return Err(FlagError::new(None, None, ErrorKind::MissingName).into());
		}
		if short.is_some_and(|c| ! valid_short(c)) || long.is_some_and(|l| ! valid_name(l.as_bytes())) {
			return Err(FlagError::new(short, long, ErrorKind::InvalidName).into());
		}

		// Report the names of whatever got there first.
		let existing = long.and_then(|l| self.longs.get(l))
			.or_else(|| short.and_then(|c| self.shorts.get(&c)))
			.and_then(|&idx| self.flags.get(idx));
		if let Some(old) = existing {
			return Err(FlagError::new(old.short(), old.long(), ErrorKind::Duplicate).into());
		}

		let idx = self.flags.len();
		if let Some(c) = short { self.shorts.insert(c, idx); }
		if let Some(l) = long { self.longs.insert(l.to_owned(), idx); }
		flag.capture_default();
		self.flags.push(flag);
		Ok(())
	}

	/// # Register Argument (Uncached).
	fn try_register_arg(&mut self, mut arg: Arg) -> Result<(), Error> {
		let idx = self.args.len();

		if arg.is_required() {
			if self.optional {
				return Err(ArgError::new(arg.name(), idx, ErrorKind::RequiredAfterOptional).into());
			}
		}
		else { self.optional = true; }

		if self.rest.is_some() {
			return Err(ArgError::new(arg.name(), idx, ErrorKind::ArgAfterRest).into());
		}

		check_name(arg.name()).map_err(|kind| ArgError::new(arg.name(), idx, kind))?;
		if self.names.contains_key(arg.name()) {
			return Err(ArgError::new(arg.name(), idx, ErrorKind::Duplicate).into());
		}

		self.names.insert(arg.name().to_owned(), idx);
		arg.capture_default();
		self.args.push(arg);
		Ok(())
	}

	/// # Register Rest (Uncached).
	fn try_register_rest(&mut self, rest: RestArgs) -> Result<(), Error> {
		check_name(rest.name()).map_err(|kind| RestArgsError::new(rest.name(), kind))?;
		if self.rest.is_some() {
			return Err(RestArgsError::new(rest.name(), ErrorKind::Duplicate).into());
		}

		self.rest = Some(rest);
		Ok(())
	}
}

/// # Typed Helpers.
impl Register {
	/// # Add Flag.
	///
	/// Register a flag holding a single `T`, starting from `T::default()`.
	///
	/// ## Errors
	///
	/// See [`Register::register_flag`].
	pub fn add_flag<T: Scalar>(&mut self, opts: FlagOptions) -> Result<Handle<T>, Error> {
		self.add_flag_value(Single::<T>::default(), opts)
	}

	/// # Add Multi-Value Flag.
	///
	/// Register a flag that accumulates every `T` it is given.
	///
	/// ## Errors
	///
	/// See [`Register::register_flag`].
	pub fn add_multi_flag<T: Scalar>(&mut self, opts: FlagOptions)
	-> Result<Handle<Vec<T>>, Error> {
		self.add_flag_value(Multi::<T>::default(), opts)
	}

	/// # Add Flag (Custom Value).
	///
	/// The value's starting state becomes the flag's default.
	///
	/// ## Errors
	///
	/// See [`Register::register_flag`].
	pub fn add_flag_value<V: Getter>(&mut self, value: V, opts: FlagOptions)
	-> Result<Handle<V::Output>, Error> {
		let idx = self.flags.len();
		self.register_flag(Flag::new(value, opts))?;
		Ok(Handle::new(Slot::Flag, idx))
	}

	/// # Add Argument.
	///
	/// ## Errors
	///
	/// See [`Register::register_arg`].
	pub fn add_arg<T: Scalar>(&mut self, opts: ArgOptions) -> Result<Handle<T>, Error> {
		self.add_arg_value(Single::<T>::default(), opts)
	}

	/// # Add Multi-Value Argument.
	///
	/// ## Errors
	///
	/// See [`Register::register_arg`].
	pub fn add_multi_arg<T: Scalar>(&mut self, opts: ArgOptions)
	-> Result<Handle<Vec<T>>, Error> {
		self.add_arg_value(Multi::<T>::default(), opts)
	}

	/// # Add Argument (Custom Value).
	///
	/// ## Errors
	///
	/// See [`Register::register_arg`].
	pub fn add_arg_value<V: Getter>(&mut self, value: V, opts: ArgOptions)
	-> Result<Handle<V::Output>, Error> {
		let idx = self.args.len();
		self.register_arg(Arg::new(value, opts))?;
		Ok(Handle::new(Slot::Arg, idx))
	}

	/// # Add Rest Collector.
	///
	/// ## Errors
	///
	/// See [`Register::register_rest_args`].
	pub fn add_rest<T: Scalar>(&mut self, opts: RestOptions) -> Result<Handle<Vec<T>>, Error> {
		self.register_rest_args(RestArgs::new(Multi::<T>::default(), opts))?;
		Ok(Handle::new(Slot::Rest, 0))
	}

	#[must_use]
	/// # Get Value.
	///
	/// Return the current value behind a handle, or `None` if the handle
	/// belongs to some other register.
	pub fn get<T: 'static>(&self, handle: Handle<T>) -> Option<&T> {
		let value = match handle.slot {
			Slot::Flag => self.flags.get(handle.idx)?.value(),
			Slot::Arg => self.args.get(handle.idx)?.value(),
			Slot::Rest => self.rest.as_ref()?.value(),
		};
		value.get().downcast_ref::<T>()
	}

	#[must_use]
	/// # Was It Set?
	pub fn is_set<T>(&self, handle: Handle<T>) -> bool {
		match handle.slot {
			Slot::Flag => self.flags.get(handle.idx).is_some_and(Flag::is_set),
			Slot::Arg => self.args.get(handle.idx).is_some_and(Arg::is_set),
			Slot::Rest => self.rest.as_ref().is_some_and(RestArgs::is_set),
		}
	}
}

/// # Getters.
impl Register {
	#[must_use]
	/// # Argument by Position.
	pub fn arg(&self, idx: usize) -> Option<&Arg> { self.args.get(idx) }

	#[must_use]
	/// # Argument by Name.
	pub fn arg_by_name(&self, name: &str) -> Option<&Arg> {
		self.names.get(name).and_then(|&idx| self.args.get(idx))
	}

	#[must_use]
	/// # Flag by Short Name.
	pub fn short_flag(&self, name: char) -> Option<&Flag> {
		self.shorts.get(&name).and_then(|&idx| self.flags.get(idx))
	}

	#[must_use]
	/// # Flag by Long Name.
	pub fn long_flag(&self, name: &str) -> Option<&Flag> {
		self.longs.get(name).and_then(|&idx| self.flags.get(idx))
	}

	#[must_use]
	/// # Flags (Registration Order).
	pub fn flags(&self) -> &[Flag] { &self.flags }

	#[must_use]
	/// # Arguments (Positional Order).
	pub fn args(&self) -> &[Arg] { &self.args }

	#[must_use]
	/// # Rest Collector.
	pub const fn rest(&self) -> Option<&RestArgs> { self.rest.as_ref() }

	#[must_use]
	/// # First Registration Error.
	pub const fn err(&self) -> Option<&Error> { self.err.as_ref() }

	#[must_use]
	/// # Command Flag.
	///
	/// Return the first command flag set during parsing, if any. This includes
	/// one set in a parent scope before a subcommand took over, e.g. the
	/// `--help` in `prog --help build`.
	pub fn command_flag(&self) -> Option<&Flag> {
		self.fired.and_then(|idx| self.flags.get(idx))
			.or(self.inherited.as_deref())
	}
}

/// # Parser Hooks.
impl Register {
	/// # Find Short Flag.
	pub(crate) fn find_short(&self, name: char) -> Option<FlagRef> {
		self.shorts.get(&name).and_then(|&idx| self.flag_ref(idx))
	}

	/// # Find Long Flag.
	pub(crate) fn find_long(&self, name: &str) -> Option<FlagRef> {
		self.longs.get(name).and_then(|&idx| self.flag_ref(idx))
	}

	/// # Flag Reference.
	fn flag_ref(&self, idx: usize) -> Option<FlagRef> {
		let value = self.flags.get(idx)?.value();
		Some(FlagRef {
			idx,
			bool_flag: value.is_bool_flag(),
			string_flag: value.is_string_flag(),
		})
	}

	/// # Set Flag.
	pub(crate) fn set_flag(&mut self, flag: FlagRef, raw: &str) -> Result<(), Error> {
		if let Some(f) = self.flags.get_mut(flag.idx) {
			f.set_value(raw).map_err(|e| FlagError::new(f.short(), f.long(), e))?;
			tracing::trace!(short = ?f.short(), long = ?f.long(), value = raw, "flag set");
			if f.is_command() && self.fired.is_none() {
				tracing::debug!(short = ?f.short(), long = ?f.long(), "command flag set");
				self.fired = Some(flag.idx);
			}
		}
		Ok(())
	}

	/// # Inherit Command Flag.
	///
	/// Take over the parent scope's fired command flag, if any, unless this
	/// register already has one of its own.
	pub(crate) fn inherit_command(&mut self, mut parent: Self) {
		if self.command_flag().is_some() { return; }

		let flag = match parent.fired.take() {
			Some(idx) if idx < parent.flags.len() => Some(Box::new(parent.flags.swap_remove(idx))),
			_ => parent.inherited.take(),
		};
		if let Some(flag) = flag {
			tracing::debug!(short = ?flag.short(), long = ?flag.long(), "command flag inherited");
			self.inherited = Some(flag);
		}
	}

	/// # Set Positional.
	///
	/// Fill the argument at `idx`, or feed the rest collector if there is no
	/// such argument. Returns `false` if neither exists.
	pub(crate) fn set_positional(&mut self, idx: usize, raw: &str) -> Result<bool, Error> {
		if let Some(arg) = self.args.get_mut(idx) {
			arg.set_value(raw).map_err(|e| ArgError::new(arg.name(), idx, e))?;
			tracing::trace!(name = arg.name(), index = idx, value = raw, "arg set");
			Ok(true)
		}
		else if let Some(rest) = self.rest.as_mut() {
			rest.add(raw).map_err(|e| RestArgsError::new(rest.name(), e))?;
			tracing::trace!(name = rest.name(), value = raw, "rest added");
			Ok(true)
		}
		else { Ok(false) }
	}

	/// # Validate.
	///
	/// Make sure everything required was set. This is skipped entirely if a
	/// command flag was set.
	pub(crate) fn validate(&self) -> Result<(), Error> {
		if let Some(flag) = self.command_flag() {
			tracing::debug!(short = ?flag.short(), long = ?flag.long(), "skipping validation");
			return Ok(());
		}

		if let Some(flag) = self.flags.iter().find(|f| f.is_required() && ! f.is_set()) {
			return Err(FlagError::new(flag.short(), flag.long(), ErrorKind::NotProvided).into());
		}

		if let Some((idx, arg)) = self.args.iter().enumerate().find(|(_, a)| a.is_required() && ! a.is_set()) {
			return Err(ArgError::new(arg.name(), idx, ErrorKind::NotProvided).into());
		}

		Ok(())
	}
}



/// # Valid Short Name?
///
/// Short names must be a single ASCII character other than `-`, `=`, space,
/// or `,`.
const fn valid_short(c: char) -> bool {
	c.is_ascii() && ! matches!(c, '-' | '=' | ' ' | ',')
}

/// # Valid Name?
///
/// Long flag, argument, and rest names cannot be empty, cannot start with
/// `-`, and cannot contain `=`, space, or `,` anywhere.
const fn valid_name(bytes: &[u8]) -> bool {
	let mut rest = match bytes {
		[] | [b'-' | b'=' | b' ' | b',', ..] => return false,
		[_, rest @ ..] => rest,
	};

	while let [b, tail @ ..] = rest {
		if matches!(*b, b'=' | b' ' | b',') { return false; }
		rest = tail;
	}

	true
}

/// # Check Name.
const fn check_name(name: &str) -> Result<(), ErrorKind> {
	if name.is_empty() { Err(ErrorKind::MissingName) }
	else if valid_name(name.as_bytes()) { Ok(()) }
	else { Err(ErrorKind::InvalidName) }
}
