/*!
# Tartan: Parser.
*/


use crate::{
	Commander,
	Error,
	ErrorKind,
	ParseArgError,
	ParseFlagError,
	Register,
	is_bool_like,
	register::FlagRef,
	value::parse::is_value_like,
};



/// # Flag: Universal Mode.
///
/// Single-dash tokens like `-name` are long flags rather than bundles of short
/// ones. A single-character name still falls back to the short index, so `-v`
/// works either way.
pub const FLAG_UNIVERSAL: u8 =            0b0000_0001;

/// # Flag: No POSIX Bundles.
///
/// Reject multi-flag short bundles like `-abc`. Inline values (`-xVALUE`) are
/// still accepted unless [`FLAG_NO_INLINE`] is also set.
pub const FLAG_NO_POSIX: u8 =             0b0000_0010;

/// # Flag: No Inline Short Values.
///
/// Never treat the tail of a short bundle as a value, i.e. `-xVALUE` means
/// `-x -V -A -L -U -E`.
///
/// A non-boolean flag in the middle of a bundle still gets set, with an
/// empty value: for a string `a`, `-abc` leaves `a` set to `""`.
pub const FLAG_NO_INLINE: u8 =            0b0000_0100;

/// # Flag: Ignore Unknown Flags.
///
/// Skip flags nobody registered instead of failing.
pub const FLAG_IGNORE_UNKNOWN_FLAGS: u8 = 0b0000_1000;

/// # Flag: Ignore Unknown Arguments.
///
/// Skip positionals with no argument slot or rest collector to land in
/// instead of failing.
pub const FLAG_IGNORE_UNKNOWN_ARGS: u8 =  0b0001_0000;



#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq)]
/// # Parser.
///
/// This walks a list of raw command-line tokens once, left to right, writing
/// values into a [`Register`] as it goes and switching registers whenever a
/// [`Commander`] recognizes a subcommand.
///
/// The accepted grammar:
///
/// | Token | Meaning |
/// | ----- | ------- |
/// | `-x`, `-x=VAL`, `-x VAL` | Short flag. |
/// | `-xy` | Bundle, i.e. `-x -y`. |
/// | `-xVAL` | Short flag with an inline value (when `x` is not a boolean). |
/// | `--name`, `--name=VAL`, `--name VAL` | Long flag. |
/// | `--` | Everything after is positional. |
/// | anything else | Subcommand or positional. |
///
/// Dash-prefixed numbers and durations like `-42` or `-5s` are values, not
/// flags.
///
/// Boolean flags only take a separate value if it is bool-like, so
/// `-v path` leaves `path` for the positionals. `-v=` means `false`.
///
/// Parsing is fail-fast: values written before an error are left as-is.
///
/// ## Examples
///
/// ```
/// use tartan::{FlagOptions, Parser, Register, FLAG_UNIVERSAL};
///
/// let mut reg = Register::new();
/// let debug = reg.add_flag::<bool>(FlagOptions::new("debug")).unwrap();
///
/// let parser = Parser::new(FLAG_UNIVERSAL);
/// assert_eq!(parser.format_long_flag("debug"), "-debug");
///
/// parser.parse(None, &mut reg, &["-debug"]).unwrap();
/// assert_eq!(reg.get(debug), Some(&true));
/// ```
pub struct Parser {
	/// # Flags.
	flags: u8,
}

impl Parser {
	#[must_use]
	/// # New.
	///
	/// Create a parser with the given `FLAG_*` options. Pass `0` (or use
	/// [`Parser::default`]) for standard POSIX-ish behavior.
	pub const fn new(flags: u8) -> Self { Self { flags } }

	#[must_use]
	/// # With Flags.
	///
	/// This will only ever enable flags; it will not disable existing ones.
	pub const fn with_flags(self, flags: u8) -> Self {
		Self { flags: self.flags | flags }
	}

	#[must_use]
	/// # Flags.
	pub const fn flags(self) -> u8 { self.flags }

	#[must_use]
	/// # Universal Mode?
	pub const fn universal(self) -> bool { 0 != self.flags & FLAG_UNIVERSAL }

	#[must_use]
	/// # POSIX Bundles Disabled?
	pub const fn no_posix(self) -> bool { 0 != self.flags & FLAG_NO_POSIX }

	#[must_use]
	/// # Inline Short Values Disabled?
	pub const fn no_inline(self) -> bool { 0 != self.flags & FLAG_NO_INLINE }

	#[must_use]
	/// # Ignore Unknown Flags?
	pub const fn ignore_unknown_flags(self) -> bool {
		0 != self.flags & FLAG_IGNORE_UNKNOWN_FLAGS
	}

	#[must_use]
	/// # Ignore Unknown Arguments?
	pub const fn ignore_unknown_args(self) -> bool {
		0 != self.flags & FLAG_IGNORE_UNKNOWN_ARGS
	}

	#[must_use]
	/// # Format Long Flag.
	///
	/// Return the long name the way a user would type it: `--name`, or `-name`
	/// in universal mode. Empty names stay empty.
	pub fn format_long_flag(self, name: &str) -> String {
		if name.is_empty() { String::new() }
		else if self.universal() { format!("-{name}") }
		else { format!("--{name}") }
	}

	#[must_use]
	/// # Format Short Flag.
	pub fn format_short_flag(self, name: char) -> String { format!("-{name}") }
}

impl Parser {
	/// # Parse.
	///
	/// Walk `args` (not including the program name), writing values into
	/// `register`.
	///
	/// Until the first positional of the current scope, barewords are offered
	/// to the `commander` (if any); when it claims one, `register` is replaced
	/// by the subcommand's and parsing continues against that.
	///
	/// Once every token has been handled, required flags and then required
	/// arguments are checked, unless a command flag was set. A command flag set
	/// before a subcommand counts too; it travels with the scope, and is
	/// available afterward from [`Register::command_flag`].
	///
	/// ## Errors
	///
	/// Returns the register's cached registration error if it has one, and
	/// otherwise the first token, conversion, command, or validation failure.
	pub fn parse<S>(
		self,
		mut commander: Option<&mut dyn Commander>,
		register: &mut Register,
		args: &[S],
	) -> Result<(), Error>
	where S: AsRef<str> {
		if let Some(e) = register.err() { return Err(e.clone()); }

		let mut arg_mode = false;
		let mut arg_index = 0;
		let mut terminated = false;
		let mut iter = args.iter().map(|s| s.as_ref()).peekable();

		while let Some(token) = iter.next() {
			if terminated || is_positional(token) {
				if ! arg_mode {
					if let Some(cmd) = commander.as_deref_mut() {
						if cmd.is_command(token) {
							let parent = std::mem::replace(register, cmd.set_command(token)?);
							tracing::debug!(command = token, "switched command");
							if let Some(e) = register.err() { return Err(e.clone()); }
							register.inherit_command(parent);
							continue;
						}
					}
				}

				arg_mode = true;
				self.positional(register, token, arg_index)?;
				arg_index += 1;
			}
			else if token == "--" {
				tracing::debug!("flags terminated");
				terminated = true;
			}
			else if self.flag(register, token, iter.peek().copied())? {
				iter.next();
			}
		}

		register.validate()
	}

	/// # Parse Environment.
	///
	/// Same as [`Parser::parse`], but using the arguments the current process
	/// was called with, minus the program name. Anything that isn't valid
	/// UTF-8 is converted lossily.
	///
	/// ## Errors
	///
	/// See [`Parser::parse`].
	pub fn parse_env(
		self,
		commander: Option<&mut dyn Commander>,
		register: &mut Register,
	) -> Result<(), Error> {
		let args: Vec<String> = std::env::args_os()
			.skip(1)
			.map(|a| a.to_string_lossy().into_owned())
			.collect();
		self.parse(commander, register, &args)
	}

	/// # Positional.
	fn positional(self, register: &mut Register, token: &str, idx: usize)
	-> Result<(), Error> {
		if register.set_positional(idx, token)? { Ok(()) }
		else if self.ignore_unknown_args() {
			tracing::trace!(arg = token, index = idx, "skipped unknown arg");
			Ok(())
		}
		else {
			Err(ParseArgError { arg: token.to_owned(), index: idx, kind: ErrorKind::Unknown }.into())
		}
	}

	/// # Flag Token.
	///
	/// Returns `true` if the following token was consumed as a value.
	fn flag(self, register: &mut Register, token: &str, next: Option<&str>)
	-> Result<bool, Error> {
		let body = token.strip_prefix('-').unwrap_or(token);
		let (dashes, name) = body.strip_prefix('-').map_or(("-", body), |n| ("--", n));

		if matches!(name.as_bytes(), [] | [b'-' | b'=' | b' ' | b',', ..]) {
			return Err(ParseFlagError::new(name, ErrorKind::Syntax).into());
		}

		// Split off an inline value. The name can't start with '='.
		let (key, inline) = match name.bytes().skip(1).position(|b| b == b'=') {
			Some(pos) => (&name[..=pos], Some(&name[pos + 2..])),
			None => (name, None),
		};

		if dashes == "-" && ! self.universal() {
			return self.short_bundle(register, name, key, inline, next);
		}

		let found = register.find_long(key).or_else(||
			if self.universal() { single_char(key).and_then(|c| register.find_short(c)) }
			else { None }
		);
		match found {
			Some(flag) => self.assign(register, flag, inline, next),
			None => self.unknown(format!("{dashes}{key}")).map(|()| false),
		}
	}

	/// # Short Bundle.
	///
	/// Peel `key` one character at a time. A non-boolean member with more
	/// characters after it takes the rest of the token, `=` and all, as its
	/// value.
	fn short_bundle(
		self,
		register: &mut Register,
		full: &str,
		key: &str,
		inline: Option<&str>,
		next: Option<&str>,
	) -> Result<bool, Error> {
		let bundled = key.chars().nth(1).is_some();

		for (pos, c) in key.char_indices() {
			let after = pos + c.len_utf8();
			let Some(flag) = register.find_short(c) else {
				if bundled && self.no_posix() {
					return self.unknown(format!("-{key}")).map(|()| false);
				}
				self.unknown(format!("-{c}"))?;
				continue;
			};

			// The last member gets the full treatment.
			if after == key.len() {
				return self.assign(register, flag, inline, next);
			}

			if ! flag.bool_flag && ! self.no_inline() {
				register.set_flag(flag, &full[after..])?;
				return Ok(false);
			}

			if self.no_posix() {
				return self.unknown(format!("-{key}")).map(|()| false);
			}

			register.set_flag(flag, if flag.bool_flag { "true" } else { "" })?;
		}

		Ok(false)
	}

	/// # Assign.
	///
	/// Set a standalone (or trailing) flag, pulling its value from the inline
	/// part or, failing that, the next token. Returns `true` if the next token
	/// was used.
	fn assign(
		self,
		register: &mut Register,
		flag: FlagRef,
		inline: Option<&str>,
		next: Option<&str>,
	) -> Result<bool, Error> {
		let (value, consumed) = match inline {
			Some(v) => (Some(v), false),
			None => match next.filter(|n| accepts(flag, n)) {
				Some(n) => (Some(n), true),
				None => (None, false),
			},
		};

		let value =
			if flag.bool_flag {
				match value {
					None => "true",
					Some("") => "false",
					Some(v) => v,
				}
			}
			else { value.unwrap_or("") };

		register.set_flag(flag, value)?;
		Ok(consumed)
	}

	/// # Unknown Flag.
	fn unknown(self, name: String) -> Result<(), Error> {
		if self.ignore_unknown_flags() {
			tracing::trace!(flag = %name, "skipped unknown flag");
			Ok(())
		}
		else { Err(ParseFlagError::new(name, ErrorKind::Unknown).into()) }
	}
}



/// # Is Positional?
///
/// Empty tokens, `-` alone, barewords, and dash-prefixed numbers or durations.
fn is_positional(token: &str) -> bool {
	match token.as_bytes() {
		[] | [b'-'] => true,
		[b'-', ..] => is_value_like(token),
		_ => true,
	}
}

/// # Accepts Next Token?
///
/// Decide whether a following token should be claimed as a flag's value.
fn accepts(flag: FlagRef, next: &str) -> bool {
	if next.is_empty() { flag.string_flag }
	else if is_positional(next) { ! flag.bool_flag || is_bool_like(next) }
	else { false }
}

/// # Single Character.
fn single_char(name: &str) -> Option<char> {
	let mut chars = name.chars();
	match (chars.next(), chars.next()) {
		(Some(c), None) => Some(c),
		_ => None,
	}
}
