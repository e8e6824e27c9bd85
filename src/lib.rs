/*!
# Tartan

[![license](https://img.shields.io/badge/license-wtfpl-ff1493?style=flat-square)](https://en.wikipedia.org/wiki/WTFPL)

Tartan is a declarative CLI flag/argument parser. You tell a [`Register`] what
flags, positional arguments, and rest collector a command accepts, hand the
raw tokens to a [`Parser`], and read the typed results back out with the
[`Handle`]s you got at registration.

Subcommands are delegated to a [`Commander`] of your own design: when it
recognizes a bareword, the parser swaps in the register it returns and keeps
going.

There's no help screen generation, no environment fallbacks, and no config
files. Just tokens in, values out.



## Grammar

| Token | Meaning |
| ----- | ------- |
| `-x`, `-x=VAL`, `-x VAL` | Short flag. |
| `-xyz` | Short bundle (POSIX-style), i.e. `-x -y -z`. |
| `-xVAL` | Short flag with an inline value. |
| `--name`, `--name=VAL`, `--name VAL` | Long flag. |
| `-name` | Long flag, in universal mode ([`FLAG_UNIVERSAL`]). |
| `--` | Everything after is positional. |
| `-42`, `-5s` | Values, not flags. |

Boolean flags are set by their mere presence, and only take a following token
as their value if it is bool-like (`true`, `no`, `1`…). `-v=` sets `false`.



## Values

Out of the box, every integer width, `f32`, `f64`, `bool`, `String`, and
[`Duration`] are supported, both as singles and as comma-separated multiples.
Anything else can implement [`Value`] (and [`Getter`], for handles) directly.



## Example

```
use tartan::{
    ArgOptions,
    Duration,
    FlagOptions,
    Parser,
    Register,
    RestOptions,
};

let mut reg = Register::new();
let verbose = reg.add_flag::<bool>(FlagOptions::new("verbose").short('v')).unwrap();
let wait = reg.add_flag::<Duration>(FlagOptions::new("wait")).unwrap();
let tags = reg.add_multi_flag::<String>(FlagOptions::new("tag").short('t')).unwrap();
let src = reg.add_arg::<String>(ArgOptions::new("src").usage("Input file.")).unwrap();
let rest = reg.add_rest::<String>(RestOptions::new("files")).unwrap();

Parser::default().parse(
    None,
    &mut reg,
    &["-v", "--wait", "1m30s", "-ta,b", "in.txt", "x", "-t", "c", "y"],
).unwrap();

assert_eq!(reg.get(verbose), Some(&true));
assert_eq!(reg.get(wait), Some(&Duration::from_secs(90)));
assert_eq!(reg.get(tags).unwrap(), &["a", "b", "c"]);
assert_eq!(reg.get(src).unwrap(), "in.txt");
assert_eq!(reg.get(rest).unwrap(), &["x", "y"]);
```



## Logging

Registration failures, command switches, and (at trace level) every value
written are reported through [`tracing`](https://crates.io/crates/tracing).
Nothing is emitted unless the application installs a subscriber.
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]



mod commander;
mod error;
mod flag;
mod parser;
mod register;
mod value;

pub use commander::Commander;
pub use error::{
	ArgError,
	Cause,
	Error,
	ErrorKind,
	FlagError,
	ParseArgError,
	ParseFlagError,
	ParseValueError,
	RestArgsError,
};
pub use flag::{
	Arg,
	ArgOptions,
	Flag,
	FlagOptions,
	Necessary,
	RestArgs,
	RestOptions,
};
pub use parser::{
	FLAG_IGNORE_UNKNOWN_ARGS,
	FLAG_IGNORE_UNKNOWN_FLAGS,
	FLAG_NO_INLINE,
	FLAG_NO_POSIX,
	FLAG_UNIVERSAL,
	Parser,
};
pub use register::{
	Handle,
	Register,
};
pub use value::{
	Getter,
	Multi,
	Scalar,
	Single,
	Value,
	ValueKind,
	Width,
	duration::Duration,
	parse::{
		is_bool_like,
		is_duration,
		is_number,
	},
};

// Benchmark and demo dependencies.
#[cfg(test)] use brunch as _;
#[cfg(test)] use tracing_subscriber as _;
