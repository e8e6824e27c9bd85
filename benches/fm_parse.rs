/*!
# Benchmark: `tartan::Parser`
*/

use brunch::{
	Bench,
	benches,
};
use tartan::{
	ArgOptions,
	Duration,
	FlagOptions,
	Parser,
	Register,
	RestOptions,
	FLAG_UNIVERSAL,
};

const ARGS: [&str; 10] = [
	"-vq",
	"--threads=8",
	"--wait",
	"-1.5s",
	"-tfoo,bar",
	"/foo/bar",
	"--",
	"-x",
	"/bar/baz",
	"/baz/qux",
];

const UNIVERSAL: [&str; 6] = [
	"-verbose",
	"-threads",
	"8",
	"-t=foo",
	"/foo/bar",
	"/bar/baz",
];

fn register() -> Register {
	let mut reg = Register::new();
	let _res = reg.add_flag::<bool>(FlagOptions::new("verbose").short('v'));
	let _res = reg.add_flag::<bool>(FlagOptions::new("quiet").short('q'));
	let _res = reg.add_flag::<u8>(FlagOptions::new("threads"));
	let _res = reg.add_flag::<Duration>(FlagOptions::new("wait"));
	let _res = reg.add_multi_flag::<String>(FlagOptions::new("tag").short('t'));
	let _res = reg.add_arg::<String>(ArgOptions::new("src"));
	let _res = reg.add_rest::<String>(RestOptions::new("rest"));
	reg
}

benches!(
	Bench::new("tartan::Register::new()")
		.run(register),

	Bench::spacer(),

	Bench::new("tartan::Parser::parse(posix)")
		.run_seeded_with(register, |mut r| Parser::default().parse(None, &mut r, &ARGS).is_ok()),

	Bench::new("tartan::Parser::parse(universal)")
		.run_seeded_with(register, |mut r| Parser::new(FLAG_UNIVERSAL).parse(None, &mut r, &UNIVERSAL).is_ok()),

	Bench::spacer(),

	Bench::new("tartan::is_number(-0x1A)")
		.run(|| tartan::is_number("-0x1A")),

	Bench::new("tartan::is_duration(-1h30m)")
		.run(|| tartan::is_duration("-1h30m")),
);
