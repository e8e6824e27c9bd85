/*!
# Tartan: Hello

A tiny greeter with one subcommand. Try things like:

```bash
cargo run --example hello -- -n 3 world
cargo run --example hello -- shout --excited world
RUST_LOG=tartan=trace cargo run --example hello -- -n2 there
```
*/

use tartan::{
	ArgOptions,
	Commander,
	Error,
	FlagOptions,
	Handle,
	Parser,
	Register,
};
use tracing_subscriber::EnvFilter;



/// # Top-Level Handles.
struct Hello {
	/// # Repeat.
	times: Handle<u8>,

	/// # Help.
	help: Handle<bool>,

	/// # Name.
	name: Handle<String>,
}

/// # Shout Handles.
struct Shout {
	/// # Exclamation?
	excited: Handle<bool>,

	/// # Name.
	name: Handle<String>,
}

#[derive(Default)]
/// # Commands.
struct App {
	/// # Shout (if chosen).
	shout: Option<Shout>,
}

impl Commander for App {
	fn is_command(&self, name: &str) -> bool {
		self.shout.is_none() && name == "shout"
	}

	fn set_command(&mut self, name: &str) -> Result<Register, Error> {
		if name != "shout" { return Err(Error::Command(format!("unknown command: {name}"))); }

		let mut reg = Register::new();
		let excited = reg.add_flag::<bool>(FlagOptions::new("excited").short('e'))?;
		let name = reg.add_arg::<String>(ArgOptions::new("name"))?;
		self.shout = Some(Shout { excited, name });
		Ok(reg)
	}
}

/// # Top-Level Register.
fn hello() -> Result<(Register, Hello), Error> {
	let mut reg = Register::new();
	let times = reg.add_flag_value(
		tartan::Single::new(1_u8),
		FlagOptions::new("times").short('n').usage("How many times to say hello."),
	)?;
	let help = reg.add_flag::<bool>(FlagOptions::new("help").short('h').command())?;
	let name = reg.add_arg::<String>(ArgOptions::new("name").optional())?;
	Ok((reg, Hello { times, help, name }))
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	if let Err(e) = _main() {
		eprintln!("\x1b[1;91mError:\x1b[0m {e}");
		std::process::exit(e.exit_code());
	}
}

/// # Actual Main.
fn _main() -> Result<(), Error> {
	let (mut reg, top) = hello()?;
	let mut app = App::default();
	Parser::default().parse_env(Some(&mut app), &mut reg)?;

	if let Some(shout) = app.shout {
		let name = reg.get(shout.name).map_or("", String::as_str).to_uppercase();
		let end = if reg.get(shout.excited).copied().unwrap_or(false) { "!!!" } else { "." };
		println!("HELLO {name}{end}");
		return Ok(());
	}

	if reg.get(top.help).copied().unwrap_or(false) {
		for flag in reg.flags() {
			println!(
				"  -{} --{:<8} {}",
				flag.short().unwrap_or(' '),
				flag.long().unwrap_or_default(),
				flag.usage(),
			);
		}
		return Ok(());
	}

	let name = reg.get(top.name).map_or("", String::as_str);
	let name = if name.is_empty() { "world" } else { name };
	for _ in 0..reg.get(top.times).copied().unwrap_or(1) {
		println!("Hello, {name}!");
	}

	Ok(())
}
