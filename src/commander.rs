/*!
# Tartan: Commander.
*/

use crate::{
	Error,
	Register,
};



/// # Commander.
///
/// The bridge between the parser and whatever command tree an application
/// keeps. The parser only asks about barewords that show up before the first
/// positional of the current scope.
///
/// ## Examples
///
/// ```
/// use tartan::{Commander, Error, FlagOptions, Parser, Register};
///
/// #[derive(Default)]
/// struct App {
///     path: Vec<String>,
/// }
///
/// impl Commander for App {
///     fn is_command(&self, name: &str) -> bool {
///         self.path.is_empty() && name == "build"
///     }
///
///     fn set_command(&mut self, name: &str) -> Result<Register, Error> {
///         self.path.push(name.to_owned());
///         let mut reg = Register::new();
///         reg.add_flag::<bool>(FlagOptions::new("release"))?;
///         Ok(reg)
///     }
/// }
///
/// let mut app = App::default();
/// let mut reg = Register::new();
/// Parser::default()
///     .parse(Some(&mut app), &mut reg, &["build", "--release"])
///     .unwrap();
///
/// assert_eq!(app.path, ["build"]);
/// assert!(reg.long_flag("release").is_some_and(|f| f.is_set()));
/// ```
pub trait Commander {
	/// # Is Command?
	///
	/// Peek: would `name` switch to a subcommand? This must not change any
	/// state.
	fn is_command(&self, name: &str) -> bool;

	/// # Set Command.
	///
	/// Commit to the subcommand, returning its freshly-built register. The
	/// parser replaces the current scope's register with it wholesale; nothing
	/// is inherited from the parent.
	///
	/// ## Errors
	///
	/// Implementations should return an error if the command is unknown or its
	/// setup fails. Registration errors may also be left cached on the
	/// returned register; the parser checks for those too.
	fn set_command(&mut self, name: &str) -> Result<Register, Error>;
}
