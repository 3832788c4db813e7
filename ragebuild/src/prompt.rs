/*!
# `RageBuild`: Prompts
*/

use ragebuild_core::{
	Catalog,
	FLAG_AVX2,
	FLAG_DEFAULT,
	FLAG_PROFILER,
	Invocation,
	is_yes,
	RageBuildError,
};
use std::{
	fmt::Write as _,
	io::{
		BufRead,
		Write,
	},
};



/// # Header.
const HEADER: &str = "- rageAm solution builder\n\n";



#[derive(Debug)]
/// # Prompt.
///
/// This walks the user through the menus, reading answers from `R` and
/// writing the menus themselves to `W`.
///
/// Answers are read one line at a time, and never retried; an invalid menu
/// choice ends the whole thing.
pub(super) struct Prompt<R, W> {
	/// # Input.
	input: R,

	/// # Output.
	output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
	/// # New.
	pub(super) const fn new(input: R, output: W) -> Self {
		Self { input, output }
	}

	/// # Choose.
	///
	/// Run through the full menu sequence (game build, advanced
	/// configuration, project format) and return the resulting invocation.
	///
	/// ## Errors
	///
	/// Returns an error if either menu answer is invalid, or STDIN can't be
	/// read.
	pub(super) fn choose<'a>(&mut self, catalog: &'a Catalog)
	-> Result<Invocation<'a>, RageBuildError> {
		self.print(HEADER);
		let build = self.select_build(catalog)?;
		let flags = self.flags()?;

		// The project format is always asked for, advanced or not.
		let format = self.select_format(catalog)?;
		catalog.invocation(build, format, flags)
	}

	/// # Select Game Build.
	fn select_build(&mut self, catalog: &Catalog) -> Result<usize, RageBuildError> {
		self.print(&build_menu(catalog));
		let raw = self.read_line()?;
		catalog.select_build(&raw)
	}

	/// # Select Project Format.
	fn select_format(&mut self, catalog: &Catalog) -> Result<usize, RageBuildError> {
		self.print(&format_menu(catalog));
		let raw = self.read_line()?;
		catalog.select_format(&raw)
	}

	/// # Feature Flags.
	///
	/// Return the default flags unless the user wants to pick their own.
	fn flags(&mut self) -> Result<u8, RageBuildError> {
		if ! self.confirm("Enter advanced configuration? y/n ")? {
			return Ok(FLAG_DEFAULT);
		}

		let mut flags = 0;
		if self.confirm("Use AVX2? ")? { flags |= FLAG_AVX2; }
		if self.confirm("Use profiler? ")? { flags |= FLAG_PROFILER; }
		Ok(flags)
	}

	/// # Confirm.
	///
	/// Print the question (inline) and return true if the answer is `y`.
	fn confirm(&mut self, question: &str) -> Result<bool, RageBuildError> {
		self.print(question);
		self.read_line().map(|raw| is_yes(&raw))
	}

	/// # Read Line.
	///
	/// Note: EOF is not an error; it just comes back empty.
	fn read_line(&mut self) -> Result<String, RageBuildError> {
		let mut buf = String::new();
		self.input.read_line(&mut buf).map_err(|_| RageBuildError::Read)?;
		Ok(buf)
	}

	/// # Print.
	///
	/// Write and flush. Failures are ignored; the answers still work without
	/// the menus.
	fn print(&mut self, s: &str) {
		let _res = self.output.write_all(s.as_bytes())
			.and_then(|()| self.output.flush());
	}
}



/// # Game Build Menu.
///
/// Names are padded so the descriptions line up.
fn build_menu(catalog: &Catalog) -> String {
	let width = catalog.build_name_width();
	let mut out = String::from("Select game version:\n");
	for (idx, build) in catalog.builds().iter().enumerate() {
		let _res = writeln!(out, "[{idx}] {:<width$}\t {}", build.name(), build.desc());
	}
	out
}

/// # Project Format Menu.
fn format_menu(catalog: &Catalog) -> String {
	let mut out = String::from("Select project type:\n");
	for (idx, format) in catalog.formats().iter().enumerate() {
		let _res = writeln!(out, "[{idx}] {format}");
	}
	out
}
