/*!
# `RageBuild`: Invocation
*/

use crate::{
	BuildVariant,
	FLAG_AVX2,
	FLAG_PROFILER,
};
use std::fmt;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Invocation.
///
/// A fully-resolved premake command. Use its [`Display`](fmt::Display)
/// implementation to get the command line:
///
/// ```text
/// <tool> --file=<file> <format> --exe=<exe> --gamebuild=<code> [--avx2] [--easyprofiler]
/// ```
///
/// Values are written as-is, without quoting or escaping; they all come from
/// the catalog, never from free-form user input.
pub struct Invocation<'a> {
	/// # Premake Executable.
	tool: &'a str,

	/// # Premake Script.
	file: &'a str,

	/// # Project Format.
	format: &'a str,

	/// # Game Build.
	build: &'a BuildVariant,

	/// # Feature Flags.
	flags: u8,
}

impl fmt::Display for Invocation<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} --file={} {} --exe={} --gamebuild={}",
			self.tool,
			self.file,
			self.format,
			self.build.exe(),
			self.build.code(),
		)?;

		if self.avx2() { f.write_str(" --avx2")?; }
		if self.profiler() { f.write_str(" --easyprofiler")?; }
		Ok(())
	}
}

impl<'a> Invocation<'a> {
	#[must_use]
	/// # New.
	pub const fn new(
		tool: &'a str,
		file: &'a str,
		format: &'a str,
		build: &'a BuildVariant,
		flags: u8,
	) -> Self {
		Self { tool, file, format, build, flags }
	}

	#[must_use]
	/// # Game Build.
	pub const fn build(&self) -> &'a BuildVariant { self.build }

	#[must_use]
	/// # Project Format.
	pub const fn format(&self) -> &'a str { self.format }

	#[must_use]
	/// # Flags.
	pub const fn flags(&self) -> u8 { self.flags }

	#[must_use]
	/// # Use AVX2?
	pub const fn avx2(&self) -> bool { FLAG_AVX2 == self.flags & FLAG_AVX2 }

	#[must_use]
	/// # Use Profiler?
	pub const fn profiler(&self) -> bool { FLAG_PROFILER == self.flags & FLAG_PROFILER }
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_flags() {
		let build = BuildVariant::new("Test", "1234_5", "test.exe", "")
			.expect("Build failed.");

		// Every combination, in order, with no "=false" leftovers.
		for (flags, suffix) in [
			(0, ""),
			(FLAG_AVX2, " --avx2"),
			(FLAG_PROFILER, " --easyprofiler"),
			(FLAG_AVX2 | FLAG_PROFILER, " --avx2 --easyprofiler"),
		] {
			let inv = Invocation::new("premake5", "main.lua", "vs2019", &build, flags);
			assert_eq!(inv.build(), &build);
			assert_eq!(inv.format(), "vs2019");
			assert_eq!(inv.flags(), flags);
			assert_eq!(inv.avx2(), 0 != flags & FLAG_AVX2);
			assert_eq!(inv.profiler(), 0 != flags & FLAG_PROFILER);
			assert_eq!(
				inv.to_string(),
				format!("premake5 --file=main.lua vs2019 --exe=test.exe --gamebuild=1234_5{suffix}"),
			);
		}
	}

	#[test]
	fn t_unknown_flags() {
		// Bits we don't know about don't turn into arguments.
		let build = BuildVariant::new("Test", "1234_5", "test.exe", "")
			.expect("Build failed.");
		let inv = Invocation::new("premake5", "main.lua", "vs2019", &build, 0b1111_0000);
		assert!(! inv.to_string().contains("--avx2"));
		assert!(! inv.to_string().contains("--easyprofiler"));
	}
}
