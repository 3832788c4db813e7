/*!
# `RageBuild`: Catalog
*/

use crate::{
	DEFAULT_FILE,
	DEFAULT_TOOL,
	Invocation,
	parse_index,
	RageBuildError,
};
use trimothy::TrimMut;



/// # Built-In Game Builds.
///
/// Name, code, executable, description.
const BUILDS: [(&str, &str, &str, &str); 2] = [
	("2699.16 Master", "2699_16", "gta5.exe", "-"),
	(
		"2699.16 Release (No Opt)",
		"2699_16_RELEASE_NO_OPT",
		"game_win64_release.exe",
		"Built from the source with Release configuration and optimizations disabled, developer use only",
	),
];

/// # Built-In Project Formats.
const FORMATS: [&str; 4] = ["vs2022", "vs2019", "vs2017", "vs2015"];



#[derive(Debug, Clone, Eq, Hash, PartialEq)]
/// # Build Variant.
///
/// One buildable game version: a display name, the source-tree identifier
/// passed to premake as `--gamebuild`, and the executable it targets.
pub struct BuildVariant {
	/// # Display Name.
	name: String,

	/// # Game Build Code.
	code: String,

	/// # Executable Name.
	exe: String,

	/// # Description.
	desc: String,
}

impl BuildVariant {
	/// # New.
	///
	/// All fields are trimmed. The name and description are free-form, but
	/// the code and executable are required.
	///
	/// ## Errors
	///
	/// Returns an error if `code` or `exe` is empty.
	pub fn new<S>(name: S, code: S, exe: S, desc: S) -> Result<Self, RageBuildError>
	where S: Into<String> {
		let mut name: String = name.into();
		let mut code: String = code.into();
		let mut exe: String = exe.into();
		let mut desc: String = desc.into();
		name.trim_mut();
		code.trim_mut();
		exe.trim_mut();
		desc.trim_mut();

		if code.is_empty() {
			return Err(RageBuildError::Config(format!("{name:?} is missing a build code")));
		}
		if exe.is_empty() {
			return Err(RageBuildError::Config(format!("{name:?} is missing an executable")));
		}

		Ok(Self { name, code, exe, desc })
	}

	#[must_use]
	/// # Display Name.
	pub fn name(&self) -> &str { &self.name }

	#[must_use]
	/// # Game Build Code.
	pub fn code(&self) -> &str { &self.code }

	#[must_use]
	/// # Executable Name.
	pub fn exe(&self) -> &str { &self.exe }

	#[must_use]
	/// # Description.
	pub fn desc(&self) -> &str { &self.desc }
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Catalog.
///
/// The (read-only) lookup tables behind the two menus, along with the premake
/// executable and script to hand them to.
///
/// Use [`Catalog::default`] for the built-in tables, or [`Catalog::new`] to
/// supply your own.
pub struct Catalog {
	/// # Premake Executable.
	tool: String,

	/// # Premake Script.
	file: String,

	/// # Game Builds (Menu Order).
	builds: Vec<BuildVariant>,

	/// # Project Formats (Menu Order).
	formats: Vec<String>,
}

impl Default for Catalog {
	fn default() -> Self {
		Self {
			tool: DEFAULT_TOOL.to_owned(),
			file: DEFAULT_FILE.to_owned(),
			builds: BUILDS.iter()
				.map(|&(name, code, exe, desc)| BuildVariant {
					name: name.to_owned(),
					code: code.to_owned(),
					exe: exe.to_owned(),
					desc: desc.to_owned(),
				})
				.collect(),
			formats: FORMATS.iter().map(|&f| f.to_owned()).collect(),
		}
	}
}

impl Catalog {
	/// # New.
	///
	/// ## Errors
	///
	/// The tool, file, and every format must be non-empty, and there must be
	/// at least one build and one format, otherwise an error is returned.
	pub fn new(
		mut tool: String,
		mut file: String,
		builds: Vec<BuildVariant>,
		mut formats: Vec<String>,
	) -> Result<Self, RageBuildError> {
		tool.trim_mut();
		file.trim_mut();
		for f in &mut formats { f.trim_mut(); }

		if tool.is_empty() {
			Err(RageBuildError::Config("no premake executable".to_owned()))
		}
		else if file.is_empty() {
			Err(RageBuildError::Config("no premake script".to_owned()))
		}
		else if builds.is_empty() {
			Err(RageBuildError::Config("no game builds".to_owned()))
		}
		else if formats.is_empty() {
			Err(RageBuildError::Config("no project formats".to_owned()))
		}
		else if let Some(pos) = formats.iter().position(String::is_empty) {
			Err(RageBuildError::Config(format!("project format #{pos} is empty")))
		}
		else { Ok(Self { tool, file, builds, formats }) }
	}
}

/// # Getters.
impl Catalog {
	#[must_use]
	/// # Premake Executable.
	pub fn tool(&self) -> &str { &self.tool }

	#[must_use]
	/// # Premake Script.
	pub fn file(&self) -> &str { &self.file }

	#[must_use]
	/// # Game Builds.
	pub fn builds(&self) -> &[BuildVariant] { &self.builds }

	#[must_use]
	/// # Project Formats.
	pub fn formats(&self) -> &[String] { &self.formats }

	#[must_use]
	/// # Widest Build Name.
	///
	/// The length of the longest build name, in characters, for lining up
	/// the menu columns.
	pub fn build_name_width(&self) -> usize {
		self.builds.iter()
			.map(|b| b.name.chars().count())
			.max()
			.unwrap_or(0)
	}
}

/// # Selection.
impl Catalog {
	/// # Select Build.
	///
	/// Parse a menu answer into a build index.
	///
	/// ## Errors
	///
	/// Returns an error naming the answer if it isn't a valid index.
	pub fn select_build(&self, raw: &str) -> Result<usize, RageBuildError> {
		parse_index(raw, self.builds.len())
			.ok_or_else(|| RageBuildError::InvalidBuild(raw.trim().to_owned()))
	}

	/// # Select Project Format.
	///
	/// Parse a menu answer into a project format index.
	///
	/// ## Errors
	///
	/// Returns an error naming the answer if it isn't a valid index.
	pub fn select_format(&self, raw: &str) -> Result<usize, RageBuildError> {
		parse_index(raw, self.formats.len())
			.ok_or_else(|| RageBuildError::InvalidFormat(raw.trim().to_owned()))
	}

	/// # Invocation.
	///
	/// Pair the chosen build and format with the feature `flags` (see
	/// [`FLAG_AVX2`](crate::FLAG_AVX2) and [`FLAG_PROFILER`](crate::FLAG_PROFILER)).
	///
	/// ## Errors
	///
	/// Returns an error if either index is out of range.
	pub fn invocation(&self, build: usize, format: usize, flags: u8)
	-> Result<Invocation<'_>, RageBuildError> {
		let b = self.builds.get(build)
			.ok_or_else(|| RageBuildError::InvalidBuild(build.to_string()))?;
		let f = self.formats.get(format)
			.ok_or_else(|| RageBuildError::InvalidFormat(format.to_string()))?;

		Ok(Invocation::new(&self.tool, &self.file, f, b, flags))
	}
}
