/*!
# `RageBuild` - Settings
*/

use ragebuild_core::{
	BuildVariant,
	Catalog,
	RageBuildError,
};
use serde::Deserialize;
use std::path::PathBuf;



#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
#[serde(default)]
/// # Settings.
///
/// This is the YAML side of a [`Catalog`]. Missing fields fall back to the
/// built-in values.
pub(super) struct Settings {
	/// # Premake Executable.
	tool: String,

	/// # Premake Script.
	file: String,

	/// # Game Builds.
	builds: Vec<BuildEntry>,

	/// # Project Formats.
	formats: Vec<String>,
}

impl Default for Settings {
	fn default() -> Self {
		let catalog = Catalog::default();
		Self {
			tool: catalog.tool().to_owned(),
			file: catalog.file().to_owned(),
			builds: catalog.builds().iter().map(BuildEntry::from).collect(),
			formats: catalog.formats().to_vec(),
		}
	}
}

impl TryFrom<PathBuf> for Settings {
	type Error = RageBuildError;

	fn try_from(path: PathBuf) -> Result<Self, Self::Error> {
		let raw = std::fs::canonicalize(&path)
			.and_then(std::fs::read_to_string)
			.map_err(|_| RageBuildError::Config(path.to_string_lossy().into_owned()))?;

		serde_yml::from_str::<Self>(&raw).map_err(|e| RageBuildError::Config(
			format!("{}: {e}", path.to_string_lossy())
		))
	}
}

impl Settings {
	/// # Configuration Path.
	pub(super) fn config() -> PathBuf { PathBuf::from("ragebuild.yaml") }

	/// # Into Catalog.
	///
	/// ## Errors
	///
	/// Returns an error if any of the entries are incomplete.
	pub(super) fn into_catalog(self) -> Result<Catalog, RageBuildError> {
		let builds = self.builds.into_iter()
			.map(|b| BuildVariant::new(b.name, b.code, b.exe, b.desc))
			.collect::<Result<Vec<_>, _>>()?;

		Catalog::new(self.tool, self.file, builds, self.formats)
	}
}



#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
/// # Game Build Entry.
struct BuildEntry {
	#[serde(default)]
	/// # Display Name.
	name: String,

	/// # Game Build Code.
	code: String,

	/// # Executable Name.
	exe: String,

	#[serde(default)]
	/// # Description.
	desc: String,
}

impl From<&BuildVariant> for BuildEntry {
	fn from(src: &BuildVariant) -> Self {
		Self {
			name: src.name().to_owned(),
			code: src.code().to_owned(),
			exe: src.exe().to_owned(),
			desc: src.desc().to_owned(),
		}
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_default() {
		let catalog = Settings::default()
			.into_catalog()
			.expect("Default settings failed.");
		assert_eq!(catalog, Catalog::default());
	}

	#[test]
	fn t_skel() {
		// The sample config should match the built-ins exactly.
		let catalog = Settings::try_from(PathBuf::from("./skel/ragebuild.yaml"))
			.expect("Missing settings.")
			.into_catalog()
			.expect("Invalid settings.");
		assert_eq!(catalog, Catalog::default());
	}

	#[test]
	fn t_custom() {
		let catalog = Settings::try_from(PathBuf::from("./skel/test.yaml"))
			.expect("Missing settings.")
			.into_catalog()
			.expect("Invalid settings.");

		assert_eq!(catalog.tool(), "premake5");
		assert_eq!(catalog.file(), "build.lua");
		assert_eq!(catalog.formats(), ["gmake2", "vs2022"]);

		let builds = catalog.builds();
		assert_eq!(builds.len(), 2);
		assert_eq!(builds[0].name(), "3095 Master");
		assert_eq!(builds[0].code(), "3095");
		assert_eq!(builds[0].exe(), "gta5.exe");
		assert_eq!(builds[0].desc(), "");
		assert_eq!(builds[1].code(), "2699_16");
		assert_eq!(builds[1].desc(), "Older.");

		assert_eq!(
			catalog.invocation(1, 0, 0).expect("Invocation failed.").to_string(),
			"premake5 --file=build.lua gmake2 --exe=gta5.exe --gamebuild=2699_16",
		);
	}

	#[test]
	fn t_partial() {
		// Only the formats are overridden here.
		let catalog = Settings::try_from(PathBuf::from("./skel/test-partial.yaml"))
			.expect("Missing settings.")
			.into_catalog()
			.expect("Invalid settings.");

		let default = Catalog::default();
		assert_eq!(catalog.tool(), default.tool());
		assert_eq!(catalog.file(), default.file());
		assert_eq!(catalog.builds(), default.builds());
		assert_eq!(catalog.formats(), ["vs2026"]);
	}

	#[test]
	fn t_invalid() {
		// The file parses, but a build has no executable.
		let settings = Settings::try_from(PathBuf::from("./skel/test-invalid.yaml"))
			.expect("Missing settings.");
		assert!(matches!(settings.into_catalog(), Err(RageBuildError::Config(_))));

		// Broken YAML should say why.
		match Settings::try_from(PathBuf::from("./skel/test-malformed.yaml")) {
			Err(RageBuildError::Config(s)) => {
				assert!(s.starts_with("./skel/test-malformed.yaml: "), "{s}");
				assert!(s.contains("code"), "{s}");
			},
			res => panic!("Malformed settings parsed: {res:?}"),
		}

		// Not there at all.
		assert_eq!(
			Settings::try_from(PathBuf::from("./skel/nope.yaml")),
			Err(RageBuildError::Config("./skel/nope.yaml".to_owned())),
		);
	}
}
