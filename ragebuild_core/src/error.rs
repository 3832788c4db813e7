/*!
# `RageBuild`: Errors
*/

use std::{
	error::Error,
	fmt,
};



/// # Help Text.
const HELP: &str = concat!(r"
    ___
   /   \      ", "\x1b[38;5;199mRageBuild\x1b[0;38;5;69m v", env!("CARGO_PKG_VERSION"), "\x1b[0m", r"
  | o o |     Pick a game build and project format,
  |  ^  |     then let premake generate the solution.
   \___/

USAGE:
    ragebuild [FLAGS] [OPTIONS]

FLAGS:
        --dry-run      Print the premake command without running it.
    -h, --help         Print help information and exit.
    -V, --version      Print version information and exit.

OPTIONS:
    -c, --config <FILE>    Load build and project tables from this YAML file
                           instead of ./ragebuild.yaml.

All menu answers are read interactively from STDIN.
");



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Error.
pub enum RageBuildError {
	/// # Invalid Configuration.
	Config(String),

	/// # Invalid Game Build Selection.
	InvalidBuild(String),

	/// # Invalid CLI Argument.
	InvalidCli(String),

	/// # Invalid Project Format Selection.
	InvalidFormat(String),

	/// # STDIN Read Failure.
	Read,

	/// # Print Help (Not an Error).
	PrintHelp,

	/// # Print Version (Not an Error).
	PrintVersion,
}

impl Error for RageBuildError {}

impl fmt::Display for RageBuildError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidBuild(s) => write!(f, "Invalid game version '{s}'"),
			Self::InvalidFormat(s) => write!(f, "Invalid project type '{s}'"),
			Self::Config(s) | Self::InvalidCli(s) => {
				f.write_str(self.as_str())?;
				write!(f, " \x1b[2m({s})\x1b[0m")
			},
			_ => f.write_str(self.as_str()),
		}
	}
}

impl RageBuildError {
	#[must_use]
	/// # As String Slice.
	///
	/// Return the static portion of the message, without any context.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::Config(_) => "Invalid configuration.",
			Self::InvalidBuild(_) => "Invalid game version.",
			Self::InvalidCli(_) => "Invalid/unknown option.",
			Self::InvalidFormat(_) => "Invalid project type.",
			Self::Read => "Unable to read from STDIN.",
			Self::PrintHelp => HELP,
			Self::PrintVersion => concat!("RageBuild v", env!("CARGO_PKG_VERSION")),
		}
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_display() {
		assert_eq!(
			RageBuildError::InvalidBuild("5".to_owned()).to_string(),
			"Invalid game version '5'",
		);
		assert_eq!(
			RageBuildError::InvalidFormat("-1".to_owned()).to_string(),
			"Invalid project type '-1'",
		);
		assert_eq!(
			RageBuildError::Config("nope.yaml".to_owned()).to_string(),
			"Invalid configuration. \x1b[2m(nope.yaml)\x1b[0m",
		);
		assert_eq!(RageBuildError::Read.to_string(), "Unable to read from STDIN.");
		assert!(RageBuildError::PrintVersion.to_string().starts_with("RageBuild v"));
	}
}
