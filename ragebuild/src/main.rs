/*!
# `RageBuild`

`RageBuild` is the interactive solution builder for rageAm. It asks which game
build to target, optionally which CPU/profiler features to enable, and which
Visual Studio project format to generate, then hands the whole lot to
premake.



## Usage

Run it from the repository root (next to `main.lua`):
```bash
ragebuild [FLAGS] [OPTIONS]
```

The following flags are available:
```bash
    --dry-run       Print the premake command without running it.
-h, --help          Print help information and exit.
-V, --version       Print version information and exit.
```

And the following option is available:
```bash
-c, --config <FILE> Load build and project tables from this YAML file
                    instead of ./ragebuild.yaml.
```

Every menu answer is read from STDIN; there is no way to pass them as
arguments. Answer the game version and project type menus with the number in
brackets. An invalid number aborts the whole run.

Unless you opt into the advanced configuration, AVX2 is enabled and the
profiler is not.



## Configuration

The built-in tables can be replaced by dropping a `ragebuild.yaml` into the
working directory (or pointing `--config` at one). Any field left out keeps its
built-in value:

```yaml
tool: 'tools\premake5.exe'
file: main.lua
builds:
  - name: 2699.16 Master
    code: '2699_16'
    exe: gta5.exe
    desc: '-'
formats: [ vs2022, vs2019, vs2017, vs2015 ]
```
*/

#![warn(clippy::filetype_is_file)]
#![warn(clippy::integer_division)]
#![warn(clippy::needless_borrow)]
#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::suboptimal_flops)]
#![warn(clippy::unneeded_field_pattern)]
#![warn(macro_use_extern_crate)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_crate_dependencies)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]

#![allow(clippy::module_name_repetitions)]



mod prompt;
mod settings;
mod shell;

use argyle::Argument;
use fyi_msg::Msg;
use prompt::Prompt;
use ragebuild_core::RageBuildError;
use settings::Settings;
use std::path::PathBuf;



/// # Main.
fn main() {
	match main__() {
		Ok(()) => {},
		Err(e @ (RageBuildError::PrintHelp | RageBuildError::PrintVersion)) => {
			println!("{e}");
		},
		Err(e) => {
			Msg::error(e.to_string()).eprint();
			std::process::exit(1);
		},
	}
}

#[inline]
/// # Actual Main.
fn main__() -> Result<(), RageBuildError> {
	// Parse CLI arguments.
	let args = argyle::args()
		.with_keywords(include!(concat!(env!("OUT_DIR"), "/argyle.rs")));

	let mut config: Option<PathBuf> = None;
	let mut dry_run = false;
	for arg in args {
		match arg {
			Argument::Key("--dry-run") => { dry_run = true; },
			Argument::Key("-h" | "--help") => return Err(RageBuildError::PrintHelp),
			Argument::Key("-V" | "--version") => return Err(RageBuildError::PrintVersion),

			Argument::KeyWithValue("-c" | "--config", s) => {
				config.replace(PathBuf::from(s));
			},

			// Menu answers come from STDIN, not here.
			Argument::Other(s) => return Err(RageBuildError::InvalidCli(s)),
			Argument::InvalidUtf8(s) => return Err(RageBuildError::InvalidCli(
				s.to_string_lossy().into_owned()
			)),

			_ => {},
		}
	}

	// Load the tables. If the user specified a config, go with that and fail
	// if it is no good. Otherwise use the one in the working directory if
	// there is one, or the built-in defaults if not.
	let catalog =
		if let Some(path) = config.or_else(|| Some(Settings::config()).filter(|p| p.is_file())) {
			Settings::try_from(path)?
		}
		else { Settings::default() }
		.into_catalog()?;

	// Ask away!
	let stdin = std::io::stdin();
	let stdout = std::io::stdout();
	let invocation = Prompt::new(stdin.lock(), stdout.lock()).choose(&catalog)?;

	// Show the command, then run it.
	let command = invocation.to_string();
	println!("{command}");
	if dry_run {
		Msg::warning("Dry run; premake was not started.").eprint();
	}
	else { shell::run(&command); }

	Ok(())
}
