/*!
# `RageBuild`: Shell
*/

use std::process::Command;



/// # Run.
///
/// Hand the command line to the system shell and wait for it to finish.
///
/// What happens after that is premake's business; its output goes straight
/// to the shared console and its exit status (or failure to start at all) is
/// ignored.
pub(super) fn run(command: &str) {
	let _res = shell_command(command).status();
}

#[cfg(windows)]
/// # Shell Command.
///
/// The line is passed to `cmd /C` verbatim, without any additional quoting.
fn shell_command(command: &str) -> Command {
	use std::os::windows::process::CommandExt;

	let mut cmd = Command::new("cmd");
	cmd.arg("/C").raw_arg(command);
	cmd
}

#[cfg(not(windows))]
/// # Shell Command.
fn shell_command(command: &str) -> Command {
	let mut cmd = Command::new("sh");
	cmd.arg("-c").arg(command);
	cmd
}



#[cfg(all(test, not(windows)))]
mod tests {
	use super::*;
	use std::ffi::OsStr;

	#[test]
	fn t_shell_command() {
		let line = r"tools\premake5.exe --file=main.lua vs2022 --exe=gta5.exe --gamebuild=2699_16 --avx2";
		let cmd = shell_command(line);
		assert_eq!(cmd.get_program(), "sh");
		assert_eq!(
			cmd.get_args().collect::<Vec<&OsStr>>(),
			[OsStr::new("-c"), OsStr::new(line)],
		);
	}

	#[test]
	fn t_run() {
		// Neither of these should panic or return anything.
		run("exit 3");
		run("./definitely-not-premake --avx2");
	}
}
