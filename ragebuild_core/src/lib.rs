/*!
# `RageBuild`: The Hard Bits

This crate holds the pure half of the `RageBuild` solution builder: the build
and project-format tables, menu answer validation, and assembly of the final
premake command line.

Nothing in here touches the console or spawns anything; see the `ragebuild`
binary for that.



## Examples

```
use ragebuild_core::{
	Catalog,
	FLAG_AVX2,
};

let catalog = Catalog::default();
let build = catalog.select_build("0").unwrap();
let format = catalog.select_format("0").unwrap();

assert_eq!(
	catalog.invocation(build, format, FLAG_AVX2).unwrap().to_string(),
	r"tools\premake5.exe --file=main.lua vs2022 --exe=gta5.exe --gamebuild=2699_16 --avx2",
);
```
*/

#![deny(unsafe_code)]

#![warn(
	clippy::filetype_is_file,
	clippy::integer_division,
	clippy::needless_borrow,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::suboptimal_flops,
	clippy::unneeded_field_pattern,
	macro_use_extern_crate,
	missing_copy_implementations,
	missing_debug_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unreachable_pub,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]

#![allow(clippy::module_name_repetitions)]



mod catalog;
mod error;
mod invocation;
mod select;

pub use catalog::{
	BuildVariant,
	Catalog,
};
pub use error::RageBuildError;
pub use invocation::Invocation;
pub use select::{
	is_yes,
	parse_index,
};



/// # Flag: AVX2.
///
/// Build with AVX2 instructions enabled (`--avx2`).
pub const FLAG_AVX2: u8 =     0b0000_0001;

/// # Flag: Profiler.
///
/// Build with `easy_profiler` instrumentation (`--easyprofiler`).
pub const FLAG_PROFILER: u8 = 0b0000_0010;

/// # Flag: Defaults.
///
/// The flags used when advanced configuration is skipped: AVX2 on, profiler
/// off.
pub const FLAG_DEFAULT: u8 =  FLAG_AVX2;

/// # Default Tool Path.
pub const DEFAULT_TOOL: &str = r"tools\premake5.exe";

/// # Default Premake Script.
pub const DEFAULT_FILE: &str = "main.lua";
