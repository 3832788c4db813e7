/*!
# `RageBuild`: Answer Parsing
*/



#[must_use]
/// # Parse Menu Index.
///
/// Parse a line of user input as a base-10 integer and return it if it is a
/// valid position in a menu of `len` entries.
///
/// Surrounding whitespace is ignored. Empty input, words, negative numbers,
/// and numbers past the end all return `None`.
pub fn parse_index(raw: &str, len: usize) -> Option<usize> {
	let idx = raw.trim().parse::<i64>().ok()?;
	usize::try_from(idx).ok().filter(|&i| i < len)
}

#[must_use]
/// # Is Yes?
///
/// Only a lone `y` (either case) counts. The line ending is ignored, but
/// nothing else is: `yes`, `n`, and empty answers are all "no".
pub fn is_yes(raw: &str) -> bool {
	raw.trim_end_matches(['\r', '\n']).eq_ignore_ascii_case("y")
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_parse_index() {
		for (raw, len, expected) in [
			("0", 2, Some(0)),
			("1", 2, Some(1)),
			("1\n", 2, Some(1)),
			("  1 \r\n", 2, Some(1)),
			("+1", 2, Some(1)),
			("2", 2, None),
			("-1", 2, None),
			("-0", 2, Some(0)),
			("3", 4, Some(3)),
			("4", 4, None),
			("0", 0, None),
			("", 2, None),
			("one", 2, None),
			("1.0", 2, None),
			("0x1", 2, None),
			("99999999999999999999999", 2, None),
		] {
			assert_eq!(parse_index(raw, len), expected, "{raw:?} in {len}");
		}
	}

	#[test]
	fn t_is_yes() {
		for raw in ["y", "Y", "y\n", "Y\r\n"] {
			assert!(is_yes(raw), "{raw:?} should be yes.");
		}

		for raw in ["n", "N", "yes", "Yes", "", "\n", " y", "y ", "yy"] {
			assert!(! is_yes(raw), "{raw:?} should be no.");
		}
	}
}
