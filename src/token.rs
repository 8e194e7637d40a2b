/*!
# Argmap: Tokens

Raw arguments are sorted into one of three buckets before they ever reach
the map: positionals, bare keys, and keys with an `=`-attached value.

The rules are deliberately dumb:
* Anything not starting with `-` is a positional.
* A leading `--` is folded down to `-`, so `--key` and `-key` are the same thing.
* Everything up to the first `=` is the key; everything after it is the value, verbatim.
*/

use std::borrow::Cow;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Token.
///
/// A single classified entry from the argument vector. Keys are always
/// normalized to carry exactly one leading dash.
pub enum Token<'a> {
	/// # Positional Argument.
	Positional(&'a str),

	/// # Key Without a Value.
	///
	/// A bare flag like `-verbose` or `--verbose`.
	Key(&'a str),

	/// # Key With a Value.
	///
	/// Something like `-key=val`. The value may be empty (`-key=`).
	KeyValue(&'a str, &'a str),
}

impl<'a> From<&'a str> for Token<'a> {
	fn from(raw: &'a str) -> Self {
		if ! raw.starts_with('-') { return Self::Positional(raw); }

		let raw = fold_dashes(raw);
		match raw.split_once('=') {
			Some((k, v)) => Self::KeyValue(k, v),
			None => Self::Key(raw),
		}
	}
}

impl<'a> Token<'a> {
	#[must_use]
	/// # Key.
	///
	/// Return the (normalized) key, or `None` for positionals.
	pub const fn key(&self) -> Option<&'a str> {
		match self {
			Self::Positional(_) => None,
			Self::Key(k) | Self::KeyValue(k, _) => Some(*k),
		}
	}

	#[must_use]
	/// # Value.
	///
	/// Return the attached value, if any. Bare keys and positionals have
	/// none.
	pub const fn value(&self) -> Option<&'a str> {
		if let Self::KeyValue(_, v) = self { Some(*v) }
		else { None }
	}
}



/// # Fold Double Dash.
///
/// Strip one leading dash if there are (at least) two of them.
fn fold_dashes(raw: &str) -> &str {
	if raw.starts_with("--") { &raw[1..] }
	else { raw }
}

#[must_use]
/// # Normalize Key.
///
/// Run a caller-supplied key through the same rules the tokenizer applies,
/// so lookups for `--key`, `-key`, and even plain `key` all land in the
/// same place.
pub fn normalize_key(key: &str) -> Cow<'_, str> {
	if key.starts_with('-') { Cow::Borrowed(fold_dashes(key)) }
	else {
		let mut out = String::with_capacity(key.len() + 1);
		out.push('-');
		out.push_str(key);
		Cow::Owned(out)
	}
}

#[must_use]
/// # Negated Key.
///
/// Turn `-key` into `-nokey`. The input is expected to be normalized.
pub fn negated_key(key: &str) -> String {
	let name = key.strip_prefix('-').unwrap_or(key);
	let mut out = String::with_capacity(name.len() + 3);
	out.push_str("-no");
	out.push_str(name);
	out
}
