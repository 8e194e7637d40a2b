/*!
# Argmap: Argument Map.
*/

use crate::{
	ArgMapError,
	convert::{
		lenient_i64,
		strict_i64,
	},
	token::{
		negated_key,
		normalize_key,
		Token,
	},
};
use std::collections::BTreeMap;



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Argument Map.
///
/// `ArgMap` collects a raw argument vector into a map of normalized option
/// keys to every value supplied for them, then answers typed questions about
/// it, falling back to caller-supplied defaults whenever an option is missing.
///
/// It has a few _opinions_ that are worth noting:
/// * Keys always carry exactly one leading dash; `--key` is stored as `-key`;
/// * Values must be glued on with an `=`; `-key val` is a key and a positional;
/// * Repeated keys keep every value, but lookups only ever see the first one;
/// * A `-no` prefix negates a boolean, unless the plain key is present too, in which case the plain key wins;
/// * Nothing is validated. Unknown keys, garbage values, duplicates: all welcome.
///
/// Anything not starting with a dash is a positional argument. These are
/// kept, in order, and can be had via [`ArgMap::positionals`].
///
/// ## Examples
///
/// ```
/// use argmap::ArgMap;
///
/// let args: ArgMap = ["-verbose", "--threads=4", "-nocolor", "/foo/bar"]
///     .into_iter()
///     .collect();
///
/// assert!(args.get_bool_arg("-verbose", false));
/// assert!(! args.get_bool_arg("-color", true));
/// assert_eq!(args.get_int_arg("-threads", 1), 4);
/// assert_eq!(args.get_arg("-output", "out.txt"), "out.txt");
/// assert_eq!(args.positionals(), &["/foo/bar".to_owned()]);
/// ```
pub struct ArgMap {
	/// # Options.
	///
	/// Each slot is `None` for a bare key and `Some` for `-key=value`, so
	/// `-key` and `-key=` remain distinguishable here even though the
	/// accessors report both as `""`.
	opts: BTreeMap<String, Vec<Option<String>>>,

	/// # Positional Arguments.
	args: Vec<String>,
}

impl<S: AsRef<str>> FromIterator<S> for ArgMap {
	fn from_iter<I: IntoIterator<Item=S>>(src: I) -> Self { Self::parse(src) }
}

/// ## Instantiation.
impl ArgMap {
	#[must_use]
	/// # From Env.
	///
	/// Parse the arguments the current process was called with, skipping the
	/// first (command path) entry.
	///
	/// Invalid UTF-8 is replaced with `U+FFFD` rather than rejected.
	///
	/// ## Examples
	///
	/// ```no_run
	/// let args = argmap::ArgMap::from_env();
	/// let verbose = args.get_bool_arg("-verbose", false);
	/// ```
	pub fn from_env() -> Self {
		Self::parse(
			std::env::args_os()
				.skip(1)
				.map(|a| a.to_string_lossy().into_owned())
		)
	}

	#[must_use]
	/// # Parse.
	///
	/// Build a map from an arbitrary argument list. The command path, if
	/// any, should _not_ be included.
	///
	/// ## Examples
	///
	/// ```
	/// let args = argmap::ArgMap::parse(["-MYC=11", "-bar=12"]);
	/// assert_eq!(args.get_int_arg("-bar", 0), 12);
	/// ```
	pub fn parse<I, S>(src: I) -> Self
	where I: IntoIterator<Item=S>, S: AsRef<str> {
		let mut out = Self::default();
		for raw in src { out.push(raw.as_ref()); }

		tracing::debug!(
			options = out.opts.len(),
			positionals = out.args.len(),
			"parsed argument vector"
		);

		out
	}

	/// # Reset.
	///
	/// Throw out everything and re-parse from scratch, as if the program had
	/// been called with a different set of arguments. Nothing is merged.
	///
	/// ## Examples
	///
	/// ```
	/// let mut args = argmap::ArgMap::parse(["-MYC"]);
	/// args.reset(["-noMYC"]);
	/// assert!(! args.get_bool_arg("-MYC", true));
	/// ```
	pub fn reset<I, S>(&mut self, src: I)
	where I: IntoIterator<Item=S>, S: AsRef<str> {
		*self = Self::parse(src);
	}

	/// # Push.
	///
	/// Classify and record a single raw argument.
	fn push(&mut self, raw: &str) {
		let token = Token::from(raw);
		match token.key() {
			Some(key) => {
				let value = token.value();
				tracing::trace!(key, value = ?value, "recorded option");
				self.opts.entry(key.to_owned())
					.or_default()
					.push(value.map(str::to_owned));
			},
			None => { self.args.push(raw.to_owned()); },
		}
	}
}

/// ## Setters.
///
/// These are meant for the host program to fill in implied settings _before_
/// any lookups happen.
impl ArgMap {
	/// # Soft Set.
	///
	/// Record `value` for `key` unless the key was already given, in either
	/// its plain or `-no` form.
	///
	/// Returns `true` if the value was recorded.
	///
	/// ## Examples
	///
	/// ```
	/// let mut args = argmap::ArgMap::parse(["-nolisten"]);
	/// assert!(! args.soft_set_arg("-listen", "1"));
	/// assert!(args.soft_set_arg("-port", "8333"));
	/// assert_eq!(args.get_int_arg("-port", 0), 8333);
	/// ```
	pub fn soft_set_arg(&mut self, key: &str, value: &str) -> bool {
		let key = normalize_key(key);
		if self.is_set(&key) { return false; }

		tracing::trace!(key = %key, value, "soft-set option");
		self.opts.insert(key.into_owned(), vec![Some(value.to_owned())]);
		true
	}

	/// # Soft Set (Bool).
	///
	/// Same as [`ArgMap::soft_set_arg`], recording `"1"` or `"0"`.
	pub fn soft_set_bool_arg(&mut self, key: &str, value: bool) -> bool {
		self.soft_set_arg(key, if value { "1" } else { "0" })
	}

	/// # Force Set.
	///
	/// Replace any and all values for `key` with `value`. The `-no` form, if
	/// present, is left alone, but the plain key takes precedence anyway.
	pub fn force_set_arg(&mut self, key: &str, value: &str) {
		let key = normalize_key(key).into_owned();
		tracing::trace!(key = %key, value, "force-set option");
		self.opts.insert(key, vec![Some(value.to_owned())]);
	}
}

/// ## Queries.
///
/// Keys passed to these methods are normalized the same way the arguments
/// were, so `-key`, `--key`, and `key` are all equivalent. Lookups never
/// fail; absent keys resolve to the default.
impl ArgMap {
	#[must_use]
	/// # Boolean.
	///
	/// If the key is present, the result is `true` unless its first value
	/// is exactly `"0"`.
	///
	/// Otherwise, if the `-no` form is present, the result is `false` unless
	/// _its_ first value is exactly `"0"`.
	///
	/// Otherwise it's `default`.
	///
	/// ## Examples
	///
	/// ```
	/// use argmap::ArgMap;
	///
	/// let args = ArgMap::parse(["-MYC=0", "-nofoo", "-nobar=0"]);
	/// assert!(! args.get_bool_arg("-MYC", true));
	/// assert!(! args.get_bool_arg("-foo", true));
	/// assert!(args.get_bool_arg("-bar", false));
	/// assert!(args.get_bool_arg("-baz", true));
	/// ```
	pub fn get_bool_arg(&self, key: &str, default: bool) -> bool {
		let key = normalize_key(key);
		self.first(&key).map_or_else(
			|| self.first(&negated_key(&key)).map_or(default, is_zero),
			|v| ! is_zero(v),
		)
	}

	#[must_use]
	/// # String.
	///
	/// Return the first value for the key, or `default` if it isn't there.
	/// Bare keys yield an empty string. The `-no` form is ignored.
	///
	/// ## Examples
	///
	/// ```
	/// let args = argmap::ArgMap::parse(["--MYC=verbose", "-bar"]);
	/// assert_eq!(args.get_arg("-MYC", ""), "verbose");
	/// assert_eq!(args.get_arg("-bar", "eleven"), "");
	/// assert_eq!(args.get_arg("-baz", "eleven"), "eleven");
	/// ```
	pub fn get_arg<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
		self.first(&normalize_key(key)).map_or(default, |v| v.unwrap_or(""))
	}

	#[must_use]
	/// # Integer.
	///
	/// Parse the first value for the key as a base-10 integer, or return
	/// `default` if the key isn't there.
	///
	/// **Note:** a key that _is_ there but doesn't hold a number yields `0`,
	/// not `default`. Use [`ArgMap::try_int_arg`] to catch that instead.
	///
	/// ## Examples
	///
	/// ```
	/// let args = argmap::ArgMap::parse(["-MYC=NaN", "-bar=12"]);
	/// assert_eq!(args.get_int_arg("-MYC", 1), 0);
	/// assert_eq!(args.get_int_arg("-bar", 1), 12);
	/// assert_eq!(args.get_int_arg("-baz", 1), 1);
	/// ```
	pub fn get_int_arg(&self, key: &str, default: i64) -> i64 {
		self.first(&normalize_key(key))
			.map_or(default, |v| lenient_i64(v.unwrap_or("")))
	}

	/// # Integer (Strict).
	///
	/// Like [`ArgMap::get_int_arg`], but values that don't parse are an error
	/// instead of zero.
	///
	/// ## Errors
	///
	/// Returns [`ArgMapError::InvalidInt`] if the key is present but its
	/// first value is not a base-10 integer.
	pub fn try_int_arg(&self, key: &str, default: i64) -> Result<i64, ArgMapError> {
		let key = normalize_key(key);
		match self.first(&key) {
			Some(v) => {
				let v = v.unwrap_or("");
				strict_i64(v).ok_or_else(|| ArgMapError::InvalidInt {
					key: key.into_owned(),
					value: v.to_owned(),
				})
			},
			None => Ok(default),
		}
	}

	/// # All Values.
	///
	/// Return every value given for the key, in the order they appeared.
	/// Bare keys contribute an empty string. The `-no` form is ignored.
	///
	/// ## Examples
	///
	/// ```
	/// let args = argmap::ArgMap::parse(["-connect=a", "-connect=b"]);
	/// let all: Vec<&str> = args.get_args("-connect").collect();
	/// assert_eq!(all, ["a", "b"]);
	/// ```
	pub fn get_args(&self, key: &str) -> impl Iterator<Item=&str> + '_ {
		self.opts.get(&*normalize_key(key))
			.into_iter()
			.flatten()
			.map(|v| v.as_deref().unwrap_or(""))
	}

	#[must_use]
	/// # Is Set?
	///
	/// Returns `true` if the key was given in either its plain or `-no`
	/// form.
	pub fn is_set(&self, key: &str) -> bool {
		let key = normalize_key(key);
		self.opts.contains_key(&*key) ||
		self.opts.contains_key(&negated_key(&key))
	}

	/// # Keys.
	///
	/// Iterate over the distinct stored keys, sorted. See
	/// [`ArgMap::entries`] for why these should not be fed back into the
	/// lookup methods.
	pub fn keys(&self) -> impl Iterator<Item=&str> + '_ {
		self.opts.keys().map(String::as_str)
	}

	/// # Entries.
	///
	/// Iterate over the stored keys, sorted, along with all of their values
	/// in the order they appeared.
	///
	/// Unlike the lookup methods, keys here are exactly as stored. A raw
	/// `---key` only loses one dash, so it lives under `--key`, which a
	/// lookup would fold into `-key`. Use this to walk everything that was
	/// actually recorded.
	///
	/// ## Examples
	///
	/// ```
	/// let args = argmap::ArgMap::parse(["-a=1", "-b", "-a=2"]);
	/// for (key, values) in args.entries() {
	///     println!("{key}: {:?}", values.collect::<Vec<_>>());
	/// }
	/// ```
	pub fn entries(&self) -> impl Iterator<Item=(&str, impl Iterator<Item=&str> + '_)> + '_ {
		self.opts.iter().map(|(k, v)| (
			k.as_str(),
			v.iter().map(|v| v.as_deref().unwrap_or("")),
		))
	}

	#[must_use]
	#[inline]
	/// # Positional Arguments.
	pub fn positionals(&self) -> &[String] { &self.args }

	#[must_use]
	#[inline]
	/// # Number of Keys.
	///
	/// Repeated keys count once. Positionals don't count.
	pub fn len(&self) -> usize { self.opts.len() }

	#[must_use]
	#[inline]
	/// # No Keys?
	pub fn is_empty(&self) -> bool { self.opts.is_empty() }

	/// # First Value.
	///
	/// The outer option is the key's presence; the inner is whether its
	/// first occurrence had a value.
	fn first(&self, key: &str) -> Option<Option<&str>> {
		self.opts.get(key)
			.and_then(|v| v.first())
			.map(Option::as_deref)
	}
}



/// # Is Zero?
///
/// Only a literal `"0"` counts; bare keys and everything else are truthy.
fn is_zero(v: Option<&str>) -> bool { v == Some("0") }
