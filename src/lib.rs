/*!
# Argmap

This crate provides [`ArgMap`], a small, forgiving CLI option store for
programs that would rather _ask_ about their arguments than declare them
upfront.

The argument vector is parsed once into a map of option keys to values, and
the program then pulls out whatever it cares about with the typed accessors
([`ArgMap::get_bool_arg`], [`ArgMap::get_arg`], and [`ArgMap::get_int_arg`]),
each of which takes a default for when the option is missing.

There is no schema and no validation. Unknown options are kept, garbled
numbers become zero, and conflicting switches are settled by simple rules
rather than errors. Every lookup returns _something_.

For anything more structured, [clap](https://crates.io/crates/clap) is the
usual answer.



## Syntax

| Input | Meaning |
| ----- | ------- |
| `-key` | A bare key (true, or an empty string). |
| `-key=val` | A key with a value. Everything after the first `=` is the value. |
| `--key`, `--key=val` | The same as the single-dash versions. |
| `-nokey` | Negates `-key` for boolean lookups, unless `-key` is present too. |
| `-nokey=0` | Double negative; `-key` is true. |
| Anything else | A positional argument. |

Values cannot be passed as the next argument (`-key val`), and short keys
cannot be bunched together (`-abc`).



## Logging

Parsing and conversion emit [`tracing`](https://crates.io/crates/tracing)
events at the `debug` and `trace` levels. Nothing is printed unless the
program installs a subscriber.



## Example

```
use argmap::ArgMap;

#[derive(Debug, Clone, Default)]
/// # Configuration.
struct Settings {
    threads: i64,
    verbose: bool,
    name: String,
}

// Most of the time you'll want ArgMap::from_env() here.
let args = ArgMap::parse(["--threads=8", "-verbose", "-name=bob"]);

let settings = Settings {
    threads: args.get_int_arg("-threads", 1),
    verbose: args.get_bool_arg("-verbose", false),
    name: args.get_arg("-name", "anonymous").to_owned(),
};

assert_eq!(settings.threads, 8);
assert!(settings.verbose);
assert_eq!(settings.name, "bob");
```
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]



mod convert;
mod error;
mod map;
mod token;

pub use convert::{
	lenient_i64,
	strict_i64,
};
pub use error::ArgMapError;
pub use map::ArgMap;
pub use token::{
	negated_key,
	normalize_key,
	Token,
};
