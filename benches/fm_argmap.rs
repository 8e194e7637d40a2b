/*!
# Benchmark: `argmap::ArgMap`
*/

use brunch::{
	Bench,
	benches,
};
use argmap::ArgMap;

/// # Sample Arguments.
fn argument() -> ArgMap {
	ArgMap::parse([
		"-k",
		"--key=val",
		"-threads=8",
		"-noquiet",
		"-x=1",
		"-x=2",
		"/foo/bar",
		"/bar/baz",
	])
}

benches!(
	Bench::new("argmap::ArgMap::parse(8)")
		.run(argument),

	Bench::spacer(),

	Bench::new("argmap::ArgMap::get_bool_arg(-quiet)")
		.run_seeded_with(argument, |a| a.get_bool_arg("-quiet", true)),

	Bench::new("argmap::ArgMap::get_arg(--key)")
		.run_seeded_with(argument, |a| a.get_arg("--key", "").len()),

	Bench::new("argmap::ArgMap::get_int_arg(-threads)")
		.run_seeded_with(argument, |a| a.get_int_arg("-threads", 1)),
);
