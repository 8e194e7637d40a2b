/*!
# Argmap: Debug

This example parses any arbitrary arguments fed to it and displays the results.

Set `RUST_LOG=trace` to watch the parser work.
*/

use argmap::ArgMap;
use tracing_subscriber::{
	EnvFilter,
	fmt,
};



fn main() {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new("info"));
	fmt()
		.with_env_filter(filter)
		.with_target(false)
		.compact()
		.init();

	let args = ArgMap::from_env();

	println!("\x1b[2mRAW:\x1b[0m");
	println!("{args:?}");

	println!();
	println!("\x1b[2mOPTIONS:\x1b[0m");
	for (key, values) in args.entries() {
		let values = values.collect::<Vec<_>>();
		println!("{key}: {values:?}");
	}

	println!();
	println!("\x1b[2mPOSITIONALS:\x1b[0m");
	for arg in args.positionals() { println!("{arg}"); }

	println!();
}
