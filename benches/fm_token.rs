/*!
# Benchmark: `argmap::Token`
*/

use brunch::{
	Bench,
	benches,
};
use argmap::Token;

benches!(
	Bench::new("argmap::Token::from(Hello World)")
		.run(|| Token::from("Hello World")),

	Bench::new("argmap::Token::from(-p)")
		.run(|| Token::from("-p")),

	Bench::new("argmap::Token::from(--prefix)")
		.run(|| Token::from("--prefix")),

	Bench::new("argmap::Token::from(--prefix-color=199)")
		.run(|| Token::from("--prefix-color=199"))
);
