/*!
# Benchmark: `flagtable::ArgumentTable`
*/

use brunch::{
	Bench,
	benches,
};
use flagtable::ArgumentTable;

/// # Sample Arguments.
const ARGV: [&str; 9] = [
	"/usr/bin/app",
	"-datadir=/var/lib/app",
	"--threads=4",
	"-nocolor",
	"-connect=10.0.0.1",
	"-connect=10.0.0.2",
	"-verbose",
	"/foo/bar",
	"-color",
];

fn table() -> ArgumentTable { ArgumentTable::parse(ARGV) }

benches!(
	Bench::new("flagtable::ArgumentTable::parse(9)")
		.run(table),

	Bench::spacer(),

	Bench::new("flagtable::ArgumentTable::boolean(-color)")
		.run_seeded_with(table, |a| a.boolean("-color", false)),

	Bench::new("flagtable::ArgumentTable::integer(--threads)")
		.run_seeded_with(table, |a| a.integer("--threads", 1)),

	Bench::new("flagtable::ArgumentTable::values(-connect)")
		.run_seeded_with(table, |a| a.values("-connect").len()),
);
