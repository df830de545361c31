/*!
# Flagtable: Debug

This example parses any arbitrary arguments fed to it and displays the
resolved table, e.g.:

cargo run --example debug -- -a --b=2 -noc /foo/bar
*/

use flagtable::ArgumentTable;
use std::mem::size_of;



fn main() {
	println!("Struct size: {}", size_of::<ArgumentTable>());
	println!();

	let args = ArgumentTable::from_env();
	if args.is_empty() {
		println!("No flags.");
		return;
	}

	println!("\x1b[2mRAW:\x1b[0m");
	println!("{args:?}");

	println!();
	println!("\x1b[2mPRETTY:\x1b[0m");
	for (flag, value) in args.iter() {
		match value {
			Some(v) => println!("{flag} = {v:?} ({})", args.boolean(flag, false)),
			None => println!("{flag} (switch)"),
		}
	}

	println!();
}
