/*!
# Flagtable

This crate provides [`ArgumentTable`], a tiny, forgiving parser for
`-flag` and `-flag=value` style arguments with typed lookups and default
fallbacks.

It does not know or care which flags your app supports (there are no
subcommands, schemas, or help screens); it simply collects anything that
starts with a dash so you can ask about it later. Asking never fails:
absent flags return your default, and values that can't be read as the
requested type degrade to zero or empty.

A few normalizations are applied along the way:
* `-flag` and `--flag` are equivalent;
* `-noflag` is shorthand for `-flag=0` (and `-noflag=0` for `-flag=1`);
* Repeated flags are resolved last-wins, except a direct `-flag` always
  beats its `-noflag` counterpart;
* Arguments without a leading dash are ignored;



## Example

```
use flagtable::ArgumentTable;

#[derive(Debug, Clone, Default)]
/// # Configuration.
struct Settings {
    threads: i64,
    verbose: bool,
    color: bool,
    output: String,
}

// Usually you'd use ArgumentTable::from_env() instead.
let args = ArgumentTable::parse([
    "/usr/bin/app",
    "--threads=8",
    "-verbose",
    "-nocolor",
]);

let settings = Settings {
    threads: args.integer("-threads", 1),
    verbose: args.boolean("-verbose", false),
    color: args.boolean("-color", true),
    output: args.string("-output", "out.txt").to_owned(),
};

assert_eq!(settings.threads, 8);
assert!(settings.verbose);
assert!(! settings.color);
assert_eq!(settings.output, "out.txt");
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
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
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
	clippy::undocumented_unsafe_blocks,
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

#![cfg_attr(docsrs, feature(doc_cfg))]



mod error;
mod flag;
mod table;

pub use error::FlagError;
pub use table::ArgumentTable;
