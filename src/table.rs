/*!
# Flagtable: Argument Table.
*/

use crate::{
	flag::{
		canonical,
		Token,
		Value,
	},
	FlagError,
};
use std::collections::HashMap;
use tracing::{
	debug,
	trace,
};



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Table Entry.
struct Entry {
	/// # Canonical Flag (`-name`).
	flag: Box<str>,

	/// # Resolved Value.
	value: Value,

	/// # Direct Occurrences, In Order.
	direct: Vec<Value>,
}



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Argument Table.
///
/// `ArgumentTable` turns an argument vector into a flat lookup of flags and
/// their values. It has no notion of which flags are "valid"; it merely
/// records whatever dash-prefixed arguments it comes across so they can be
/// queried later with [`ArgumentTable::boolean`], [`ArgumentTable::string`],
/// and [`ArgumentTable::integer`].
///
/// Parsing never fails. Non-flag arguments are dropped, unknown flags fall
/// back to the caller's default, and nonsense numbers come back as zero.
///
/// ## Rules
///
/// * `-X` and `--X` are the same flag;
/// * `-X=val` assigns a value; `-X` alone is a bare switch;
/// * `-noX` means `-X=0`, and `-noX=0` means `-X=1`;
/// * If a flag is repeated, the last value wins;
/// * A direct `-X` always beats any `-noX`, regardless of order;
///
/// Lookups take `&self`, so once built, a table can be shared freely
/// (by reference, or wrapped in an `Arc`) across threads.
///
/// ## Examples
///
/// ```
/// use flagtable::ArgumentTable;
///
/// let args = ArgumentTable::parse([
///     "/usr/bin/app", "-verbose", "--threads=4", "-nocolor", "file.txt",
/// ]);
///
/// assert!(args.boolean("-verbose", false));
/// assert!(! args.boolean("-color", true));
/// assert_eq!(args.integer("-threads", 1), 4);
/// assert_eq!(args.string("-output", "out.txt"), "out.txt");
/// ```
pub struct ArgumentTable {
	/// # Entries, In Order of First Appearance.
	entries: Vec<Entry>,

	/// # Canonical Flag to Entry Index.
	index: HashMap<Box<str>, usize>,
}

impl ArgumentTable {
	#[must_use]
	/// # Parse.
	///
	/// Build a table from a full argument vector. The first entry is taken
	/// to be the program path and is skipped.
	pub fn parse<I, S>(argv: I) -> Self
	where I: IntoIterator<Item=S>, S: AsRef<str> {
		Self::from_args(argv.into_iter().skip(1))
	}

	#[must_use]
	/// # From Environment.
	///
	/// Build a table from [`std::env::args_os`]. Arguments that are not
	/// valid UTF-8 can't be keyed or compared, so are skipped.
	///
	/// ## Examples
	///
	/// ```no_run
	/// use flagtable::ArgumentTable;
	///
	/// let args = ArgumentTable::from_env();
	/// let debug = args.boolean("-debug", false);
	/// ```
	pub fn from_env() -> Self {
		Self::from_args(
			std::env::args_os().skip(1).filter_map(|arg| match arg.into_string() {
				Ok(arg) => Some(arg),
				Err(arg) => {
					debug!(?arg, "Skipping non-UTF-8 argument.");
					None
				},
			})
		)
	}

	/// # From Arguments.
	///
	/// This does the actual work; `args` should not include the program
	/// path.
	fn from_args<I, S>(args: I) -> Self
	where I: Iterator<Item=S>, S: AsRef<str> {
		let mut out = Self::default();
		for arg in args {
			let arg = arg.as_ref();
			match Token::parse(arg) {
				Some(token) => out.insert(token),
				None => { trace!(arg, "Ignoring non-flag argument."); },
			}
		}

		debug!(flags = out.len(), "Parsed command-line flags.");
		out
	}

	/// # Insert Token.
	fn insert(&mut self, token: Token<'_>) {
		let flag = token.flag();
		let value = token.value();

		let idx = match self.position(&flag) {
			Some(idx) => idx,
			None => self.push(flag.into_boxed_str(), Value::Present),
		};
		let entry = &mut self.entries[idx];

		// Negations only count until a direct occurrence shows up.
		if token.negated() {
			if entry.direct.is_empty() {
				entry.value = Value::from(! value.truthy());
			}
		}
		else {
			entry.value = value.clone();
			entry.direct.push(value);
		}
	}

	/// # Entry Position.
	///
	/// The flag must already be in canonical form.
	fn position(&self, flag: &str) -> Option<usize> {
		self.index.get(flag).copied()
	}

	/// # Push Entry.
	///
	/// Add a new flag (which must not already exist), returning its index.
	fn push(&mut self, flag: Box<str>, value: Value) -> usize {
		let idx = self.entries.len();
		self.index.insert(flag.clone(), idx);
		self.entries.push(Entry { flag, value, direct: Vec::new() });
		idx
	}

	/// # Entry.
	fn get(&self, flag: &str) -> Option<&Entry> {
		self.position(canonical(flag)).map(|idx| &self.entries[idx])
	}
}

impl ArgumentTable {
	#[must_use]
	/// # Length.
	///
	/// The number of distinct flags in the table.
	pub fn len(&self) -> usize { self.entries.len() }

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.entries.is_empty() }

	#[must_use]
	/// # Contains Flag?
	///
	/// Returns `true` if the flag or its negation was passed.
	pub fn contains(&self, flag: &str) -> bool { self.get(flag).is_some() }

	/// # Iterate.
	///
	/// Return each flag and its resolved value in the order they first
	/// appeared. Bare switches have a value of `None`.
	pub fn iter(&self) -> impl Iterator<Item=(&str, Option<&str>)> {
		self.entries.iter().map(|e| (&*e.flag, e.value.as_str()))
	}
}

impl ArgumentTable {
	#[must_use]
	/// # Boolean.
	///
	/// Returns `false` if the flag's value is `"0"`, `true` if it has any
	/// other value (or none at all), or `default` if the flag is absent.
	///
	/// ## Examples
	///
	/// ```
	/// use flagtable::ArgumentTable;
	///
	/// let args = ArgumentTable::parse(["app", "-a", "-b=0", "-noc"]);
	/// assert!(args.boolean("-a", false));
	/// assert!(! args.boolean("-b", true));
	/// assert!(! args.boolean("-c", true));
	/// assert!(args.boolean("-d", true));
	/// ```
	pub fn boolean(&self, flag: &str, default: bool) -> bool {
		self.get(flag).map_or(default, |e| e.value.truthy())
	}

	#[must_use]
	/// # String.
	///
	/// Returns the flag's value, or `default` if the flag is absent. A bare
	/// switch has an empty value.
	///
	/// ## Examples
	///
	/// ```
	/// use flagtable::ArgumentTable;
	///
	/// let args = ArgumentTable::parse(["app", "-a", "-b=eleven"]);
	/// assert_eq!(args.string("-a", "x"), "");
	/// assert_eq!(args.string("-b", "x"), "eleven");
	/// assert_eq!(args.string("-c", "x"), "x");
	/// ```
	pub fn string<'a>(&'a self, flag: &str, default: &'a str) -> &'a str {
		self.get(flag).map_or(default, |e| e.value.as_str().unwrap_or(""))
	}

	#[must_use]
	/// # Integer.
	///
	/// Returns the flag's value as a base-10 integer, or `default` if the flag
	/// is absent. A flag that is present but not a number, bare switches
	/// included, comes back as `0`, not `default`.
	///
	/// ## Examples
	///
	/// ```
	/// use flagtable::ArgumentTable;
	///
	/// let args = ArgumentTable::parse(["app", "-a=11", "-b=NaN", "-c"]);
	/// assert_eq!(args.integer("-a", 5), 11);
	/// assert_eq!(args.integer("-b", 5), 0);
	/// assert_eq!(args.integer("-c", 5), 0);
	/// assert_eq!(args.integer("-d", 5), 5);
	/// ```
	pub fn integer(&self, flag: &str, default: i64) -> i64 {
		self.get(flag).map_or(default, |e| {
			e.value.as_str().and_then(|v| v.parse().ok()).unwrap_or(0)
		})
	}

	#[must_use]
	/// # All Values.
	///
	/// Return the value of every direct occurrence of the flag, in order.
	/// This is mainly useful for options that may be repeated, like
	/// `-connect=a -connect=b`. Bare switches contribute empty strings;
	/// negations contribute nothing.
	pub fn values(&self, flag: &str) -> Vec<&str> {
		self.get(flag).map_or_else(Vec::new, |e|
			e.direct.iter().map(|v| v.as_str().unwrap_or("")).collect()
		)
	}
}

impl ArgumentTable {
	/// # Require.
	///
	/// Like [`ArgumentTable::string`], but with an error instead of a
	/// default.
	///
	/// ## Errors
	///
	/// Returns [`FlagError::Missing`] if the flag is absent.
	pub fn require(&self, flag: &str) -> Result<&str, FlagError> {
		self.get(flag)
			.map(|e| e.value.as_str().unwrap_or(""))
			.ok_or_else(|| FlagError::Missing(canonical(flag).to_owned()))
	}

	/// # Try Integer.
	///
	/// Like [`ArgumentTable::integer`], but without the leniency.
	///
	/// ## Errors
	///
	/// Returns [`FlagError::Missing`] if the flag is absent, or
	/// [`FlagError::InvalidInteger`] if its value isn't a base-10 integer.
	pub fn try_integer(&self, flag: &str) -> Result<i64, FlagError> {
		let value = self.require(flag)?;
		value.parse().map_err(|_| FlagError::InvalidInteger {
			flag: canonical(flag).to_owned(),
			value: value.to_owned(),
		})
	}
}

impl ArgumentTable {
	/// # Soft Set.
	///
	/// Give a flag a value, but only if it isn't already present. Returns
	/// `true` if the table changed.
	///
	/// This is meant for setup, like filling in values implied by other
	/// flags, before the table is handed out for reading.
	///
	/// ## Examples
	///
	/// ```
	/// use flagtable::ArgumentTable;
	///
	/// let mut args = ArgumentTable::parse(["app", "-proxy=127.0.0.1"]);
	/// assert!(! args.soft_set("-proxy", "10.0.0.1"));
	/// assert!(args.soft_set("-listen", "0"));
	/// assert_eq!(args.string("-listen", ""), "0");
	/// ```
	pub fn soft_set(&mut self, flag: &str, value: &str) -> bool {
		self.soft_set_value(flag, Value::Text(value.to_owned()))
	}

	/// # Soft Set Boolean.
	///
	/// Same as [`ArgumentTable::soft_set`], but stores `"1"` or `"0"`.
	pub fn soft_set_bool(&mut self, flag: &str, value: bool) -> bool {
		self.soft_set_value(flag, Value::from(value))
	}

	/// # Soft Set (Value).
	fn soft_set_value(&mut self, flag: &str, value: Value) -> bool {
		let flag = canonical(flag);
		if self.position(flag).is_some() { return false; }

		self.push(Box::from(flag), value);
		true
	}
}
