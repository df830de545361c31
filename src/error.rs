/*!
# Flagtable: Errors.

The lenient lookups never fail; these only come out of the strict ones.
*/

use std::fmt;



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Error!
pub enum FlagError {
	/// # Missing Flag.
	Missing(String),

	/// # Not an Integer.
	InvalidInteger {
		/// # Flag.
		flag: String,

		/// # Offending Value.
		value: String,
	},
}

impl std::error::Error for FlagError {}

impl fmt::Display for FlagError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Missing(s) => write!(f, "Missing flag: {s}"),
			Self::InvalidInteger { flag, value } =>
				write!(f, "Invalid integer for {flag}: {value:?}"),
		}
	}
}

impl FlagError {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::Missing(_) => "Missing flag.",
			Self::InvalidInteger { .. } => "Invalid integer.",
		}
	}
}
