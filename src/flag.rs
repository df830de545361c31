/*!
# Flagtable: Tokens and Values.

Raw arguments are classified one at a time. Anything starting with a dash is
a flag; everything else is ignored by the table.
*/



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Flag Token.
///
/// A single raw argument broken into its name, optional `=value`, and
/// negation status. The name has had its leading dash(es) and any `no`
/// prefix stripped.
pub(crate) struct Token<'a> {
	/// # Name (sans dashes).
	name: &'a str,

	/// # Explicit Value.
	value: Option<&'a str>,

	/// # Negated (`-noX`)?
	negated: bool,
}

impl<'a> Token<'a> {
	/// # Parse.
	///
	/// Classify a raw argument, returning `None` if it isn't a flag.
	///
	/// One or two leading dashes are stripped, so `-X` and `--X` are the same
	/// flag. The value, if any, is everything after the first `=`.
	pub(crate) fn parse(raw: &'a str) -> Option<Self> {
		let rest = raw.strip_prefix('-')?;
		let rest = rest.strip_prefix('-').unwrap_or(rest);

		let (name, value) = match rest.split_once('=') {
			Some((k, v)) => (k, Some(v)),
			None => (rest, None),
		};

		// Nameless things like "-", "--", and "-=foo" aren't flags.
		if name.is_empty() { return None; }

		// A bare "-no" negates nothing, so is just a regular flag.
		match name.strip_prefix("no") {
			Some(n) if ! n.is_empty() => Some(Self { name: n, value, negated: true }),
			_ => Some(Self { name, value, negated: false }),
		}
	}

	#[must_use]
	/// # Canonical Flag.
	///
	/// Return the name with its leading dash restored, e.g. `-name`. Names
	/// that themselves begin with a dash get two, so `---name` stays
	/// `---name` and can be looked up as such.
	pub(crate) fn flag(self) -> String {
		let dashes = if self.name.starts_with('-') { "--" } else { "-" };
		let mut out = String::with_capacity(self.name.len() + dashes.len());
		out.push_str(dashes);
		out.push_str(self.name);
		out
	}

	#[must_use]
	/// # Value.
	pub(crate) fn value(self) -> Value {
		self.value.map_or(Value::Present, |v| Value::Text(v.to_owned()))
	}

	#[must_use]
	/// # Negated?
	pub(crate) const fn negated(self) -> bool { self.negated }
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Flag Value.
pub(crate) enum Value {
	/// # Present Without `=value`.
	Present,

	/// # Explicit Value (possibly empty).
	Text(String),
}

impl From<bool> for Value {
	fn from(src: bool) -> Self {
		Self::Text(if src { "1" } else { "0" }.to_owned())
	}
}

impl Value {
	#[must_use]
	/// # As String Slice.
	///
	/// The sentinel has no text of its own, so comes back as `None`.
	pub(crate) fn as_str(&self) -> Option<&str> {
		match self {
			Self::Present => None,
			Self::Text(s) => Some(s),
		}
	}

	#[must_use]
	/// # Truthy?
	///
	/// Everything is true except an explicit `"0"`.
	pub(crate) fn truthy(&self) -> bool {
		match self {
			Self::Present => true,
			Self::Text(s) => s != "0",
		}
	}
}



#[must_use]
/// # Canonical Lookup Key.
///
/// Lookups accept `--X` as readily as `-X`. Dashes are stripped the same
/// way [`Token::parse`] strips them, then restored the same way
/// [`Token::flag`] restores them, so any stored key maps to itself.
///
/// Strings without a leading dash are returned as-are.
pub(crate) fn canonical(flag: &str) -> &str {
	let Some(rest) = flag.strip_prefix('-') else { return flag; };
	let name = rest.strip_prefix('-').unwrap_or(rest);

	// A dashed name only survives stripping two, so already has its pair.
	if name.starts_with('-') { flag }
	else { &flag[flag.len() - name.len() - 1..] }
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_parse() {
		for (raw, expected) in [
			("-VGA", Some(("-VGA", None, false))),
			("--VGA", Some(("-VGA", None, false))),
			("-VGA=", Some(("-VGA", Some(""), false))),
			("-VGA=11", Some(("-VGA", Some("11"), false))),
			("--VGA=a=b", Some(("-VGA", Some("a=b"), false))),
			("-noVGA", Some(("-VGA", None, true))),
			("--noVGA=0", Some(("-VGA", Some("0"), true))),
			("-no", Some(("-no", None, false))),
			("-no=1", Some(("-no", Some("1"), false))),
			("-NoVGA", Some(("-NoVGA", None, false))),
			("---VGA", Some(("---VGA", None, false))),
			("----VGA=1", Some(("----VGA", Some("1"), false))),
			("--no-VGA", Some(("---VGA", None, true))),
		] {
			let token = Token::parse(raw)
				.map(|t| (t.flag(), t.value, t.negated));
			let expected = expected.map(|(f, v, n)| (f.to_owned(), v, n));
			assert_eq!(token, expected, "Token mismatch for {raw:?}.");
		}
	}

	#[test]
	fn t_parse_not_flags() {
		for raw in ["", "VGA", "/foo/bar", "-", "--", "-=1", "--=", "noVGA"] {
			assert!(Token::parse(raw).is_none(), "Bug: {raw:?} shouldn't be a flag.");
		}
	}

	#[test]
	fn t_value() {
		assert!(Value::Present.truthy(), "Bare switches should be true.");
		for v in ["", "1", "eleven", "00"] {
			assert!(Value::Text(v.to_owned()).truthy(), "Bug: {v:?} should be true.");
		}
		assert!(! Value::Text("0".to_owned()).truthy(), "Bug: \"0\" should be false.");

		assert_eq!(Value::from(true), Value::Text("1".to_owned()), "True should store \"1\".");
		assert_eq!(Value::from(false), Value::Text("0".to_owned()), "False should store \"0\".");

		assert_eq!(Value::Present.as_str(), None, "Bare switches have no text.");
		assert_eq!(Value::Text("x".to_owned()).as_str(), Some("x"), "Text should pass through.");
	}

	#[test]
	fn t_canonical() {
		for (raw, expected) in [
			("-VGA", "-VGA"),
			("--VGA", "-VGA"),
			("---VGA", "---VGA"),
			("----VGA", "----VGA"),
			("-", "-"),
			("VGA", "VGA"),
			("", ""),
		] {
			assert_eq!(canonical(raw), expected, "Canonical mismatch for {raw:?}.");
		}
	}

	#[test]
	fn t_canonical_matches_token() {
		// Whatever key a token is stored under must look itself up.
		for raw in ["-a", "--a", "---a", "----a", "-noa", "--no-a", "---noa", "-no"] {
			let flag = Token::parse(raw).expect("Token should parse.").flag();
			assert_eq!(canonical(&flag), flag, "Stored key {flag:?} (from {raw:?}) should be canonical.");
		}
	}
}
