/*!
# Argmap: Errors.

Lookups never fail; the only fallible surface is the strict numeric mode,
[`ArgMap::try_int_arg`](crate::ArgMap::try_int_arg).
*/

use std::fmt;



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Error!
pub enum ArgMapError {
	/// # Invalid Integer.
	InvalidInt {
		/// # The (Normalized) Key.
		key: String,

		/// # The Offending Value.
		value: String,
	},
}

impl std::error::Error for ArgMapError {}

impl fmt::Display for ArgMapError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidInt { key, value } => write!(f, "Invalid integer for {key}: {value:?}"),
		}
	}
}

impl ArgMapError {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::InvalidInt { .. } => "Invalid integer.",
		}
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_display() {
		let err = ArgMapError::InvalidInt {
			key: "-MYC".to_owned(),
			value: "NaN".to_owned(),
		};
		assert_eq!(err.to_string(), r#"Invalid integer for -MYC: "NaN""#);
		assert_eq!(err.as_str(), "Invalid integer.");
	}
}
