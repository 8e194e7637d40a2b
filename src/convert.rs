/*!
# Argmap: Numeric Conversion.
*/



#[must_use]
/// # Lenient Integer.
///
/// Parse a base-10 integer, returning `0` for anything that doesn't parse,
/// including empty strings and partial numbers like `12abc`.
///
/// Note the fallback is `0`, _not_ whatever default the caller had in mind;
/// a key that was present but garbled still counts as present.
pub fn lenient_i64(raw: &str) -> i64 {
	strict_i64(raw).unwrap_or_else(|| {
		tracing::debug!(value = raw, "non-numeric value coerced to zero");
		0
	})
}

#[must_use]
/// # Strict Integer.
///
/// Parse a base-10 integer, returning `None` on failure.
pub fn strict_i64(raw: &str) -> Option<i64> { raw.parse::<i64>().ok() }
