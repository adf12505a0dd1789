//! Lenient numeric prefixes for attribute values.
//!
//! Attribute values like `"600px"` or `" 10 "` carry a number followed by
//! arbitrary text. Only the leading number is read; anything without one
//! yields `None`.

/// Byte length of an optional sign followed by ASCII digits.
fn signed_digits_len(raw: &str) -> (usize, usize) {
    let bytes = raw.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = bytes[sign..].iter().take_while(|byte| byte.is_ascii_digit()).count();
    (sign, digits)
}

/// Leading integer, e.g. `"600px"` -> `600`, `"abc"` -> `None`.
///
/// The digits are read as `f64`, so arbitrarily long prefixes still parse.
pub fn leading_integer(raw: &str) -> Option<f64> {
    let raw = raw.trim_start();
    let (sign, digits) = signed_digits_len(raw);
    if digits == 0 {
        return None;
    }
    raw[..sign + digits].parse().ok()
}

/// Leading decimal, e.g. `"10.5px"` -> `10.5`, `".5"` -> `0.5`.
pub fn leading_number(raw: &str) -> Option<f64> {
    let raw = raw.trim_start();
    let (sign, int_digits) = signed_digits_len(raw);
    let mut end = sign + int_digits;
    let mut frac_digits = 0;
    if raw.as_bytes().get(end) == Some(&b'.') {
        frac_digits = raw.as_bytes()[end + 1..]
            .iter()
            .take_while(|byte| byte.is_ascii_digit())
            .count();
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }
    raw[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert_eq!(leading_integer("600"), Some(600.0));
        assert_eq!(leading_integer("  600px"), Some(600.0));
        assert_eq!(leading_integer("-20"), Some(-20.0));
        assert_eq!(leading_integer("+7"), Some(7.0));
        assert_eq!(leading_integer("12.9"), Some(12.0));
        assert_eq!(leading_integer("99999999999999999999"), Some(1e20));
        assert_eq!(leading_integer("px600"), None);
        assert_eq!(leading_integer("-"), None);
        assert_eq!(leading_integer(""), None);
    }

    #[test]
    fn decimals() {
        assert_eq!(leading_number("10"), Some(10.0));
        assert_eq!(leading_number("10.5px"), Some(10.5));
        assert_eq!(leading_number(".5"), Some(0.5));
        assert_eq!(leading_number("-3."), Some(-3.0));
        assert_eq!(leading_number("some-limit"), None);
        assert_eq!(leading_number("."), None);
        assert_eq!(leading_number("inf"), None);
    }
}
