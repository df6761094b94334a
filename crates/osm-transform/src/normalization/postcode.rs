//! Postcode extraction.

use std::sync::LazyLock;

use regex::Regex;

/// Optional non-digit lead-in followed by five digits.
static POSTCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^0-9]*([0-9]{5})").expect("Invalid postcode regex"));

/// Extracts a five-digit postcode, discarding any prefix or suffix.
///
/// `NY 10001` and `10001-2345` both give `10001`. Returns `None` when the
/// first digits of the value are not a five-digit run.
pub fn extract_postcode(value: &str) -> Option<String> {
    POSTCODE_REGEX
        .captures(value)
        .and_then(|caps| caps.get(1))
        .map(|digits| digits.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_prefix_and_suffix() {
        assert_eq!(extract_postcode("US-10001").as_deref(), Some("10001"));
        assert_eq!(extract_postcode("NY 10001").as_deref(), Some("10001"));
        assert_eq!(extract_postcode("10001-2345").as_deref(), Some("10001"));
        assert_eq!(extract_postcode("11201").as_deref(), Some("11201"));
    }

    #[test]
    fn no_value_without_five_digit_run() {
        assert_eq!(extract_postcode("NY"), None);
        assert_eq!(extract_postcode("1234"), None);
        assert_eq!(extract_postcode("1234 10001"), None);
        assert_eq!(extract_postcode(""), None);
    }
}
