use std::sync::LazyLock;

use regex::Regex;

/// The application-id format: alphanumeric, at least two characters.
pub const APPLICATION_ID_PATTERN: &str = "[a-zA-Z0-9]{2,}";

static APPLICATION_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^(?:{APPLICATION_ID_PATTERN})$")).expect("valid application id pattern")
});

/// The unanchored pattern, for embedding in parameter validation rules.
#[must_use]
pub fn application_id_pattern() -> &'static str {
    APPLICATION_ID_PATTERN
}

/// Check a manually entered application identifier.
///
/// The whole value must be alphanumeric with length ≥ 2. Runs at form
/// time, before any request is issued.
#[must_use]
pub fn validate_application_id(id: &str) -> bool {
    APPLICATION_ID.is_match(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ab", true)]
    #[case("a", false)]
    #[case("", false)]
    #[case("65129e728953c27f7d15b64d", true)]
    #[case("a-b", false)]
    #[case("ab!", false)]
    #[case("AB12", true)]
    fn application_id_cases(#[case] id: &str, #[case] expected: bool) {
        assert_eq!(validate_application_id(id), expected, "id: {id:?}");
    }
}
