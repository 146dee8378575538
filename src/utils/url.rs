use regex::Regex;
use std::sync::OnceLock;

/// Accepted locator grammar: optional http/https scheme, then either a dotted
/// hostname ending in a top-level label of at least two letters or a
/// dotted-quad address, followed by optional port, path, query and fragment.
/// Octets of dotted-quad addresses are matched syntactically, not range-checked.
/// Matching is ASCII-only (`-u`): Unicode digits and case folds never match.
const LOCATOR_PATTERN: &str = r"(?i-u)^(https?://)?((([a-z\d]([a-z\d-]*[a-z\d])*)\.?)+[a-z]{2,}|((\d{1,3}\.){3}\d{1,3}))(:\d+)?(/[-a-z\d%_.~+]*)*(\?[;&a-z\d%_.~+=-]*)?(#[-a-z\d_]*)?$";

fn locator_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(LOCATOR_PATTERN).expect("locator pattern is valid"))
}

/// Classify an input string as an acceptable network locator.
///
/// Pure and total: the same input always yields the same answer, and any
/// unparseable or empty string yields `false` rather than an error.
pub fn validate_url(input: &str) -> bool {
    locator_pattern().is_match(input)
}
