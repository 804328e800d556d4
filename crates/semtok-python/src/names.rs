//! Naming conventions that carry meaning.

use std::sync::LazyLock;

use regex::Regex;

static CONSTANT_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z0-9_]+$").unwrap());

/// Whether `name` follows the SCREAMING_CASE constant convention.
///
/// Names made only of underscores (`_`, `__`) are placeholders, not
/// constants.
pub fn is_constant_name(name: &str) -> bool {
    CONSTANT_NAME.is_match(name) && !name.chars().all(|c| c == '_')
}
