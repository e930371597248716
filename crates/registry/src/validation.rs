//! Credential validation rules.

use once_cell::sync::Lazy;
use regex::Regex;

static NAME_PART: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z'-]{2,}$").expect("name pattern is valid")
});

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+@[A-Za-z0-9_-]+(\.[A-Za-z0-9_-]+)*\.[A-Za-z0-9_-]+$")
        .expect("email pattern is valid")
});

const FORBIDDEN_PAIRS: [&str; 4] = ["''", "--", "'-", "-'"];

/// Check a single name word.
///
/// Letters, apostrophes and hyphens only, at least two characters, no
/// leading or trailing punctuation, and no two punctuation marks in a row.
pub fn is_valid_name_part(part: &str) -> bool {
    NAME_PART.is_match(part)
        && !part.starts_with(['-', '\''])
        && !part.ends_with(['-', '\''])
        && !FORBIDDEN_PAIRS.iter().any(|pair| part.contains(pair))
}

/// Check a name that may span several whitespace-separated words.
pub fn is_valid_name(name: &str) -> bool {
    let mut parts = name.split_whitespace().peekable();
    parts.peek().is_some() && parts.all(is_valid_name_part)
}

/// Check an email address against the accepted shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}
