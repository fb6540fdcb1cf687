//! Alias and file-name sanitization.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Runs of characters permitted in an alias.
    static ref ALIAS_RUN: Regex = Regex::new("[A-Za-z0-9]+").expect("valid alias regex");
}

/// Normalizes an arbitrary display string into a safe alias.
///
/// Keeps ASCII alphanumeric runs, camel-cases subsequent runs onto the first,
/// strips leading digits and lowercases the leading character. Idempotent:
/// running it on its own output is a no-op.
pub fn to_safe_alias(raw: &str) -> String {
    let mut joined = String::with_capacity(raw.len());
    for (i, run) in ALIAS_RUN.find_iter(raw).enumerate() {
        let run = run.as_str();
        if i == 0 {
            joined.push_str(run);
        } else if let Some(first) = run.chars().next() {
            joined.push(first.to_ascii_uppercase());
            joined.push_str(&run[1..]);
        }
    }

    // An alias may not start with a digit.
    let trimmed = joined.trim_start_matches(|c: char| c.is_ascii_digit());

    let mut alias = String::with_capacity(trimmed.len());
    if let Some(first) = trimmed.chars().next() {
        alias.push(first.to_ascii_lowercase());
        alias.push_str(&trimmed[1..]);
    }
    alias
}

/// True if `s` is already a safe alias: a leading ASCII lowercase letter
/// followed by ASCII alphanumerics.
pub fn is_safe_alias(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

/// Normalizes a template display name: path separators are not allowed, so
/// `/` becomes `.` and `\` is removed. Idempotent.
pub fn sanitize_name(raw: &str) -> String {
    raw.replace('/', ".").replace('\\', "")
}
