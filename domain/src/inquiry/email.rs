//! Structural email address check.

use regex::Regex;
use std::sync::LazyLock;

/// Local part, `@`, dot-terminated labels, alphabetic TLD.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .unwrap()
});

/// Check that `address` has the structure of a deliverable email address.
///
/// This is a syntactic check only; it does not resolve the domain. The
/// local part may not start with a dot and the address may not contain
/// consecutive dots.
pub fn is_valid_email(address: &str) -> bool {
    !address.starts_with('.') && !address.contains("..") && EMAIL_PATTERN.is_match(address)
}
