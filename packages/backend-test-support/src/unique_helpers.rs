//! Test helpers for generating unique test data
//!
//! ULIDs keep fixture names and contact ids distinct across tests that share
//! a process.

use ulid::Ulid;

/// Generate a unique string in the format `{prefix}-{ulid}`.
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("draft");
/// let b = unique_str("draft");
/// assert_ne!(a, b);
/// assert!(a.starts_with("draft-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique all-digit contact id shaped like a chat snowflake.
///
/// ```
/// use backend_test_support::unique_helpers::unique_contact_id;
///
/// let id = unique_contact_id();
/// assert!(id.len() >= 15);
/// assert!(id.chars().all(|c| c.is_ascii_digit()));
/// ```
pub fn unique_contact_id() -> String {
    let raw = Ulid::new().0;
    // 18 digits, never starting with zero
    format!("{}", 100_000_000_000_000_000u128 + raw % 900_000_000_000_000_000u128)
}
