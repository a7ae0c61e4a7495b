use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Regex patterns used for redacting identifiers before they reach the logs.
pub struct PiiRegexRegistry;

impl PiiRegexRegistry {
    /// Webhook URLs carry their credential in the last two path segments.
    pub fn webhook_url() -> &'static Regex {
        static WEBHOOK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"(https?://[^\s/]+/api/webhooks)/[^\s]+").unwrap()
        });
        &WEBHOOK_REGEX
    }

    /// Chat-platform snowflake ids (15+ digits) used as contact addresses.
    pub fn contact_id() -> &'static Regex {
        static CONTACT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b(\d{11,})(\d{4})\b").unwrap()
        });
        &CONTACT_REGEX
    }

    /// Hex or base64-like opaque tokens (24+ chars).
    pub fn opaque_token() -> &'static Regex {
        static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9+/_-]{24,}={0,2}").unwrap()
        });
        &TOKEN_REGEX
    }
}

/// Redacts sensitive information from a string.
///
/// Order matters: webhook credentials first, then contact ids (last four
/// digits kept), then any remaining opaque tokens.
pub fn redact(input: &str) -> String {
    let webhook_redacted = PiiRegexRegistry::webhook_url().replace_all(input, "$1/[REDACTED]");

    let contact_redacted = PiiRegexRegistry::contact_id()
        .replace_all(&webhook_redacted, |caps: &regex::Captures| format!("***{}", &caps[2]));

    PiiRegexRegistry::opaque_token()
        .replace_all(&contact_redacted, "[REDACTED_TOKEN]")
        .to_string()
}

/// A wrapper that redacts sensitive strings when displayed.
pub struct Redacted<'a>(pub &'a str);

impl<'a> fmt::Display for Redacted<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

impl<'a> fmt::Debug for Redacted<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}
