use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Regex patterns used for redaction, compiled once.
pub struct PiiRegexRegistry;

impl PiiRegexRegistry {
    /// Email addresses
    /// SAFETY: vetted literal
    pub fn email() -> &'static Regex {
        static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
        });
        &EMAIL_REGEX
    }

    /// `Bearer <value>` headers, whatever the value length
    /// SAFETY: vetted literal
    pub fn bearer() -> &'static Regex {
        static BEARER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"(?i)\bbearer\s+[A-Za-z0-9._~+/=-]+").unwrap()
        });
        &BEARER_REGEX
    }

    /// Opaque base64-like or hex runs (16+ chars)
    /// SAFETY: vetted literal
    pub fn opaque_token() -> &'static Regex {
        static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9+/]{16,}={0,2}").unwrap()
        });
        &TOKEN_REGEX
    }
}

/// Masks emails (first char of the local part kept), bearer credentials and
/// long opaque tokens.
///
/// Order: emails, then bearer headers, then bare tokens.
pub fn redact(input: &str) -> String {
    let email_redacted = PiiRegexRegistry::email().replace_all(input, |caps: &regex::Captures| {
        let full_match = &caps[0];
        match full_match.find('@') {
            Some(0) | None => full_match.to_string(),
            Some(at_pos) => {
                let (local_part, domain) = full_match.split_at(at_pos);
                let first: String = local_part.chars().take(1).collect();
                format!("{first}***{domain}")
            }
        }
    });

    let bearer_redacted =
        PiiRegexRegistry::bearer().replace_all(&email_redacted, "Bearer [REDACTED_TOKEN]");

    PiiRegexRegistry::opaque_token()
        .replace_all(&bearer_redacted, "[REDACTED_TOKEN]")
        .to_string()
}

/// Formats a string through [`redact`].
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

/// Invitation codes are short, so pattern matching cannot find them;
/// callers wrap them explicitly. Only the first character survives.
pub struct MaskedCode<'a>(pub &'a str);

impl fmt::Display for MaskedCode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut chars = self.0.chars();
        match chars.next() {
            None => Ok(()),
            Some(first) => write!(f, "{first}{}", "*".repeat(chars.count())),
        }
    }
}

impl fmt::Debug for MaskedCode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
