//! Form-field validation shared by the survey and the contact endpoint

use std::sync::OnceLock;

use regex::Regex;

/// Basic `local@domain.tld` shape check.
///
/// Same pattern the contact endpoint enforces server-side; intentionally
/// loose — deliverability is the backend's problem.
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"))
        .is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_addresses() {
        assert!(is_valid_email("golfer@example.com"));
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        for bad in ["", "not-an-email", "a@b", "a b@c.com", "@example.com", "a@", "a@@b.com"] {
            assert!(!is_valid_email(bad), "{bad:?} should be rejected");
        }
    }
}
