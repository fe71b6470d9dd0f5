use regex::Regex;
use std::sync::LazyLock;

// Word characters, dots and hyphens on both sides of the '@',
// and the domain must end in a dot followed by word characters.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("valid email regex"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Required inputs (contact names, search queries) must hold something
/// other than whitespace.
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last-name@mail.example.co"));
        assert!(is_valid_email("under_score@host.io"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com."));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn match_is_anchored_to_the_whole_string() {
        assert!(!is_valid_email("a@b.com "));
        assert!(!is_valid_email("a@b.com\n"));
        assert!(!is_valid_email("<a@b.com>"));
    }

    #[test]
    fn permissive_on_undeliverable_addresses() {
        assert!(is_valid_email("a@b..c"));
        assert!(is_valid_email("..@--.x"));
    }

    #[test]
    fn blank_inputs() {
        assert!(is_blank(""));
        assert!(is_blank("   \t"));
        assert!(!is_blank(" Anna "));
    }
}
