//! Validation module for waitlist email addresses
//!
//! Implements a minimal syntactic sanity check (`local@domain.tld`), not full
//! RFC 5322 validation. Deliverability is never checked.

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Address is empty
    Empty,
    /// Address contains whitespace
    ContainsWhitespace,
    /// Address does not contain exactly one `@`
    AtSignCount { found: usize },
    /// Nothing before the `@`
    MissingLocalPart,
    /// Domain has no `.` with characters on both sides
    MissingDomainDot,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Empty => write!(f, "Email is required"),
            ValidationError::ContainsWhitespace => write!(f, "Email cannot contain spaces"),
            ValidationError::AtSignCount { found: 0 } => write!(f, "Email is missing an '@'"),
            ValidationError::AtSignCount { found } => {
                write!(f, "Email must contain a single '@' (found {})", found)
            }
            ValidationError::MissingLocalPart => write!(f, "Email is missing a name before '@'"),
            ValidationError::MissingDomainDot => {
                write!(f, "Email domain must look like example.com")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Message shown under the email field while the address is invalid.
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// Validates an email address, reporting the first rule it breaks.
///
/// Accepts exactly the strings matching `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::Empty);
    }

    if email.chars().any(is_pattern_whitespace) {
        return Err(ValidationError::ContainsWhitespace);
    }

    let at_count = email.matches('@').count();
    if at_count != 1 {
        return Err(ValidationError::AtSignCount { found: at_count });
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::AtSignCount { found: 0 });
    };

    if local.is_empty() {
        return Err(ValidationError::MissingLocalPart);
    }

    // Any dot with at least one character before and after it will do,
    // so `a@.b.c` passes while `a@.bc` and `a@bc.` do not.
    let has_inner_dot = domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());
    if !has_inner_dot {
        return Err(ValidationError::MissingDomainDot);
    }

    Ok(())
}

/// Whitespace as matched by `\s` in the browser's regex engine.
///
/// Differs from [`char::is_whitespace`]: U+FEFF counts, U+0085 does not.
fn is_pattern_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Simple boolean check used by the signup form
pub fn is_valid_email(email: &str) -> bool {
    validate_email(email).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(is_valid_email("user+tag@example.io"));
        assert!(is_valid_email("a@.b.c"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a.com"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("not-an-email"));
    }

    #[test]
    fn test_domain_dot_position() {
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@com."));
        assert!(!is_valid_email("a@."));
        assert!(is_valid_email("a@b.c"));
    }

    #[test]
    fn test_whitespace_anywhere_is_rejected() {
        assert!(!is_valid_email(" a@b.com"));
        assert!(!is_valid_email("a@b.com "));
        assert!(!is_valid_email("a@b\t.com"));
        assert!(!is_valid_email("a@b.com\n"));
    }

    #[test]
    fn test_whitespace_matches_browser_regex() {
        // Byte order mark counts as whitespace, next-line does not
        assert_eq!(
            validate_email("a\u{FEFF}b@c.com"),
            Err(ValidationError::ContainsWhitespace)
        );
        assert!(is_valid_email("a\u{85}b@c.com"));

        assert!(!is_valid_email("a\u{00A0}b@c.com"));
        assert!(!is_valid_email("a@b\u{2009}.com"));
        assert!(!is_valid_email("a@b.c\u{3000}om"));
        assert!(!is_valid_email("a\u{000B}b@c.com"));
    }

    #[test]
    fn test_missing_local_part() {
        assert_eq!(
            validate_email("@example.com"),
            Err(ValidationError::MissingLocalPart)
        );
    }

    #[test]
    fn test_error_variants() {
        assert_eq!(validate_email(""), Err(ValidationError::Empty));
        assert_eq!(
            validate_email("a b@c.com"),
            Err(ValidationError::ContainsWhitespace)
        );
        assert_eq!(
            validate_email("a.com"),
            Err(ValidationError::AtSignCount { found: 0 })
        );
        assert_eq!(
            validate_email("a@b@c.com"),
            Err(ValidationError::AtSignCount { found: 2 })
        );
        assert_eq!(
            validate_email("a@b"),
            Err(ValidationError::MissingDomainDot)
        );
    }

    #[test]
    fn test_validator_is_idempotent() {
        for input in ["", "a@b.com", "a@b", "user@example.com", "a b@c.com"] {
            assert_eq!(is_valid_email(input), is_valid_email(input));
            assert_eq!(validate_email(input), validate_email(input));
        }
    }

    #[test]
    fn test_validation_error_display() {
        assert_eq!(ValidationError::Empty.to_string(), "Email is required");
        assert_eq!(
            ValidationError::AtSignCount { found: 0 }.to_string(),
            "Email is missing an '@'"
        );
        assert_eq!(
            ValidationError::AtSignCount { found: 3 }.to_string(),
            "Email must contain a single '@' (found 3)"
        );
    }
}
