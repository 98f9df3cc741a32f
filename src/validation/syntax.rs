use once_cell::sync::Lazy;
use regex::Regex;

/// Anchored `local@domain.tld` pattern.
///
/// The excluded class is `@` plus the ECMAScript `\s` whitespace set (which
/// leaves out U+0085, unlike Unicode `White_Space`), so a matching address
/// contains exactly one `@`.
static EMAIL_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]+",
        r"@[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]+",
        r"\.[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]+$",
    ))
    .expect("Valid regex pattern")
});

/// Checks an email address against the simple `local@domain.tld` format.
///
/// This is deliberately not an RFC 5322 parser: the address must be one or more
/// non-whitespace, non-`@` characters, an `@`, then a domain containing at least
/// one `.` with non-empty text on both sides of it. Nothing may surround the
/// address.
///
/// # Examples
/// ```
/// use email_domain_validator::validation::syntax::is_valid_format;
///
/// assert!(is_valid_format("user.name+tag@example.com"));
/// assert!(!is_valid_format("invalid-email"));
/// assert!(!is_valid_format(" user@example.com"));
/// ```
///
/// # Arguments
/// * `email` - A string slice containing the email address to check
///
/// # Returns
/// `true` if the address matches the format, `false` otherwise
pub fn is_valid_format(email: &str) -> bool {
    EMAIL_FORMAT.is_match(email)
}
