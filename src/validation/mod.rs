/// Checks an email address against the simple `local@domain.tld` format.
///
/// The address must be one or more non-whitespace, non-`@` characters, an `@`,
/// then a domain with at least one `.` that has text on both sides. This is
/// not an RFC 5322 parser.
///
/// # Examples
/// ```
/// use email_domain_validator::validation::syntax::is_valid_format;
///
/// assert!(is_valid_format("user@example.com"));
/// assert!(!is_valid_format("user@example"));
/// ```
pub mod syntax;

/// Extracts the domain of an address and applies the deny-list and allow-list.
///
/// Matching is exact and case-sensitive. The deny-list is checked first, so a
/// domain on both lists is rejected.
pub mod domain;

/// The two ways an address can be rejected, with their messages.
pub mod error;

/// Validates an email address against format and domain restrictions.
///
/// Provides the synchronous [`validate_email`](email::validate_email), a
/// future-returning adapter for async callers, and a batch helper producing a
/// [`BulkValidationReport`](crate::models::report::BulkValidationReport).
pub mod email;
