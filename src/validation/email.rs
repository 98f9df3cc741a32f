use crate::models::options::ValidationOptions;
use crate::models::report::{BulkValidationReport, EmailValidationResult};
use crate::validation::domain::{check_domain, extract_domain};
use crate::validation::error::ValidationError;
use crate::validation::syntax::is_valid_format;
use futures::future::{Ready, ready};

/// Message returned for an accepted address.
pub const VALID_EMAIL_MESSAGE: &str = "The email address is valid.";

/// # Email Validation
///
/// Validates an email address in a fixed order, stopping at the first failure:
/// 1. Format check (`local@domain.tld`, no whitespace, exactly one `@`)
/// 2. Deny-list check on the domain
/// 3. Allow-list check on the domain (only when the allow-list is non-empty)
///
/// ## Errors
/// - [`ValidationError::InvalidFormat`]: the address fails the format check
/// - [`ValidationError::UnauthorizedDomain`]: the domain is deny-listed, or an
///   allow-list is configured and does not contain it
///
/// ## Example
/// ```
/// use email_domain_validator::{ValidationOptions, validate_email};
///
/// let options = ValidationOptions::new().with_allowed_domains(["example.com"]);
/// assert_eq!(
///     validate_email("user@example.com", &options),
///     Ok("The email address is valid.")
/// );
///
/// let err = validate_email("user@unknown.com", &options).unwrap_err();
/// assert_eq!(err.to_string(), "The domain of this email is not authorized.");
/// ```
pub fn validate_email(
    email: &str,
    options: &ValidationOptions,
) -> Result<&'static str, ValidationError> {
    if !is_valid_format(email) {
        log::debug!("rejecting email: invalid format");
        return Err(ValidationError::InvalidFormat);
    }

    let Some(domain) = extract_domain(email) else {
        return Err(ValidationError::InvalidFormat);
    };

    check_domain(domain, options)?;

    log::trace!("accepted email for domain {domain}");
    Ok(VALID_EMAIL_MESSAGE)
}

/// Future-returning form of [`validate_email`].
///
/// The outcome is computed before this returns; the future is already complete
/// and resolves on its first poll.
pub fn validate_email_async(
    email: &str,
    options: &ValidationOptions,
) -> Ready<Result<&'static str, ValidationError>> {
    ready(validate_email(email, options))
}

/// Validates every address with the same options and collects the outcomes.
///
/// Results keep the input order.
pub fn validate_emails<I, S>(emails: I, options: &ValidationOptions) -> BulkValidationReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = BulkValidationReport::default();
    for email in emails {
        let email = email.as_ref();
        let outcome = validate_email(email, options);
        report.push(EmailValidationResult::from_outcome(email, outcome));
    }
    report
}
