use crate::models::options::ValidationOptions;
use crate::validation::error::ValidationError;

/// Returns the part of `email` after its first `@`, or `None` if there is no `@`.
///
/// # Example
/// ```
/// use email_domain_validator::extract_domain;
///
/// assert_eq!(extract_domain("user@example.com"), Some("example.com"));
/// assert_eq!(extract_domain("invalid-email"), None);
/// ```
pub fn extract_domain(email: &str) -> Option<&str> {
    email.split_once('@').map(|(_, domain)| domain)
}

/// Applies the deny-list, then the allow-list, to an extracted domain.
///
/// Membership is an exact, case-sensitive string comparison. A deny-listed
/// domain is rejected even when it also appears in the allow-list.
///
/// # Errors
/// Returns [`ValidationError::UnauthorizedDomain`] carrying the domain and the
/// resolved rejection message when either list rejects it.
pub fn check_domain(domain: &str, options: &ValidationOptions) -> Result<(), ValidationError> {
    if is_listed(&options.disallowed_domains, domain) {
        log::debug!("rejecting deny-listed domain {domain}");
        return Err(unauthorized(domain, options));
    }

    if !options.allowed_domains.is_empty() && !is_listed(&options.allowed_domains, domain) {
        log::debug!("rejecting domain {domain}: not in allow-list");
        return Err(unauthorized(domain, options));
    }

    Ok(())
}

fn is_listed(domains: &[String], domain: &str) -> bool {
    domains.iter().any(|listed| listed == domain)
}

fn unauthorized(domain: &str, options: &ValidationOptions) -> ValidationError {
    ValidationError::UnauthorizedDomain {
        domain: domain.to_string(),
        message: options.domain_error_message().to_string(),
    }
}
