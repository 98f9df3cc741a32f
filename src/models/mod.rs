/// # Validation Options
///
/// Domain allow/deny lists and the override message for domain rejections.
///
/// ## Deserialization
/// Field names are camelCase and every field is optional.
///
/// ## Example JSON
/// ```json
/// {
///   "allowedDomains": ["example.com"],
///   "disallowedDomains": ["spam.com"],
///   "errorDisallowedDomainMessage": "Blocked."
/// }
/// ```
pub mod options;

/// # Validation Results
///
/// Serializable per-address outcomes and the batch report built from them.
///
/// ## Example JSON
/// ```json
/// {
///   "results": [
///     { "email": "user@example.com", "is_valid": true, "message": "The email address is valid." },
///     { "email": "invalid-email", "is_valid": false, "message": "The email address is invalid.", "code": "INVALID_FORMAT" }
///   ],
///   "valid_count": 1,
///   "invalid_count": 1
/// }
/// ```
pub mod report;
