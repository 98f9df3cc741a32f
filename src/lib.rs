pub mod models;
pub mod validation;

pub use models::options::ValidationOptions;
pub use models::report::{BulkValidationReport, EmailValidationResult};
pub use validation::domain::extract_domain;
pub use validation::email::{
    VALID_EMAIL_MESSAGE, validate_email, validate_email_async, validate_emails,
};
pub use validation::error::{INVALID_EMAIL_MESSAGE, UNAUTHORIZED_DOMAIN_MESSAGE, ValidationError};
pub use validation::syntax::is_valid_format;
