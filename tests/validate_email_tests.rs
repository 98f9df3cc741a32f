use email_domain_validator::{ValidationOptions, validate_email, validate_email_async};

async fn outcome(email: &str, options: ValidationOptions) -> Result<String, String> {
    validate_email_async(email, &options)
        .await
        .map(str::to_string)
        .map_err(|err| err.to_string())
}

#[tokio::test]
async fn validates_correct_email_with_allowed_domain() {
    let options = ValidationOptions::new().with_allowed_domains(["example.com"]);
    assert_eq!(
        outcome("user@example.com", options).await,
        Ok("The email address is valid.".to_string())
    );
}

#[tokio::test]
async fn rejects_email_with_disallowed_domain() {
    let options = ValidationOptions::new().with_disallowed_domains(["spam.com"]);
    assert_eq!(
        outcome("user@spam.com", options).await,
        Err("The domain of this email is not authorized.".to_string())
    );
}

#[tokio::test]
async fn rejects_domain_not_in_allowed_list() {
    let options = ValidationOptions::new().with_allowed_domains(["example.com"]);
    assert_eq!(
        outcome("user@unknown.com", options).await,
        Err("The domain of this email is not authorized.".to_string())
    );
}

#[tokio::test]
async fn validates_email_without_domain_restrictions() {
    assert_eq!(
        outcome("user@anydomain.com", ValidationOptions::default()).await,
        Ok("The email address is valid.".to_string())
    );
}

#[tokio::test]
async fn rejects_invalid_email_format() {
    assert_eq!(
        outcome("invalid-email", ValidationOptions::default()).await,
        Err("The email address is invalid.".to_string())
    );
}

#[tokio::test]
async fn uses_custom_disallowed_domain_message() {
    let options = ValidationOptions::new()
        .with_disallowed_domains(["spam.com"])
        .with_error_message("Blocked.");
    assert_eq!(
        outcome("user@spam.com", options).await,
        Err("Blocked.".to_string())
    );
}

#[test]
fn options_loaded_from_json_drive_validation() {
    let options = ValidationOptions::from_json(
        r#"{"disallowedDomains": ["spam.com"], "errorDisallowedDomainMessage": "Blocked."}"#,
    )
    .expect("options should parse");

    let err = validate_email("user@spam.com", &options).unwrap_err();
    assert_eq!(err.to_string(), "Blocked.");
    assert_eq!(
        validate_email("user@example.com", &options),
        Ok("The email address is valid.")
    );
}
