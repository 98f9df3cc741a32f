use crate::validation::error::ValidationError;
use serde::Serialize;

/// Outcome for a single address, shaped for JSON responses.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EmailValidationResult {
    pub email: String,
    pub is_valid: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl EmailValidationResult {
    pub fn from_outcome(email: &str, outcome: Result<&str, ValidationError>) -> Self {
        match outcome {
            Ok(message) => Self {
                email: email.to_string(),
                is_valid: true,
                message: message.to_string(),
                code: None,
            },
            Err(err) => Self {
                email: email.to_string(),
                is_valid: false,
                message: err.message().to_string(),
                code: Some(err.code().to_string()),
            },
        }
    }
}

/// Per-address results for a batch, in input order, with totals.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkValidationReport {
    pub results: Vec<EmailValidationResult>,
    pub valid_count: usize,
    pub invalid_count: usize,
}

impl BulkValidationReport {
    pub fn push(&mut self, result: EmailValidationResult) {
        if result.is_valid {
            self.valid_count += 1;
        } else {
            self.invalid_count += 1;
        }
        self.results.push(result);
    }
}
