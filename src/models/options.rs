use crate::validation::error::UNAUTHORIZED_DOMAIN_MESSAGE;
use serde::{Deserialize, Serialize};

/// Domain restrictions applied after the format check.
///
/// Every field is optional. Empty lists impose no restriction, and a missing or
/// empty `error_disallowed_domain_message` falls back to
/// [`UNAUTHORIZED_DOMAIN_MESSAGE`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationOptions {
    /// Only these domains are accepted when non-empty.
    pub allowed_domains: Vec<String>,
    /// These domains are always rejected.
    pub disallowed_domains: Vec<String>,
    /// Replaces the default message for both domain rejections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_disallowed_domain_message: Option<String>,
}

impl ValidationOptions {
    /// Options with no domain restrictions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses options from a JSON document using camelCase keys.
    ///
    /// # Example
    /// ```
    /// use email_domain_validator::ValidationOptions;
    ///
    /// let options = ValidationOptions::from_json(r#"{"allowedDomains": ["example.com"]}"#)?;
    /// assert_eq!(options.allowed_domains, vec!["example.com"]);
    /// # Ok::<(), serde_json::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Replaces the allow-list.
    pub fn with_allowed_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_domains = domains.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the deny-list.
    pub fn with_disallowed_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disallowed_domains = domains.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the message used for both domain rejections.
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_disallowed_domain_message = Some(message.into());
        self
    }

    /// Message used when a domain is rejected by either list.
    pub fn domain_error_message(&self) -> &str {
        match self.error_disallowed_domain_message.as_deref() {
            Some(message) if !message.is_empty() => message,
            _ => UNAUTHORIZED_DOMAIN_MESSAGE,
        }
    }
}
