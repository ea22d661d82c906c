//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process
//! startup and then passed into core services. The intent is to avoid reading
//! process-wide environment variables during request handling, which can lead
//! to inconsistent behaviour in multi-threaded runtimes and test harnesses.

use crate::constants::{DEFAULT_CONTACT_EMAIL_DOMAIN, DEFAULT_RECENT_LIMIT};
use crate::error::{AssessmentError, AssessmentResult};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    contact_email_domain: String,
    recent_limit: usize,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// The email domain is embedded into synthesized client contact
    /// addresses (`<client-id>@<domain>`), so it is restricted to a
    /// conservative hostname character set.
    pub fn new(contact_email_domain: String, recent_limit: usize) -> AssessmentResult<Self> {
        validate_email_domain(&contact_email_domain)?;
        if recent_limit == 0 {
            return Err(AssessmentError::InvalidInput(
                "recent_limit must be at least 1".into(),
            ));
        }

        Ok(Self {
            contact_email_domain,
            recent_limit,
        })
    }

    pub fn contact_email_domain(&self) -> &str {
        &self.contact_email_domain
    }

    pub fn recent_limit(&self) -> usize {
        self.recent_limit
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            contact_email_domain: DEFAULT_CONTACT_EMAIL_DOMAIN.into(),
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

/// Validates that a domain is safe for embedding in a synthesized email.
///
/// - Rejects empty or whitespace-only strings
/// - Bounds the length to avoid pathological inputs
/// - Restricts characters to a conservative ASCII hostname set
fn validate_email_domain(domain: &str) -> AssessmentResult<()> {
    const MAX_DOMAIN_LEN: usize = 253;

    if domain.trim().is_empty() {
        return Err(AssessmentError::InvalidInput(
            "contact email domain cannot be empty".into(),
        ));
    }

    if domain.len() > MAX_DOMAIN_LEN {
        return Err(AssessmentError::InvalidInput(format!(
            "contact email domain exceeds maximum length of {} characters",
            MAX_DOMAIN_LEN
        )));
    }

    let ok = domain
        .bytes()
        .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z' | b'.' | b'-'));

    if !ok {
        return Err(AssessmentError::InvalidInput(
            "contact email domain contains invalid characters (only alphanumeric, '.', '-' allowed)"
                .into(),
        ));
    }

    Ok(())
}

/// Parse the recent-assessment limit from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default limit.
pub fn recent_limit_from_env_value(value: Option<String>) -> AssessmentResult<usize> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let parsed = value
        .map(|v| {
            v.parse::<usize>().map_err(|_| {
                AssessmentError::InvalidInput(format!("invalid recent limit: {v:?}"))
            })
        })
        .transpose()?;

    Ok(parsed.unwrap_or(DEFAULT_RECENT_LIMIT))
}
