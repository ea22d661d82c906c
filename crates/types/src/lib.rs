//! Shared vocabulary types for the mindgauge workspace.
//!
//! Contains validated text newtypes and the small enums (assessment status,
//! client risk level) that both the core crate and the API crates speak.

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// A string type that guarantees non-empty content.
///
/// This type wraps a `String` and ensures it contains at least one
/// non-whitespace character. The input is automatically trimmed of leading
/// and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. If the
    /// trimmed result is empty, an error is returned.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// Lifecycle stage of an assessment.
///
/// An assessment is created `Pending`, transitions exactly once to either
/// `Completed` (scored, no risk condition met) or `Flagged` (scored, at
/// least one risk condition met) and is terminal thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentStatus {
    Pending,
    Completed,
    Flagged,
}

impl AssessmentStatus {
    /// The wire representation, matching the serde rename.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentStatus::Pending => "pending",
            AssessmentStatus::Completed => "completed",
            AssessmentStatus::Flagged => "flagged",
        }
    }

    /// True for the two terminal, scored states.
    pub fn is_scored(&self) -> bool {
        matches!(self, AssessmentStatus::Completed | AssessmentStatus::Flagged)
    }
}

impl std::fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clinical risk level attached to a client record.
///
/// The ordering is significant: risk is only ever escalated, so updates use
/// [`RiskLevel::escalated_to`] rather than plain assignment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// The wire representation, matching the serde rename.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Returns the higher of the two levels. Never downgrades.
    pub fn escalated_to(self, other: RiskLevel) -> RiskLevel {
        self.max(other)
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_text_trims_whitespace() {
        let text = NonEmptyText::new("  C-104  ").unwrap();
        assert_eq!(text.as_str(), "C-104");
    }

    #[test]
    fn non_empty_text_rejects_whitespace_only() {
        let err = NonEmptyText::new("   ").unwrap_err();
        assert!(matches!(err, TextError::Empty));
    }

    #[test]
    fn status_serialises_lowercase() {
        let s = serde_json::to_string(&AssessmentStatus::Flagged).unwrap();
        assert_eq!(s, "\"flagged\"");
    }

    #[test]
    fn status_round_trips() {
        let status: AssessmentStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(status, AssessmentStatus::Pending);
        assert!(!status.is_scored());
    }

    #[test]
    fn risk_level_never_downgrades() {
        assert_eq!(RiskLevel::High.escalated_to(RiskLevel::Low), RiskLevel::High);
        assert_eq!(RiskLevel::Low.escalated_to(RiskLevel::High), RiskLevel::High);
        assert_eq!(
            RiskLevel::Medium.escalated_to(RiskLevel::Medium),
            RiskLevel::Medium
        );
    }
}
