//! Constants used throughout the mindgauge core crate.

/// Label recorded for a response whose value has no matching option in the
/// assessment template.
pub const UNKNOWN_OPTION_LABEL: &str = "Unknown";

/// Upper bound on a single response value. No supported instrument awards
/// more than 4 points per item; the margin keeps off-catalog values
/// labelable as `"Unknown"` while ruling out totals anywhere near overflow.
pub const MAX_RESPONSE_VALUE: i64 = 1_000;

/// Default domain for placeholder contact emails synthesized when an
/// assessment references a client id the store has never seen.
pub const DEFAULT_CONTACT_EMAIL_DOMAIN: &str = "example.com";

/// Default number of recently completed assessments shown on the dashboard.
pub const DEFAULT_RECENT_LIMIT: usize = 10;
