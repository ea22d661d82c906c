//! Domain entities shared by the scoring engine, the stores, and the
//! lifecycle services.
//!
//! The all-or-nothing completion invariant is structural: everything that is
//! set exactly once at completion time (responses, score, severity, risk
//! flags, timestamp) lives inside [`Scorecard`], and a pending assessment
//! simply has no scorecard.

use chrono::{DateTime, Utc};
use mindgauge_types::{AssessmentStatus, RiskLevel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw respondent submission: question id to chosen option value.
///
/// May be partial; question ids absent from the map contribute nothing to
/// the total score.
pub type Responses = BTreeMap<u32, i64>;

/// A single persisted response, with the option label resolved against the
/// assessment template at completion time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledResponse {
    pub question_id: u32,
    pub value: i64,
    pub label: String,
}

/// Everything derived from scoring, persisted in one piece when an
/// assessment completes and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    pub responses: Vec<LabeledResponse>,
    pub score: i64,
    pub severity: String,
    pub risk_flags: Vec<String>,
    pub completed_at: DateTime<Utc>,
}

/// One instance of a respondent taking one standardized questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub id: String,
    pub type_id: String,
    /// Display name copied from the template at creation time.
    pub name: String,
    /// Absent means an anonymous assessment.
    pub client_id: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub status: AssessmentStatus,
    /// `None` while pending; set exactly once on completion.
    pub scorecard: Option<Scorecard>,
}

impl Assessment {
    pub fn is_scored(&self) -> bool {
        self.scorecard.is_some()
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.scorecard.as_ref().map(|s| s.completed_at)
    }
}

/// A client record, upserted as a side effect of assessment creation and
/// completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    pub risk_level: RiskLevel,
    pub last_contact: Option<DateTime<Utc>>,
}

/// Headline numbers for the clinician dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Count of scored (completed or flagged) assessments.
    pub total_assessments: usize,
    pub active_clients: usize,
    /// Count of flagged assessments.
    pub risk_flags: usize,
    /// Scored assessments as a rounded percentage of all assessments.
    pub completion_rate: u32,
}

/// Full dashboard payload: stats plus the supporting record lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub stats: DashboardStats,
    pub recent_assessments: Vec<Assessment>,
    pub flagged_assessments: Vec<Assessment>,
    pub high_risk_clients: Vec<Client>,
}

/// A client together with their assessment history, newest completion first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientDetail {
    pub client: Client,
    pub assessments: Vec<Assessment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending_assessment() -> Assessment {
        Assessment {
            id: "a-1".into(),
            type_id: "PHQ-9".into(),
            name: "PHQ-9".into(),
            client_id: None,
            notes: None,
            created_at: Utc::now(),
            status: AssessmentStatus::Pending,
            scorecard: None,
        }
    }

    #[test]
    fn pending_assessment_has_no_completion_data() {
        let a = pending_assessment();
        assert!(!a.is_scored());
        assert!(a.completed_at().is_none());
    }

    #[test]
    fn scorecard_serialises_as_one_unit() {
        let mut a = pending_assessment();
        a.status = AssessmentStatus::Flagged;
        a.scorecard = Some(Scorecard {
            responses: vec![LabeledResponse {
                question_id: 9,
                value: 1,
                label: "Several days".into(),
            }],
            score: 1,
            severity: "Minimal Depression".into(),
            risk_flags: vec!["Suicidal ideation".into()],
            completed_at: Utc::now(),
        });

        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["status"], "flagged");
        assert_eq!(json["scorecard"]["score"], 1);
        assert_eq!(json["scorecard"]["risk_flags"][0], "Suicidal ideation");
    }
}
