//! Wire DTOs for the mindgauge REST API.
//!
//! Serialized in camelCase to match the JSON shape the clinician dashboard
//! consumes. Conversion from the core domain entities happens in `api-rest`;
//! these types carry no behaviour.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Generic error body returned with non-2xx statuses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

/// Request body for `POST /assessments`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssessmentReq {
    /// Assessment type id, e.g. `"PHQ-9"`.
    #[serde(rename = "type")]
    pub assessment_type: String,
    pub client_id: Option<String>,
    pub notes: Option<String>,
}

/// Request body for `POST /assessments/{id}/complete`: question id to
/// chosen option value. May be partial.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompleteAssessmentReq {
    pub responses: BTreeMap<u32, i64>,
}

/// One persisted response with its resolved option label.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LabeledResponseRes {
    pub question_id: u32,
    pub value: i64,
    pub label: String,
}

/// An assessment as returned by every assessment endpoint.
///
/// The scoring fields are all present or all null, mirroring the
/// pending/scored lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRes {
    pub id: String,
    #[serde(rename = "type")]
    pub assessment_type: String,
    pub name: String,
    pub client_id: Option<String>,
    pub notes: Option<String>,
    pub created_at: String,
    pub status: String,
    pub score: Option<i64>,
    pub severity: Option<String>,
    pub risk_flags: Option<Vec<String>>,
    pub responses: Option<Vec<LabeledResponseRes>>,
    pub completed_at: Option<String>,
}

/// A client record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientRes {
    pub id: String,
    pub name: String,
    pub email: String,
    pub risk_level: String,
    pub last_contact: Option<String>,
}

/// A client with their assessment history.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientDetailRes {
    pub id: String,
    pub name: String,
    pub email: String,
    pub risk_level: String,
    pub last_contact: Option<String>,
    pub assessments: Vec<AssessmentRes>,
}

/// Template listing entry (no question bank).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummaryRes {
    pub id: String,
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub category: String,
    pub time_estimate: String,
    pub question_count: usize,
}

/// One selectable answer for a question.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OptionRes {
    pub value: i64,
    pub label: String,
}

/// One questionnaire item with its ordered options.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionRes {
    pub id: u32,
    pub text: String,
    pub options: Vec<OptionRes>,
}

/// Full template, including the question bank for rendering.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRes {
    pub id: String,
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub category: String,
    pub time_estimate: String,
    pub questions: Vec<QuestionRes>,
}

/// Headline dashboard numbers.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsRes {
    pub total_assessments: usize,
    pub active_clients: usize,
    pub risk_flags: usize,
    pub completion_rate: u32,
}

/// Full dashboard payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRes {
    pub stats: StatsRes,
    pub recent_assessments: Vec<AssessmentRes>,
    pub flagged_assessments: Vec<AssessmentRes>,
    pub high_risk_clients: Vec<ClientRes>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_accepts_dashboard_shape() {
        let req: CreateAssessmentReq = serde_json::from_str(
            r#"{"type":"PHQ-9","clientId":"C-104","notes":"intake"}"#,
        )
        .unwrap();
        assert_eq!(req.assessment_type, "PHQ-9");
        assert_eq!(req.client_id.as_deref(), Some("C-104"));
    }

    #[test]
    fn create_request_tolerates_missing_optionals() {
        let req: CreateAssessmentReq = serde_json::from_str(r#"{"type":"GAD-7"}"#).unwrap();
        assert!(req.client_id.is_none());
        assert!(req.notes.is_none());
    }

    #[test]
    fn complete_request_parses_string_keyed_responses() {
        let req: CompleteAssessmentReq =
            serde_json::from_str(r#"{"responses":{"1":2,"9":1}}"#).unwrap();
        assert_eq!(req.responses.get(&9), Some(&1));
    }

    #[test]
    fn assessment_response_uses_camel_case() {
        let res = AssessmentRes {
            id: "a-1".into(),
            assessment_type: "PHQ-9".into(),
            name: "PHQ-9".into(),
            client_id: Some("C-1".into()),
            notes: None,
            created_at: "2026-01-01T00:00:00Z".into(),
            status: "pending".into(),
            score: None,
            severity: None,
            risk_flags: None,
            responses: None,
            completed_at: None,
        };
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["type"], "PHQ-9");
        assert_eq!(json["clientId"], "C-1");
        assert!(json["completedAt"].is_null());
    }
}
