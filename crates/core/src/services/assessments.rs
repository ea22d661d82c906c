//! Assessment lifecycle management.
//!
//! Orchestrates the `pending -> completed | flagged` state machine:
//! creation against the template registry, scoring on submission, and the
//! client upsert side effects. The transition out of `pending` happens
//! exactly once — the store's compare-and-swap rejects a second submission
//! with [`AssessmentError::AlreadyCompleted`] instead of silently
//! re-scoring.
//!
//! ## Pure data operations
//!
//! This module contains **only** domain operations — no API concerns such as
//! authentication or HTTP serialization. API-level logic belongs in
//! `api-rest` and `api-shared`.

use crate::config::CoreConfig;
use crate::error::AssessmentResult;
use crate::model::{
    Assessment, DashboardOverview, DashboardStats, Responses, Scorecard,
};
use crate::scoring::{self, Outcome};
use crate::store::{ClientUpsert, Store};
use crate::templates::TemplateRegistry;
use chrono::{DateTime, Utc};
use mindgauge_types::{AssessmentStatus, NonEmptyText, RiskLevel};
use std::sync::Arc;
use uuid::Uuid;

/// Service for creating and completing assessments.
#[derive(Clone)]
pub struct AssessmentService {
    cfg: Arc<CoreConfig>,
    registry: Arc<TemplateRegistry>,
    store: Arc<dyn Store>,
}

impl AssessmentService {
    pub fn new(
        cfg: Arc<CoreConfig>,
        registry: Arc<TemplateRegistry>,
        store: Arc<dyn Store>,
    ) -> Self {
        Self {
            cfg,
            registry,
            store,
        }
    }

    /// Creates a new assessment in the `pending` state.
    ///
    /// When a client id is supplied, the client record is upserted
    /// unconditionally — created with synthesized placeholder contact details
    /// on first sight, otherwise just a `last_contact` bump.
    ///
    /// # Errors
    ///
    /// Returns `TemplateNotFound` when `type_id` is not registered.
    pub fn create(
        &self,
        type_id: &str,
        client_id: Option<NonEmptyText>,
        notes: Option<String>,
    ) -> AssessmentResult<Assessment> {
        let template = self.registry.resolve(type_id)?;

        if let Some(client_id) = &client_id {
            self.touch_client(client_id.as_str(), Utc::now(), false);
        }

        let assessment = Assessment {
            id: Uuid::new_v4().to_string(),
            type_id: template.type_id.to_string(),
            name: template.display_name.to_string(),
            client_id: client_id.map(NonEmptyText::into_inner),
            notes: notes.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()),
            created_at: Utc::now(),
            status: AssessmentStatus::Pending,
            scorecard: None,
        };

        self.store.insert_assessment(assessment.clone())?;
        tracing::info!(
            assessment_id = %assessment.id,
            assessment_type = %assessment.type_id,
            "assessment created"
        );
        Ok(assessment)
    }

    /// Submits responses for a pending assessment and persists the scored
    /// result.
    ///
    /// Labels each response against the template, runs the scoring engine,
    /// and transitions the assessment atomically; either the whole scored
    /// state becomes visible or nothing changes. A flagged outcome escalates
    /// the linked client's risk level to high.
    ///
    /// # Errors
    ///
    /// - `NotFound` for an unknown assessment id
    /// - `TemplateNotFound` when the stored type is no longer registered
    /// - `InvalidResponses` for malformed response values
    /// - `AlreadyCompleted` when the assessment has already been scored
    pub fn complete(&self, id: &str, responses: &Responses) -> AssessmentResult<Assessment> {
        let pending = self.store.assessment(id)?;
        let template = self.registry.resolve(&pending.type_id)?;
        scoring::validate_responses(responses)?;

        let result = scoring::evaluate(&pending.type_id, responses);
        let status = match result.outcome {
            Outcome::Completed => AssessmentStatus::Completed,
            Outcome::Flagged => AssessmentStatus::Flagged,
        };
        let completed_at = Utc::now();
        let scorecard = Scorecard {
            responses: template.label_responses(responses),
            score: result.total_score,
            severity: result.severity,
            risk_flags: result.risk_flags,
            completed_at,
        };

        let completed = self
            .store
            .complete_assessment(id, scorecard, status)?;

        if let Some(client_id) = &completed.client_id {
            self.touch_client(
                client_id,
                completed_at,
                status == AssessmentStatus::Flagged,
            );
        }

        if status == AssessmentStatus::Flagged {
            tracing::warn!(
                assessment_id = %completed.id,
                assessment_type = %completed.type_id,
                score = completed.scorecard.as_ref().map(|s| s.score).unwrap_or_default(),
                "assessment flagged for clinical risk"
            );
        } else {
            tracing::info!(assessment_id = %completed.id, "assessment completed");
        }

        Ok(completed)
    }

    pub fn get(&self, id: &str) -> AssessmentResult<Assessment> {
        self.store.assessment(id)
    }

    /// All assessments, newest creation first.
    pub fn list(&self) -> Vec<Assessment> {
        self.store.list_assessments()
    }

    /// Scored assessments only, newest completion first.
    pub fn recent(&self, limit: usize) -> Vec<Assessment> {
        let mut scored: Vec<Assessment> = self
            .store
            .list_assessments()
            .into_iter()
            .filter(|a| a.status.is_scored())
            .collect();
        scored.sort_by(|a, b| b.completed_at().cmp(&a.completed_at()));
        scored.truncate(limit);
        scored
    }

    /// Headline stats plus the supporting record lists for the dashboard.
    pub fn dashboard(&self) -> DashboardOverview {
        let assessments = self.store.list_assessments();
        let clients = self.store.list_clients();

        let scored = assessments.iter().filter(|a| a.status.is_scored()).count();
        let flagged_assessments: Vec<Assessment> = assessments
            .iter()
            .filter(|a| a.status == AssessmentStatus::Flagged)
            .cloned()
            .collect();
        let completion_rate = if assessments.is_empty() {
            0
        } else {
            ((scored as f64 / assessments.len() as f64) * 100.0).round() as u32
        };

        let stats = DashboardStats {
            total_assessments: scored,
            active_clients: clients.len(),
            risk_flags: flagged_assessments.len(),
            completion_rate,
        };

        let high_risk_clients = clients
            .into_iter()
            .filter(|c| c.risk_level == RiskLevel::High)
            .collect();

        DashboardOverview {
            stats,
            recent_assessments: self.recent(self.cfg.recent_limit()),
            flagged_assessments,
            high_risk_clients,
        }
    }

    fn touch_client(&self, client_id: &str, at: DateTime<Utc>, escalate_risk: bool) {
        self.store.upsert_client(ClientUpsert {
            client_id: client_id.to_string(),
            default_name: format!("Client {client_id}"),
            default_email: format!(
                "{}@{}",
                client_id.to_lowercase(),
                self.cfg.contact_email_domain()
            ),
            contact_at: at,
            escalate_risk,
        });
    }
}
