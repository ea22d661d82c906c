//! Persistence seam for assessments and clients.
//!
//! The lifecycle services treat the store as the single source of truth —
//! there is no secondary in-memory mirror. Implementations must make the two
//! shared-mutable-state touch points atomic:
//!
//! - `complete_assessment` only transitions an assessment out of `pending`,
//!   so a repeated or concurrent submission can never overwrite a scorecard;
//! - `upsert_client` is a single find-or-create plus conditional field
//!   update, so concurrent completions for the same client cannot lose an
//!   escalation.
//!
//! [`MemoryStore`] is the in-process implementation used by the binaries and
//! the test suite.

use crate::error::{AssessmentError, AssessmentResult};
use crate::model::{Assessment, Client, Scorecard};
use chrono::{DateTime, Utc};
use mindgauge_types::{AssessmentStatus, RiskLevel};
use std::collections::HashMap;
use std::sync::RwLock;

/// Instruction for the atomic client find-or-create.
///
/// The defaults are only applied when the client does not exist yet; an
/// existing record keeps its name, email, and (unless escalating) risk level.
#[derive(Debug, Clone)]
pub struct ClientUpsert {
    pub client_id: String,
    pub default_name: String,
    pub default_email: String,
    pub contact_at: DateTime<Utc>,
    /// Raise the risk level to high. Existing high risk is never demoted.
    pub escalate_risk: bool,
}

pub trait Store: Send + Sync {
    /// Persists a freshly created assessment.
    fn insert_assessment(&self, assessment: Assessment) -> AssessmentResult<()>;

    /// Loads an assessment, failing with `NotFound` on a miss.
    fn assessment(&self, id: &str) -> AssessmentResult<Assessment>;

    /// All assessments, newest creation first.
    fn list_assessments(&self) -> Vec<Assessment>;

    /// Atomically transitions a pending assessment to its scored state.
    ///
    /// Fails with `NotFound` for an unknown id and `AlreadyCompleted` when
    /// the assessment has left `pending`; the stored scorecard is untouched
    /// in both cases.
    fn complete_assessment(
        &self,
        id: &str,
        scorecard: Scorecard,
        status: AssessmentStatus,
    ) -> AssessmentResult<Assessment>;

    /// Atomic find-or-create plus conditional update of a client record.
    fn upsert_client(&self, upsert: ClientUpsert) -> Client;

    fn client(&self, id: &str) -> Option<Client>;

    /// All clients, most recent contact first.
    fn list_clients(&self) -> Vec<Client>;
}

/// In-memory store over `RwLock`-guarded maps.
#[derive(Debug, Default)]
pub struct MemoryStore {
    assessments: RwLock<HashMap<String, Assessment>>,
    clients: RwLock<HashMap<String, Client>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

// A poisoned lock only means another thread panicked mid-operation; the data
// is still the source of truth, so recover the guard rather than propagate.
macro_rules! read_lock {
    ($lock:expr) => {
        $lock.read().unwrap_or_else(|e| e.into_inner())
    };
}

macro_rules! write_lock {
    ($lock:expr) => {
        $lock.write().unwrap_or_else(|e| e.into_inner())
    };
}

impl Store for MemoryStore {
    fn insert_assessment(&self, assessment: Assessment) -> AssessmentResult<()> {
        let mut assessments = write_lock!(self.assessments);
        if assessments.contains_key(&assessment.id) {
            return Err(AssessmentError::InvalidInput(format!(
                "assessment id {} already exists",
                assessment.id
            )));
        }
        assessments.insert(assessment.id.clone(), assessment);
        Ok(())
    }

    fn assessment(&self, id: &str) -> AssessmentResult<Assessment> {
        read_lock!(self.assessments)
            .get(id)
            .cloned()
            .ok_or_else(|| AssessmentError::NotFound(id.to_string()))
    }

    fn list_assessments(&self) -> Vec<Assessment> {
        let mut all: Vec<Assessment> = read_lock!(self.assessments).values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        all
    }

    fn complete_assessment(
        &self,
        id: &str,
        scorecard: Scorecard,
        status: AssessmentStatus,
    ) -> AssessmentResult<Assessment> {
        let mut assessments = write_lock!(self.assessments);
        let assessment = assessments
            .get_mut(id)
            .ok_or_else(|| AssessmentError::NotFound(id.to_string()))?;

        if assessment.status != AssessmentStatus::Pending {
            return Err(AssessmentError::AlreadyCompleted(id.to_string()));
        }

        assessment.status = status;
        assessment.scorecard = Some(scorecard);
        Ok(assessment.clone())
    }

    fn upsert_client(&self, upsert: ClientUpsert) -> Client {
        let mut clients = write_lock!(self.clients);
        let client = clients
            .entry(upsert.client_id.clone())
            .or_insert_with(|| Client {
                id: upsert.client_id.clone(),
                name: upsert.default_name,
                email: upsert.default_email,
                risk_level: RiskLevel::Low,
                last_contact: None,
            });

        client.last_contact = Some(upsert.contact_at);
        if upsert.escalate_risk {
            client.risk_level = client.risk_level.escalated_to(RiskLevel::High);
        }
        client.clone()
    }

    fn client(&self, id: &str) -> Option<Client> {
        read_lock!(self.clients).get(id).cloned()
    }

    fn list_clients(&self) -> Vec<Client> {
        let mut all: Vec<Client> = read_lock!(self.clients).values().cloned().collect();
        all.sort_by(|a, b| b.last_contact.cmp(&a.last_contact));
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LabeledResponse;

    fn pending(id: &str) -> Assessment {
        Assessment {
            id: id.into(),
            type_id: "PHQ-9".into(),
            name: "PHQ-9".into(),
            client_id: None,
            notes: None,
            created_at: Utc::now(),
            status: AssessmentStatus::Pending,
            scorecard: None,
        }
    }

    fn scorecard(score: i64) -> Scorecard {
        Scorecard {
            responses: vec![LabeledResponse {
                question_id: 1,
                value: score,
                label: "Several days".into(),
            }],
            score,
            severity: "Minimal Depression".into(),
            risk_flags: vec![],
            completed_at: Utc::now(),
        }
    }

    #[test]
    fn insert_then_load_round_trips() {
        let store = MemoryStore::new();
        store.insert_assessment(pending("a-1")).unwrap();
        let loaded = store.assessment("a-1").unwrap();
        assert_eq!(loaded.status, AssessmentStatus::Pending);
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let store = MemoryStore::new();
        store.insert_assessment(pending("a-1")).unwrap();
        let err = store.insert_assessment(pending("a-1")).unwrap_err();
        assert!(matches!(err, AssessmentError::InvalidInput(_)));
    }

    #[test]
    fn missing_assessment_is_not_found() {
        let store = MemoryStore::new();
        let err = store.assessment("nope").unwrap_err();
        assert!(matches!(err, AssessmentError::NotFound(id) if id == "nope"));
    }

    #[test]
    fn complete_transitions_from_pending_exactly_once() {
        let store = MemoryStore::new();
        store.insert_assessment(pending("a-1")).unwrap();

        let done = store
            .complete_assessment("a-1", scorecard(1), AssessmentStatus::Completed)
            .unwrap();
        assert_eq!(done.status, AssessmentStatus::Completed);
        assert_eq!(done.scorecard.as_ref().unwrap().score, 1);

        // A second submission with a different score must not overwrite.
        let err = store
            .complete_assessment("a-1", scorecard(9), AssessmentStatus::Flagged)
            .unwrap_err();
        assert!(matches!(err, AssessmentError::AlreadyCompleted(_)));

        let kept = store.assessment("a-1").unwrap();
        assert_eq!(kept.status, AssessmentStatus::Completed);
        assert_eq!(kept.scorecard.unwrap().score, 1);
    }

    #[test]
    fn upsert_creates_with_defaults_then_only_touches_contact() {
        let store = MemoryStore::new();
        let t0 = Utc::now();

        let created = store.upsert_client(ClientUpsert {
            client_id: "c-1".into(),
            default_name: "Client c-1".into(),
            default_email: "c-1@example.com".into(),
            contact_at: t0,
            escalate_risk: false,
        });
        assert_eq!(created.name, "Client c-1");
        assert_eq!(created.risk_level, RiskLevel::Low);
        assert_eq!(created.last_contact, Some(t0));

        let t1 = Utc::now();
        let updated = store.upsert_client(ClientUpsert {
            client_id: "c-1".into(),
            default_name: "ignored".into(),
            default_email: "ignored@example.com".into(),
            contact_at: t1,
            escalate_risk: false,
        });
        assert_eq!(updated.name, "Client c-1");
        assert_eq!(updated.email, "c-1@example.com");
        assert_eq!(updated.last_contact, Some(t1));
    }

    #[test]
    fn upsert_escalates_risk_and_never_demotes() {
        let store = MemoryStore::new();
        let escalate = |escalate_risk| ClientUpsert {
            client_id: "c-1".into(),
            default_name: "Client c-1".into(),
            default_email: "c-1@example.com".into(),
            contact_at: Utc::now(),
            escalate_risk,
        };

        assert_eq!(store.upsert_client(escalate(true)).risk_level, RiskLevel::High);
        // A later merely-completed assessment leaves high risk in place.
        assert_eq!(store.upsert_client(escalate(false)).risk_level, RiskLevel::High);
    }

    #[test]
    fn listings_are_newest_first() {
        let store = MemoryStore::new();
        let mut first = pending("a-1");
        first.created_at = Utc::now() - chrono::Duration::minutes(5);
        store.insert_assessment(first).unwrap();
        store.insert_assessment(pending("a-2")).unwrap();

        let ids: Vec<String> = store.list_assessments().into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["a-2".to_string(), "a-1".to_string()]);
    }
}
