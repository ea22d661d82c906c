//! Client read model.
//!
//! Clients are written only as a side effect of assessment creation and
//! completion (see [`assessments`](super::assessments)); this service covers
//! the read paths the dashboard and client pages need.

use crate::error::{AssessmentError, AssessmentResult};
use crate::model::{Client, ClientDetail};
use crate::store::Store;
use mindgauge_types::RiskLevel;
use std::sync::Arc;

/// Service for querying client records.
#[derive(Clone)]
pub struct ClientService {
    store: Arc<dyn Store>,
}

impl ClientService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// All clients, most recent contact first.
    pub fn list(&self) -> Vec<Client> {
        self.store.list_clients()
    }

    /// A single client with their assessment history, newest completion
    /// first (pending assessments trail the scored ones).
    ///
    /// # Errors
    ///
    /// Returns `ClientNotFound` when the id is unknown.
    pub fn get(&self, id: &str) -> AssessmentResult<ClientDetail> {
        let client = self
            .store
            .client(id)
            .ok_or_else(|| AssessmentError::ClientNotFound(id.to_string()))?;

        let mut assessments: Vec<_> = self
            .store
            .list_assessments()
            .into_iter()
            .filter(|a| a.client_id.as_deref() == Some(id))
            .collect();
        assessments.sort_by(|a, b| b.completed_at().cmp(&a.completed_at()));

        Ok(ClientDetail {
            client,
            assessments,
        })
    }

    /// Clients currently escalated to high risk.
    pub fn high_risk(&self) -> Vec<Client> {
        self.store
            .list_clients()
            .into_iter()
            .filter(|c| c.risk_level == RiskLevel::High)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CoreConfig;
    use crate::model::Responses;
    use crate::services::assessments::AssessmentService;
    use crate::store::MemoryStore;
    use crate::templates::TemplateRegistry;
    use mindgauge_types::NonEmptyText;

    fn services() -> (AssessmentService, ClientService) {
        let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
        let assessments = AssessmentService::new(
            Arc::new(CoreConfig::default()),
            Arc::new(TemplateRegistry::builtin()),
            store.clone(),
        );
        (assessments, ClientService::new(store))
    }

    fn client_id(id: &str) -> NonEmptyText {
        NonEmptyText::new(id).unwrap()
    }

    #[test]
    fn unknown_client_is_client_not_found() {
        let (_, clients) = services();
        let err = clients.get("ghost").unwrap_err();
        assert!(matches!(err, AssessmentError::ClientNotFound(id) if id == "ghost"));
    }

    #[test]
    fn detail_contains_only_that_clients_assessments() {
        let (assessments, clients) = services();
        let own = assessments
            .create("PHQ-9", Some(client_id("C-1")), None)
            .unwrap();
        assessments
            .create("PHQ-9", Some(client_id("C-2")), None)
            .unwrap();
        assessments
            .complete(&own.id, &Responses::new())
            .unwrap();

        let detail = clients.get("C-1").unwrap();
        assert_eq!(detail.client.id, "C-1");
        assert_eq!(detail.assessments.len(), 1);
        assert_eq!(detail.assessments[0].id, own.id);
    }

    #[test]
    fn detail_orders_scored_before_pending() {
        let (assessments, clients) = services();
        let scored = assessments
            .create("GAD-7", Some(client_id("C-1")), None)
            .unwrap();
        assessments
            .create("GAD-7", Some(client_id("C-1")), None)
            .unwrap();
        assessments
            .complete(&scored.id, &Responses::new())
            .unwrap();

        let detail = clients.get("C-1").unwrap();
        assert_eq!(detail.assessments[0].id, scored.id);
        assert!(detail.assessments[1].scorecard.is_none());
    }

    #[test]
    fn high_risk_filter_matches_escalated_clients() {
        let (assessments, clients) = services();

        let flagged = assessments
            .create("PHQ-9", Some(client_id("C-risk")), None)
            .unwrap();
        let mut responses: Responses = (1..=8).map(|id| (id, 0)).collect();
        responses.insert(9, 1);
        assessments.complete(&flagged.id, &responses).unwrap();

        assessments
            .create("PHQ-9", Some(client_id("C-calm")), None)
            .unwrap();

        let high = clients.high_risk();
        assert_eq!(high.len(), 1);
        assert_eq!(high[0].id, "C-risk");
    }
}
