use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::clients::domain::{ClientId, ClientRecord, ClientStatus};
use crate::clients::repository::{ClientRepository, RepositoryError};
use crate::clients::router::client_router;
use crate::clients::service::LeadDeskService;
use crate::wizard::answers::{
    AnswerSet, CreditCategory, EmploymentType, IdType, IncomeType, Timeline, TriState,
};
use crate::wizard::engine::{EngineConfig, QualificationEngine};

pub(super) fn qualified_answers() -> AnswerSet {
    AnswerSet {
        employment_type: Some(EmploymentType::W2),
        income: Some(80_000.0),
        income_type: IncomeType::Annual,
        credit_category: Some(CreditCategory::Excellent),
        down_payment_saved: TriState::Yes,
        down_payment_amount: Some(60_000.0),
        id_type: Some(IdType::Ssn),
        timeline: Some(Timeline::Immediately),
        has_credit_issues: TriState::No,
        name: Some("Dana Whitfield".to_string()),
        phone: Some("515-555-0117".to_string()),
        email: Some("dana@example.com".to_string()),
        ..AnswerSet::default()
    }
}

pub(super) fn build_service() -> (LeadDeskService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let engine = QualificationEngine::new(EngineConfig::for_year(2026));
    let service = LeadDeskService::new(repository.clone(), engine);
    (service, repository)
}

pub(super) fn router_with_service(service: LeadDeskService<MemoryRepository>) -> axum::Router {
    client_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<ClientId, ClientRecord>>>,
}

impl ClientRepository for MemoryRepository {
    fn insert(&self, record: ClientRecord) -> Result<ClientRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.client_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.client_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ClientRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.client_id) {
            guard.insert(record.client_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &ClientId) -> Result<Option<ClientRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self, status: ClientStatus) -> Result<Vec<ClientRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| record.status == status)
            .cloned()
            .collect())
    }

    fn remove(&self, id: &ClientId) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.remove(id).map(|_| ()).ok_or(RepositoryError::NotFound)
    }
}

pub(super) struct UnavailableRepository;

impl ClientRepository for UnavailableRepository {
    fn insert(&self, _record: ClientRecord) -> Result<ClientRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn update(&self, _record: ClientRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn fetch(&self, _id: &ClientId) -> Result<Option<ClientRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn list(&self, _status: ClientStatus) -> Result<Vec<ClientRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn remove(&self, _id: &ClientId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
