use chrono::{Datelike, Local};
use metrics_exporter_prometheus::PrometheusHandle;
use prequal::clients::{ClientId, ClientRecord, ClientRepository, ClientStatus, RepositoryError};
use prequal::config::ScoringConfig;
use prequal::wizard::{EngineConfig, Locale, QualificationEngine};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryClientRepository {
    records: Arc<Mutex<HashMap<ClientId, ClientRecord>>>,
}

impl ClientRepository for InMemoryClientRepository {
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

/// Engine anchored to the configured reference year, falling back to the
/// current calendar year when no override is set.
pub(crate) fn scoring_engine(config: &ScoringConfig) -> QualificationEngine {
    let reference_year = config
        .reference_year
        .unwrap_or_else(|| Local::now().year());
    QualificationEngine::new(EngineConfig::for_year(reference_year))
}

pub(crate) fn parse_locale(raw: &str) -> Result<Locale, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "en" => Ok(Locale::En),
        "es" => Ok(Locale::Es),
        other => Err(format!("unsupported locale '{other}' (expected en or es)")),
    }
}
