use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::domain::{ClientId, ClientRecord, ClientStatus};
use super::export::{clients_to_csv, ExportError};
use super::repository::{ClientRepository, RepositoryError};
use crate::wizard::answers::AnswerSet;
use crate::wizard::engine::{QualificationEngine, QualificationResult};
use crate::wizard::i18n::Locale;

/// Service composing the qualification engine and the client repository.
///
/// Id and timestamp assignment happen here, at the persistence boundary; the
/// wizard core stays free of clocks and sequence state.
pub struct LeadDeskService<R> {
    repository: Arc<R>,
    engine: QualificationEngine,
}

static CLIENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_client_id() -> ClientId {
    let id = CLIENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ClientId(format!("client-{id:06}"))
}

impl<R> LeadDeskService<R>
where
    R: ClientRepository + 'static,
{
    pub fn new(repository: Arc<R>, engine: QualificationEngine) -> Self {
        Self { repository, engine }
    }

    /// Score a finished answer set and persist it as an active client record.
    pub fn intake(&self, answers: AnswerSet, locale: Locale) -> Result<ClientRecord, LeadDeskError> {
        let result = self.engine.score(&answers, locale);
        let record = ClientRecord {
            client_id: next_client_id(),
            created_at: Utc::now(),
            locale,
            answers,
            result,
            status: ClientStatus::Active,
        };
        Ok(self.repository.insert(record)?)
    }

    /// Score without persisting, for the mid-flow summary preview.
    pub fn preview(&self, answers: &AnswerSet, locale: Locale) -> QualificationResult {
        self.engine.score(answers, locale)
    }

    /// Records in the requested view, ordered by client id for stable lists.
    pub fn list(&self, status: ClientStatus) -> Result<Vec<ClientRecord>, LeadDeskError> {
        let mut records = self.repository.list(status)?;
        records.sort_by(|a, b| a.client_id.cmp(&b.client_id));
        Ok(records)
    }

    pub fn get(&self, id: &ClientId) -> Result<ClientRecord, LeadDeskError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Soft-delete: the record moves to the trash view and stays recoverable.
    pub fn trash(&self, id: &ClientId) -> Result<ClientRecord, LeadDeskError> {
        self.set_status(id, ClientStatus::Trashed)
    }

    pub fn restore(&self, id: &ClientId) -> Result<ClientRecord, LeadDeskError> {
        self.set_status(id, ClientStatus::Active)
    }

    fn set_status(&self, id: &ClientId, status: ClientStatus) -> Result<ClientRecord, LeadDeskError> {
        let mut record = self.get(id)?;
        record.status = status;
        self.repository.update(record.clone())?;
        Ok(record)
    }

    /// Permanent deletion, allowed only from the trash view.
    pub fn delete(&self, id: &ClientId) -> Result<(), LeadDeskError> {
        let record = self.get(id)?;
        if record.status != ClientStatus::Trashed {
            return Err(LeadDeskError::NotTrashed(id.0.clone()));
        }
        self.repository.remove(id)?;
        Ok(())
    }

    /// CSV of the active client list for download.
    pub fn export_csv(&self) -> Result<String, LeadDeskError> {
        let records = self.list(ClientStatus::Active)?;
        Ok(clients_to_csv(&records)?)
    }
}

/// Error raised by the client directory service.
#[derive(Debug, thiserror::Error)]
pub enum LeadDeskError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("client {0} must be trashed before permanent deletion")]
    NotTrashed(String),
}
