use super::domain::{ClientId, ClientRecord, ClientStatus};

/// Storage abstraction so the service and router can be exercised against
/// in-memory fakes. The reference deployment keeps everything in process
/// memory; a database-backed adapter would implement the same trait.
pub trait ClientRepository: Send + Sync {
    fn insert(&self, record: ClientRecord) -> Result<ClientRecord, RepositoryError>;
    fn update(&self, record: ClientRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ClientId) -> Result<Option<ClientRecord>, RepositoryError>;
    fn list(&self, status: ClientStatus) -> Result<Vec<ClientRecord>, RepositoryError>;
    fn remove(&self, id: &ClientId) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
