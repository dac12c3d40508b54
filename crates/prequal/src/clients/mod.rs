//! Client directory: completed wizard runs persisted as records manageable
//! through list, detail, and trash views, with CSV export for the CRM.

pub mod domain;
pub mod export;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{ClientDetailView, ClientId, ClientRecord, ClientStatus, ClientSummaryView};
pub use export::{clients_to_csv, ExportError};
pub use repository::{ClientRepository, RepositoryError};
pub use router::client_router;
pub use service::{LeadDeskError, LeadDeskService};
