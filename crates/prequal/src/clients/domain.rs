use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::wizard::answers::AnswerSet;
use crate::wizard::engine::QualificationResult;
use crate::wizard::i18n::Locale;

/// Identifier wrapper for stored client records.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClientId(pub String);

/// Soft-delete state: trashed records stay recoverable until purged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientStatus {
    Active,
    Trashed,
}

impl ClientStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ClientStatus::Active => "active",
            ClientStatus::Trashed => "trashed",
        }
    }
}

/// A completed wizard run persisted as a client record: the frozen answer set
/// plus the qualification result derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub client_id: ClientId,
    pub created_at: DateTime<Utc>,
    pub locale: Locale,
    pub answers: AnswerSet,
    pub result: QualificationResult,
    pub status: ClientStatus,
}

impl ClientRecord {
    pub fn display_name(&self) -> &str {
        self.answers
            .name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or("(unnamed lead)")
    }

    pub fn summary_view(&self) -> ClientSummaryView {
        ClientSummaryView {
            client_id: self.client_id.clone(),
            name: self.display_name().to_string(),
            phone: self.answers.phone.clone(),
            email: self.answers.email.clone(),
            category: self.result.category.label(),
            overall_rating: self.result.rating.overall,
            status: self.status.label(),
            created_at: self.created_at,
        }
    }

    pub fn detail_view(&self) -> ClientDetailView {
        ClientDetailView {
            client_id: self.client_id.clone(),
            created_at: self.created_at,
            status: self.status.label(),
            locale: self.locale,
            answers: self.answers.clone(),
            result: self.result.clone(),
        }
    }
}

/// Row shape for the client list view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientSummaryView {
    pub client_id: ClientId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub category: &'static str,
    pub overall_rating: u8,
    pub status: &'static str,
    pub created_at: DateTime<Utc>,
}

/// Full record shape for the client detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientDetailView {
    pub client_id: ClientId,
    pub created_at: DateTime<Utc>,
    pub status: &'static str,
    pub locale: Locale,
    pub answers: AnswerSet,
    pub result: QualificationResult,
}
