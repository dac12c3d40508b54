mod advice;
mod disqualify;
mod rating;

use serde::{Deserialize, Serialize};

use super::answers::AnswerSet;
use super::i18n::Locale;

/// Collection amounts above this flag the "needs fixes" category and the
/// collections-resolution recommendation.
pub(crate) const COLLECTIONS_FIX_THRESHOLD: f64 = 500.0;

/// Engine inputs that are fixed per deployment rather than per prospect.
/// `reference_year` anchors the legacy year-count credit fields; the core
/// never reads a clock itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub reference_year: i32,
}

impl EngineConfig {
    pub const fn for_year(reference_year: i32) -> Self {
        Self { reference_year }
    }
}

/// Stateless scorer mapping a (possibly partial) answer set to a verdict,
/// rating, and advice. Pure over its inputs: the same answers, locale, and
/// config always produce the same result.
pub struct QualificationEngine {
    config: EngineConfig,
}

impl QualificationEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Produce the full qualification snapshot for a completed answer set.
    pub fn score(&self, answers: &AnswerSet, locale: Locale) -> QualificationResult {
        let events = answers.credit_events(self.config.reference_year);
        QualificationResult {
            qualified: disqualify::is_qualified(answers, &events),
            category: disqualify::classify(answers, &events),
            rating: rating::breakdown(answers, &events),
            recommendations: advice::recommendations(answers, &events, locale),
            positive_factors: advice::positive_factors(answers, locale),
        }
    }

    /// Hard-disqualifier check alone, without building the full result.
    pub fn is_qualified(&self, answers: &AnswerSet) -> bool {
        let events = answers.credit_events(self.config.reference_year);
        disqualify::is_qualified(answers, &events)
    }

    pub fn category(&self, answers: &AnswerSet) -> QualificationCategory {
        let events = answers.credit_events(self.config.reference_year);
        disqualify::classify(answers, &events)
    }

    pub fn rating(&self, answers: &AnswerSet) -> RatingBreakdown {
        let events = answers.credit_events(self.config.reference_year);
        rating::breakdown(answers, &events)
    }
}

/// Coarse verdict for the summary view and the client list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualificationCategory {
    Ready,
    FixesNeeded,
    NotReady,
}

impl QualificationCategory {
    pub const fn label(self) -> &'static str {
        match self {
            QualificationCategory::Ready => "ready",
            QualificationCategory::FixesNeeded => "fixes_needed",
            QualificationCategory::NotReady => "not_ready",
        }
    }
}

/// The five component scores plus their weighted overall, all on 0–10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingBreakdown {
    pub overall: u8,
    pub credit: u8,
    pub income: u8,
    pub down_payment: u8,
    pub documentation: u8,
    pub readiness: u8,
}

/// Broad grouping for a recommendation, so the UI can pick an icon and the
/// CRM can filter advice by area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Credit,
    DownPayment,
    Employment,
    Identity,
    Documentation,
    Timeline,
}

/// One piece of advice for the prospect. `actionable` separates items the
/// client can work on now from structural waiting-period issues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub title: String,
    pub description: String,
    pub actionable: bool,
}

/// Immutable snapshot derived from a frozen answer set. A new submission
/// produces a new result; nothing mutates an existing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualificationResult {
    pub qualified: bool,
    pub category: QualificationCategory,
    pub rating: RatingBreakdown,
    pub recommendations: Vec<Recommendation>,
    pub positive_factors: Vec<String>,
}
