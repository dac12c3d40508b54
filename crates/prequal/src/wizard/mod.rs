//! Lead-qualification wizard: the answer model, the branching flow router,
//! and the scoring engine that turns a finished answer set into a verdict.

pub mod answers;
pub mod engine;
pub mod flow;
pub mod i18n;

#[cfg(test)]
mod tests;

pub use answers::{
    AnswerSet, CreditCategory, CreditEvent, CreditEventSource, CreditIssueDetail, CreditIssueKind,
    EmploymentType, IdType, IncomeType, LoanPurpose, PropertyType, ResidenceStatus, Timeline,
    TimeframeBucket, TriState,
};
pub use engine::{
    EngineConfig, QualificationCategory, QualificationEngine, QualificationResult,
    RatingBreakdown, Recommendation, RecommendationKind,
};
pub use flow::{
    FlowRouter, QualificationRoute, RouterOutcome, StepId, StepProgress, WizardPosition,
    WizardSession,
};
pub use i18n::Locale;
