use crate::wizard::answers::{
    AnswerSet, CreditCategory, EmploymentType, IdType, IncomeType, ResidenceStatus, Timeline,
    TimeframeBucket, TriState,
};
use crate::wizard::engine::{EngineConfig, QualificationEngine};

pub(super) const REFERENCE_YEAR: i32 = 2026;

pub(super) fn engine() -> QualificationEngine {
    QualificationEngine::new(EngineConfig::for_year(REFERENCE_YEAR))
}

/// Strong W-2 profile: every sub-rating lands on 10.
pub(super) fn ready_answers() -> AnswerSet {
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
        ..AnswerSet::default()
    }
}

/// Self-employed profile tripping several fixes-needed conditions at once.
pub(super) fn fixes_answers() -> AnswerSet {
    AnswerSet {
        employment_type: Some(EmploymentType::SelfEmployed1099),
        self_employed_years: Some(1),
        income: Some(40_000.0),
        income_type: IncomeType::Annual,
        credit_category: Some(CreditCategory::Fair),
        down_payment_saved: TriState::No,
        assistance_open: TriState::No,
        id_type: Some(IdType::Itin),
        timeline: Some(Timeline::SixToTwelveMonths),
        has_credit_issues: TriState::No,
        ..AnswerSet::default()
    }
}

/// Strong profile with a structured bankruptcy in the given bucket.
pub(super) fn bankruptcy_answers(timeframe: TimeframeBucket) -> AnswerSet {
    let mut answers = ready_answers();
    answers.has_credit_issues = TriState::Yes;
    let detail = answers.flag_issue(crate::wizard::answers::CreditIssueKind::Bankruptcy);
    detail.timeframe = Some(timeframe);
    answers
}

/// Fully answered regular-route profile for flow traversal tests.
pub(super) fn regular_walkthrough_answers() -> AnswerSet {
    let mut answers = ready_answers();
    answers.name = Some("Dana Whitfield".to_string());
    answers.phone = Some("515-555-0117".to_string());
    answers.email = Some("dana@example.com".to_string());
    answers.rent_or_own = Some(ResidenceStatus::Own);
    answers
}
