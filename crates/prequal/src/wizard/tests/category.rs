use super::common::*;
use crate::wizard::answers::{
    CreditCategory, CreditIssueKind, EmploymentType, IdType, TimeframeBucket, TriState,
};
use crate::wizard::engine::QualificationCategory;
use crate::wizard::i18n::Locale;

#[test]
fn strong_profile_is_ready() {
    assert_eq!(
        engine().category(&ready_answers()),
        QualificationCategory::Ready
    );
}

#[test]
fn multiple_fix_conditions_classify_as_fixes_needed() {
    let answers = fixes_answers();

    // No hard disqualifier fires despite fair credit and the ITIN.
    assert!(engine().is_qualified(&answers));
    assert_eq!(
        engine().category(&answers),
        QualificationCategory::FixesNeeded
    );
}

#[test]
fn missing_identification_overrides_a_strong_profile() {
    let mut answers = ready_answers();
    answers.id_type = Some(IdType::None);
    answers.down_payment_amount = Some(100_000.0);

    assert!(!engine().is_qualified(&answers));
    assert_eq!(engine().category(&answers), QualificationCategory::NotReady);
}

#[test]
fn unemployment_without_income_disqualifies() {
    let mut answers = ready_answers();
    answers.employment_type = Some(EmploymentType::Unemployed);
    answers.income = None;
    assert!(!engine().is_qualified(&answers));

    answers.income = Some(0.0);
    assert!(!engine().is_qualified(&answers));

    answers.income = Some(30_000.0);
    assert!(engine().is_qualified(&answers));
}

#[test]
fn poor_credit_needs_a_saved_down_payment() {
    let mut answers = ready_answers();
    answers.credit_category = Some(CreditCategory::Poor);
    assert!(engine().is_qualified(&answers));
    // Poor credit still needs fixes even though it clears the disqualifier.
    assert_eq!(
        engine().category(&answers),
        QualificationCategory::FixesNeeded
    );

    answers.down_payment_saved = TriState::No;
    assert_eq!(engine().category(&answers), QualificationCategory::NotReady);

    answers.down_payment_saved = TriState::Unanswered;
    assert_eq!(engine().category(&answers), QualificationCategory::NotReady);
}

#[test]
fn bankruptcy_recovery_window_follows_bucket_set() {
    assert_eq!(
        engine().category(&bankruptcy_answers(TimeframeBucket::TwoYears)),
        QualificationCategory::NotReady
    );
    // Three years out is past the recovery window.
    assert_ne!(
        engine().category(&bankruptcy_answers(TimeframeBucket::ThreeYears)),
        QualificationCategory::NotReady
    );
}

#[test]
fn legacy_bankruptcy_applies_the_same_two_year_rule() {
    let mut answers = ready_answers();
    answers.credit_issue_type = Some(CreditIssueKind::Bankruptcy);

    answers.credit_issue_year = Some(REFERENCE_YEAR - 1);
    assert_eq!(engine().category(&answers), QualificationCategory::NotReady);

    answers.credit_issue_year = Some(REFERENCE_YEAR - 2);
    assert_ne!(engine().category(&answers), QualificationCategory::NotReady);
}

#[test]
fn large_collections_balance_needs_fixes() {
    let mut answers = ready_answers();
    answers.has_credit_issues = TriState::Yes;
    answers.flag_issue(CreditIssueKind::Collections).amount = Some(750.0);
    assert_eq!(
        engine().category(&answers),
        QualificationCategory::FixesNeeded
    );

    // Exactly at the threshold does not trip the rule.
    answers.flag_issue(CreditIssueKind::Collections).amount = Some(500.0);
    assert_eq!(engine().category(&answers), QualificationCategory::Ready);
}

#[test]
fn stale_issue_selection_ignored_after_answering_no() {
    let mut answers = bankruptcy_answers(TimeframeBucket::OneToThreeMonths);
    answers.has_credit_issues = TriState::No;

    assert!(engine().is_qualified(&answers));
    assert_eq!(engine().category(&answers), QualificationCategory::Ready);
}

#[test]
fn unanswered_self_employment_years_count_as_short() {
    let mut answers = ready_answers();
    answers.employment_type = Some(EmploymentType::SelfEmployed1099);
    answers.self_employed_years = None;
    assert_eq!(
        engine().category(&answers),
        QualificationCategory::FixesNeeded
    );

    answers.self_employed_years = Some(5);
    assert_eq!(engine().category(&answers), QualificationCategory::Ready);
}

#[test]
fn scoring_is_deterministic_across_repeat_calls() {
    let answers = fixes_answers();
    for locale in [Locale::En, Locale::Es] {
        let first = engine().score(&answers, locale);
        let second = engine().score(&answers, locale);
        assert_eq!(first, second);
    }
}
