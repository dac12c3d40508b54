use super::super::answers::{
    AnswerSet, CreditCategory, CreditEvent, CreditIssueKind, EmploymentType, IdType,
};
use super::{QualificationCategory, COLLECTIONS_FIX_THRESHOLD};

/// Hard-disqualifier check. Any single hit forces `not_ready` regardless of
/// how strong the rest of the profile is.
pub(crate) fn is_qualified(answers: &AnswerSet, events: &[CreditEvent]) -> bool {
    if matches!(answers.id_type, Some(IdType::None)) {
        return false;
    }

    let has_income = answers.income.map(|income| income > 0.0).unwrap_or(false);
    if matches!(answers.employment_type, Some(EmploymentType::Unemployed)) && !has_income {
        return false;
    }

    if matches!(answers.credit_category, Some(CreditCategory::Poor))
        && !answers.down_payment_saved.is_yes()
    {
        return false;
    }

    // Bankruptcy/foreclosure inside the recovery window disqualifies no
    // matter which representation recorded it.
    if events.iter().any(|event| {
        matches!(
            event.kind,
            CreditIssueKind::Bankruptcy | CreditIssueKind::Foreclosure
        ) && event.recovery_pending
    }) {
        return false;
    }

    true
}

/// Coarse category: disqualifiers first, then the fixable-conditions sweep,
/// otherwise ready.
pub(crate) fn classify(answers: &AnswerSet, events: &[CreditEvent]) -> QualificationCategory {
    if !is_qualified(answers, events) {
        return QualificationCategory::NotReady;
    }

    let weak_credit = matches!(
        answers.credit_category,
        Some(CreditCategory::Poor) | Some(CreditCategory::Fair)
    );
    let large_collection = events.iter().any(|event| {
        event.kind == CreditIssueKind::Collections
            && event
                .amount
                .map(|amount| amount > COLLECTIONS_FIX_THRESHOLD)
                .unwrap_or(false)
    });
    let no_down_payment_path =
        answers.down_payment_saved.is_no() && !answers.assistance_open.is_yes();
    let itin_only = matches!(answers.id_type, Some(IdType::Itin));

    if weak_credit
        || answers.short_self_employment()
        || large_collection
        || no_down_payment_path
        || itin_only
    {
        QualificationCategory::FixesNeeded
    } else {
        QualificationCategory::Ready
    }
}
