use super::super::answers::{
    AnswerSet, CreditCategory, CreditEvent, CreditIssueKind, EmploymentType, IdType,
    ADVISORY_WAIT_YEARS,
};
use super::super::i18n::{text, Locale, MessageKey};
use super::{Recommendation, RecommendationKind, COLLECTIONS_FIX_THRESHOLD};

fn recommendation(
    kind: RecommendationKind,
    title: MessageKey,
    body: MessageKey,
    actionable: bool,
    locale: Locale,
) -> Recommendation {
    Recommendation {
        kind,
        title: text(title, locale).to_string(),
        description: text(body, locale).to_string(),
        actionable,
    }
}

/// Fixed rule list, evaluated in order; each rule appends at most one entry.
/// Advisory only: rules fire independently of the category verdict.
pub(crate) fn recommendations(
    answers: &AnswerSet,
    events: &[CreditEvent],
    locale: Locale,
) -> Vec<Recommendation> {
    let mut advice = Vec::new();

    if matches!(
        answers.credit_category,
        Some(CreditCategory::Poor) | Some(CreditCategory::Fair)
    ) {
        advice.push(recommendation(
            RecommendationKind::Credit,
            MessageKey::CreditImprovementTitle,
            MessageKey::CreditImprovementBody,
            true,
            locale,
        ));
    }

    if !answers.down_payment_saved.is_yes() {
        advice.push(recommendation(
            RecommendationKind::DownPayment,
            MessageKey::DownPaymentAssistanceTitle,
            MessageKey::DownPaymentAssistanceBody,
            true,
            locale,
        ));
    }

    if answers.short_self_employment() {
        advice.push(recommendation(
            RecommendationKind::Employment,
            MessageKey::SelfEmploymentHistoryTitle,
            MessageKey::SelfEmploymentHistoryBody,
            false,
            locale,
        ));
    }

    // Mutually exclusive alternatives, never both.
    match answers.id_type {
        Some(IdType::None) => advice.push(recommendation(
            RecommendationKind::Identity,
            MessageKey::AlternativeDocumentationTitle,
            MessageKey::AlternativeDocumentationBody,
            true,
            locale,
        )),
        Some(IdType::Itin) => advice.push(recommendation(
            RecommendationKind::Documentation,
            MessageKey::ItinOptionsTitle,
            MessageKey::ItinOptionsBody,
            true,
            locale,
        )),
        _ => {}
    }

    // Recovery-wait and collections-resolution advice are alternatives off
    // the same credit-issues branch: a pending bankruptcy/foreclosure wait
    // suppresses the collections entry.
    let recovery_event = events.iter().find(|event| {
        matches!(
            event.kind,
            CreditIssueKind::Bankruptcy | CreditIssueKind::Foreclosure
        ) && event.years_elapsed < ADVISORY_WAIT_YEARS
    });

    if let Some(event) = recovery_event {
        let remaining = ADVISORY_WAIT_YEARS - event.years_elapsed;
        advice.push(Recommendation {
            kind: RecommendationKind::Credit,
            title: text(MessageKey::CreditEventRecoveryTitle, locale).to_string(),
            description: text(MessageKey::CreditEventRecoveryBody, locale)
                .replace("{years}", &remaining.to_string()),
            actionable: false,
        });
    } else if events.iter().any(|event| {
        event.kind == CreditIssueKind::Collections
            && event
                .amount
                .map(|amount| amount > COLLECTIONS_FIX_THRESHOLD)
                .unwrap_or(false)
    }) {
        advice.push(recommendation(
            RecommendationKind::Credit,
            MessageKey::CollectionsResolutionTitle,
            MessageKey::CollectionsResolutionBody,
            true,
            locale,
        ));
    }

    advice
}

/// Positive factors in fixed order; absent conditions produce no entry.
pub(crate) fn positive_factors(answers: &AnswerSet, locale: Locale) -> Vec<String> {
    let mut factors = Vec::new();

    if answers.first_time_buyer.is_yes() {
        factors.push(text(MessageKey::FirstTimeBuyerFactor, locale).to_string());
    }
    if matches!(answers.employment_type, Some(EmploymentType::W2)) {
        factors.push(text(MessageKey::StableEmploymentFactor, locale).to_string());
    }
    if matches!(
        answers.credit_category,
        Some(CreditCategory::Good) | Some(CreditCategory::Excellent)
    ) {
        factors.push(text(MessageKey::GoodCreditFactor, locale).to_string());
    }
    if answers.down_payment_saved.is_yes() {
        factors.push(text(MessageKey::DownPaymentReadyFactor, locale).to_string());
    }

    factors
}
