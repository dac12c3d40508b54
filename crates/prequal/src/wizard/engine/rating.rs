use super::super::answers::{
    AnswerSet, CreditCategory, CreditEvent, CreditIssueKind, IdType, Timeline, TriState,
};
use super::RatingBreakdown;

const CREDIT_WEIGHT: f64 = 0.30;
const INCOME_WEIGHT: f64 = 0.25;
const DOWN_PAYMENT_WEIGHT: f64 = 0.20;
const DOCUMENTATION_WEIGHT: f64 = 0.15;
const READINESS_WEIGHT: f64 = 0.10;

/// Collections above this take the steeper credit deduction.
const LARGE_COLLECTION_THRESHOLD: f64 = 1000.0;

pub(crate) fn breakdown(answers: &AnswerSet, events: &[CreditEvent]) -> RatingBreakdown {
    let credit = credit_rating(answers, events);
    let income = income_rating(answers);
    let down_payment = down_payment_rating(answers);
    let documentation = documentation_rating(answers);
    let readiness = readiness_rating(answers);

    // f64::round is half-away-from-zero; every term here is non-negative, so
    // this is the required round-half-up.
    let overall = (f64::from(credit) * CREDIT_WEIGHT
        + f64::from(income) * INCOME_WEIGHT
        + f64::from(down_payment) * DOWN_PAYMENT_WEIGHT
        + f64::from(documentation) * DOCUMENTATION_WEIGHT
        + f64::from(readiness) * READINESS_WEIGHT)
        .round() as u8;

    RatingBreakdown {
        overall,
        credit,
        income,
        down_payment,
        documentation,
        readiness,
    }
}

fn credit_rating(answers: &AnswerSet, events: &[CreditEvent]) -> u8 {
    let base: u8 = match answers.credit_category {
        Some(CreditCategory::Excellent) => 10,
        Some(CreditCategory::Good) => 8,
        Some(CreditCategory::Fair) => 6,
        Some(CreditCategory::Poor) => 3,
        Some(CreditCategory::Unknown) | None => 0,
    };
    base.saturating_sub(credit_deduction(events))
}

/// At most one deduction applies: the first matching event in priority order
/// (structured bankruptcy > foreclosure > collections, then the legacy
/// record). Deductions never stack.
fn credit_deduction(events: &[CreditEvent]) -> u8 {
    for event in events {
        match event.kind {
            CreditIssueKind::Bankruptcy | CreditIssueKind::Foreclosure => {
                return if event.recent { 5 } else { 2 };
            }
            CreditIssueKind::Collections => {
                let large = event
                    .amount
                    .map(|amount| amount > LARGE_COLLECTION_THRESHOLD)
                    .unwrap_or(false);
                return if large { 3 } else { 1 };
            }
            CreditIssueKind::Medical | CreditIssueKind::Other => {}
        }
    }
    0
}

fn income_rating(answers: &AnswerSet) -> u8 {
    let Some(annual) = answers.annual_income() else {
        return 0;
    };
    let base: u8 = if annual >= 75_000.0 {
        10
    } else if annual >= 50_000.0 {
        8
    } else if annual >= 35_000.0 {
        6
    } else if annual >= 25_000.0 {
        4
    } else {
        2
    };

    if answers.short_self_employment() {
        base.saturating_sub(3)
    } else {
        base
    }
}

fn down_payment_rating(answers: &AnswerSet) -> u8 {
    match answers.down_payment_saved {
        TriState::Yes => match answers.down_payment_amount {
            Some(amount) if amount >= 50_000.0 => 10,
            Some(amount) if amount >= 25_000.0 => 8,
            Some(amount) if amount >= 15_000.0 => 6,
            Some(amount) if amount >= 5_000.0 => 4,
            Some(_) => 2,
            // Saved but amount not yet entered: mid-scale default.
            None => 5,
        },
        TriState::No if answers.assistance_open.is_yes() => 3,
        TriState::No | TriState::Unanswered => 0,
    }
}

fn documentation_rating(answers: &AnswerSet) -> u8 {
    match answers.id_type {
        Some(IdType::Ssn) => 10,
        Some(IdType::Itin) => 6,
        Some(IdType::None) | None => 0,
    }
}

fn readiness_rating(answers: &AnswerSet) -> u8 {
    match answers.timeline {
        Some(Timeline::Immediately) => 10,
        Some(Timeline::WithinThreeMonths) => 8,
        Some(Timeline::ThreeToSixMonths) => 6,
        Some(Timeline::SixToTwelveMonths) => 4,
        Some(Timeline::Exploring) | None => 2,
    }
}
