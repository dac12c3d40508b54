use crate::infra::{scoring_engine, InMemoryClientRepository};
use chrono::{Datelike, Local};
use clap::Args;
use prequal::clients::{ClientStatus, LeadDeskService};
use prequal::config::ScoringConfig;
use prequal::error::AppError;
use prequal::wizard::{
    AnswerSet, CreditCategory, CreditIssueKind, EmploymentType, IdType, IncomeType, Locale,
    PropertyType, ResidenceStatus, TimeframeBucket, Timeline, TriState, WizardPosition,
    WizardSession,
};
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Locale for generated recommendations (en or es)
    #[arg(long, value_parser = crate::infra::parse_locale)]
    pub(crate) locale: Option<Locale>,
    /// Reference year anchoring legacy credit-event fields (defaults to today)
    #[arg(long)]
    pub(crate) reference_year: Option<i32>,
    /// Skip the client directory portion of the demo
    #[arg(long)]
    pub(crate) skip_directory: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        locale,
        reference_year,
        skip_directory,
    } = args;

    let locale = locale.unwrap_or_default();
    let reference_year = reference_year.unwrap_or_else(|| Local::now().year());
    let config = ScoringConfig {
        reference_year: Some(reference_year),
    };

    println!("Lead qualification demo (reference year {reference_year})");

    let regular = walk_session("Regular route", regular_lead());
    let self_employed = walk_session("Self-employed route", self_employed_lead());

    if skip_directory {
        return Ok(());
    }

    println!("\nClient directory demo");
    let repository = Arc::new(InMemoryClientRepository::default());
    let service = LeadDeskService::new(repository, scoring_engine(&config));

    service.intake(regular, locale)?;
    let second = service.intake(self_employed, locale)?;

    for record in service.list(ClientStatus::Active)? {
        let view = record.summary_view();
        println!(
            "- {} {} -> {} ({}/10)",
            view.client_id.0, view.name, view.category, view.overall_rating
        );
        for recommendation in &record.result.recommendations {
            let tag = if recommendation.actionable {
                "actionable"
            } else {
                "advisory"
            };
            println!("    [{tag}] {}", recommendation.title);
        }
        for factor in &record.result.positive_factors {
            println!("    strength: {factor}");
        }
    }

    service.trash(&second.client_id)?;
    println!(
        "\nTrashed {}; active directory exports as CSV:",
        second.client_id.0
    );
    println!("{}", service.export_csv()?);

    service.restore(&second.client_id)?;
    println!(
        "Restored {}; directory holds {} active records",
        second.client_id.0,
        service.list(ClientStatus::Active)?.len()
    );

    Ok(())
}

/// Walk a pre-answered session step by step, printing each question label.
fn walk_session(title: &str, answers: AnswerSet) -> AnswerSet {
    let mut session = WizardSession::from_answers(answers);
    let total = session.progress().total;
    println!("\n{title} ({total} questions)");

    let mut number = 0;
    while let WizardPosition::Question(step) = session.position() {
        number += 1;
        println!("  {number:>2}. {}", step.label());
        if !session.can_advance() {
            println!("      (unanswered, stopping here)");
            break;
        }
        session.advance();
    }
    if session.position() == WizardPosition::Summary {
        println!("  -> summary reached");
    }

    session.answers().clone()
}

fn regular_lead() -> AnswerSet {
    AnswerSet {
        employment_type: Some(EmploymentType::W2),
        id_type: Some(IdType::Ssn),
        timeline: Some(Timeline::WithinThreeMonths),
        name: Some("Dana Whitfield".to_string()),
        phone: Some("515-555-0117".to_string()),
        email: Some("dana@example.com".to_string()),
        income: Some(82_000.0),
        income_type: IncomeType::Annual,
        rent_or_own: Some(ResidenceStatus::Rent),
        monthly_rent: Some(1_450.0),
        credit_category: Some(CreditCategory::Good),
        down_payment_saved: TriState::Yes,
        down_payment_amount: Some(32_000.0),
        has_credit_issues: TriState::No,
        first_time_buyer: TriState::Yes,
        ..AnswerSet::default()
    }
}

fn self_employed_lead() -> AnswerSet {
    let mut answers = AnswerSet {
        employment_type: Some(EmploymentType::SelfEmployed1099),
        id_type: Some(IdType::Itin),
        timeline: Some(Timeline::ThreeToSixMonths),
        property_type: Some(PropertyType::SingleFamily),
        down_payment_saved: TriState::No,
        assistance_open: TriState::Yes,
        business_name: Some("Vega Tile & Stone".to_string()),
        self_employed_years: Some(1),
        industry: Some("Construction".to_string()),
        income: Some(5_800.0),
        income_type: IncomeType::Monthly,
        monthly_expenses: Some(2_100.0),
        has_credit_issues: TriState::Yes,
        name: Some("Marisol Vega".to_string()),
        phone: Some("515-555-0133".to_string()),
        email: Some("marisol@example.com".to_string()),
        ..AnswerSet::default()
    };

    let detail = answers.flag_issue(CreditIssueKind::Collections);
    detail.amount = Some(1_800.0);
    detail.timeframe = Some(TimeframeBucket::OneYear);
    detail.in_collection = TriState::Yes;

    answers
}
