use super::common::*;
use crate::wizard::answers::{
    EmploymentType, IdType, PropertyType, ResidenceStatus, Timeline, TriState,
};
use crate::wizard::flow::{
    FlowRouter, QualificationRoute, RouterOutcome, StepId, WizardPosition, WizardSession,
};

#[test]
fn regular_route_orders_questions_as_specified() {
    let steps = FlowRouter::active_steps(&regular_walkthrough_answers());

    assert_eq!(
        steps,
        vec![
            StepId::EmploymentType,
            StepId::IdVerification,
            StepId::Timeline,
            StepId::ContactInfo,
            StepId::Income,
            StepId::RentOrOwn,
            StepId::CreditScore,
            StepId::DownPaymentSaved,
            StepId::DownPaymentAmount,
            StepId::CreditIssues,
        ]
    );
}

#[test]
fn renting_inserts_the_monthly_rent_question() {
    let mut answers = regular_walkthrough_answers();
    answers.rent_or_own = Some(ResidenceStatus::Rent);

    let steps = FlowRouter::active_steps(&answers);
    let rent_index = steps
        .iter()
        .position(|step| *step == StepId::MonthlyRent)
        .expect("rent question included");
    let credit_index = steps
        .iter()
        .position(|step| *step == StepId::CreditScore)
        .expect("credit question included");
    assert!(rent_index < credit_index);
}

#[test]
fn down_payment_fork_is_mutually_exclusive() {
    let mut answers = regular_walkthrough_answers();

    answers.down_payment_saved = TriState::Yes;
    let steps = FlowRouter::active_steps(&answers);
    assert!(steps.contains(&StepId::DownPaymentAmount));
    assert!(!steps.contains(&StepId::DownPaymentAssistance));

    answers.down_payment_saved = TriState::No;
    let steps = FlowRouter::active_steps(&answers);
    assert!(!steps.contains(&StepId::DownPaymentAmount));
    assert!(steps.contains(&StepId::DownPaymentAssistance));

    // Unanswered fork gates both alternatives out until resolved.
    answers.down_payment_saved = TriState::Unanswered;
    let steps = FlowRouter::active_steps(&answers);
    assert!(!steps.contains(&StepId::DownPaymentAmount));
    assert!(!steps.contains(&StepId::DownPaymentAssistance));
}

#[test]
fn self_employed_route_includes_business_questions() {
    let mut answers = fixes_answers();
    answers.timeline = Some(Timeline::Immediately);
    answers.property_type = Some(PropertyType::Other);

    assert_eq!(
        QualificationRoute::for_answers(&answers),
        QualificationRoute::SelfEmployed
    );

    let steps = FlowRouter::active_steps(&answers);
    assert_eq!(
        steps,
        vec![
            StepId::EmploymentType,
            StepId::IdVerification,
            StepId::Timeline,
            StepId::LoanPurpose,
            StepId::PropertyType,
            StepId::PropertyDetails,
            StepId::DownPaymentSaved,
            StepId::DownPaymentAssistance,
            StepId::BusinessDetails,
            StepId::BusinessAge,
            StepId::Industry,
            StepId::Income,
            StepId::Expenses,
            StepId::CreditIssues,
            StepId::ContactInfo,
        ]
    );
}

#[test]
fn loan_purpose_and_property_details_skip_when_inapplicable() {
    let mut answers = fixes_answers();
    answers.timeline = Some(Timeline::Exploring);
    answers.property_type = Some(PropertyType::Condo);

    let steps = FlowRouter::active_steps(&answers);
    assert!(!steps.contains(&StepId::LoanPurpose));
    assert!(!steps.contains(&StepId::PropertyDetails));
}

#[test]
fn out_of_range_step_clamps_to_a_boundary() {
    let answers = regular_walkthrough_answers();

    assert_eq!(
        FlowRouter::next_step(usize::MAX, &answers),
        RouterOutcome::Summary
    );
    // Below the first step clamps to the start of the sequence.
    assert_eq!(
        FlowRouter::next_step(0, &answers),
        RouterOutcome::Step(StepId::IdVerification)
    );
}

#[test]
fn total_steps_shrink_and_grow_with_branch_answers() {
    let mut answers = regular_walkthrough_answers();
    let baseline = FlowRouter::total_steps(&answers);

    answers.rent_or_own = Some(ResidenceStatus::Rent);
    assert_eq!(FlowRouter::total_steps(&answers), baseline + 1);

    answers.has_credit_issues = TriState::Yes;
    assert_eq!(FlowRouter::total_steps(&answers), baseline + 2);
}

#[test]
fn session_advances_only_when_the_current_step_is_answered() {
    let mut session = WizardSession::new();
    assert_eq!(
        session.position(),
        WizardPosition::Question(StepId::EmploymentType)
    );

    assert!(!session.can_advance());
    assert_eq!(
        session.advance(),
        WizardPosition::Question(StepId::EmploymentType)
    );

    session.answers_mut().employment_type = Some(EmploymentType::W2);
    assert!(session.can_advance());
    assert_eq!(
        session.advance(),
        WizardPosition::Question(StepId::IdVerification)
    );
}

#[test]
fn back_navigation_restores_the_prior_step_and_answer() {
    let mut session = WizardSession::new();
    session.answers_mut().employment_type = Some(EmploymentType::W2);
    session.advance();

    session.answers_mut().id_type = Some(IdType::Ssn);
    assert_eq!(session.advance(), WizardPosition::Question(StepId::Timeline));

    assert_eq!(
        session.back(),
        WizardPosition::Question(StepId::IdVerification)
    );
    assert_eq!(session.answers().id_type, Some(IdType::Ssn));

    // Going forward again lands exactly where we were.
    assert_eq!(session.advance(), WizardPosition::Question(StepId::Timeline));
}

#[test]
fn back_is_a_no_op_at_the_first_step() {
    let mut session = WizardSession::new();
    assert_eq!(
        session.back(),
        WizardPosition::Question(StepId::EmploymentType)
    );
}

#[test]
fn switching_employment_mid_flow_preserves_unrelated_answers() {
    let mut session = WizardSession::new();
    session.answers_mut().employment_type = Some(EmploymentType::W2);
    session.advance();
    session.answers_mut().id_type = Some(IdType::Ssn);
    session.advance();
    session.answers_mut().name = Some("Marisol Vega".to_string());
    session.answers_mut().phone = Some("515-555-0133".to_string());

    let regular_total = session.progress().total;

    session.answers_mut().employment_type = Some(EmploymentType::SelfEmployed1099);
    let self_employed_total = session.progress().total;
    assert_ne!(regular_total, self_employed_total);

    session.answers_mut().employment_type = Some(EmploymentType::W2);
    assert_eq!(session.progress().total, regular_total);
    assert_eq!(session.answers().name.as_deref(), Some("Marisol Vega"));
    assert_eq!(session.answers().phone.as_deref(), Some("515-555-0133"));
}

#[test]
fn full_regular_walkthrough_reaches_the_summary() {
    let mut session = WizardSession::from_answers(regular_walkthrough_answers());

    let total = session.progress().total;
    let mut visited = 0;
    for _ in 0..total {
        if session.position() == WizardPosition::Summary {
            break;
        }
        assert!(session.can_advance(), "step should be pre-answered");
        session.advance();
        visited += 1;
    }

    assert_eq!(session.position(), WizardPosition::Summary);
    assert_eq!(visited, total);
    assert_eq!(session.progress().position, session.progress().total);
}

#[test]
fn next_step_walks_the_same_sequence_as_the_tables() {
    let answers = regular_walkthrough_answers();
    let steps = FlowRouter::active_steps(&answers);

    for (index, _) in steps.iter().enumerate() {
        let expected = steps
            .get(index + 1)
            .map(|step| RouterOutcome::Step(*step))
            .unwrap_or(RouterOutcome::Summary);
        assert_eq!(FlowRouter::next_step(index + 1, &answers), expected);
    }
}
