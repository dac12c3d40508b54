use serde::{Deserialize, Serialize};

use super::answers::{AnswerSet, PropertyType, ResidenceStatus, Timeline};

/// Identifier for a single wizard question. The UI maps each id to the
/// component it renders; the router only decides ordering and inclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    EmploymentType,
    IdVerification,
    Timeline,
    LoanPurpose,
    PropertyType,
    PropertyDetails,
    ContactInfo,
    Income,
    RentOrOwn,
    MonthlyRent,
    CreditScore,
    DownPaymentSaved,
    DownPaymentAmount,
    DownPaymentAssistance,
    BusinessDetails,
    BusinessAge,
    Industry,
    Expenses,
    CreditIssues,
    CreditIssueDetails,
}

impl StepId {
    pub const fn label(self) -> &'static str {
        match self {
            StepId::EmploymentType => "employment_type",
            StepId::IdVerification => "id_verification",
            StepId::Timeline => "timeline",
            StepId::LoanPurpose => "loan_purpose",
            StepId::PropertyType => "property_type",
            StepId::PropertyDetails => "property_details",
            StepId::ContactInfo => "contact_info",
            StepId::Income => "income",
            StepId::RentOrOwn => "rent_or_own",
            StepId::MonthlyRent => "monthly_rent",
            StepId::CreditScore => "credit_score",
            StepId::DownPaymentSaved => "down_payment_saved",
            StepId::DownPaymentAmount => "down_payment_amount",
            StepId::DownPaymentAssistance => "down_payment_assistance",
            StepId::BusinessDetails => "business_details",
            StepId::BusinessAge => "business_age",
            StepId::Industry => "industry",
            StepId::Expenses => "expenses",
            StepId::CreditIssues => "credit_issues",
            StepId::CreditIssueDetails => "credit_issue_details",
        }
    }
}

/// Which of the two named question sequences applies to an answer set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualificationRoute {
    Regular,
    SelfEmployed,
}

impl QualificationRoute {
    /// Route selection keys off employment type alone; an unanswered
    /// employment question keeps the prospect on the regular route, whose
    /// leading steps both routes share.
    pub fn for_answers(answers: &AnswerSet) -> Self {
        if answers.is_self_employed() {
            QualificationRoute::SelfEmployed
        } else {
            QualificationRoute::Regular
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            QualificationRoute::Regular => "regular",
            QualificationRoute::SelfEmployed => "self_employed",
        }
    }
}

/// Result of asking the router for the next question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterOutcome {
    Step(StepId),
    Summary,
}

impl RouterOutcome {
    pub const fn label(self) -> &'static str {
        match self {
            RouterOutcome::Step(step) => step.label(),
            RouterOutcome::Summary => "summary",
        }
    }
}

/// One entry in a declarative route table: the question id plus the predicate
/// deciding whether the question applies to the current answers.
struct StepDescriptor {
    id: StepId,
    include: fn(&AnswerSet) -> bool,
}

fn always(_: &AnswerSet) -> bool {
    true
}

fn renting(answers: &AnswerSet) -> bool {
    matches!(answers.rent_or_own, Some(ResidenceStatus::Rent))
}

fn saved_down_payment(answers: &AnswerSet) -> bool {
    answers.down_payment_saved.is_yes()
}

fn no_down_payment(answers: &AnswerSet) -> bool {
    answers.down_payment_saved.is_no()
}

fn has_credit_issues(answers: &AnswerSet) -> bool {
    answers.has_credit_issues.is_yes()
}

fn other_property(answers: &AnswerSet) -> bool {
    matches!(answers.property_type, Some(PropertyType::Other))
}

fn buying_immediately(answers: &AnswerSet) -> bool {
    matches!(answers.timeline, Some(Timeline::Immediately))
}

const REGULAR_ROUTE: &[StepDescriptor] = &[
    StepDescriptor { id: StepId::EmploymentType, include: always },
    StepDescriptor { id: StepId::IdVerification, include: always },
    StepDescriptor { id: StepId::Timeline, include: always },
    StepDescriptor { id: StepId::ContactInfo, include: always },
    StepDescriptor { id: StepId::Income, include: always },
    StepDescriptor { id: StepId::RentOrOwn, include: always },
    StepDescriptor { id: StepId::MonthlyRent, include: renting },
    StepDescriptor { id: StepId::CreditScore, include: always },
    StepDescriptor { id: StepId::DownPaymentSaved, include: always },
    StepDescriptor { id: StepId::DownPaymentAmount, include: saved_down_payment },
    StepDescriptor { id: StepId::DownPaymentAssistance, include: no_down_payment },
    StepDescriptor { id: StepId::CreditIssues, include: always },
    StepDescriptor { id: StepId::CreditIssueDetails, include: has_credit_issues },
];

const SELF_EMPLOYED_ROUTE: &[StepDescriptor] = &[
    StepDescriptor { id: StepId::EmploymentType, include: always },
    StepDescriptor { id: StepId::IdVerification, include: always },
    StepDescriptor { id: StepId::Timeline, include: always },
    StepDescriptor { id: StepId::LoanPurpose, include: buying_immediately },
    StepDescriptor { id: StepId::PropertyType, include: always },
    StepDescriptor { id: StepId::PropertyDetails, include: other_property },
    StepDescriptor { id: StepId::DownPaymentSaved, include: always },
    StepDescriptor { id: StepId::DownPaymentAmount, include: saved_down_payment },
    StepDescriptor { id: StepId::DownPaymentAssistance, include: no_down_payment },
    StepDescriptor { id: StepId::BusinessDetails, include: always },
    StepDescriptor { id: StepId::BusinessAge, include: always },
    StepDescriptor { id: StepId::Industry, include: always },
    StepDescriptor { id: StepId::Income, include: always },
    StepDescriptor { id: StepId::Expenses, include: always },
    StepDescriptor { id: StepId::CreditIssues, include: always },
    StepDescriptor { id: StepId::CreditIssueDetails, include: has_credit_issues },
    StepDescriptor { id: StepId::ContactInfo, include: always },
];

/// Stateless traversal of the declarative route tables.
pub struct FlowRouter;

impl FlowRouter {
    fn table(route: QualificationRoute) -> &'static [StepDescriptor] {
        match route {
            QualificationRoute::Regular => REGULAR_ROUTE,
            QualificationRoute::SelfEmployed => SELF_EMPLOYED_ROUTE,
        }
    }

    /// Questions currently applicable, in order. Recomputed on every call so
    /// branch-affecting answer changes immediately reshape the flow.
    pub fn active_steps(answers: &AnswerSet) -> Vec<StepId> {
        Self::table(QualificationRoute::for_answers(answers))
            .iter()
            .filter(|descriptor| (descriptor.include)(answers))
            .map(|descriptor| descriptor.id)
            .collect()
    }

    pub fn first_step(answers: &AnswerSet) -> StepId {
        Self::active_steps(answers)
            .first()
            .copied()
            .unwrap_or(StepId::EmploymentType)
    }

    /// Total applicable questions for the progress indicator.
    pub fn total_steps(answers: &AnswerSet) -> usize {
        Self::active_steps(answers).len()
    }

    /// 1-based position of a step within the active sequence, if it is
    /// currently applicable.
    pub fn position(step: StepId, answers: &AnswerSet) -> Option<usize> {
        Self::active_steps(answers)
            .iter()
            .position(|candidate| *candidate == step)
            .map(|index| index + 1)
    }

    /// Next question after the 1-based `current_step`, or the summary marker
    /// once all applicable questions are exhausted. Out-of-range input clamps
    /// to the nearest boundary instead of erroring.
    pub fn next_step(current_step: usize, answers: &AnswerSet) -> RouterOutcome {
        let steps = Self::active_steps(answers);
        let current = current_step.max(1);
        if current >= steps.len() {
            RouterOutcome::Summary
        } else {
            RouterOutcome::Step(steps[current])
        }
    }

    /// Per-question validity predicate: whether the fields a step collects are
    /// filled in. Consults exactly the fields the route tables branch on, so
    /// "Next"-button gating and branching can never disagree.
    pub fn step_complete(step: StepId, answers: &AnswerSet) -> bool {
        fn filled(value: &Option<String>) -> bool {
            value
                .as_deref()
                .map(|text| !text.trim().is_empty())
                .unwrap_or(false)
        }

        match step {
            StepId::EmploymentType => answers.employment_type.is_some(),
            StepId::IdVerification => answers.id_type.is_some(),
            StepId::Timeline => answers.timeline.is_some(),
            StepId::LoanPurpose => answers.loan_purpose.is_some(),
            StepId::PropertyType => answers.property_type.is_some(),
            StepId::PropertyDetails => filled(&answers.property_details),
            StepId::ContactInfo => filled(&answers.name) && filled(&answers.phone),
            StepId::Income => answers.income.is_some(),
            StepId::RentOrOwn => answers.rent_or_own.is_some(),
            StepId::MonthlyRent => answers.monthly_rent.is_some(),
            StepId::CreditScore => answers.credit_category.is_some(),
            StepId::DownPaymentSaved => answers.down_payment_saved.is_answered(),
            StepId::DownPaymentAmount => answers.down_payment_amount.is_some(),
            StepId::DownPaymentAssistance => answers.assistance_open.is_answered(),
            StepId::BusinessDetails => filled(&answers.business_name),
            StepId::BusinessAge => answers.self_employed_years.is_some(),
            StepId::Industry => filled(&answers.industry),
            StepId::Expenses => answers.monthly_expenses.is_some(),
            StepId::CreditIssues => answers.has_credit_issues.is_answered(),
            StepId::CreditIssueDetails => {
                answers.credit_issues.values().any(|detail| detail.selected)
                    || answers.credit_issue_type.is_some()
            }
        }
    }
}

/// Where a wizard session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPosition {
    Question(StepId),
    Summary,
}

/// Progress indicator values, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepProgress {
    pub position: usize,
    pub total: usize,
}

/// Owns the mutable answer set for one prospect plus the visited-step stack.
///
/// Back navigation pops the stack rather than recomputing forward logic in
/// reverse; forward branching depends on answers and is not invertible from a
/// step number alone.
#[derive(Debug, Clone)]
pub struct WizardSession {
    answers: AnswerSet,
    history: Vec<StepId>,
    position: WizardPosition,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardSession {
    pub fn new() -> Self {
        Self::from_answers(AnswerSet::default())
    }

    pub fn from_answers(answers: AnswerSet) -> Self {
        let position = WizardPosition::Question(FlowRouter::first_step(&answers));
        Self {
            answers,
            history: Vec::new(),
            position,
        }
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn answers_mut(&mut self) -> &mut AnswerSet {
        &mut self.answers
    }

    pub fn into_answers(self) -> AnswerSet {
        self.answers
    }

    pub fn position(&self) -> WizardPosition {
        self.position
    }

    pub fn can_advance(&self) -> bool {
        match self.position {
            WizardPosition::Question(step) => FlowRouter::step_complete(step, &self.answers),
            WizardPosition::Summary => false,
        }
    }

    /// Move forward one step. Stays put while the current question is
    /// incomplete; the caller surfaces that via [`Self::can_advance`].
    pub fn advance(&mut self) -> WizardPosition {
        if let WizardPosition::Question(step) = self.position {
            if FlowRouter::step_complete(step, &self.answers) {
                // The current step can drop out of the active sequence when a
                // branch-determining answer changed underneath it; fall back
                // to the visited count so traversal stays deterministic.
                let current_index = FlowRouter::position(step, &self.answers)
                    .unwrap_or_else(|| self.history.len().max(1));
                self.history.push(step);
                self.position = match FlowRouter::next_step(current_index, &self.answers) {
                    RouterOutcome::Step(next) => WizardPosition::Question(next),
                    RouterOutcome::Summary => WizardPosition::Summary,
                };
            }
        }
        self.position
    }

    /// Return to the previously visited question, leaving every answer in
    /// place. A no-op at the first step.
    pub fn back(&mut self) -> WizardPosition {
        if let Some(step) = self.history.pop() {
            self.position = WizardPosition::Question(step);
        }
        self.position
    }

    pub fn progress(&self) -> StepProgress {
        let total = FlowRouter::total_steps(&self.answers);
        let position = match self.position {
            WizardPosition::Question(step) => {
                FlowRouter::position(step, &self.answers).unwrap_or(total)
            }
            WizardPosition::Summary => total,
        };
        StepProgress { position, total }
    }
}
