use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Three-value answer state for yes/no questions.
///
/// `Unanswered` blocks progression in the wizard, while `No` is a valid
/// terminal answer with its own branching consequences, so the two must never
/// collapse into one another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriState {
    #[default]
    Unanswered,
    Yes,
    No,
}

impl TriState {
    pub const fn is_yes(self) -> bool {
        matches!(self, TriState::Yes)
    }

    pub const fn is_no(self) -> bool {
        matches!(self, TriState::No)
    }

    pub const fn is_answered(self) -> bool {
        !matches!(self, TriState::Unanswered)
    }
}

/// How soon the prospect wants to buy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeline {
    #[serde(rename = "immediately")]
    Immediately,
    #[serde(rename = "within_3_months")]
    WithinThreeMonths,
    #[serde(rename = "3_to_6_months")]
    ThreeToSixMonths,
    #[serde(rename = "6_to_12_months")]
    SixToTwelveMonths,
    #[serde(rename = "exploring")]
    Exploring,
}

impl Timeline {
    pub const fn label(self) -> &'static str {
        match self {
            Timeline::Immediately => "immediately",
            Timeline::WithinThreeMonths => "within_3_months",
            Timeline::ThreeToSixMonths => "3_to_6_months",
            Timeline::SixToTwelveMonths => "6_to_12_months",
            Timeline::Exploring => "exploring",
        }
    }
}

/// Employment classification driving route selection and income scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentType {
    #[serde(rename = "w2")]
    W2,
    #[serde(rename = "self_employed_1099")]
    SelfEmployed1099,
    #[serde(rename = "retired")]
    Retired,
    #[serde(rename = "unemployed")]
    Unemployed,
    #[serde(rename = "other")]
    Other,
}

/// Coarse self-reported credit standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditCategory {
    Excellent,
    Good,
    Fair,
    Poor,
    Unknown,
}

/// Identity documentation the prospect can provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdType {
    Ssn,
    Itin,
    None,
}

/// Whether the declared income figure is annual or monthly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeType {
    #[default]
    Annual,
    Monthly,
}

/// Current housing situation, asked on the regular route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResidenceStatus {
    Rent,
    Own,
    Other,
}

/// Why the prospect needs financing, asked on the self-employed route when the
/// timeline is immediate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanPurpose {
    Purchase,
    Refinance,
    Investment,
}

/// Property category for the self-employed route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    SingleFamily,
    Condo,
    MultiFamily,
    Other,
}

/// Kinds of derogatory credit events a prospect can flag.
///
/// Declaration order doubles as scoring priority: when several kinds are
/// flagged, only the first matching kind contributes a rating deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditIssueKind {
    Bankruptcy,
    Foreclosure,
    Collections,
    Medical,
    Other,
}

/// How long ago a flagged credit event happened, as coarse buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeframeBucket {
    #[serde(rename = "1-3months")]
    OneToThreeMonths,
    #[serde(rename = "4-6months")]
    FourToSixMonths,
    #[serde(rename = "7-9months")]
    SevenToNineMonths,
    #[serde(rename = "1year")]
    OneYear,
    #[serde(rename = "2years")]
    TwoYears,
    #[serde(rename = "3years")]
    ThreeYears,
    #[serde(rename = "4years_plus")]
    FourYearsPlus,
}

impl TimeframeBucket {
    /// Whole years elapsed since the event, as implied by the bucket.
    pub(crate) const fn years_elapsed(self) -> u8 {
        match self {
            TimeframeBucket::OneToThreeMonths
            | TimeframeBucket::FourToSixMonths
            | TimeframeBucket::SevenToNineMonths => 0,
            TimeframeBucket::OneYear => 1,
            TimeframeBucket::TwoYears => 2,
            TimeframeBucket::ThreeYears => 3,
            TimeframeBucket::FourYearsPlus => 4,
        }
    }

    /// Buckets inside the hard-disqualification window for bankruptcies and
    /// foreclosures.
    pub(crate) const fn within_recovery_window(self) -> bool {
        matches!(
            self,
            TimeframeBucket::OneToThreeMonths
                | TimeframeBucket::FourToSixMonths
                | TimeframeBucket::SevenToNineMonths
                | TimeframeBucket::OneYear
                | TimeframeBucket::TwoYears
        )
    }

    /// Buckets inside the last year, which take the steeper rating deduction.
    pub(crate) const fn within_last_year(self) -> bool {
        matches!(
            self,
            TimeframeBucket::OneToThreeMonths
                | TimeframeBucket::FourToSixMonths
                | TimeframeBucket::SevenToNineMonths
                | TimeframeBucket::OneYear
        )
    }
}

/// Detail sub-record for a flagged credit issue. Created when the issue is
/// selected and never left partially undefined afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditIssueDetail {
    pub selected: bool,
    pub amount: Option<f64>,
    pub timeframe: Option<TimeframeBucket>,
    pub in_collection: TriState,
}

/// Recovery window after a bankruptcy or foreclosure during which the lead is
/// hard-disqualified. Deliberately distinct from [`LEGACY_RECENT_EVENT_YEARS`]
/// and [`ADVISORY_WAIT_YEARS`]; the thresholds are separate business policy.
pub const RECOVERY_WINDOW_YEARS: u8 = 2;

/// Year-count window applied to legacy single-issue records when deciding the
/// steep rating deduction.
pub const LEGACY_RECENT_EVENT_YEARS: u8 = 3;

/// Softer advisory window quoted in recommendation text.
pub const ADVISORY_WAIT_YEARS: u8 = 4;

/// Which representation a normalized credit event came from. Legacy
/// single-issue fields use year counts where the structured map uses
/// timeframe buckets, so a few thresholds differ by source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditEventSource {
    Structured,
    Legacy,
}

/// Normalized credit event produced at the answer-set boundary.
///
/// Scoring rules evaluate this one representation instead of branching on the
/// structured map and the legacy fields separately. Structured entries come
/// first in kind priority order; the legacy event, if any, comes last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditEvent {
    pub kind: CreditIssueKind,
    pub source: CreditEventSource,
    pub amount: Option<f64>,
    pub years_elapsed: u8,
    /// Inside the recency window that takes the steeper rating deduction.
    pub recent: bool,
    /// Inside the hard-disqualification window.
    pub recovery_pending: bool,
}

/// The accumulated record of a prospect's questionnaire responses.
///
/// Created empty at wizard start and mutated field by field; most fields stay
/// unset at intermediate steps, and every consumer treats unset as a normal
/// state rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerSet {
    pub timeline: Option<Timeline>,
    pub first_time_buyer: TriState,
    pub employment_type: Option<EmploymentType>,
    /// Free-text detail collected when `employment_type` is `other`.
    pub employment_detail: Option<String>,
    pub self_employed_years: Option<u8>,
    pub income: Option<f64>,
    pub income_type: IncomeType,
    pub credit_category: Option<CreditCategory>,
    /// Numeric refinement of `credit_category`, in [300, 850].
    pub credit_score: Option<u16>,
    pub down_payment_saved: TriState,
    pub down_payment_amount: Option<f64>,
    pub assistance_open: TriState,
    pub monthly_debts: Option<String>,
    pub rent_or_own: Option<ResidenceStatus>,
    pub monthly_rent: Option<f64>,
    pub has_credit_issues: TriState,
    pub credit_issues: BTreeMap<CreditIssueKind, CreditIssueDetail>,
    /// Legacy single-issue fields kept for records captured before the
    /// structured map existed.
    pub credit_issue_type: Option<CreditIssueKind>,
    pub credit_issue_year: Option<i32>,
    pub credit_issue_amount: Option<f64>,
    pub id_type: Option<IdType>,
    pub loan_purpose: Option<LoanPurpose>,
    pub property_type: Option<PropertyType>,
    pub property_details: Option<String>,
    pub business_name: Option<String>,
    pub industry: Option<String>,
    pub monthly_expenses: Option<f64>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub comments: Option<String>,
}

impl AnswerSet {
    /// Flag a credit issue, creating its detail record in the same step so a
    /// selected issue is never left without one.
    pub fn flag_issue(&mut self, kind: CreditIssueKind) -> &mut CreditIssueDetail {
        let detail = self.credit_issues.entry(kind).or_default();
        detail.selected = true;
        detail
    }

    /// Declared income normalized to an annual figure.
    pub fn annual_income(&self) -> Option<f64> {
        self.income.map(|income| match self.income_type {
            IncomeType::Annual => income,
            IncomeType::Monthly => income * 12.0,
        })
    }

    pub fn is_self_employed(&self) -> bool {
        matches!(self.employment_type, Some(EmploymentType::SelfEmployed1099))
    }

    /// Self-employed with less than two years of history. An unanswered year
    /// count on the self-employed path lands in the lowest bucket.
    pub fn short_self_employment(&self) -> bool {
        self.is_self_employed() && self.self_employed_years.unwrap_or(0) < 2
    }

    /// Canonicalize both credit-issue representations into one ordered event
    /// list. `reference_year` anchors the legacy year-count fields.
    ///
    /// Structured entries are skipped entirely when the prospect answered "no"
    /// to having credit issues, so stale selections from an abandoned branch
    /// never reach the scoring rules.
    pub fn credit_events(&self, reference_year: i32) -> Vec<CreditEvent> {
        let mut events = Vec::new();

        if !self.has_credit_issues.is_no() {
            for (kind, detail) in &self.credit_issues {
                if !detail.selected {
                    continue;
                }
                events.push(CreditEvent {
                    kind: *kind,
                    source: CreditEventSource::Structured,
                    amount: detail.amount,
                    years_elapsed: detail
                        .timeframe
                        .map(TimeframeBucket::years_elapsed)
                        .unwrap_or(ADVISORY_WAIT_YEARS),
                    recent: detail
                        .timeframe
                        .map(TimeframeBucket::within_last_year)
                        .unwrap_or(false),
                    recovery_pending: detail
                        .timeframe
                        .map(TimeframeBucket::within_recovery_window)
                        .unwrap_or(false),
                });
            }
        }

        if let Some(kind) = self.credit_issue_type {
            let years_elapsed = self
                .credit_issue_year
                .map(|year| (reference_year - year).clamp(0, i32::from(u8::MAX)) as u8)
                .unwrap_or(ADVISORY_WAIT_YEARS);
            events.push(CreditEvent {
                kind,
                source: CreditEventSource::Legacy,
                amount: self.credit_issue_amount,
                years_elapsed,
                recent: years_elapsed < LEGACY_RECENT_EVENT_YEARS,
                recovery_pending: years_elapsed < RECOVERY_WINDOW_YEARS,
            });
        }

        events
    }
}
