use serde::{Deserialize, Serialize};

/// Number of statements in the risk-attitude section of the questionnaire.
pub const STATEMENT_COUNT: usize = 12;

/// Five-point agreement scale used by every risk-attitude statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LikertChoice {
    StronglyDisagree,
    Disagree,
    NoStrongOpinion,
    Agree,
    StronglyAgree,
}

impl LikertChoice {
    /// Display order used by the questionnaire (most agreeable first).
    pub const fn ordered() -> [Self; 5] {
        [
            Self::StronglyAgree,
            Self::Agree,
            Self::NoStrongOpinion,
            Self::Disagree,
            Self::StronglyDisagree,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::StronglyDisagree => "Strongly disagree",
            Self::Disagree => "Disagree",
            Self::NoStrongOpinion => "No strong opinion",
            Self::Agree => "Agree",
            Self::StronglyAgree => "Strongly agree",
        }
    }

    /// Raw value on the 1..=5 scale, before any reverse scoring.
    pub const fn value(self) -> u8 {
        match self {
            Self::StronglyDisagree => 1,
            Self::Disagree => 2,
            Self::NoStrongOpinion => 3,
            Self::Agree => 4,
            Self::StronglyAgree => 5,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|choice| choice.label() == label.trim())
    }
}

/// Direction a statement is scored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementScoring {
    /// Agreement signals appetite for risk.
    Normal,
    /// Agreement signals caution; the raw value is inverted.
    Reverse,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AttitudeStatement {
    pub number: usize,
    pub text: &'static str,
    pub scoring: StatementScoring,
}

impl AttitudeStatement {
    const fn new(number: usize, text: &'static str, scoring: StatementScoring) -> Self {
        Self {
            number,
            text,
            scoring,
        }
    }

    /// Contribution of `choice` to the attitude total.
    pub const fn scored_value(&self, choice: LikertChoice) -> u8 {
        match self.scoring {
            StatementScoring::Normal => choice.value(),
            StatementScoring::Reverse => 6 - choice.value(),
        }
    }
}

/// Fixed statement list; answer position `i` always refers to `ATTITUDE_STATEMENTS[i]`.
pub const ATTITUDE_STATEMENTS: [AttitudeStatement; STATEMENT_COUNT] = [
    AttitudeStatement::new(
        1,
        "People who know me would describe me as cautious with money.",
        StatementScoring::Reverse,
    ),
    AttitudeStatement::new(
        2,
        "I’m comfortable investing in assets that can fall in value as well as rise (e.g., equities).",
        StatementScoring::Normal,
    ),
    AttitudeStatement::new(
        3,
        "I usually prefer safer options even if that reduces long-term return potential.",
        StatementScoring::Reverse,
    ),
    AttitudeStatement::new(
        4,
        "I tend to take a long time to decide on investment choices.",
        StatementScoring::Reverse,
    ),
    AttitudeStatement::new(
        5,
        "I see financial risk more as an opportunity than a danger.",
        StatementScoring::Normal,
    ),
    AttitudeStatement::new(
        6,
        "I generally prefer cash deposits over market-based investments.",
        StatementScoring::Reverse,
    ),
    AttitudeStatement::new(
        7,
        "I find investing concepts fairly easy to understand.",
        StatementScoring::Normal,
    ),
    AttitudeStatement::new(
        8,
        "I’m willing to accept meaningful ups and downs to pursue higher returns.",
        StatementScoring::Normal,
    ),
    AttitudeStatement::new(
        9,
        "I have limited experience with funds, shares, or market investing.",
        StatementScoring::Reverse,
    ),
    AttitudeStatement::new(
        10,
        "I often feel anxious about investment decisions after I make them.",
        StatementScoring::Reverse,
    ),
    AttitudeStatement::new(
        11,
        "I’d rather accept higher investment risk than simply save more to reach my goals.",
        StatementScoring::Normal,
    ),
    AttitudeStatement::new(
        12,
        "I’m not comfortable with the short-term swings that markets can experience.",
        StatementScoring::Reverse,
    ),
];

/// Statement whose agreement signals discomfort with market swings.
pub const SWING_DISCOMFORT_STATEMENT: usize = 12;

/// Seven ordered risk categories, most cautious first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    VeryCautious,
    Cautious,
    ModeratelyCautious,
    Balanced,
    ModeratelyAdventurous,
    Adventurous,
    VeryAdventurous,
}

impl RiskBand {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::VeryCautious,
            Self::Cautious,
            Self::ModeratelyCautious,
            Self::Balanced,
            Self::ModeratelyAdventurous,
            Self::Adventurous,
            Self::VeryAdventurous,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryCautious => "Very Cautious (0–25)",
            Self::Cautious => "Cautious (26–33)",
            Self::ModeratelyCautious => "Moderately Cautious (34–44)",
            Self::Balanced => "Balanced (45–56)",
            Self::ModeratelyAdventurous => "Moderately Adventurous (57–67)",
            Self::Adventurous => "Adventurous (68–79)",
            Self::VeryAdventurous => "Very Adventurous (80–100)",
        }
    }

    /// Buckets a 0..=100 attitude score using inclusive upper bounds.
    pub const fn from_score(score: u8) -> Self {
        match score {
            0..=25 => Self::VeryCautious,
            26..=33 => Self::Cautious,
            34..=44 => Self::ModeratelyCautious,
            45..=56 => Self::Balanced,
            57..=67 => Self::ModeratelyAdventurous,
            68..=79 => Self::Adventurous,
            _ => Self::VeryAdventurous,
        }
    }

    /// Maximum strategic allocation caps for the band.
    pub const fn policy_limits(self) -> AllocationLimits {
        match self {
            Self::VeryCautious => AllocationLimits::new(0, 100, 0),
            Self::Cautious => AllocationLimits::new(20, 80, 0),
            Self::ModeratelyCautious => AllocationLimits::new(30, 70, 0),
            Self::Balanced => AllocationLimits::new(40, 60, 0),
            Self::ModeratelyAdventurous => AllocationLimits::new(60, 35, 5),
            Self::Adventurous => AllocationLimits::new(70, 20, 10),
            Self::VeryAdventurous => AllocationLimits::new(70, 0, 30),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityBand {
    Low,
    Medium,
    High,
}

impl CapacityBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low capacity for loss",
            Self::Medium => "Medium capacity for loss",
            Self::High => "High capacity for loss",
        }
    }

    pub const fn from_points(points: u8) -> Self {
        match points {
            0..=10 => Self::Low,
            11..=20 => Self::Medium,
            _ => Self::High,
        }
    }

    /// Most adventurous attitude band the capacity policy allows.
    pub const fn max_allowed_band(self) -> RiskBand {
        match self {
            Self::Low => RiskBand::ModeratelyCautious,
            Self::Medium => RiskBand::Balanced,
            Self::High => RiskBand::VeryAdventurous,
        }
    }
}

/// Integer percentage caps per asset class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AllocationLimits {
    pub max_equity: u8,
    pub max_sukuk: u8,
    pub max_alternatives: u8,
}

impl AllocationLimits {
    pub const fn new(max_equity: u8, max_sukuk: u8, max_alternatives: u8) -> Self {
        Self {
            max_equity,
            max_sukuk,
            max_alternatives,
        }
    }
}

/// The five capacity-for-loss questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityQuestion {
    EmergencyFund,
    IncomeStability,
    WithdrawalLikelihood,
    DebtBurden,
    PortfolioDependence,
}

impl CapacityQuestion {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::EmergencyFund,
            Self::IncomeStability,
            Self::WithdrawalLikelihood,
            Self::DebtBurden,
            Self::PortfolioDependence,
        ]
    }

    pub const fn prompt(self) -> &'static str {
        match self {
            Self::EmergencyFund => {
                "Months of essential expenses held in readily accessible cash/cash-equivalents"
            }
            Self::IncomeStability => "Income stability",
            Self::WithdrawalLikelihood => {
                "Likelihood of needing a large withdrawal in the next 3 years"
            }
            Self::DebtBurden => {
                "Debt burden (excluding a manageable primary residence mortgage, if applicable)"
            }
            Self::PortfolioDependence => {
                "Dependence on this portfolio for near-term living costs (next 3–5 years)"
            }
        }
    }

    /// Short name used in reports and file notes.
    pub const fn label(self) -> &'static str {
        match self {
            Self::EmergencyFund => "Emergency fund",
            Self::IncomeStability => "Income stability",
            Self::WithdrawalLikelihood => "Withdrawal likelihood (3y)",
            Self::DebtBurden => "Debt burden",
            Self::PortfolioDependence => "Portfolio dependence (3–5y)",
        }
    }

    /// Name reported when the question is left unanswered.
    pub const fn missing_label(self) -> &'static str {
        match self {
            Self::EmergencyFund => "Capacity: emergency fund",
            Self::IncomeStability => "Capacity: income stability",
            Self::WithdrawalLikelihood => "Capacity: withdrawal likelihood",
            Self::DebtBurden => "Capacity: debt burden",
            Self::PortfolioDependence => "Capacity: portfolio dependence",
        }
    }

    /// Option labels from lowest to highest capacity for loss.
    pub const fn option_labels(self) -> [&'static str; 4] {
        match self {
            Self::EmergencyFund => EmergencyFund::ordered_labels(),
            Self::IncomeStability => IncomeStability::ordered_labels(),
            Self::WithdrawalLikelihood => WithdrawalLikelihood::ordered_labels(),
            Self::DebtBurden => DebtBurden::ordered_labels(),
            Self::PortfolioDependence => PortfolioDependence::ordered_labels(),
        }
    }
}

/// Shared behavior of the four-option capacity answers.
pub trait CapacityOption: Copy + Sized + 'static {
    const QUESTION: CapacityQuestion;

    /// Options from lowest to highest capacity for loss.
    fn ordered() -> [Self; 4];

    fn label(self) -> &'static str;

    /// Sub-score: 0, 2, 4 or 6, rising with capacity for loss.
    fn points(self) -> u8;

    fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ordered()
            .into_iter()
            .find(|option| option.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmergencyFund {
    UnderThreeMonths,
    ThreeToSixMonths,
    SixToTwelveMonths,
    TwelvePlusMonths,
}

impl EmergencyFund {
    const fn ordered_labels() -> [&'static str; 4] {
        ["< 3 months", "3–6 months", "6–12 months", "12+ months"]
    }
}

impl CapacityOption for EmergencyFund {
    const QUESTION: CapacityQuestion = CapacityQuestion::EmergencyFund;

    fn ordered() -> [Self; 4] {
        [
            Self::UnderThreeMonths,
            Self::ThreeToSixMonths,
            Self::SixToTwelveMonths,
            Self::TwelvePlusMonths,
        ]
    }

    fn points(self) -> u8 {
        match self {
            Self::UnderThreeMonths => 0,
            Self::ThreeToSixMonths => 2,
            Self::SixToTwelveMonths => 4,
            Self::TwelvePlusMonths => 6,
        }
    }

    fn label(self) -> &'static str {
        let [under_three, three_six, six_twelve, twelve_plus] = Self::ordered_labels();
        match self {
            Self::UnderThreeMonths => under_three,
            Self::ThreeToSixMonths => three_six,
            Self::SixToTwelveMonths => six_twelve,
            Self::TwelvePlusMonths => twelve_plus,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeStability {
    Unstable,
    SomewhatStable,
    Stable,
    VeryStable,
}

impl IncomeStability {
    const fn ordered_labels() -> [&'static str; 4] {
        [
            "Unstable/variable",
            "Somewhat stable",
            "Stable (salaried/contracted)",
            "Very stable (multiple reliable sources)",
        ]
    }
}

impl CapacityOption for IncomeStability {
    const QUESTION: CapacityQuestion = CapacityQuestion::IncomeStability;

    fn ordered() -> [Self; 4] {
        [
            Self::Unstable,
            Self::SomewhatStable,
            Self::Stable,
            Self::VeryStable,
        ]
    }

    fn points(self) -> u8 {
        match self {
            Self::Unstable => 0,
            Self::SomewhatStable => 2,
            Self::Stable => 4,
            Self::VeryStable => 6,
        }
    }

    fn label(self) -> &'static str {
        let [unstable, somewhat, stable, very] = Self::ordered_labels();
        match self {
            Self::Unstable => unstable,
            Self::SomewhatStable => somewhat,
            Self::Stable => stable,
            Self::VeryStable => very,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WithdrawalLikelihood {
    VeryLikely,
    SomewhatLikely,
    Unlikely,
    VeryUnlikely,
}

impl WithdrawalLikelihood {
    const fn ordered_labels() -> [&'static str; 4] {
        ["Very likely", "Somewhat likely", "Unlikely", "Very unlikely"]
    }

    /// A large withdrawal is expected inside the three-year window.
    pub const fn needs_liquidity_soon(self) -> bool {
        matches!(self, Self::VeryLikely | Self::SomewhatLikely)
    }
}

impl CapacityOption for WithdrawalLikelihood {
    const QUESTION: CapacityQuestion = CapacityQuestion::WithdrawalLikelihood;

    fn ordered() -> [Self; 4] {
        [
            Self::VeryLikely,
            Self::SomewhatLikely,
            Self::Unlikely,
            Self::VeryUnlikely,
        ]
    }

    fn points(self) -> u8 {
        match self {
            Self::VeryLikely => 0,
            Self::SomewhatLikely => 2,
            Self::Unlikely => 4,
            Self::VeryUnlikely => 6,
        }
    }

    fn label(self) -> &'static str {
        let [very_likely, somewhat, unlikely, very_unlikely] = Self::ordered_labels();
        match self {
            Self::VeryLikely => very_likely,
            Self::SomewhatLikely => somewhat,
            Self::Unlikely => unlikely,
            Self::VeryUnlikely => very_unlikely,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtBurden {
    High,
    Moderate,
    Low,
    None,
}

impl DebtBurden {
    const fn ordered_labels() -> [&'static str; 4] {
        ["High / hard to service", "Moderate", "Low", "None"]
    }
}

impl CapacityOption for DebtBurden {
    const QUESTION: CapacityQuestion = CapacityQuestion::DebtBurden;

    fn ordered() -> [Self; 4] {
        [Self::High, Self::Moderate, Self::Low, Self::None]
    }

    fn points(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Moderate => 2,
            Self::Low => 4,
            Self::None => 6,
        }
    }

    fn label(self) -> &'static str {
        let [high, moderate, low, none] = Self::ordered_labels();
        match self {
            Self::High => high,
            Self::Moderate => moderate,
            Self::Low => low,
            Self::None => none,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortfolioDependence {
    HighlyDependent,
    SomewhatDependent,
    NotVeryDependent,
    NotDependent,
}

impl PortfolioDependence {
    const fn ordered_labels() -> [&'static str; 4] {
        [
            "Highly dependent",
            "Somewhat dependent",
            "Not very dependent",
            "Not dependent",
        ]
    }
}

impl CapacityOption for PortfolioDependence {
    const QUESTION: CapacityQuestion = CapacityQuestion::PortfolioDependence;

    fn ordered() -> [Self; 4] {
        [
            Self::HighlyDependent,
            Self::SomewhatDependent,
            Self::NotVeryDependent,
            Self::NotDependent,
        ]
    }

    fn points(self) -> u8 {
        match self {
            Self::HighlyDependent => 0,
            Self::SomewhatDependent => 2,
            Self::NotVeryDependent => 4,
            Self::NotDependent => 6,
        }
    }

    fn label(self) -> &'static str {
        let [highly, somewhat, not_very, not] = Self::ordered_labels();
        match self {
            Self::HighlyDependent => highly,
            Self::SomewhatDependent => somewhat,
            Self::NotVeryDependent => not_very,
            Self::NotDependent => not,
        }
    }
}

/// The five capacity answers, echoed back in results for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapacityAnswers {
    pub emergency_months: EmergencyFund,
    pub income_stability: IncomeStability,
    pub withdrawal_need: WithdrawalLikelihood,
    pub debt_burden: DebtBurden,
    pub portfolio_dependence: PortfolioDependence,
}

impl CapacityAnswers {
    /// `(question, answer label)` pairs in questionnaire order.
    pub fn labelled(&self) -> [(CapacityQuestion, &'static str); 5] {
        [
            (CapacityQuestion::EmergencyFund, self.emergency_months.label()),
            (CapacityQuestion::IncomeStability, self.income_stability.label()),
            (CapacityQuestion::WithdrawalLikelihood, self.withdrawal_need.label()),
            (CapacityQuestion::DebtBurden, self.debt_burden.label()),
            (
                CapacityQuestion::PortfolioDependence,
                self.portfolio_dependence.label(),
            ),
        ]
    }
}

/// Alternatives scope toggles and the limited-experience gate switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlternativesSettings {
    pub alt_scope_reits: bool,
    pub alt_scope_commodities: bool,
    pub alt_equities_toggle: bool,
    pub limited_experience_gate: bool,
}

impl Default for AlternativesSettings {
    fn default() -> Self {
        Self {
            alt_scope_reits: true,
            alt_scope_commodities: true,
            alt_equities_toggle: false,
            limited_experience_gate: true,
        }
    }
}

/// Fully answered questionnaire, the only input the scoring engine accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionnaireInput {
    pub attitude_choices: [LikertChoice; STATEMENT_COUNT],
    pub capacity: CapacityAnswers,
    pub alternatives: AlternativesSettings,
}

/// Instrument families counted as alternatives for this client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlternativeScope {
    PublicReits,
    CommodityFunds,
    AlternativeLikeEquities,
}

impl AlternativeScope {
    pub const fn label(self) -> &'static str {
        match self {
            Self::PublicReits => "Public REITs",
            Self::CommodityFunds => "Commodity funds",
            Self::AlternativeLikeEquities => {
                "Selected equities treated as 'alternative-like' (internal classification)"
            }
        }
    }
}

/// Condition that forces the alternatives cap to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateReason {
    LiquidityNeed,
    LowCapacity,
    LimitedExperience,
}

impl GateReason {
    pub const fn message(self) -> &'static str {
        match self {
            Self::LiquidityNeed => "Large withdrawal likely within 3 years",
            Self::LowCapacity => "Low capacity for loss",
            Self::LimitedExperience => "Client indicates limited investment experience",
        }
    }
}

/// Advisory consistency warning; never changes scores or caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RobustnessFlag {
    ManyNeutralAnswers,
    SwingDiscomfort,
    LimitedExperience,
}

impl RobustnessFlag {
    pub const fn message(self) -> &'static str {
        match self {
            Self::ManyNeutralAnswers => {
                "Many neutral answers (6+). Consider clarifying and reassessing."
            }
            Self::SwingDiscomfort => {
                "High score but strong discomfort with market swings—discuss suitability carefully."
            }
            Self::LimitedExperience => {
                "High score but self-reported limited experience—consider education / simplification."
            }
        }
    }
}

/// Invalid questionnaire input. The engine never produces partial results.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("please answer all questions before viewing results (missing: {})", .0.join(", "))]
    MissingAnswers(Vec<String>),
    #[error("'{value}' is not a valid answer to '{question}'")]
    UnknownOption { question: String, value: String },
    #[error("expected {expected} risk attitude answers, found {found}")]
    AnswerCount { expected: usize, found: usize },
    #[error("statement {0} is not part of the 12-statement questionnaire")]
    StatementOutOfRange(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statement_list_has_five_normal_and_seven_reverse_items() {
        let normal = ATTITUDE_STATEMENTS
            .iter()
            .filter(|statement| statement.scoring == StatementScoring::Normal)
            .count();
        assert_eq!(normal, 5);
        assert_eq!(STATEMENT_COUNT - normal, 7);
        for (index, statement) in ATTITUDE_STATEMENTS.iter().enumerate() {
            assert_eq!(statement.number, index + 1);
        }
    }

    #[test]
    fn bands_are_contiguous_over_score_range() {
        let boundaries = [
            (25, RiskBand::VeryCautious, RiskBand::Cautious),
            (33, RiskBand::Cautious, RiskBand::ModeratelyCautious),
            (44, RiskBand::ModeratelyCautious, RiskBand::Balanced),
            (56, RiskBand::Balanced, RiskBand::ModeratelyAdventurous),
            (67, RiskBand::ModeratelyAdventurous, RiskBand::Adventurous),
            (79, RiskBand::Adventurous, RiskBand::VeryAdventurous),
        ];
        for (upper, at, above) in boundaries {
            assert_eq!(RiskBand::from_score(upper), at);
            assert_eq!(RiskBand::from_score(upper + 1), above);
        }
        assert_eq!(RiskBand::from_score(0), RiskBand::VeryCautious);
        assert_eq!(RiskBand::from_score(100), RiskBand::VeryAdventurous);
    }

    #[test]
    fn policy_limits_grow_more_aggressive_with_band() {
        let bands = RiskBand::ordered();
        for pair in bands.windows(2) {
            let (lower, higher) = (pair[0].policy_limits(), pair[1].policy_limits());
            assert!(higher.max_equity >= lower.max_equity);
            assert!(higher.max_alternatives >= lower.max_alternatives);
            assert!(higher.max_sukuk <= lower.max_sukuk);
        }
    }

    #[test]
    fn capacity_options_score_by_position() {
        assert_eq!(EmergencyFund::UnderThreeMonths.points(), 0);
        assert_eq!(IncomeStability::SomewhatStable.points(), 2);
        assert_eq!(WithdrawalLikelihood::Unlikely.points(), 4);
        assert_eq!(DebtBurden::None.points(), 6);
        assert_eq!(
            PortfolioDependence::from_label("Not very dependent"),
            Some(PortfolioDependence::NotVeryDependent)
        );
        assert_eq!(DebtBurden::from_label("Crippling"), None);
    }

    fn assert_points_follow_order<T: CapacityOption + std::fmt::Debug>() {
        for (index, option) in T::ordered().into_iter().enumerate() {
            assert_eq!(
                usize::from(option.points()),
                index * 2,
                "{:?} under {}",
                option,
                T::QUESTION.label()
            );
        }
    }

    #[test]
    fn every_capacity_option_scores_twice_its_rank() {
        assert_points_follow_order::<EmergencyFund>();
        assert_points_follow_order::<IncomeStability>();
        assert_points_follow_order::<WithdrawalLikelihood>();
        assert_points_follow_order::<DebtBurden>();
        assert_points_follow_order::<PortfolioDependence>();
    }

    #[test]
    fn likert_labels_round_trip() {
        for choice in LikertChoice::ordered() {
            assert_eq!(LikertChoice::from_label(choice.label()), Some(choice));
        }
        assert_eq!(LikertChoice::from_label("Maybe"), None);
    }
}
