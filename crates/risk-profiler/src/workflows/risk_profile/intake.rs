use serde::{Deserialize, Serialize};

use super::domain::{
    AlternativesSettings, CapacityAnswers, CapacityOption, CapacityQuestion, LikertChoice, ProfileError,
    QuestionnaireInput, STATEMENT_COUNT,
};

/// Raw questionnaire answers as collected by a form, keyed by display label.
///
/// Any answer may still be missing; [`QuestionnaireSubmission::into_input`] enforces
/// completeness and the closed answer sets before anything is scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireSubmission {
    #[serde(default)]
    pub attitude_choices: Vec<Option<String>>,
    #[serde(default)]
    pub emergency_months: Option<String>,
    #[serde(default)]
    pub income_stability: Option<String>,
    #[serde(default)]
    pub withdrawal_need: Option<String>,
    #[serde(default)]
    pub debt_burden: Option<String>,
    #[serde(default)]
    pub portfolio_dependence: Option<String>,
    #[serde(default = "default_true")]
    pub alt_scope_reits: bool,
    #[serde(default = "default_true")]
    pub alt_scope_commodities: bool,
    #[serde(default)]
    pub alt_equities_toggle: bool,
    #[serde(default = "default_true")]
    pub limited_experience_gate: bool,
}

fn default_true() -> bool {
    true
}

impl Default for QuestionnaireSubmission {
    fn default() -> Self {
        let toggles = AlternativesSettings::default();
        Self {
            attitude_choices: Vec::new(),
            emergency_months: None,
            income_stability: None,
            withdrawal_need: None,
            debt_burden: None,
            portfolio_dependence: None,
            alt_scope_reits: toggles.alt_scope_reits,
            alt_scope_commodities: toggles.alt_scope_commodities,
            alt_equities_toggle: toggles.alt_equities_toggle,
            limited_experience_gate: toggles.limited_experience_gate,
        }
    }
}

impl QuestionnaireSubmission {
    /// Labels of every unanswered question, attitude statements first.
    pub fn missing_answers(&self) -> Vec<String> {
        let mut missing: Vec<String> = (0..STATEMENT_COUNT)
            .filter(|index| !matches!(self.attitude_choices.get(*index), Some(Some(_))))
            .map(|index| format!("Risk attitude question {}", index + 1))
            .collect();

        let capacity = [
            (&self.emergency_months, CapacityQuestion::EmergencyFund),
            (&self.income_stability, CapacityQuestion::IncomeStability),
            (&self.withdrawal_need, CapacityQuestion::WithdrawalLikelihood),
            (&self.debt_burden, CapacityQuestion::DebtBurden),
            (&self.portfolio_dependence, CapacityQuestion::PortfolioDependence),
        ];
        missing.extend(
            capacity
                .into_iter()
                .filter(|(answer, _)| answer.is_none())
                .map(|(_, question)| question.missing_label().to_string()),
        );

        missing
    }

    /// Validates completeness and answer labels, producing scoring input.
    pub fn into_input(self) -> Result<QuestionnaireInput, ProfileError> {
        if self.attitude_choices.len() > STATEMENT_COUNT {
            return Err(ProfileError::AnswerCount {
                expected: STATEMENT_COUNT,
                found: self.attitude_choices.len(),
            });
        }

        let missing = self.missing_answers();
        if !missing.is_empty() {
            return Err(ProfileError::MissingAnswers(missing));
        }

        let mut attitude_choices = [LikertChoice::NoStrongOpinion; STATEMENT_COUNT];
        for (index, answer) in self.attitude_choices.iter().enumerate() {
            let label = answer.as_deref().unwrap_or_default();
            attitude_choices[index] =
                LikertChoice::from_label(label).ok_or_else(|| ProfileError::UnknownOption {
                    question: format!("Risk attitude question {}", index + 1),
                    value: label.to_string(),
                })?;
        }

        let capacity = CapacityAnswers {
            emergency_months: parse_option(self.emergency_months.as_deref())?,
            income_stability: parse_option(self.income_stability.as_deref())?,
            withdrawal_need: parse_option(self.withdrawal_need.as_deref())?,
            debt_burden: parse_option(self.debt_burden.as_deref())?,
            portfolio_dependence: parse_option(self.portfolio_dependence.as_deref())?,
        };

        Ok(QuestionnaireInput {
            attitude_choices,
            capacity,
            alternatives: AlternativesSettings {
                alt_scope_reits: self.alt_scope_reits,
                alt_scope_commodities: self.alt_scope_commodities,
                alt_equities_toggle: self.alt_equities_toggle,
                limited_experience_gate: self.limited_experience_gate,
            },
        })
    }
}

impl From<&QuestionnaireInput> for QuestionnaireSubmission {
    fn from(input: &QuestionnaireInput) -> Self {
        Self {
            attitude_choices: input
                .attitude_choices
                .iter()
                .map(|choice| Some(choice.label().to_string()))
                .collect(),
            emergency_months: Some(input.capacity.emergency_months.label().to_string()),
            income_stability: Some(input.capacity.income_stability.label().to_string()),
            withdrawal_need: Some(input.capacity.withdrawal_need.label().to_string()),
            debt_burden: Some(input.capacity.debt_burden.label().to_string()),
            portfolio_dependence: Some(input.capacity.portfolio_dependence.label().to_string()),
            alt_scope_reits: input.alternatives.alt_scope_reits,
            alt_scope_commodities: input.alternatives.alt_scope_commodities,
            alt_equities_toggle: input.alternatives.alt_equities_toggle,
            limited_experience_gate: input.alternatives.limited_experience_gate,
        }
    }
}

fn parse_option<T: CapacityOption>(label: Option<&str>) -> Result<T, ProfileError> {
    let label = label.unwrap_or_default();
    T::from_label(label).ok_or_else(|| ProfileError::UnknownOption {
        question: T::QUESTION.prompt().to_string(),
        value: label.to_string(),
    })
}
