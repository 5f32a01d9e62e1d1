use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Quiz question identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Question {
    Sodas,
    FirstSip,
    WeekFeeling,
    SpicyReaction,
    EveningMood,
    DrinkComplexity,
}

impl Question {
    pub const ALL: [Question; 6] = [
        Question::Sodas,
        Question::FirstSip,
        Question::WeekFeeling,
        Question::SpicyReaction,
        Question::EveningMood,
        Question::DrinkComplexity,
    ];

    /// Wire name of the question id
    pub fn as_str(&self) -> &'static str {
        match self {
            Question::Sodas => "sodas",
            Question::FirstSip => "first_sip",
            Question::WeekFeeling => "week_feeling",
            Question::SpicyReaction => "spicy_reaction",
            Question::EveningMood => "evening_mood",
            Question::DrinkComplexity => "drink_complexity",
        }
    }
}

impl Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A guest's quiz responses, keyed by question id
///
/// Every answer is optional. Values outside a question's option set are kept
/// as-is; they simply never match any rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodas: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_sip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_feeling: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spicy_reaction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evening_mood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drink_complexity: Option<String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, mostly useful for tests and fixtures
    pub fn with(mut self, question: Question, value: impl Into<String>) -> Self {
        *self.slot_mut(question) = Some(value.into());
        self
    }

    pub fn get(&self, question: Question) -> Option<&str> {
        match question {
            Question::Sodas => self.sodas.as_deref(),
            Question::FirstSip => self.first_sip.as_deref(),
            Question::WeekFeeling => self.week_feeling.as_deref(),
            Question::SpicyReaction => self.spicy_reaction.as_deref(),
            Question::EveningMood => self.evening_mood.as_deref(),
            Question::DrinkComplexity => self.drink_complexity.as_deref(),
        }
    }

    /// True when the guest answered `question` with exactly `value`
    pub fn is(&self, question: Question, value: &str) -> bool {
        self.get(question) == Some(value)
    }

    /// Number of questions that carry an answer
    pub fn answered(&self) -> usize {
        Question::ALL
            .iter()
            .filter(|q| self.get(**q).is_some())
            .count()
    }

    fn slot_mut(&mut self, question: Question) -> &mut Option<String> {
        match question {
            Question::Sodas => &mut self.sodas,
            Question::FirstSip => &mut self.first_sip,
            Question::WeekFeeling => &mut self.week_feeling,
            Question::SpicyReaction => &mut self.spicy_reaction,
            Question::EveningMood => &mut self.evening_mood,
            Question::DrinkComplexity => &mut self.drink_complexity,
        }
    }
}

/// A disjunction of single-answer matches: holds when any pair matches
#[derive(Debug, Clone, Copy)]
pub struct AnyOf(pub &'static [(Question, &'static str)]);

impl AnyOf {
    pub fn matches(&self, answers: &AnswerSet) -> bool {
        self.0.iter().any(|(q, value)| answers.is(*q, value))
    }
}
