use crate::models::{AnswerSet, MenuItem, Question};

pub const BASE_TAGS: &[&str] = &["circus_mystery", "atmospheric", "crafted"];

/// Personality tags appended after the base tags, in order
pub const PERSONALITY_TAGS: &[(Question, &str, &str)] = &[
    (Question::FirstSip, "elegance", "refined"),
    (Question::EveningMood, "shadows", "mysterious"),
    (Question::SpicyReaction, "embrace", "bold"),
    (Question::WeekFeeling, "contemplative", "thoughtful"),
];

pub const MAX_TAGS: usize = 3;

/// Derives lore tags for a drink
///
/// Base tags come first and the list is cut to `MAX_TAGS`, so with three base
/// tags the personality tags never survive the cut.
pub fn generate_tags(_drink: &MenuItem, answers: &AnswerSet) -> Vec<String> {
    let personality = PERSONALITY_TAGS
        .iter()
        .filter(|(question, value, _)| answers.is(*question, value))
        .map(|(_, _, tag)| *tag);

    BASE_TAGS
        .iter()
        .copied()
        .chain(personality)
        .take(MAX_TAGS)
        .map(str::to_string)
        .collect()
}
