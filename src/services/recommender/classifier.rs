use crate::models::{AnswerSet, AnyOf, Category, Question};

/// Category rules in priority order; the first matching rule wins
pub const CATEGORY_RULES: &[(AnyOf, Category)] = &[
    (
        AnyOf(&[
            (Question::FirstSip, "adventure"),
            (Question::WeekFeeling, "surprising"),
            (Question::SpicyReaction, "embrace"),
            (Question::DrinkComplexity, "bold"),
        ]),
        Category::ExoticAndExciting,
    ),
    (
        AnyOf(&[
            (Question::EveningMood, "shadows"),
            (Question::WeekFeeling, "chaotic"),
            (Question::FirstSip, "mystery"),
            (Question::DrinkComplexity, "mysterious"),
        ]),
        Category::CreatureFeatures,
    ),
    (
        AnyOf(&[
            (Question::FirstSip, "elegance"),
            (Question::WeekFeeling, "contemplative"),
            (Question::EveningMood, "brightness"),
            (Question::DrinkComplexity, "refined"),
            (Question::DrinkComplexity, "theatrical"),
        ]),
        Category::FeatsOfStrength,
    ),
];

/// Category used when no rule matches
pub const DEFAULT_CATEGORY: Category = Category::ExoticAndExciting;

/// Maps a guest's answers to the cocktail section of the menu
pub fn classify(answers: &AnswerSet) -> Category {
    CATEGORY_RULES
        .iter()
        .find(|(rule, _)| rule.matches(answers))
        .map(|(_, category)| *category)
        .unwrap_or(DEFAULT_CATEGORY)
}
