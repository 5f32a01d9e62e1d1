use rand::{seq::SliceRandom, Rng};

use super::atmosphere::pick;
use crate::models::{AnswerSet, AnyOf, FoodPairing, MenuItem, Question};

/// Keyword rules in priority order; the first matching rule picks the keyword
pub const PAIRING_RULES: &[(AnyOf, &str)] = &[
    (AnyOf(&[(Question::FirstSip, "elegance")]), "popcorn"),
    (
        AnyOf(&[
            (Question::SpicyReaction, "embrace"),
            (Question::FirstSip, "adventure"),
        ]),
        "peanuts",
    ),
    (
        AnyOf(&[
            (Question::WeekFeeling, "contemplative"),
            (Question::FirstSip, "mystery"),
        ]),
        "cotton candy",
    ),
];

pub const PAIRING_REASONS: &[&str] = &[
    "The salt crystals enhance the drink's mysterious undertones.",
    "The sweetness creates a perfect counterpoint to the cocktail's complexity.",
    "This classic pairing elevates both elements to theatrical heights.",
    "The textures play against each other like performers in a surreal dance.",
];

/// First item whose name contains `keyword`, case-insensitively
fn find_by_keyword<'a>(items: &'a [MenuItem], keyword: &str) -> Option<&'a MenuItem> {
    items
        .iter()
        .find(|item| item.name.to_lowercase().contains(keyword))
}

/// Chooses a concession item to serve with the drink
///
/// Returns `None` only when there is nothing on the concession list. A matched
/// rule whose keyword is on no item falls back to the first item; when no rule
/// matches the item is drawn at random.
pub fn select_pairing<R: Rng + ?Sized>(
    concession_items: &[MenuItem],
    _drink: &MenuItem,
    answers: &AnswerSet,
    rng: &mut R,
) -> Option<FoodPairing> {
    let first = concession_items.first()?;

    let food = match PAIRING_RULES.iter().find(|(rule, _)| rule.matches(answers)) {
        Some((_, keyword)) => find_by_keyword(concession_items, keyword).unwrap_or(first),
        None => concession_items.choose(rng).unwrap_or(first),
    };

    Some(FoodPairing {
        name: food.name.clone(),
        price: food.price,
        description: food.description.clone().unwrap_or_default(),
        pairing_reason: pick(PAIRING_REASONS, rng).to_string(),
    })
}
