//! Rule-based drink recommendation
//!
//! Answers flow one way: `classify` picks a menu section, `select` picks a
//! drink from it, then atmosphere, pairing and tags are derived from the drink
//! and answers. Everything here is a pure function of its inputs plus the
//! injected random source.

use rand::Rng;

use crate::models::{AnswerSet, Category, MenuDataset, Recommendation};

pub mod atmosphere;
pub mod classifier;
pub mod pairing;
pub mod selector;
pub mod tags;

pub use atmosphere::{generate_atmosphere, Atmosphere};
pub use classifier::classify;
pub use pairing::select_pairing;
pub use selector::{fallback_drink, select};
pub use tags::generate_tags;

/// Display names offered alongside the real one
pub const ALTERNATIVE_NAMES: &[&str] = &[
    "The Velvet Confession",
    "Midnight's Borrowed Truth",
    "The Curator's Last Dance",
    "Shadow Between Raindrops",
    "The Archivist's Secret",
];

pub const CANDIDATE_NAMES: usize = 5;

/// The drink's own name followed by atmospheric alternatives
pub fn alternative_names(drink_name: &str) -> Vec<String> {
    std::iter::once(drink_name)
        .chain(ALTERNATIVE_NAMES.iter().copied())
        .take(CANDIDATE_NAMES)
        .map(str::to_string)
        .collect()
}

/// Builds a complete recommendation for a guest
pub fn recommend<R: Rng + ?Sized>(
    answers: &AnswerSet,
    menu: &MenuDataset,
    rng: &mut R,
) -> Recommendation {
    let category = classify(answers);
    let drink = select(menu.items(category), answers);
    let atmosphere = generate_atmosphere(&drink, answers, rng);
    let food_pairing = select_pairing(menu.items(Category::ConcessionStand), &drink, answers, rng);
    let tags = generate_tags(&drink, answers);

    tracing::debug!(
        category = %category,
        drink = %drink.name,
        answered = answers.answered(),
        pairing = food_pairing.as_ref().map(|p| p.name.as_str()).unwrap_or("none"),
        "Recommendation assembled"
    );

    Recommendation {
        names: alternative_names(&drink.name),
        selected_name: drink.name,
        ingredients: drink.ingredients.unwrap_or_default(),
        story: atmosphere.story,
        whisper: atmosphere.whisper,
        flavor_profile: atmosphere.flavor_profile,
        tags,
        food_pairing,
    }
}
