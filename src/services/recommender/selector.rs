use crate::models::{AnswerSet, AnyOf, MenuItem, Question};

/// Which slot of a category list to serve
///
/// Menus list the most complex drink first and the most approachable last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Complex,
    Bold,
    Approachable,
}

impl Slot {
    /// Resolves the slot to an index into a non-empty list of `len` drinks
    pub fn index(&self, len: usize) -> usize {
        debug_assert!(len > 0);
        match self {
            Slot::Complex => 0,
            Slot::Bold => 1.min(len - 1),
            Slot::Approachable => len - 1,
        }
    }
}

pub const SLOT_RULES: &[(AnyOf, Slot)] = &[
    (
        AnyOf(&[(Question::Sodas, "none"), (Question::Sodas, "few")]),
        Slot::Complex,
    ),
    (
        AnyOf(&[
            (Question::SpicyReaction, "embrace"),
            (Question::EveningMood, "edge"),
        ]),
        Slot::Bold,
    ),
];

pub const DEFAULT_SLOT: Slot = Slot::Approachable;

/// Served when the chosen category has nothing on it
pub fn fallback_drink() -> MenuItem {
    MenuItem {
        name: "The Archivist's Lament".to_string(),
        price: 14.0,
        ingredients: Some(vec![
            "2 oz Woodford Reserve".to_string(),
            "0.5 oz Luxardo Maraschino".to_string(),
            "0.75 oz fresh lemon juice".to_string(),
        ]),
        description: None,
    }
}

pub fn slot_for(answers: &AnswerSet) -> Slot {
    SLOT_RULES
        .iter()
        .find(|(rule, _)| rule.matches(answers))
        .map(|(_, slot)| *slot)
        .unwrap_or(DEFAULT_SLOT)
}

/// Picks one drink from a category list using the guest's secondary answers
pub fn select(drinks: &[MenuItem], answers: &AnswerSet) -> MenuItem {
    if drinks.is_empty() {
        tracing::warn!("Category has no drinks, serving fallback");
        return fallback_drink();
    }

    drinks[slot_for(answers).index(drinks.len())].clone()
}
