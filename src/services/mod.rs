pub mod generators;
pub mod lore;
pub mod recommender;

pub use generators::{CocktailGenerator, OpenAiConfig, OpenAiGenerator, RuleBasedGenerator};
