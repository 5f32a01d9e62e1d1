use crate::models::{AnswerSet, Recommendation};

pub mod openai;
pub mod rule_based;

pub use openai::{OpenAiConfig, OpenAiGenerator};
pub use rule_based::RuleBasedGenerator;

/// Source of drink recommendations
///
/// Implementations never fail: anything that goes wrong inside a generator is
/// logged and replaced by a fixed fallback recommendation, so the guest always
/// gets a drink.
#[async_trait::async_trait]
pub trait CocktailGenerator: Send + Sync {
    async fn generate(&self, answers: &AnswerSet) -> Recommendation;

    /// Generator name for logging and debugging
    fn name(&self) -> &'static str;
}
