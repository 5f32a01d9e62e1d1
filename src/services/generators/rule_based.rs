use rand::{rngs::StdRng, SeedableRng};
use std::sync::{Arc, Mutex};

use super::CocktailGenerator;
use crate::{
    models::{AnswerSet, MenuDataset, Recommendation},
    services::recommender,
};

/// Offline generator backed by the menu and the rule engine
pub struct RuleBasedGenerator {
    menu: Arc<MenuDataset>,
    rng: Mutex<StdRng>,
}

impl RuleBasedGenerator {
    /// Creates a generator; a seed makes the narrative text reproducible
    pub fn new(menu: Arc<MenuDataset>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            menu,
            rng: Mutex::new(rng),
        }
    }
}

#[async_trait::async_trait]
impl CocktailGenerator for RuleBasedGenerator {
    async fn generate(&self, answers: &AnswerSet) -> Recommendation {
        // A poisoned lock only means another request panicked mid-draw; the
        // generator state is still a valid RNG.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        recommender::recommend(answers, &self.menu, &mut *rng)
    }

    fn name(&self) -> &'static str {
        "rules"
    }
}
