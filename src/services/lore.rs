use rand::{seq::SliceRandom, Rng};
use std::collections::HashMap;

pub const QUIET_NIGHT_WHISPER: &str = "The bar holds its secrets tonight.";
pub const EMPTY_LORE_FRAGMENT: &str = "The bar remembers all who enter.";

/// Whispers served when the lore store cannot be read
pub const DEFAULT_WHISPERS: &[&str] = &[
    QUIET_NIGHT_WHISPER,
    "Something stirs in the shadows between bottles.",
    "The ice machine whispers stories of old.",
];

const TAG_PLACEHOLDER: &str = "{tag}";

pub const FRAGMENT_TEMPLATES: &[&str] = &[
    "The recurring tale of {tag} grows stronger with each telling.",
    "Guests have begun to notice the pattern of {tag} in their drinks.",
    "The bar's memory holds the essence of {tag} close.",
    "Something about {tag} calls to the returning souls.",
    "The spirits whisper of {tag} when the night grows deep.",
];

pub fn random_whisper<R: Rng + ?Sized>(whispers: &[String], rng: &mut R) -> String {
    whispers
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| QUIET_NIGHT_WHISPER.to_string())
}

/// Tags that appear more than once, in first-seen order
pub fn recurring_tags(all_tags: &[String]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for tag in all_tags {
        *counts.entry(tag.as_str()).or_default() += 1;
    }

    let mut recurring = Vec::new();
    for tag in all_tags {
        if counts.get(tag.as_str()).copied().unwrap_or(0) > 1 && !recurring.contains(tag) {
            recurring.push(tag.clone());
        }
    }
    recurring
}

/// A line of lore built around one of the given tags
pub fn lore_fragment<R: Rng + ?Sized>(tags: &[String], rng: &mut R) -> String {
    let Some(tag) = tags.choose(rng) else {
        return EMPTY_LORE_FRAGMENT.to_string();
    };
    let template = FRAGMENT_TEMPLATES
        .choose(rng)
        .copied()
        .unwrap_or(FRAGMENT_TEMPLATES[0]);

    template.replacen(TAG_PLACEHOLDER, &tag.replacen('_', " ", 1), 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_random_whisper_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(random_whisper(&[], &mut rng), QUIET_NIGHT_WHISPER);
    }

    #[test]
    fn test_random_whisper_from_list() {
        let mut rng = StdRng::seed_from_u64(0);
        let whispers = strings(&["one", "two"]);
        let whisper = random_whisper(&whispers, &mut rng);
        assert!(whispers.contains(&whisper));
    }

    #[test]
    fn test_recurring_tags() {
        let tags = strings(&["bold", "crafted", "bold", "ice_war", "crafted", "bold"]);
        assert_eq!(recurring_tags(&tags), strings(&["bold", "crafted"]));
        assert!(recurring_tags(&strings(&["a", "b"])).is_empty());
    }

    #[test]
    fn test_lore_fragment_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(lore_fragment(&[], &mut rng), EMPTY_LORE_FRAGMENT);
    }

    #[test]
    fn test_lore_fragment_replaces_first_underscore_only() {
        let mut rng = StdRng::seed_from_u64(8);
        let fragment = lore_fragment(&strings(&["bitter_truth_serum"]), &mut rng);
        assert!(fragment.contains("bitter truth_serum"));
        assert!(!fragment.contains(TAG_PLACEHOLDER));
    }
}
