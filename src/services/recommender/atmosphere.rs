use rand::{seq::SliceRandom, Rng};

use crate::models::{AnswerSet, MenuItem};

pub const STAFF: &[&str] = &["Matt", "Steve", "Nick", "Krimson"];

const STAFF_PLACEHOLDER: &str = "{staff}";

pub const STORY_TEMPLATES: &[&str] = &[
    "{staff} discovered this recipe scrawled on a napkin left behind by a circus performer who claimed to know the future. They only make it when the moon is waning, insisting the shadows help them measure each pour. Peter was supposed to help document these mysterious recipes, but they haven't been seen in weeks.",
    "This drink emerged from {staff}'s experiments with ingredients found in a trunk beneath the bar. The previous owner left cryptic notes about its preparation, warning that it should only be served to those who understand the weight of secrets. Peter once claimed they could taste tomorrow in it, but that was before they disappeared.",
    "{staff} crafted this libation after finding an old photograph tucked inside a vintage cocktail book. The person in the picture bore an uncanny resemblance to tonight's first customer. They swear the drink tastes different depending on who's watching them prepare it. Peter used to say the ingredients whispered their own names, but no one's heard from them lately.",
];

pub const WHISPERS: &[&str] = &[
    "The ice cubes have been humming old circus melodies all evening.",
    "Someone left a fortune from a cookie that never existed on the bar tonight.",
    "The garnish keeps rearranging itself when no one's looking.",
    "A patron from 1952 just ordered the same drink at table seven.",
];

pub const FLAVOR_PROFILES: &[&str] = &[
    "Complex layers unfold like secrets shared in hushed tones, each sip revealing another mystery.",
    "Bold and unapologetic, this drink cuts through pretense with surprising depth.",
    "Delicate and nuanced, like overhearing a conversation meant for someone else.",
    "Rich and contemplative, inviting you to lose yourself in its depths.",
];

/// Narrative text served with a drink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atmosphere {
    pub story: String,
    pub whisper: String,
    pub flavor_profile: String,
}

/// Draws a story, whisper and flavor profile from the fixed pools
///
/// Each draw is uniform and independent. The drink and answers do not steer
/// the text yet; they are accepted so callers do not change when they do.
pub fn generate_atmosphere<R: Rng + ?Sized>(
    _drink: &MenuItem,
    _answers: &AnswerSet,
    rng: &mut R,
) -> Atmosphere {
    let staff = pick(STAFF, rng);
    let story = pick(STORY_TEMPLATES, rng).replace(STAFF_PLACEHOLDER, staff);

    Atmosphere {
        story,
        whisper: pick(WHISPERS, rng).to_string(),
        flavor_profile: pick(FLAVOR_PROFILES, rng).to_string(),
    }
}

/// Uniform pick from a non-empty static pool
pub(crate) fn pick<'a, R: Rng + ?Sized>(pool: &[&'a str], rng: &mut R) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}
