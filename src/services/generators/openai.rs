//! OpenAI-backed cocktail generator
//!
//! Sends the guest's answers to a chat completion endpoint and asks for a
//! strict JSON cocktail. Network errors, timeouts, upstream errors and
//! malformed or incomplete JSON all resolve to the same fixed fallback drink.

use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::CocktailGenerator;
use crate::{
    error::{AppError, AppResult},
    models::{AnswerSet, Question, Recommendation},
    services::recommender::CANDIDATE_NAMES,
};

const TEMPERATURE: f32 = 0.8;
const MAX_TOKENS: u32 = 800;

const PREMIUM_LIQUORS: &[&str] = &[
    "Hendrick's Gin", "Tanqueray No. Ten", "The Botanist", "Monkey 47", "Sipsmith London Dry",
    "Basil Hayden's Bourbon", "Woodford Reserve", "WhistlePig Rye", "Redbreast 12 Yr",
    "Diplomatico Reserva", "Ron Zacapa 23", "Plantation Pineapple Rum",
    "Don Julio Reposado", "Clase Azul Plata", "Belvedere Vodka", "Grey Goose",
    "Cointreau", "Luxardo Maraschino", "Chartreuse Green", "St-Germain", "Campari", "Aperol",
    "Lillet Blanc", "Cocchi Americano", "Fernet-Branca", "Amaro Nonino", "Amaro Montenegro",
    "Dolin Dry Vermouth", "Carpano Antica Formula", "Hennessy VS", "Pierre Ferrand 1840",
    "Plymouth Gin", "Nolet's Silver", "Aviation American Gin", "Barr Hill Gin", "Roku Japanese Gin",
];

const PROMPT_PREAMBLE: &str = "You are the mystical bartender at Foxbriar: Sly Sips, a luxury speakeasy with an air of Wes Anderson meets David Lynch. Based on the guest's mood quiz answers, create a unique cocktail experience.

IMPORTANT STAFF NAMES: The bar staff are Matt, Steve, Nick, and Krimson. DO NOT use \"Marcus\" or \"Vincent\" - they don't work here. Occasionally mention Peter as someone who \"rarely shows up\" or \"hasn't been seen in weeks\" as a running joke.";

const PROMPT_FORMAT: &str = r#"Generate a cocktail that matches their personality. Return ONLY valid JSON in this exact format:

{
  "names": ["Name Option 1", "Name Option 2", "Name Option 3", "Name Option 4", "Name Option 5"],
  "selectedName": "The most fitting name from the list",
  "ingredients": ["2 oz gin", "0.5 oz elderflower liqueur", "0.75 oz fresh lime juice", "3 dashes orange bitters", "garnish: expressed lime peel"],
  "story": "A 3-5 sentence origin story connecting this drink to the bar's staff lore. Include mysterious details about bartenders Matt, Steve, Nick, or Krimson. Occasionally reference Peter who 'rarely shows up' or 'hasn't been seen in weeks' as a running joke. Make it elegant but slightly absurd.",
  "whisper": "A single surreal sentence about something strange happening in the bar tonight.",
  "flavorProfile": "A poetic 1-2 sentence description of how this drink tastes and feels.",
  "tags": ["tag1", "tag2", "tag3"]
}

The drink should be sophisticated, real cocktail ingredients only. The story should feel like it belongs in a mysterious speakeasy. Tags should be 2-3 words that could connect to future bar lore (like "ice_war", "garnish_conflict", "bitter_truth", etc)."#;

/// Connection settings for the generation endpoint
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Clone, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Cocktail JSON as the model returns it
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedCocktail {
    #[serde(default)]
    names: Vec<String>,
    #[serde(default)]
    selected_name: String,
    #[serde(default)]
    ingredients: Vec<String>,
    #[serde(default)]
    story: String,
    #[serde(default)]
    whisper: String,
    #[serde(default)]
    flavor_profile: String,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Clone)]
pub struct OpenAiGenerator {
    http_client: HttpClient,
    config: OpenAiConfig,
}

impl OpenAiGenerator {
    pub fn new(config: OpenAiConfig) -> AppResult<Self> {
        let http_client = HttpClient::builder()
            .user_agent("foxbriar-sips")
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http_client,
            config: OpenAiConfig {
                base_url: config.base_url.trim_end_matches('/').to_string(),
                ..config
            },
        })
    }

    async fn try_generate(&self, answers: &AnswerSet) -> AppResult<Recommendation> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: build_prompt(answers),
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "OpenAI returned status {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| AppError::ExternalApi("No response from OpenAI".to_string()))?;

        parse_generation(&content)
    }
}

#[async_trait::async_trait]
impl CocktailGenerator for OpenAiGenerator {
    async fn generate(&self, answers: &AnswerSet) -> Recommendation {
        match self.try_generate(answers).await {
            Ok(recommendation) => {
                tracing::info!(
                    drink = %recommendation.selected_name,
                    "Generated cocktail"
                );
                recommendation
            }
            Err(e) => {
                tracing::error!(error = %e, "Error generating cocktail, serving fallback");
                fallback_recommendation()
            }
        }
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}

/// Builds the generation prompt for a guest
pub fn build_prompt(answers: &AnswerSet) -> String {
    let answer = |q: Question| answers.get(q).unwrap_or("no answer");

    format!(
        "{preamble}\n\nPREMIUM LIQUORS AVAILABLE: Use these real premium brands in your cocktails: {liquors}\n\n\
         Guest's answers:\n\
         - Sodas per week: {sodas}\n\
         - First sip feeling: {first_sip}\n\
         - Week description: {week}\n\
         - Spicy food reaction: {spicy}\n\
         - Evening mood: {evening}\n\
         - Drink complexity: {complexity}\n\n\
         {format}",
        preamble = PROMPT_PREAMBLE,
        liquors = PREMIUM_LIQUORS.join(", "),
        sodas = answer(Question::Sodas),
        first_sip = answer(Question::FirstSip),
        week = answer(Question::WeekFeeling),
        spicy = answer(Question::SpicyReaction),
        evening = answer(Question::EveningMood),
        complexity = answer(Question::DrinkComplexity),
        format = PROMPT_FORMAT,
    )
}

/// Parses and validates the model's reply
///
/// Tolerates a Markdown code fence around the JSON. The selected name is moved
/// to the front of `names` and the list is capped at five candidates.
pub fn parse_generation(content: &str) -> AppResult<Recommendation> {
    let json = strip_code_fence(content);
    let cocktail: GeneratedCocktail = serde_json::from_str(json)
        .map_err(|e| AppError::ExternalApi(format!("Malformed cocktail JSON: {}", e)))?;

    let missing = [
        ("names", cocktail.names.is_empty()),
        ("selectedName", cocktail.selected_name.trim().is_empty()),
        ("ingredients", cocktail.ingredients.is_empty()),
        ("story", cocktail.story.trim().is_empty()),
        ("whisper", cocktail.whisper.trim().is_empty()),
    ];
    if let Some((field, _)) = missing.iter().find(|(_, is_missing)| *is_missing) {
        return Err(AppError::ExternalApi(format!(
            "Invalid cocktail structure: missing {}",
            field
        )));
    }

    let mut names: Vec<String> = cocktail
        .names
        .into_iter()
        .filter(|n| *n != cocktail.selected_name)
        .collect();
    names.insert(0, cocktail.selected_name.clone());
    names.truncate(CANDIDATE_NAMES);

    Ok(Recommendation {
        names,
        selected_name: cocktail.selected_name,
        ingredients: cocktail.ingredients,
        story: cocktail.story,
        whisper: cocktail.whisper,
        flavor_profile: cocktail.flavor_profile,
        tags: cocktail.tags,
        food_pairing: None,
    })
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    match trimmed.strip_prefix("```") {
        Some(rest) => {
            let rest = rest.strip_prefix("json").unwrap_or(rest);
            rest.strip_suffix("```").unwrap_or(rest).trim()
        }
        None => trimmed,
    }
}

/// The drink served whenever generation fails
pub fn fallback_recommendation() -> Recommendation {
    let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    Recommendation {
        names: strings(&[
            "The Midnight Reverie",
            "Shadow's Edge",
            "Velvet Conspiracy",
            "The Quiet Storm",
            "Whispered Secrets",
        ]),
        selected_name: "The Midnight Reverie".to_string(),
        ingredients: strings(&[
            "2 oz Woodford Reserve",
            "0.5 oz Luxardo Maraschino",
            "0.75 oz fresh lemon juice",
            "2 dashes Angostura bitters",
            "garnish: expressed lemon peel",
        ]),
        story: "Steve discovered this recipe written in invisible ink on the back of a jazz album from 1947. He only prepares it when the moon is waning, claiming the shadows help him measure the pour. Peter was supposed to help catalog the vintage recipes, but he hasn't been seen in weeks. The last guest who ordered it claimed they could taste memories of conversations that hadn't happened yet.".to_string(),
        whisper: "The Luxardo Maraschino has been humming Billie Holiday all evening.".to_string(),
        flavor_profile: "Dark fruit mingles with oak and smoke, like secrets shared in a library after midnight.".to_string(),
        tags: strings(&["shadow_work", "vintage_mystery", "time_slip"]),
        food_pairing: None,
    }
}
