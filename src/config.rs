use serde::Deserialize;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to a menu JSON document; the bundled menu is used when unset
    #[serde(default)]
    pub menu_path: Option<String>,

    /// Redis connection URL for the lore store; lore stays in memory when unset
    #[serde(default)]
    pub redis_url: Option<String>,

    /// OpenAI API key. Without it the generator endpoint uses the rule engine
    #[serde(default)]
    pub openai_api_key: Option<String>,

    /// OpenAI-compatible API base URL
    #[serde(default = "default_openai_base_url")]
    pub openai_base_url: String,

    #[serde(default = "default_openai_model")]
    pub openai_model: String,

    /// Upper bound on a single generation request
    #[serde(default = "default_openai_timeout_secs")]
    pub openai_timeout_secs: u64,

    /// Seed for the rule engine's random pools
    #[serde(default)]
    pub rng_seed: Option<u64>,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_openai_model() -> String {
    "gpt-4".to_string()
}

fn default_openai_timeout_secs() -> u64 {
    30
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn openai_timeout(&self) -> Duration {
        Duration::from_secs(self.openai_timeout_secs)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_environment() {
        let config: Config = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.menu_path, None);
        assert_eq!(config.redis_url, None);
        assert_eq!(config.openai_api_key, None);
        assert_eq!(config.openai_model, "gpt-4");
        assert_eq!(config.openai_timeout(), Duration::from_secs(30));
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_overrides() {
        let vars = vec![
            ("PORT".to_string(), "8080".to_string()),
            ("RNG_SEED".to_string(), "42".to_string()),
            ("OPENAI_API_KEY".to_string(), "sk-test".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
    }
}
