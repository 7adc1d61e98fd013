use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the Python Tutor assistant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Chat completion settings
    pub chat: ChatConfig,

    /// Video search settings
    pub search: SearchConfig,

    /// Tutorial ranking settings
    pub ranking: RankingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Chat completion endpoint (OpenAI-compatible)
    pub endpoint: String,

    /// API key for the chat provider
    pub api_key: Option<String>,

    /// Model to use
    pub model: String,

    /// System prompt sent with every question
    pub system_prompt: String,

    /// Maximum tokens to generate
    pub max_tokens: u32,

    /// Temperature for generation
    pub temperature: f32,

    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// API key for the YouTube Data API
    pub api_key: Option<String>,

    /// Maximum search results to request per concept
    pub max_results: u32,

    /// Relevance language passed to the search endpoint
    pub relevance_language: String,

    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Minimum comment count for a candidate to be ranked
    pub min_comments: u64,

    /// Tutorials to keep per concept
    pub top_n: usize,
}

impl Config {
    /// Load configuration from file
    pub fn load() -> Result<Self> {
        // Try to load from various locations
        let config_paths = [
            "py-tutor.toml",
            "config/py-tutor.toml",
            "~/.config/py-tutor/config.toml",
        ];

        for path in &config_paths {
            if let Ok(config_str) = std::fs::read_to_string(path) {
                match toml::from_str::<Config>(&config_str) {
                    Ok(mut config) => {
                        tracing::info!("📄 Loaded configuration from: {}", path);
                        config.apply_env_overrides();
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config file {}: {}", path, e);
                    }
                }
            }
        }

        // Fall back to defaults plus environment variables
        Ok(Self::from_env())
    }

    /// Build configuration from defaults and environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    /// Override settings from environment variables
    fn apply_env_overrides(&mut self) {
        if let Ok(api_key) = std::env::var("GROQ_API_KEY") {
            self.chat.api_key = Some(api_key);
        }

        if let Ok(api_key) = std::env::var("YOUTUBE_API_KEY") {
            self.search.api_key = Some(api_key);
        }

        if let Ok(max_results) = std::env::var("PY_TUTOR_MAX_RESULTS") {
            self.search.max_results = max_results.parse().unwrap_or(self.search.max_results);
        }

        if let Ok(top_n) = std::env::var("PY_TUTOR_TOP_N") {
            self.ranking.top_n = top_n.parse().unwrap_or(self.ranking.top_n);
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.search.max_results == 0 {
            return Err(anyhow!("max_results must be greater than 0"));
        }

        if self.ranking.top_n == 0 {
            return Err(anyhow!("top_n must be greater than 0"));
        }

        if !(0.0..=2.0).contains(&self.chat.temperature) {
            return Err(anyhow!("temperature must be between 0.0 and 2.0"));
        }

        if self.chat.max_tokens == 0 {
            return Err(anyhow!("max_tokens must be greater than 0"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chat: ChatConfig {
                endpoint: "https://api.groq.com/openai/v1/chat/completions".to_string(),
                api_key: None,
                model: "llama3-8b-8192".to_string(),
                system_prompt: "You are a helpful assistant who helps users learn Python."
                    .to_string(),
                max_tokens: 400,
                temperature: 0.7,
                timeout_seconds: 60,
            },
            search: SearchConfig {
                api_key: None,
                max_results: 2,
                relevance_language: "en".to_string(),
                timeout_seconds: 30,
            },
            ranking: RankingConfig {
                min_comments: 50,
                top_n: 1,
            },
        }
    }
}

/// Configuration builder for programmatic config creation
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn with_chat_api_key(mut self, api_key: String) -> Self {
        self.config.chat.api_key = Some(api_key);
        self
    }

    pub fn with_search_api_key(mut self, api_key: String) -> Self {
        self.config.search.api_key = Some(api_key);
        self
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.config.chat.model = model;
        self
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.config.search.max_results = max_results;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.config.ranking.top_n = top_n;
        self
    }

    pub fn with_min_comments(mut self, min_comments: u64) -> Self {
        self.config.ranking.min_comments = min_comments;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.chat.model, "llama3-8b-8192");
        assert_eq!(config.chat.max_tokens, 400);
        assert_eq!(config.search.max_results, 2);
        assert_eq!(config.search.relevance_language, "en");
        assert_eq!(config.ranking.min_comments, 50);
        assert_eq!(config.ranking.top_n, 1);
    }

    #[test]
    fn test_config_builder() {
        let config = ConfigBuilder::new()
            .with_search_api_key("test-key".to_string())
            .with_max_results(5)
            .with_top_n(3)
            .build();

        assert_eq!(config.search.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.search.max_results, 5);
        assert_eq!(config.ranking.top_n, 3);
    }

    #[test]
    fn test_config_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());

        let bad = ConfigBuilder::new().with_max_results(0).build();
        assert!(bad.validate().is_err());

        let bad = ConfigBuilder::new().with_top_n(0).build();
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_config_file_parsing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("py-tutor.toml");
        std::fs::write(&path, toml::to_string_pretty(&Config::default()).unwrap()).unwrap();

        let config_str = std::fs::read_to_string(&path).unwrap();
        let parsed: Config = toml::from_str(&config_str).unwrap();
        assert_eq!(parsed.search.max_results, 2);
        assert_eq!(parsed.chat.max_tokens, 400);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.chat.model, config.chat.model);
        assert_eq!(parsed.ranking.min_comments, config.ranking.min_comments);
    }
}
