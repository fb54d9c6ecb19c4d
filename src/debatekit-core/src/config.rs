//! Process configuration, read once at startup.
//!
//! Values come from the environment (optionally seeded from `.env`) or from a
//! TOML file of the same shape.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::warn;

use crate::error::CoachError;

/// Which completion backend serves requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Hosted OpenAI-compatible chat completions.
    #[default]
    OpenAI,
    /// Local Ollama chat API.
    Ollama,
}

impl ProviderKind {
    pub fn name(&self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "openai",
            ProviderKind::Ollama => "ollama",
        }
    }
}

impl FromStr for ProviderKind {
    type Err = CoachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "openai" => Ok(ProviderKind::OpenAI),
            "ollama" => Ok(ProviderKind::Ollama),
            other => Err(CoachError::ConfigError(format!(
                "Unknown LLM provider: '{}'",
                other
            ))),
        }
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderKind,
    pub openai: OpenAISettings,
    pub ollama: OllamaSettings,
    pub server: ServerSettings,
}

/// Settings for the hosted completion API.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OpenAISettings {
    pub api_key: Option<String>,
    pub api_base: String,
    pub model: String,
}

impl Default for OpenAISettings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o".to_string(),
        }
    }
}

/// Settings for the local chat API.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OllamaSettings {
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for OllamaSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:11434".to_string(),
            model: "llama3".to_string(),
            timeout_secs: 180,
        }
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub addr: String,
    /// Exact origins, or `scheme://*.domain` wildcard patterns.
    pub allowed_origins: Vec<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:8000".to_string(),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|o| o.to_string())
                .collect(),
        }
    }
}

const DEFAULT_ALLOWED_ORIGINS: [&str; 4] = [
    "http://127.0.0.1:5500",
    "http://localhost:5500",
    "https://*.netlify.app",
    "https://*.vercel.app",
];

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CoachError> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| CoachError::ConfigError(format!("Failed to read config: {}", e)))?;

        Self::from_str(&content)
    }

    /// Load configuration from string content.
    pub fn from_str(content: &str) -> Result<Self, CoachError> {
        toml::from_str(content)
            .map_err(|e| CoachError::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Build configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Config::default();

        if let Some(raw) = get("LLM_PROVIDER") {
            config.provider = raw.parse().unwrap_or_else(|e| {
                warn!("{}; falling back to openai", e);
                ProviderKind::OpenAI
            });
        }

        config.openai.api_key = get("OPENAI_API_KEY");
        if let Some(base) = get("OPENAI_API_BASE").or_else(|| get("OPENAI_BASE_URL")) {
            config.openai.api_base = base;
        }
        if let Some(model) = get("OPENAI_MODEL") {
            config.openai.model = model;
        }

        if let Some(base) = get("OLLAMA_BASE_URL") {
            config.ollama.base_url = base;
        }
        if let Some(model) = get("OLLAMA_MODEL") {
            config.ollama.model = model;
        }
        if let Some(raw) = get("OLLAMA_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.ollama.timeout_secs = secs,
                _ => warn!("Ignoring invalid OLLAMA_TIMEOUT_SECS '{}'", raw),
            }
        }

        if let Some(addr) = get("DEBATEKIT_ADDR") {
            config.server.addr = addr;
        }

        config
    }

    /// Model name of the selected provider.
    pub fn active_model(&self) -> &str {
        match self.provider {
            ProviderKind::OpenAI => &self.openai.model,
            ProviderKind::Ollama => &self.ollama.model,
        }
    }
}
