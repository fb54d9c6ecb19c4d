//! Provider abstraction over the completion backends.
//!
//! Callers hand over an ordered conversation and get text back. Which backend
//! answers is decided once, from [`Config::provider`], when the client is built.

pub mod ollama;
pub mod openai;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{Config, ProviderKind};
use crate::error::CoachError;
use crate::message::Message;

pub use ollama::OllamaClient;
pub use openai::OpenAIChatClient;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send the conversation and return the generated text.
    async fn generate(&self, messages: &[Message]) -> Result<String, CoachError>;

    fn kind(&self) -> ProviderKind;

    fn model(&self) -> &str;
}

/// Build the client selected by the configuration.
///
/// Fails when the selected backend is missing something it needs, e.g. the
/// API key for the hosted provider.
pub fn new_client(config: &Config) -> Result<Arc<dyn LlmClient>, CoachError> {
    let client: Arc<dyn LlmClient> = match config.provider {
        ProviderKind::OpenAI => Arc::new(OpenAIChatClient::from_config(config)?),
        ProviderKind::Ollama => Arc::new(OllamaClient::from_config(config)?),
    };
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_provider_requires_api_key() {
        let config = Config::default();
        match new_client(&config) {
            Err(CoachError::MissingCredential(key)) => assert_eq!(key, "OPENAI_API_KEY"),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("client built without an API key"),
        }
    }

    #[test]
    fn test_factory_selects_openai() {
        let mut config = Config::default();
        config.openai.api_key = Some("sk-test".to_string());
        let client = new_client(&config).unwrap();
        assert_eq!(client.kind(), ProviderKind::OpenAI);
        assert_eq!(client.model(), "gpt-4o");
    }

    #[test]
    fn test_factory_selects_ollama_without_credentials() {
        let mut config = Config::default();
        config.provider = ProviderKind::Ollama;
        let client = new_client(&config).unwrap();
        assert_eq!(client.kind(), ProviderKind::Ollama);
        assert_eq!(client.model(), "llama3");
    }
}
