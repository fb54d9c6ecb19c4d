//! Hosted chat-completion backend.

use async_openai::Client;
use async_openai::config::OpenAIConfig;
use async_openai::types::chat::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
    ChatCompletionRequestUserMessage, CreateChatCompletionRequestArgs,
    CreateChatCompletionResponse,
};
use async_trait::async_trait;
use log::debug;

use super::LlmClient;
use crate::config::{Config, ProviderKind};
use crate::error::CoachError;
use crate::message::{Message, Role};

// Tuned for creative, non-repetitive output.
const TEMPERATURE: f32 = 0.85;
const TOP_P: f32 = 0.9;
const PRESENCE_PENALTY: f32 = 0.4;
const FREQUENCY_PENALTY: f32 = 0.1;

pub struct OpenAIChatClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAIChatClient {
    pub fn new(api_key: &str, api_base: &str, model: impl Into<String>) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(api_base);

        Self {
            client: Client::with_config(config),
            model: model.into(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, CoachError> {
        let api_key = config
            .openai
            .api_key
            .as_deref()
            .ok_or(CoachError::MissingCredential("OPENAI_API_KEY"))?;

        Ok(Self::new(
            api_key,
            &config.openai.api_base,
            config.openai.model.clone(),
        ))
    }
}

/// Messages go to the hosted API as-is.
fn to_request_message(message: &Message) -> ChatCompletionRequestMessage {
    match message.role {
        Role::System => ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
            content: message.content.clone().into(),
            name: None,
        }),
        Role::User => ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
            content: message.content.clone().into(),
            name: None,
        }),
    }
}

/// Text of the first choice. No choices or null content is malformed.
fn first_content(response: &CreateChatCompletionResponse) -> Result<String, CoachError> {
    response
        .choices
        .first()
        .and_then(|c| c.message.content.clone())
        .ok_or_else(|| CoachError::MalformedResponse("completion had no content".to_string()))
}

#[async_trait]
impl LlmClient for OpenAIChatClient {
    async fn generate(&self, messages: &[Message]) -> Result<String, CoachError> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages.iter().map(to_request_message).collect::<Vec<_>>())
            .temperature(TEMPERATURE)
            .top_p(TOP_P)
            .presence_penalty(PRESENCE_PENALTY)
            .frequency_penalty(FREQUENCY_PENALTY)
            .build()?;

        debug!(
            "openai: sending {} messages to {}",
            messages.len(),
            self.model
        );

        let response = self.client.chat().create(request).await?;
        first_content(&response)
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAI
    }

    fn model(&self) -> &str {
        &self.model
    }
}
