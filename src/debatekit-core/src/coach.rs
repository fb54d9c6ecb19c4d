//! Request sequencing.
//!
//! Builds the prompts for each stage, sends them to the provider and chains
//! the optional polish pass. Calls are sequential and never retried; any
//! failure aborts the whole request.

use std::sync::Arc;

use log::{error, info};

use crate::error::{Stage, StageError};
use crate::message::Message;
use crate::prompts::{
    build_argument_prompt, build_chat_prompt, build_po_prompt, build_polish_prompt,
    build_speech_prompt,
};
use crate::provider::LlmClient;
use crate::request::{ChatRequest, GenerationOutput, GenerationRequest, PoRequest};

/// Turns validated requests into provider calls.
pub struct DebateCoach {
    client: Arc<dyn LlmClient>,
}

impl DebateCoach {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    /// Argument package, optionally polished, plus optional full speeches.
    ///
    /// Expects a request that already passed [`GenerationRequest::validate`].
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationOutput, StageError> {
        let prompt = build_argument_prompt(
            &request.bill,
            request.speech_minutes,
            &request.style,
            request.return_qx,
            request.novelty,
            request.custom_instructions.as_deref(),
        );
        let mut package = self.call(Stage::Package, &prompt).await?;

        if request.polish {
            package = self.polish(Stage::PolishPackage, &package, request).await?;
        }

        let speeches = if request.return_full_speeches {
            Some(self.speeches(request).await?)
        } else {
            None
        };

        Ok(GenerationOutput { package, speeches })
    }

    /// Freeform assistant reply, returned as the provider produced it.
    pub async fn chat(&self, request: &ChatRequest) -> Result<String, StageError> {
        let prompt = build_chat_prompt(
            &request.message,
            request.bill.as_deref(),
            &request.style,
            request.novelty,
        );
        self.call(Stage::Chat, &prompt).await
    }

    /// Raw model text for the PO notes; expected to be JSON but not checked.
    pub async fn po_assist(&self, request: &PoRequest) -> Result<String, StageError> {
        let prompt = build_po_prompt(&request.text);
        self.call(Stage::PresidingOfficer, &prompt).await
    }

    // Speech generation and its polish both report as the speeches stage.
    async fn speeches(&self, request: &GenerationRequest) -> Result<String, StageError> {
        let prompt = build_speech_prompt(
            &request.bill,
            request.speech_minutes,
            &request.style,
            request.novelty,
            request.custom_instructions.as_deref(),
        );
        let draft = self.call(Stage::Speeches, &prompt).await?;

        if request.polish {
            self.polish(Stage::Speeches, &draft, request).await
        } else {
            Ok(draft)
        }
    }

    async fn polish(
        &self,
        stage: Stage,
        draft: &str,
        request: &GenerationRequest,
    ) -> Result<String, StageError> {
        let prompt = build_polish_prompt(
            draft,
            &request.style,
            request.custom_instructions.as_deref(),
        );
        self.call(stage, &prompt).await
    }

    async fn call(&self, stage: Stage, messages: &[Message]) -> Result<String, StageError> {
        info!(
            "{} stage: calling {} ({})",
            stage,
            self.client.kind().name(),
            self.client.model()
        );
        self.client.generate(messages).await.map_err(|e| {
            error!("{} stage failed: {}", stage, e);
            StageError::new(stage, e)
        })
    }
}
