//! Request inputs for the coaching stages.
//!
//! Field names match the public JSON API.

use serde::{Deserialize, Serialize};

use crate::error::CoachError;
use crate::style::Novelty;

/// Input for the argument package (and optional speeches).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Required. A missing field deserializes as empty and fails validation.
    #[serde(default)]
    pub bill: String,
    #[serde(default = "default_speech_minutes")]
    pub speech_minutes: u32,
    #[serde(default = "default_generation_style")]
    pub style: String,
    #[serde(default)]
    pub novelty: Novelty,
    #[serde(default = "default_true")]
    pub return_qx: bool,
    #[serde(default)]
    pub return_full_speeches: bool,
    #[serde(default = "default_true")]
    pub polish: bool,
    #[serde(default)]
    pub custom_instructions: Option<String>,
}

impl GenerationRequest {
    pub fn new(bill: impl Into<String>) -> Self {
        Self {
            bill: bill.into(),
            speech_minutes: default_speech_minutes(),
            style: default_generation_style(),
            novelty: Novelty::Standard,
            return_qx: true,
            return_full_speeches: false,
            polish: true,
            custom_instructions: None,
        }
    }

    /// Reject blank or whitespace-only bills.
    pub fn validate(&self) -> Result<(), CoachError> {
        if self.bill.trim().is_empty() {
            return Err(CoachError::InvalidRequest("Bill text required".to_string()));
        }
        Ok(())
    }
}

/// Input for a freeform chat turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub bill: Option<String>,
    #[serde(default = "default_chat_style")]
    pub style: String,
    #[serde(default)]
    pub novelty: Novelty,
}

/// Presiding Officer notes to convert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoRequest {
    pub text: String,
}

/// Result of the generate flow. `speeches` is present only when requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutput {
    pub package: String,
    pub speeches: Option<String>,
}

fn default_speech_minutes() -> u32 {
    2
}

fn default_generation_style() -> String {
    "nationals".to_string()
}

fn default_chat_style() -> String {
    "razor".to_string()
}

fn default_true() -> bool {
    true
}
