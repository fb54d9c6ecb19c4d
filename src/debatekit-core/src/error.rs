//! Error types for the coaching service.

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoachError {
    #[error("OpenAI API error: {0}")]
    OpenAIError(#[from] async_openai::error::OpenAIError),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("{0} missing in environment/.env")]
    MissingCredential(&'static str),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{0}")]
    InvalidRequest(String),
}

/// The step of a request that talked to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Package,
    PolishPackage,
    Speeches,
    Chat,
    PresidingOfficer,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Package => "package",
            Stage::PolishPackage => "polish package",
            Stage::Speeches => "speeches",
            Stage::Chat => "chat",
            Stage::PresidingOfficer => "po",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A provider failure tagged with the stage it happened in.
#[derive(Error, Debug)]
#[error("LLM error ({stage}): {source}")]
pub struct StageError {
    pub stage: Stage,
    pub source: CoachError,
}

impl StageError {
    pub fn new(stage: Stage, source: CoachError) -> Self {
        Self { stage, source }
    }
}
