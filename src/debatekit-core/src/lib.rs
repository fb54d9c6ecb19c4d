//! DebateKit Core Library
//!
//! Prompt construction for Congressional Debate material, the provider
//! clients that send those prompts to a language model, and the stage
//! sequencing that ties them together.

pub mod coach;
pub mod config;
pub mod error;
pub mod message;
pub mod prompts;
pub mod provider;
pub mod request;
pub mod style;

pub use coach::DebateCoach;
pub use config::{Config, ProviderKind};
pub use error::{CoachError, Stage, StageError};
pub use message::{Message, Role};
pub use provider::{LlmClient, new_client};
pub use request::{ChatRequest, GenerationOutput, GenerationRequest, PoRequest};
pub use style::{Novelty, StylePreset};
