//! Prompt construction.
//!
//! Every builder is a pure function from typed request parameters to an
//! ordered conversation. Nothing here touches the network.

mod argument;
mod chat;
mod polish;
mod presiding;
mod speech;

pub use argument::{BIOMED_TAXONOMY, NOVELTY_TAXONOMY, build_argument_prompt};
pub use chat::build_chat_prompt;
pub use polish::build_polish_prompt;
pub use presiding::build_po_prompt;
pub use speech::build_speech_prompt;

/// Clichés the model is told to replace with fresher wording.
pub const BANLIST: [&str; 12] = [
    "ethical concerns",
    "ethical precarity",
    "moral imperative",
    "moonshot",
    "snake oil",
    "technological overreach",
    "chasing unicorns",
    "balance in research",
    "science isn’t settled",
    "science is not settled",
    "frontier of hope",
    "seeds of hope",
];

/// The banned phrases as injected into prompts.
pub fn banlist_text() -> String {
    BANLIST.join(", ")
}

/// Trimmed custom instructions, or `None` when absent or blank.
pub(crate) fn custom_directive(custom: Option<&str>) -> Option<&str> {
    custom.map(str::trim).filter(|c| !c.is_empty())
}
