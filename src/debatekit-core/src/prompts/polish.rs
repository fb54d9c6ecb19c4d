//! Polish pass: tighten a draft without changing its substance.

use super::{banlist_text, custom_directive};
use crate::message::Message;

fn polish_system() -> String {
    format!(
        r#"You are a debate writing coach and copy editor. Polish the arguments to read like a Nationals final.
Rules:
- Keep all claims and logic intact; do not invent facts.
- Enforce structure per contention: Claim → Mechanism (2–3 steps) → Impact → "what this means".
- Tighten language; 10–22 words/sentence average; vary cadence.
- Strengthen signposting; add "First/Second/Third" where a new contention begins.
- Add explicit Weighing (probability • timeframe • irreversibility/distribution) if missing.
- Replace banlisted clichés with domain-grounded phrasing: {banlist}.
- Ensure analogies map directly to the mechanism (no "hope" metaphors).
"#,
        banlist = banlist_text(),
    )
}

/// Wrap a previously generated draft in polishing instructions.
pub fn build_polish_prompt(
    draft: &str,
    style: &str,
    custom_instructions: Option<&str>,
) -> Vec<Message> {
    let extra = custom_directive(custom_instructions)
        .map(|c| format!("\nAlso honor these additional instructions during polishing:\n{c}\n"))
        .unwrap_or_default();

    let user = format!(
        "Rewrite the following for clarity, cadence, and judge-facing polish while preserving substance:\n\
         {extra}\n\
         === DRAFT START ===\n\
         {draft}\n\
         === DRAFT END ===\n\
         \n\
         Return the same sections in the same order. Do not add new sections. Style preset: {style}.\n",
        draft = draft.trim(),
    );

    vec![Message::system(polish_system()), Message::user(user)]
}
