//! Full-speech prompt: one Affirmation and one Negation, ready to deliver.

use super::{banlist_text, custom_directive};
use crate::message::Message;
use crate::style::{Novelty, normalize_style, style_modifier};

fn speech_system(minutes: u32) -> String {
    format!(
        r#"You are a Congressional Debate finalist. Given a bill, write two complete, ready-to-deliver speeches:
one Affirmation and one Negation.

Constraints:
- Nationals-final tone: brisk signposting, vivid but tasteful imagery, clean transitions, tight warrants.
- Include: Hook (1–2 sentences), Roadmap (1 sentence), 3 flowing contentions (Claim → Mechanism (2–3 steps) → Impact → "what this means"),
  weighing (probability • timeframe • irreversibility/distribution), crystallization, and a memorable closing line.
- Natural paragraphs (no bullet points), ~140–160 wpm pacing. Aim for ~{minutes} minutes each.
- Do NOT fabricate statistics; when suggesting evidence, phrase as "According to [credible source category] ...".
- Vary rhetoric: one analogy or framing device; one "what this means" bridge per contention; one crystallization.
- Before writing, brainstorm 5 analogy candidates per side; pick the best one to use in each speech.
  After both speeches, print an "Analogy Bank" (Aff 5, Neg 5).
- Avoid any of these phrases: {banlist}.
"#,
        banlist = banlist_text(),
    )
}

/// Build the two-speech conversation.
pub fn build_speech_prompt(
    bill: &str,
    minutes: u32,
    style: &str,
    novelty: Novelty,
    custom_instructions: Option<&str>,
) -> Vec<Message> {
    let style = normalize_style(style);
    let system = speech_system(minutes) + &style_modifier(&style, novelty);

    let mut user = format!(
        r#"Bill:
{bill}

Write TWO speeches to read aloud:

[Affirmation Speech]
- Hook
- Roadmap
- Three integrated contentions (Claim → Mechanism (2–3 steps) → Impact → "what this means")
- Weighing (probability • timeframe • irreversibility/distribution)
- Crystallization
- Closing line

[Negation Speech]
(same structure)

Target length: ~{minutes} minutes each. Style: {style}.
Return the two speeches with section headings and clean paragraphs (no bullets).
At the end, include:
ANALOGY BANK
- AFF (5 one-liners)
- NEG (5 one-liners)

Replace any banned phrases with fresher wording."#
    );

    if let Some(custom) = custom_directive(custom_instructions) {
        user.push_str("\n\nADDITIONAL INSTRUCTIONS:\n");
        user.push_str(custom);
    }

    vec![Message::system(system), Message::user(user)]
}
