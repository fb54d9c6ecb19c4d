//! Freeform assistant prompt for follow-up edits and questions.

use super::banlist_text;
use crate::message::Message;
use crate::style::{Novelty, style_modifier};

fn chat_system() -> String {
    format!(
        r#"You are a debate writing assistant. You can: invent creative angles (novel but plausible), rewrite blocks with razor cadence,
add or remove specific constraints (jurisdiction, procedure, ethics), craft QX, or propose evidence prompts.
Follow the user's instructions faithfully. If a bill is provided, stay on-topic. Prefer concrete mechanisms to vague rhetoric.
Avoid clichés: {banlist}.
"#,
        banlist = banlist_text(),
    )
}

/// Build the chat conversation; bill context is included only when non-blank.
pub fn build_chat_prompt(
    message: &str,
    bill: Option<&str>,
    style: &str,
    novelty: Novelty,
) -> Vec<Message> {
    let style_note = style_modifier(style, novelty);
    let system = format!("{}\nStyle kernel: {style_note}\n", chat_system());

    let context = bill
        .filter(|b| !b.trim().is_empty())
        .map(|b| format!("Bill context:\n{b}\n\n"))
        .unwrap_or_default();
    let user = format!("{context}User request:\n{message}\n");

    vec![Message::system(system), Message::user(user)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Role;

    #[test]
    fn test_chat_prompt_with_bill_context() {
        let messages = build_chat_prompt(
            "Give me a sharper AFF hook.",
            Some("Abolish the penny."),
            "razor",
            Novelty::Standard,
        );
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(
            messages[1].content,
            "Bill context:\nAbolish the penny.\n\nUser request:\nGive me a sharper AFF hook.\n"
        );
    }

    #[test]
    fn test_chat_prompt_without_bill() {
        let messages = build_chat_prompt("Draft three QX.", None, "razor", Novelty::Standard);
        assert_eq!(messages[1].content, "User request:\nDraft three QX.\n");

        let messages = build_chat_prompt("Draft three QX.", Some(""), "razor", Novelty::Standard);
        assert!(!messages[1].content.contains("Bill context"));
    }

    #[test]
    fn test_chat_system_has_banlist_and_style_kernel() {
        let messages = build_chat_prompt("hi", None, "Creative", Novelty::Standard);
        let system = &messages[0].content;
        assert!(system.contains(&format!("Avoid clichés: {}.", banlist_text())));
        assert!(system.contains("Style kernel:  Lean into vivid"));
        assert!(system.contains("Favor non-obvious but defensible mechanisms."));
    }
}
