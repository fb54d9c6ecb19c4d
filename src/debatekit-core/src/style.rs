//! Style presets and novelty levels.

use serde::{Deserialize, Serialize};

/// How unconventional the generated arguments should be.
///
/// Parsing is lenient: anything other than `high` or `wild` is `Standard`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum Novelty {
    #[default]
    Standard,
    High,
    Wild,
}

impl Novelty {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "high" => Novelty::High,
            "wild" => Novelty::Wild,
            _ => Novelty::Standard,
        }
    }

    /// `High` and `Wild` switch on the brainstorm-and-filter instructions.
    pub fn is_elevated(&self) -> bool {
        matches!(self, Novelty::High | Novelty::Wild)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Novelty::Standard => "standard",
            Novelty::High => "high",
            Novelty::Wild => "wild",
        }
    }
}

impl From<String> for Novelty {
    fn from(raw: String) -> Self {
        Novelty::parse(&raw)
    }
}

/// A named tone modifier for generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StylePreset {
    Nationals,
    Razor,
    Creative,
    Technical,
    NoviceFriendly,
}

impl StylePreset {
    /// Look a preset up by name, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "nationals" => Some(StylePreset::Nationals),
            "razor" => Some(StylePreset::Razor),
            "creative" => Some(StylePreset::Creative),
            "technical" => Some(StylePreset::Technical),
            "novice-friendly" => Some(StylePreset::NoviceFriendly),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StylePreset::Nationals => "nationals",
            StylePreset::Razor => "razor",
            StylePreset::Creative => "creative",
            StylePreset::Technical => "technical",
            StylePreset::NoviceFriendly => "novice-friendly",
        }
    }

    /// Extra tone instruction appended to the system prompt.
    pub fn tone(&self) -> &'static str {
        match self {
            StylePreset::Creative => {
                " Lean into vivid, debate-appropriate imagery; keep one memorable image per speech."
            }
            StylePreset::Technical => {
                " Prioritize precise policy mechanisms and brisk, evidence-friendly prose; limit imagery."
            }
            StylePreset::NoviceFriendly => {
                " Use simpler sentences, define jargon in-line, and add brief concrete examples."
            }
            StylePreset::Razor => {
                " Cut filler. Short, punchy, high-density lines; crisp signposting; strong crystallization."
            }
            StylePreset::Nationals => "",
        }
    }
}

/// Lower-cased, trimmed style name; blank means `nationals`.
pub fn normalize_style(style: &str) -> String {
    let style = style.trim().to_lowercase();
    if style.is_empty() {
        StylePreset::Nationals.name().to_string()
    } else {
        style
    }
}

/// The style kernel shared by the speech and chat prompts.
///
/// Tone fragment for the preset (if any), a push toward non-obvious
/// mechanisms for `creative` or elevated novelty, then the pacing directive.
pub fn style_modifier(style: &str, novelty: Novelty) -> String {
    let preset = StylePreset::from_name(style);
    let mut extra = preset.map(|p| p.tone()).unwrap_or_default().to_string();

    if preset == Some(StylePreset::Creative) || novelty.is_elevated() {
        extra.push_str("\nFavor non-obvious but defensible mechanisms. Avoid top-10 common talking points.");
    }
    extra.push_str(
        "\nPrefer 10–22 words per sentence on average, varied cadence. Use 'First, Second, Third' in roadmap and as paragraph openers.",
    );
    extra
}
