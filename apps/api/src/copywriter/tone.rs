//! Tone presets — the fixed set of tone-and-manner options a draft can carry.
//!
//! The preset labels are the user-facing Korean strings; they double as the
//! wire representation so a draft round-trips through JSON unchanged.

use serde::{Deserialize, Serialize};

/// One of the five supported tone-and-manner presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Tone {
    /// 따뜻하고 서정적인 — the default.
    #[default]
    #[serde(rename = "따뜻하고 서정적인")]
    WarmLyrical,
    #[serde(rename = "고급스럽고 신뢰감 있는")]
    Refined,
    #[serde(rename = "청량하고 산뜻한")]
    Crisp,
    #[serde(rename = "위트 있고 유머러스한")]
    Witty,
    #[serde(rename = "전통적이고 묵직한")]
    Traditional,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::WarmLyrical,
        Tone::Refined,
        Tone::Crisp,
        Tone::Witty,
        Tone::Traditional,
    ];

    /// The user-facing label, interpolated verbatim into the prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Tone::WarmLyrical => "따뜻하고 서정적인",
            Tone::Refined => "고급스럽고 신뢰감 있는",
            Tone::Crisp => "청량하고 산뜻한",
            Tone::Witty => "위트 있고 유머러스한",
            Tone::Traditional => "전통적이고 묵직한",
        }
    }

    /// Resolves a preset from its label. Returns `None` for anything outside
    /// the fixed set — free-text tones are not accepted.
    pub fn from_label(label: &str) -> Option<Tone> {
        Tone::ALL.into_iter().find(|t| t.label() == label)
    }
}
