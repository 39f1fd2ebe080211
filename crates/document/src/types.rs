use serde::{Deserialize, Serialize};

/// Heading level used for every heading block
pub const HEADING_LEVEL: u8 = 2;

/// One unit of document output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Heading with its level
    Heading { level: u8, text: String },

    /// Plain paragraph
    Paragraph { text: String },
}

impl Block {
    /// Level-2 heading
    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading {
            level: HEADING_LEVEL,
            text: text.into(),
        }
    }

    /// Paragraph
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    /// Text content of the block
    pub fn text(&self) -> &str {
        match self {
            Self::Heading { text, .. } | Self::Paragraph { text } => text,
        }
    }
}
