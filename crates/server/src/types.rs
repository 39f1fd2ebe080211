use chrono::{DateTime, Utc};
use docsum_document::{convert_markup, Block};
use serde::{Deserialize, Serialize};

use crate::session::Session;
use crate::workflow::Selection;

/// Session as returned to the page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    /// Session identifier
    pub session_id: String,

    /// Generated markdown for the results area
    pub generated_text: String,

    /// Download filename
    pub file_name: String,

    /// When the text was generated
    pub generated_at: Option<DateTime<Utc>>,

    /// Document blocks, recomputed from the text on every read
    pub blocks: Vec<Block>,
}

impl SessionView {
    pub fn new(session_id: impl Into<String>, session: &Session) -> Self {
        Self {
            session_id: session_id.into(),
            generated_text: session.generated_text.clone(),
            file_name: session.file_name.clone(),
            generated_at: session.generated_at,
            blocks: convert_markup(&session.generated_text),
        }
    }
}

/// Generate request
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Raw input text
    pub text: String,

    /// "Content summary report" option
    #[serde(default = "default_true")]
    pub content_summary: bool,

    /// "Proposal draft" option
    #[serde(default)]
    pub proposal_draft: bool,
}

fn default_true() -> bool {
    true
}

impl GenerateRequest {
    pub fn selection(&self) -> Selection {
        Selection {
            content_summary: self.content_summary,
            proposal_draft: self.proposal_draft,
        }
    }
}

/// Generate response
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,

    /// Mode selection notice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,

    pub session: SessionView,
}

/// Failure body; `warning` for input problems, `error` for everything else
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn warning(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            warning: Some(msg.into()),
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            warning: None,
            error: Some(msg.into()),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub success: bool,

    /// Completion model in use
    pub model: String,

    /// Whether an API key was configured at startup
    pub credential_configured: bool,
}
