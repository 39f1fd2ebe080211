use docsum_common::{DocsumError, Result};
use docsum_llm::{build_prompt, selection_notice, CompletionClient, Mode};
use std::sync::Arc;
use tracing::{info, warn};

use crate::session::{Session, SessionStore};

/// Warning shown when the input is empty
pub const EMPTY_INPUT_WARNING: &str = "내용을 입력해주세요.";

/// Raw selections from the UI, as submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub content_summary: bool,
    pub proposal_draft: bool,
}

impl Selection {
    pub fn mode(self) -> Mode {
        Mode::from_selection(self.content_summary, self.proposal_draft)
    }

    pub fn notice(self) -> Option<&'static str> {
        selection_notice(self.content_summary, self.proposal_draft)
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            content_summary: true,
            proposal_draft: false,
        }
    }
}

/// Result of a successful generation
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// Session after the update
    pub session: Session,

    /// Mode that was applied
    pub mode: Mode,

    /// Selection notice to surface, if any
    pub notice: Option<&'static str>,
}

/// Runs input validation, prompt building, the completion call and the
/// session update for one generation request
pub struct GenerationWorkflow {
    client: Arc<dyn CompletionClient>,
    sessions: Arc<SessionStore>,
}

impl GenerationWorkflow {
    /// Create new workflow
    pub fn new(client: Arc<dyn CompletionClient>, sessions: Arc<SessionStore>) -> Self {
        Self { client, sessions }
    }

    /// Generate for `session_id`.
    ///
    /// The session is updated only when the completion succeeds; invalid
    /// input and service failures leave it untouched.
    pub async fn execute(
        &self,
        session_id: &str,
        input: &str,
        selection: Selection,
    ) -> Result<GenerationOutcome> {
        if input.trim().is_empty() {
            return Err(DocsumError::invalid_input(EMPTY_INPUT_WARNING));
        }

        let mode = selection.mode();
        let plan = build_prompt(input, mode);

        info!(
            "Generating for session {} - Mode: {:?}, Input length: {} chars, Model: {}",
            session_id,
            mode,
            input.chars().count(),
            self.client.model()
        );

        let text = self.client.complete(&plan.instruction).await.map_err(|e| {
            warn!("Generation failed for session {}: {}", session_id, e);
            e
        })?;

        let session = self.sessions.update(session_id, text, plan.file_name).await;

        info!(
            "Generation stored for session {} - {} chars, file: {}",
            session_id,
            session.generated_text.chars().count(),
            session.file_name
        );

        Ok(GenerationOutcome {
            session,
            mode,
            notice: selection.notice(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeClient;
    use docsum_common::ServiceFailureKind;
    use docsum_document::{convert_markup, Block};
    use docsum_llm::{content_summary_prompt, BOTH_SELECTED_NOTICE};

    fn workflow(client: Arc<FakeClient>) -> (GenerationWorkflow, Arc<SessionStore>) {
        let sessions = Arc::new(SessionStore::new());
        (GenerationWorkflow::new(client, sessions.clone()), sessions)
    }

    #[tokio::test]
    async fn test_summary_generation_updates_session() {
        let client = Arc::new(FakeClient::replying(["### Summary\nDelay discussed\n"]));
        let (workflow, sessions) = workflow(client.clone());
        let id = sessions.create().await;

        let input = "Meeting notes: discussed delay.";
        let outcome = workflow.execute(&id, input, Selection::default()).await.unwrap();

        assert_eq!(outcome.mode, Mode::ContentSummary);
        assert_eq!(outcome.notice, None);
        assert_eq!(outcome.session.file_name, "내용정리리포트.docx");

        let stored = sessions.read(&id).await;
        assert_eq!(stored, outcome.session);
        assert_eq!(
            convert_markup(&stored.generated_text),
            vec![Block::heading("Summary"), Block::paragraph("Delay discussed")]
        );
        assert_eq!(client.instructions(), vec![content_summary_prompt(input)]);
    }

    #[tokio::test]
    async fn test_blank_input_is_rejected_without_call() {
        let client = Arc::new(FakeClient::replying(["unused"]));
        let (workflow, sessions) = workflow(client.clone());
        let id = sessions.create().await;

        for input in ["", "   ", "\n\t "] {
            let err = workflow.execute(&id, input, Selection::default()).await.unwrap_err();
            assert!(matches!(err, DocsumError::InvalidInput(ref msg) if msg == EMPTY_INPUT_WARNING));
        }

        assert_eq!(client.calls(), 0);
        assert_eq!(sessions.read(&id).await, Session::default());
    }

    #[tokio::test]
    async fn test_service_failure_keeps_previous_result() {
        let client = Arc::new(FakeClient::scripted(vec![
            Ok("### 첫 결과".to_string()),
            Err((ServiceFailureKind::Network, "operation timed out".to_string())),
        ]));
        let (workflow, sessions) = workflow(client.clone());
        let id = sessions.create().await;

        workflow.execute(&id, "회의록", Selection::default()).await.unwrap();
        let before = sessions.read(&id).await;

        let proposal = Selection {
            content_summary: false,
            proposal_draft: true,
        };
        let err = workflow.execute(&id, "아이디어", proposal).await.unwrap_err();

        assert_eq!(err.service_failure_kind(), Some(ServiceFailureKind::Network));
        assert!(err.to_string().contains("operation timed out"));
        assert_eq!(sessions.read(&id).await, before);
        assert_eq!(client.calls(), 2);
    }

    #[tokio::test]
    async fn test_both_selected_uses_summary_template() {
        let client = Arc::new(FakeClient::replying(["결과"]));
        let (workflow, sessions) = workflow(client.clone());
        let id = sessions.create().await;

        let both = Selection {
            content_summary: true,
            proposal_draft: true,
        };
        let outcome = workflow.execute(&id, "메모", both).await.unwrap();

        assert_eq!(outcome.mode, Mode::ContentSummary);
        assert_eq!(outcome.notice, Some(BOTH_SELECTED_NOTICE));
        assert_eq!(client.instructions(), vec![content_summary_prompt("메모")]);
    }

    #[tokio::test]
    async fn test_proposal_sets_proposal_filename() {
        let client = Arc::new(FakeClient::replying(["### 개요\n내용"]));
        let (workflow, sessions) = workflow(client);
        let id = sessions.create().await;

        let proposal = Selection {
            content_summary: false,
            proposal_draft: true,
        };
        let outcome = workflow.execute(&id, "새 서비스 아이디어", proposal).await.unwrap();

        assert_eq!(outcome.mode, Mode::ProposalDraft);
        assert_eq!(sessions.read(&id).await.file_name, "기획서.docx");
    }
}
