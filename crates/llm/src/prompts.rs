//! Prompt templates and mode selection

use serde::{Deserialize, Serialize};

/// Output filename before any generation has happened
pub const DEFAULT_FILE_NAME: &str = "정리결과.docx";

/// Shown when both options are selected at once
pub const BOTH_SELECTED_NOTICE: &str =
    "두 항목이 모두 선택되었습니다. '내용 정리 리포트'를 우선 적용합니다.";

/// What the generated document should be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Free-form notes organised into a structured report
    ContentSummary,
    /// One-page proposal built from an idea
    ProposalDraft,
}

impl Mode {
    /// Derive the mode from the two raw selections.
    ///
    /// The summary option wins whenever it is on; the proposal applies only
    /// when it is the sole selection. Nothing selected falls back to the
    /// summary, which is the checked-by-default option.
    pub fn from_selection(content_summary: bool, proposal_draft: bool) -> Self {
        if !content_summary && proposal_draft {
            Self::ProposalDraft
        } else {
            Self::ContentSummary
        }
    }

    /// Filename used for the exported document
    pub fn file_name(self) -> &'static str {
        match self {
            Self::ContentSummary => "내용정리리포트.docx",
            Self::ProposalDraft => "기획서.docx",
        }
    }
}

/// Notice to show for a raw selection, if any
pub fn selection_notice(content_summary: bool, proposal_draft: bool) -> Option<&'static str> {
    (content_summary && proposal_draft).then_some(BOTH_SELECTED_NOTICE)
}

/// Instruction sent to the model plus the filename it produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPlan {
    pub instruction: String,
    pub file_name: &'static str,
}

/// Prompt for organising mixed email/meeting/chat text into a report
pub fn content_summary_prompt(input: &str) -> String {
    format!(
        r#"아래는 이메일, 회의, 대화 기록 등 다양한 내용이 섞인 자유형 텍스트입니다.
전체 흐름과 맥락을 분석하여, 너무 축약하지 않고 **구조적이고 명확하게 한국어로 정리**해줘.
핵심 논의, 결정 사항, 남은 과제, 인물 등을 자동 판단해서 ### 제목으로 항목 구분해서 써줘.

내용:
"""{}""""#,
        input
    )
}

/// Prompt for turning an idea into a one-page proposal
pub fn proposal_draft_prompt(input: &str) -> String {
    format!(
        r#"아래 아이디어 내용을 바탕으로 1장 분량의 기획서를 작성해줘.
실무자가 바로 이해할 수 있게 구성은 자유롭게 판단하되, 소제목은 ### 형식으로 구분하고,
내용은 깔끔하고 명확한 한국어로 정리해줘.

내용:
"""{}""""#,
        input
    )
}

/// Build the instruction for `mode`, embedding `input` verbatim
pub fn build_prompt(input: &str, mode: Mode) -> PromptPlan {
    let instruction = match mode {
        Mode::ContentSummary => content_summary_prompt(input),
        Mode::ProposalDraft => proposal_draft_prompt(input),
    };

    PromptPlan {
        instruction,
        file_name: mode.file_name(),
    }
}
