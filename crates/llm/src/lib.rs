//! docsum LLM integration
//!
//! Prompt templates and the chat completion client

mod client;
mod llm_trait;
mod prompts;
mod types;

pub use client::OpenAiClient;
pub use llm_trait::CompletionClient;
pub use prompts::{
    build_prompt, content_summary_prompt, proposal_draft_prompt, selection_notice, Mode,
    PromptPlan, BOTH_SELECTED_NOTICE, DEFAULT_FILE_NAME,
};
pub use types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, TEMPERATURE};
