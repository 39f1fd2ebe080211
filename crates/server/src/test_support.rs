use async_trait::async_trait;
use docsum_common::{DocsumError, Result, ServiceFailureKind};
use docsum_llm::CompletionClient;
use std::collections::VecDeque;
use std::sync::Mutex;

type Reply = std::result::Result<String, (ServiceFailureKind, String)>;

/// Completion client that plays back scripted replies
pub struct FakeClient {
    replies: Mutex<VecDeque<Reply>>,
    instructions: Mutex<Vec<String>>,
}

impl FakeClient {
    pub fn scripted(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            instructions: Mutex::new(Vec::new()),
        }
    }

    pub fn replying<'a>(texts: impl IntoIterator<Item = &'a str>) -> Self {
        Self::scripted(texts.into_iter().map(|t| Ok(t.to_string())).collect())
    }

    pub fn failing(kind: ServiceFailureKind, message: &str) -> Self {
        Self::scripted(vec![Err((kind, message.to_string()))])
    }

    pub fn instructions(&self) -> Vec<String> {
        self.instructions.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.instructions.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionClient for FakeClient {
    async fn complete(&self, instruction: &str) -> Result<String> {
        self.instructions.lock().unwrap().push(instruction.to_string());
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err((kind, message))) => Err(DocsumError::external(kind, message)),
            None => Err(DocsumError::internal("no scripted reply left")),
        }
    }

    fn model(&self) -> &str {
        "fake-model"
    }
}
