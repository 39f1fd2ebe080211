use async_trait::async_trait;
use docsum_common::Result;

/// Common trait for completion clients
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one instruction and return the trimmed generated text
    async fn complete(&self, instruction: &str) -> Result<String>;

    /// Model identifier used for completions
    fn model(&self) -> &str;
}
