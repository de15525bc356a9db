use std::sync::Arc;

use tokio::sync::RwLock;

use crate::persona::builder::PromptType;

/// The system prompt chat requests are currently answered with.
#[derive(Debug, Clone)]
pub struct ActivePrompt {
    pub prompt_type: PromptType,
    pub text: Arc<str>,
}

/// Single-slot, process-wide prompt store shared by every chat request.
///
/// Empty until the first initialization; each `install` replaces the previous
/// prompt entirely. Readers get a cheap clone and never hold the lock across
/// an upstream call.
#[derive(Debug, Clone, Default)]
pub struct PromptSlot {
    inner: Arc<RwLock<Option<ActivePrompt>>>,
}

impl PromptSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn install(&self, prompt: ActivePrompt) {
        *self.inner.write().await = Some(prompt);
    }

    pub async fn current(&self) -> Option<ActivePrompt> {
        self.inner.read().await.clone()
    }
}
