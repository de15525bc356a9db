use std::sync::Arc;

use crate::config::Config;
use crate::contact::notifier::Notifier;
use crate::llm_client::ChatModel;
use crate::persona::builder::PromptCatalog;
use crate::persona::session::PromptSlot;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Prompts built at startup from the persona and resume; never mutated.
    pub prompts: Arc<PromptCatalog>,
    /// The one active system prompt, shared by every chat request.
    pub active_prompt: PromptSlot,
    /// `None` when `DEEPSEEK_API_KEY` is unset.
    pub llm: Option<Arc<dyn ChatModel>>,
    pub notifier: Arc<dyn Notifier>,
}
