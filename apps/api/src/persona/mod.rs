// Persona chat: prompt assembly, the active-prompt slot, and the AI endpoints.
// All LLM calls go through llm_client — no direct DeepSeek calls here.

pub mod builder;
pub mod handlers;
pub mod prompts;
pub mod session;
