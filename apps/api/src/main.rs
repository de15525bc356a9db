mod config;
mod contact;
mod errors;
mod extract;
mod llm_client;
mod persona;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::contact::notifier::PushoverClient;
use crate::llm_client::{ChatModel, LlmClient};
use crate::persona::builder::{Persona, PromptCatalog};
use crate::persona::session::PromptSlot;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio API v{}", env!("CARGO_PKG_VERSION"));

    if config.uses_default_secret() && !config.debug {
        warn!("SECRET_KEY is not set; using the development default");
    }

    // The resume is required: without it there is no persona to serve.
    let persona = Persona::load(
        &config.persona_name,
        Path::new(&config.resume_path),
        config.linkedin_path.as_deref().map(Path::new),
    )?;
    let prompts = PromptCatalog::build(&persona);
    info!(
        "Prompt catalog built for {} ({} types, resume {} chars)",
        persona.name,
        PromptCatalog::available().len(),
        persona.resume.len()
    );

    let llm: Option<Arc<dyn ChatModel>> = match &config.deepseek_api_key {
        Some(key) => {
            let client = LlmClient::new(key.clone(), &config.deepseek_base_url)?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(client) as Arc<dyn ChatModel>)
        }
        None => {
            warn!("DEEPSEEK_API_KEY not set; /api/ai endpoints will report a configuration error");
            None
        }
    };

    let notifier = Arc::new(PushoverClient::new(&config.pushover_api_url)?);
    if config.pushover_token.is_none() || config.pushover_user.is_none() {
        warn!("Pushover credentials not set; /api/contact will report a configuration error");
    }

    info!("Frontend URL: {}", config.frontend_url);

    let state = AppState {
        config: config.clone(),
        prompts: Arc::new(prompts),
        active_prompt: PromptSlot::new(),
        llm,
        notifier,
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
