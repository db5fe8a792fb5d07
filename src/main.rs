//! Knowledge-base assistant server - Binary Entry Point
//!
//! Loads configuration from the environment (and `.env`), opens the stored
//! document and serves the HTTP API until Ctrl-C.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use kb_lexical::api::{create_router, AppState};
use kb_lexical::config::Config;
use kb_lexical::error::Result;
use kb_lexical::knowledge_base::KnowledgeBase;
use kb_lexical::logger;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    logger::init(&config.log_level)?;

    let kb = match &config.document_path {
        Some(path) => KnowledgeBase::open(path)?,
        None => KnowledgeBase::new(),
    };
    let kb = Arc::new(kb);

    let state = AppState::from_config(&config, Arc::clone(&kb))?;
    match &state.model {
        Some(model) => info!(model = model.name(), "remote model enabled"),
        None => info!("remote model disabled, answering from the local matcher only"),
    }
    if state.auth.is_none() {
        warn!("KB_ADMIN_PASSWORD not set, knowledge-base updates are open to every client");
    }

    let router = create_router(Arc::new(state));
    let listener = TcpListener::bind(config.bind).await?;

    info!(
        bind = %config.bind,
        entries = kb.len(),
        version = kb_lexical::VERSION,
        "{} listening",
        kb_lexical::NAME
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "failed to listen for shutdown signal");
            }
        })
        .await?;

    info!("server shut down");
    Ok(())
}
