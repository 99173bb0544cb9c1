mod catalog;
mod config;
mod error;
mod handlers;
mod image;
mod inference;
mod metrics;
mod models;
mod prompts;
mod state;

use clap::Parser; // for cli
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Args;
use crate::state::AppState;

// this is main async function with tokio
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // parse cli arguments
    let args = Args::parse();

    // creating shared state
    let state = Arc::new(AppState::from_args(&args));
    let app = handlers::router(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(port = args.port, "screenshot-codegen listening");
    tracing::info!(
        gemini = %args.gemini_base_url,
        together = %args.together_base_url,
        gemini_backup = args.gemini_api_key_backup.is_some(),
        together_backup = args.together_api_key_backup.is_some(),
        "backends configured"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,hyper=warn".into());
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
