// src/main.rs

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use sift::config::CONFIG;
use sift::llm::OpenAiProvider;
use sift::server::build_router;
use sift::state::create_app_state;

#[derive(Parser, Debug)]
#[command(name = "sift", about = "Email triage and response drafting service")]
struct Args {
    /// Bind host; overrides SIFT_HOST
    #[arg(long)]
    host: Option<String>,

    /// Bind port; overrides SIFT_PORT
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let level = CONFIG.log_level.parse::<Level>().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Sift");
    info!("Model: {}", CONFIG.model);
    info!("Completion endpoint: {}", CONFIG.openai_base_url);

    // Fails fast when OPENAI_API_KEY is unset: a deployment problem, not
    // something to degrade around at runtime.
    let provider = Arc::new(OpenAiProvider::from_env()?);
    let state = Arc::new(create_app_state(provider));

    let app = build_router(state);

    let host = args.host.unwrap_or_else(|| CONFIG.host.clone());
    let port = args.port.unwrap_or(CONFIG.port);
    let bind_address = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!("Listening on http://{}", bind_address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
