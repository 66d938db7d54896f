//! docent-server - REST API server binary.

use std::net::SocketAddr;

use docent_core::error::DocentError;
use docent_core::{AssistantConfig, DocumentAssistant};
use docent_llm::LlmFactory;
use docent_server::{create_server, AppState};
use tokio::signal;
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive(Level::INFO.into())
                .add_directive("docent_server=debug".parse().unwrap()),
        )
        .init();

    // Get configuration from environment
    let host = std::env::var("DOCENT_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("DOCENT_PORT")
        .unwrap_or_else(|_| "8000".to_string())
        .parse()
        .expect("DOCENT_PORT must be a valid port number");

    let config = match std::env::var("DOCENT_CONFIG") {
        Ok(path) => AssistantConfig::from_file(path)?,
        Err(_) => AssistantConfig::default(),
    };

    // Fall back to the offline demo provider when no API key is available,
    // matching the behavior of running without credentials.
    let llm = match LlmFactory::create(config.llm.provider, config.llm.config.clone()) {
        Ok(llm) => llm,
        Err(DocentError::Configuration(message)) => {
            warn!(%message, "LLM provider unavailable, using demo responses");
            LlmFactory::demo()
        }
        Err(e) => return Err(e.into()),
    };
    info!(model = llm.model_name(), "LLM provider ready");

    // Create application state and server
    let assistant = DocumentAssistant::new(llm, config);
    let state = AppState::new(assistant);
    let app = create_server(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Starting docent-server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            info!("Shutdown signal received");
        })
        .await?;

    info!("Server stopped cleanly");
    Ok(())
}
