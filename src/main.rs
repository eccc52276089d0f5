use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use triviad::{api, auth, config::ServerConfig, corpus::Corpus, state::AppState};

#[tokio::main]
async fn main() {
    // Load .env file if present (before any env var reads)
    if let Err(e) = dotenvy::dotenv() {
        // Not an error if .env doesn't exist, only log if it's a different issue
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "triviad=debug,tower_http=debug,axum=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting triviad...");

    let config = ServerConfig::from_env();

    // Initialize authentication config for the admin routes
    let auth_config = Arc::new(auth::AuthConfig::from_env());

    // Load the question corpus; without it there is nothing to serve
    let corpus = match Corpus::load(&config.corpus_path) {
        Ok(corpus) => Arc::new(corpus),
        Err(e) => {
            tracing::error!("Failed to load question corpus: {}", e);
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState::new(corpus, config.questions_per_game));

    let app = api::router(state, auth_config)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
