mod config;
mod routes;
mod state;

use cookbook::DocSet;

#[tokio::main]
async fn main() {
    // A missing `.env` is fine; the process environment still applies.
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(e) = &dotenv {
        tracing::debug!(error = %e, "no .env loaded");
    }

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let docs = match DocSet::load_dir(&config.docs_dir, config.load_options()) {
        Ok(docs) => docs,
        Err(e) => {
            tracing::error!(error = %e, dir = %config.docs_dir.display(), "failed to load documents");
            std::process::exit(1);
        }
    };
    if docs.is_empty() {
        tracing::warn!(dir = %config.docs_dir.display(), "no documents found");
    }
    tracing::info!(docs = docs.len(), max_depth = config.heading_max_depth, "documents loaded");

    let app = routes::app(state::AppState::new(docs));
    let listener = match tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, port = config.port, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(port = config.port, "cookbook server listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }
}
