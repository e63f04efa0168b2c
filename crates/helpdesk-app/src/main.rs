//! Helpdesk application binary - composition root.
//!
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Initialize tracing
//! 3. Load the FAQ corpus (built-in or from file)
//! 4. Start the axum REST API server

mod cli;

use clap::Parser;

use helpdesk_api::state::AppState;
use helpdesk_core::config::HelpdeskConfig;
use helpdesk_core::corpus::FaqCorpus;

use cli::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config is read before tracing so its log level can seed the filter.
    let config_file = args.resolve_config_path();
    let config_found = config_file.exists();
    let mut config = if config_found {
        HelpdeskConfig::load(&config_file)?
    } else {
        HelpdeskConfig::default()
    };

    // Tracing.
    let log_level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
        )
        .init();

    tracing::info!("Starting Helpdesk v{}", env!("CARGO_PKG_VERSION"));
    if config_found {
        tracing::info!(path = %config_file.display(), "Configuration loaded");
    } else {
        tracing::info!(path = %config_file.display(), "No configuration file, using defaults");
    }

    config.server.host = args.resolve_host(&config.server.host);
    config.server.port = args.resolve_port(config.server.port);

    // Corpus.
    let corpus = match config.corpus.file() {
        Some(path) => match FaqCorpus::load(&path) {
            Ok(corpus) => corpus,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to load FAQ corpus");
                return Err(e.into());
            }
        },
        None => {
            let corpus = FaqCorpus::builtin();
            tracing::info!(entries = corpus.len(), "Using built-in FAQ corpus");
            corpus
        }
    };

    // === API server ===

    let state = AppState::new(config.clone(), corpus);
    if let Some(prefix) = config.server.normalized_prefix() {
        tracing::info!(prefix = %prefix, "Routes mounted under prefix");
    }

    if let Err(e) = helpdesk_api::start_server(&config, state).await {
        tracing::error!(addr = %config.server.bind_addr(), error = %e, "API server stopped");
        return Err(e.into());
    }

    Ok(())
}
