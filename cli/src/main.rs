//! CLI entrypoint for tld-guesser
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tld_guesser_application::PredictTldInput;
use tld_guesser_infrastructure::{
    ArtifactModelCatalog, ConfigLoader, CsvDatasetLoader, FileConfig, FileServerConfig,
};
use tld_guesser_presentation::{
    AppState, Cli, Command, ConsoleFormatter, PredictResponse, QuestionResponse, cors_layer,
    create_router,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let command = cli.command();
    let config = load_config(&cli, &command)?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        println!("\nEffective configuration:\n{}", config.to_toml()?);
        return Ok(());
    }

    // === Dependency Injection ===
    let dataset = Arc::new(
        CsvDatasetLoader::load(&config.dataset.path).context("Could not load gameplay dataset")?,
    );
    let catalog =
        Arc::new(ArtifactModelCatalog::load(&config.models).context("Could not load models")?);
    let state = AppState::new(dataset, catalog, config.game.to_params());

    match command {
        Command::Serve { .. } => serve(state, &config.server).await?,
        Command::Question { json } => {
            let question = QuestionResponse::from(state.generate_question().execute()?);
            if json {
                println!("{}", ConsoleFormatter::format_json(&question)?);
            } else {
                print!("{}", ConsoleFormatter::format_question(&question));
            }
        }
        Command::Predict {
            base_name,
            category,
            json,
        } => {
            let input = PredictTldInput {
                base_name,
                category,
            };
            let prediction = PredictResponse::from(state.predict_tld().execute(input)?);
            if json {
                println!("{}", ConsoleFormatter::format_json(&prediction)?);
            } else {
                print!("{}", ConsoleFormatter::format_prediction(&prediction));
            }
        }
        Command::Categories => {
            let categories = state.list_categories().execute()?;
            print!("{}", ConsoleFormatter::format_categories(&categories));
        }
    }

    Ok(())
}

fn load_config(cli: &Cli, command: &Command) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_without_files()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    }
    .context("Could not load configuration")?;

    if let Command::Serve { host, port } = command {
        if let Some(host) = host {
            config.server.host = *host;
        }
        if let Some(port) = port {
            config.server.port = *port;
        }
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

async fn serve(state: AppState, server: &FileServerConfig) -> Result<()> {
    let cors = cors_layer(&server.cors_origins).context("Invalid CORS origin")?;
    let app = create_router(state, cors);

    let addr = SocketAddr::new(server.host, server.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Could not bind {addr}"))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Could not listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
