// Scrapbook - renders collections of moments as decorated scrapbook pages
// Entry point and command dispatch

use anyhow::Context;
use clap::{Parser, Subcommand};
use scrapbook::config::DEFAULT_CONFIG_PATH;
use scrapbook::database::{create_pool, Repository};
use scrapbook::services::{ImportService, ScrapbookLoader, ServerSettings, SettingsService};
use scrapbook::{app, http};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "scrapbook", version, about = "Serve scrapbook pages of collected moments")]
struct Cli {
    /// Settings file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the web server (default)
    Serve {
        /// Address to listen on, overrides the settings file
        #[arg(long)]
        bind: Option<String>,
        /// SQLite database path, overrides the settings file
        #[arg(long)]
        database: Option<PathBuf>,
    },
    /// Load users, collections and moments from a JSON fixture
    Import {
        file: PathBuf,
        #[arg(long)]
        database: Option<PathBuf>,
    },
    /// Print every collection id, one per line
    Ids {
        #[arg(long)]
        database: Option<PathBuf>,
    },
    /// Write a settings file with default values
    InitConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scrapbook=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let settings_service = SettingsService::new(cli.config.clone());
    let mut settings = settings_service
        .load()
        .await
        .with_context(|| format!("loading settings from {}", cli.config.display()))?;

    let command = cli.command.unwrap_or(Command::Serve {
        bind: None,
        database: None,
    });

    match command {
        Command::Serve { bind, database } => {
            if let Some(bind) = bind {
                settings.bind_address = bind;
            }
            if let Some(database) = database {
                settings.database_path = database;
            }
            serve(settings).await
        }
        Command::Import { file, database } => {
            if let Some(database) = database {
                settings.database_path = database;
            }
            let pool = create_pool(&settings.database_path).await?;
            let summary = ImportService::new(Repository::new(pool))
                .import_file(&file)
                .await?;
            println!(
                "Imported {} users, {} collections, {} moments",
                summary.users, summary.collections, summary.moments
            );
            Ok(())
        }
        Command::Ids { database } => {
            if let Some(database) = database {
                settings.database_path = database;
            }
            let pool = create_pool(&settings.database_path).await?;
            let loader = ScrapbookLoader::new(Arc::new(Repository::new(pool)));
            // An unreadable store prints nothing, same as the index page
            for id in loader.list_collection_ids().await {
                println!("{}", id);
            }
            Ok(())
        }
        Command::InitConfig => {
            settings_service.save(&ServerSettings::default()).await?;
            println!("Wrote default settings to {}", cli.config.display());
            Ok(())
        }
    }
}

async fn serve(settings: ServerSettings) -> anyhow::Result<()> {
    tracing::info!("Starting scrapbook server");

    let state = app::setup(&settings).await?;
    let router = http::router(state, &settings.assets_dir);

    let listener = tokio::net::TcpListener::bind(&settings.bind_address)
        .await
        .with_context(|| format!("binding {}", settings.bind_address))?;

    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
