//! Application state and initialization
//!
//! This module assembles the shared state handed to every request handler.

use crate::database::{create_pool, Repository};
use crate::decoration::DecorationEngine;
use crate::error::Result;
use crate::services::{ScrapbookLoader, ScrapbookStore, ServerSettings, SiteSettings};
use std::sync::Arc;

/// Central application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub loader: ScrapbookLoader,
    pub engine: Arc<DecorationEngine>,
    pub site: Arc<SiteSettings>,
}

impl AppState {
    pub fn new(store: Arc<dyn ScrapbookStore>, engine: DecorationEngine, site: SiteSettings) -> Self {
        Self {
            loader: ScrapbookLoader::new(store),
            engine: Arc::new(engine),
            site: Arc::new(site),
        }
    }
}

/// Open the database and build the application state from settings
pub async fn setup(settings: &ServerSettings) -> Result<AppState> {
    tracing::info!("Initializing application");

    let pool = create_pool(&settings.database_path).await?;
    let repo = Repository::new(pool);
    let engine = DecorationEngine::new(settings.stickers.clone());

    tracing::info!(
        "Application initialized with {} sticker images",
        settings.stickers.len()
    );

    Ok(AppState::new(Arc::new(repo), engine, settings.site.clone()))
}
