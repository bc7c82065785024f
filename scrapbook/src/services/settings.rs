//! Settings service
//!
//! Server settings persisted as a JSON file. Every field has a default, so a
//! partial file (or no file at all) is valid.

use crate::config::{
    DEFAULT_ASSETS_DIR, DEFAULT_BIND_ADDRESS, DEFAULT_DATABASE_PATH, DEFAULT_SITE_DESCRIPTION,
    DEFAULT_SITE_TITLE,
};
use crate::decoration::StickerCatalog;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;

/// Page metadata shown in the document head
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default = "default_site_title")]
    pub title: String,
    #[serde(default = "default_site_description")]
    pub description: String,
}

fn default_site_title() -> String {
    DEFAULT_SITE_TITLE.to_string()
}

fn default_site_description() -> String {
    DEFAULT_SITE_DESCRIPTION.to_string()
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: default_site_title(),
            description: default_site_description(),
        }
    }
}

/// Server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,
    /// Directory served for stickers, favicons and stylesheets
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
    #[serde(default)]
    pub site: SiteSettings,
    /// Sticker images, in selection order
    #[serde(default)]
    pub stickers: StickerCatalog,
}

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

fn default_database_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATABASE_PATH)
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(DEFAULT_ASSETS_DIR)
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            database_path: default_database_path(),
            assets_dir: default_assets_dir(),
            site: SiteSettings::default(),
            stickers: StickerCatalog::default(),
        }
    }
}

/// Service for loading and saving server settings
#[derive(Clone)]
pub struct SettingsService {
    settings_path: PathBuf,
}

impl SettingsService {
    pub fn new(settings_path: PathBuf) -> Self {
        Self { settings_path }
    }

    /// Load settings from disk, falling back to defaults when the file is missing
    pub async fn load(&self) -> Result<ServerSettings> {
        if !self.settings_path.exists() {
            tracing::info!(
                "Settings file {:?} not found, using default settings",
                self.settings_path
            );
            return Ok(ServerSettings::default());
        }

        let content = fs::read_to_string(&self.settings_path).await?;
        let settings: ServerSettings = serde_json::from_str(&content).map_err(|e| {
            AppError::Config(format!(
                "Failed to parse {}: {}",
                self.settings_path.display(),
                e
            ))
        })?;

        if settings.stickers.is_empty() {
            tracing::warn!("Sticker list is empty, cards will have no stickers");
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub async fn save(&self, settings: &ServerSettings) -> Result<()> {
        let content = serde_json::to_string_pretty(settings)?;

        if let Some(parent) = self.settings_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        fs::write(&self.settings_path, content).await?;
        tracing::info!("Settings saved to {:?}", self.settings_path);

        Ok(())
    }
}
