//! Services module
//!
//! Business logic services that sit between the HTTP layer and the repository.

pub mod import;
pub mod loader;
pub mod settings;
pub mod store;

pub use import::{Fixture, ImportService, ImportSummary};
pub use loader::{CollectionPage, DecoratedMoment, ScrapbookLoader};
pub use settings::{ServerSettings, SettingsService, SiteSettings};
pub use store::ScrapbookStore;
