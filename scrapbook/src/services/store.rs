//! Data store contract
//!
//! The loader only needs four read operations. Keeping them behind a trait
//! lets page assembly run against SQLite in production and against stubs in
//! tests.

use crate::database::{Collection, Moment, Repository, User};
use crate::error::Result;
use async_trait::async_trait;

/// Read-only view of the scrapbook tables
#[async_trait]
pub trait ScrapbookStore: Send + Sync {
    /// Zero or one collection
    async fn collection(&self, id: &str) -> Result<Option<Collection>>;

    /// Zero or one user
    async fn user(&self, id: &str) -> Result<Option<User>>;

    /// Moments of a collection, ascending by start time
    async fn moments(&self, collection_id: &str) -> Result<Vec<Moment>>;

    /// Every collection id
    async fn collection_ids(&self) -> Result<Vec<String>>;
}

#[async_trait]
impl ScrapbookStore for Repository {
    async fn collection(&self, id: &str) -> Result<Option<Collection>> {
        self.get_collection(id).await
    }

    async fn user(&self, id: &str) -> Result<Option<User>> {
        self.get_user(id).await
    }

    async fn moments(&self, collection_id: &str) -> Result<Vec<Moment>> {
        self.list_moments(collection_id).await
    }

    async fn collection_ids(&self) -> Result<Vec<String>> {
        self.list_collection_ids().await
    }
}
