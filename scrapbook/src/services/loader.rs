//! Page data loader
//!
//! Fetches a collection, its owner and its moments. Only a missing
//! collection stops the page; store failures are logged and replaced by an
//! empty result so the viewer still gets a page.

use super::store::ScrapbookStore;
use crate::database::{Collection, Moment, User};
use crate::decoration::{DecorationEngine, MomentDecoration};
use crate::error::{AppError, Result};
use serde::Serialize;
use std::sync::Arc;

/// Everything a collection page shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionPage {
    pub collection: Collection,
    pub user: Option<User>,
    pub moments: Vec<Moment>,
}

/// A moment with its computed decoration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecoratedMoment {
    #[serde(flatten)]
    pub moment: Moment,
    pub decoration: MomentDecoration,
}

impl CollectionPage {
    /// Decorate every moment. Each moment is decorated on its own.
    pub fn decorated_moments(&self, engine: &DecorationEngine) -> Vec<DecoratedMoment> {
        self.moments
            .iter()
            .map(|moment| DecoratedMoment {
                moment: moment.clone(),
                decoration: engine.decorate(&moment.id, moment.category.as_deref()),
            })
            .collect()
    }
}

/// Loads page data from a store
#[derive(Clone)]
pub struct ScrapbookLoader {
    store: Arc<dyn ScrapbookStore>,
}

impl ScrapbookLoader {
    pub fn new(store: Arc<dyn ScrapbookStore>) -> Self {
        Self { store }
    }

    /// Load a collection page.
    ///
    /// Returns `CollectionNotFound` when the collection is absent or cannot
    /// be read. The owner and moments are fetched concurrently once the
    /// collection is known.
    pub async fn load_page(&self, collection_id: &str) -> Result<CollectionPage> {
        let collection = match self.store.collection(collection_id).await {
            Ok(collection) => collection,
            Err(e) => {
                tracing::error!("Error fetching collection {}: {}", collection_id, e);
                None
            }
        };

        let collection =
            collection.ok_or_else(|| AppError::CollectionNotFound(collection_id.to_string()))?;

        let (user, moments) = tokio::join!(
            self.store.user(&collection.user_id),
            self.store.moments(&collection.id)
        );

        let user = user.unwrap_or_else(|e| {
            tracing::error!("Error fetching user {}: {}", collection.user_id, e);
            None
        });

        let moments = moments.unwrap_or_else(|e| {
            tracing::error!("Error fetching moments for {}: {}", collection.id, e);
            Vec::new()
        });

        tracing::debug!(
            "Loaded collection {} with {} moments",
            collection.id,
            moments.len()
        );

        Ok(CollectionPage {
            collection,
            user,
            moments,
        })
    }

    /// Every collection id, or none when the store is unavailable
    pub async fn list_collection_ids(&self) -> Vec<String> {
        self.store.collection_ids().await.unwrap_or_else(|e| {
            tracing::error!("Error fetching collection ids: {}", e);
            Vec::new()
        })
    }
}
