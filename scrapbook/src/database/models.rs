//! Database models
//!
//! Rust structs representing scrapbook entities.
//! All models use serde so they can be served as JSON and imported from fixtures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Person who owns collections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A named, ordered grouping of moments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

/// A single recorded memory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Moment {
    pub id: String,
    pub collection_id: String,
    pub title: String,
    /// Free text, matched case-insensitively when styling
    pub category: Option<String>,
    pub content: Option<String>,
    pub media_url: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Create user request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Create collection request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCollectionRequest {
    pub id: String,
    pub name: String,
    pub user_id: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Create moment request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMomentRequest {
    /// Generated when absent
    #[serde(default)]
    pub id: Option<String>,
    pub collection_id: String,
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}
