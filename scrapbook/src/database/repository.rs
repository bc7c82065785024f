//! Repository layer for database operations
//!
//! Reads serve page rendering; inserts serve fixture import and tests.

use super::models::*;
use crate::error::Result;
use chrono::Utc;
use sqlx::{Executor, Sqlite, SqlitePool, Transaction};
use uuid::Uuid;

/// Repository for database operations
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Start a transaction; dropping it without `commit` rolls back
    pub async fn begin(&self) -> Result<Transaction<'static, Sqlite>> {
        Ok(self.pool.begin().await?)
    }

    /// Create a user
    pub async fn create_user(&self, req: CreateUserRequest) -> Result<User> {
        Self::insert_user(&self.pool, req).await
    }

    /// Create a collection owned by an existing user
    pub async fn create_collection(&self, req: CreateCollectionRequest) -> Result<Collection> {
        Self::insert_collection(&self.pool, req).await
    }

    /// Create a moment in an existing collection
    pub async fn create_moment(&self, req: CreateMomentRequest) -> Result<Moment> {
        Self::insert_moment(&self.pool, req).await
    }

    /// Insert a user through any executor (pool or open transaction)
    pub async fn insert_user<'e, E>(executor: E, req: CreateUserRequest) -> Result<User>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let created_at = req.created_at.unwrap_or_else(Utc::now);

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, created_at)
            VALUES (?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&req.id)
        .bind(&req.name)
        .bind(created_at)
        .fetch_one(executor)
        .await?;

        tracing::debug!("Created user: {}", user.id);
        Ok(user)
    }

    pub async fn insert_collection<'e, E>(
        executor: E,
        req: CreateCollectionRequest,
    ) -> Result<Collection>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let created_at = req.created_at.unwrap_or_else(Utc::now);

        let collection = sqlx::query_as::<_, Collection>(
            r#"
            INSERT INTO collections (id, name, user_id, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&req.id)
        .bind(&req.name)
        .bind(&req.user_id)
        .bind(created_at)
        .fetch_one(executor)
        .await?;

        tracing::debug!("Created collection: {} for user: {}", collection.id, collection.user_id);
        Ok(collection)
    }

    /// Missing ids get a fresh UUID
    pub async fn insert_moment<'e, E>(executor: E, req: CreateMomentRequest) -> Result<Moment>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let id = req.id.unwrap_or_else(|| Uuid::new_v4().to_string());

        let moment = sqlx::query_as::<_, Moment>(
            r#"
            INSERT INTO moments (
                id, collection_id, title, category, content, media_url,
                city, country, started_at, completed_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&id)
        .bind(&req.collection_id)
        .bind(&req.title)
        .bind(&req.category)
        .bind(&req.content)
        .bind(&req.media_url)
        .bind(&req.city)
        .bind(&req.country)
        .bind(req.started_at)
        .bind(req.completed_at)
        .fetch_one(executor)
        .await?;

        tracing::debug!("Created moment: {} in collection: {}", id, moment.collection_id);
        Ok(moment)
    }

    /// Get a collection by ID
    pub async fn get_collection(&self, id: &str) -> Result<Option<Collection>> {
        let collection = sqlx::query_as::<_, Collection>(
            r#"
            SELECT * FROM collections WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(collection)
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT * FROM users WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// List a collection's moments, oldest first
    pub async fn list_moments(&self, collection_id: &str) -> Result<Vec<Moment>> {
        let moments = sqlx::query_as::<_, Moment>(
            r#"
            SELECT * FROM moments
            WHERE collection_id = ?
            ORDER BY started_at ASC, id ASC
            "#,
        )
        .bind(collection_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(moments)
    }

    /// List every collection ID, oldest collection first
    pub async fn list_collection_ids(&self) -> Result<Vec<String>> {
        let ids: Vec<String> =
            sqlx::query_scalar("SELECT id FROM collections ORDER BY created_at ASC, id ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(ids)
    }
}
