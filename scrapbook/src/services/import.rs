//! Fixture import
//!
//! Seeds the store from a JSON document of users, collections and moments.
//! Rows are inserted parents first so foreign keys resolve. The whole fixture
//! is written in one transaction, so a failed import leaves nothing behind.

use crate::database::{
    CreateCollectionRequest, CreateMomentRequest, CreateUserRequest, Repository,
};
use crate::error::{AppError, Result};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// Contents of a fixture file
#[derive(Debug, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub users: Vec<CreateUserRequest>,
    #[serde(default)]
    pub collections: Vec<CreateCollectionRequest>,
    #[serde(default)]
    pub moments: Vec<CreateMomentRequest>,
}

/// Row counts written by an import
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub users: usize,
    pub collections: usize,
    pub moments: usize,
}

/// Service that writes fixtures into the repository
#[derive(Clone)]
pub struct ImportService {
    repo: Repository,
}

impl ImportService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Read and import a fixture file
    pub async fn import_file(&self, path: &Path) -> Result<ImportSummary> {
        tracing::info!("Importing fixture from {:?}", path);

        let content = fs::read_to_string(path).await?;
        let fixture: Fixture = serde_json::from_str(&content)
            .map_err(|e| AppError::Import(format!("Invalid fixture {}: {}", path.display(), e)))?;

        self.import(fixture).await
    }

    /// Import an already parsed fixture
    pub async fn import(&self, fixture: Fixture) -> Result<ImportSummary> {
        let mut summary = ImportSummary::default();

        // Dropping `tx` on an early return rolls every insert back
        let mut tx = self.repo.begin().await?;

        for user in fixture.users {
            let id = user.id.clone();
            Repository::insert_user(&mut *tx, user)
                .await
                .map_err(|e| AppError::Import(format!("user {}: {}", id, e)))?;
            summary.users += 1;
        }

        for collection in fixture.collections {
            let id = collection.id.clone();
            Repository::insert_collection(&mut *tx, collection)
                .await
                .map_err(|e| AppError::Import(format!("collection {}: {}", id, e)))?;
            summary.collections += 1;
        }

        for moment in fixture.moments {
            let label = moment.id.clone().unwrap_or_else(|| moment.title.clone());
            Repository::insert_moment(&mut *tx, moment)
                .await
                .map_err(|e| AppError::Import(format!("moment {}: {}", label, e)))?;
            summary.moments += 1;
        }

        tx.commit().await?;

        tracing::info!(
            "Imported {} users, {} collections, {} moments",
            summary.users,
            summary.collections,
            summary.moments
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::initialize_database;
    use sqlx::sqlite::SqlitePoolOptions;
    use tempfile::TempDir;

    const FIXTURE: &str = r#"{
        "users": [{ "id": "u1", "name": "Ada" }],
        "collections": [
            { "id": "c1", "name": "Paris", "user_id": "u1", "created_at": "2024-01-05T10:00:00Z" }
        ],
        "moments": [
            {
                "id": "m1",
                "collection_id": "c1",
                "title": "Eiffel Tower",
                "category": "Milestone",
                "city": "Paris",
                "country": "France",
                "started_at": "2024-01-06T09:00:00Z"
            },
            {
                "collection_id": "c1",
                "title": "Croissants",
                "started_at": "2024-01-07T08:00:00Z",
                "completed_at": "2024-01-07T09:00:00Z"
            }
        ]
    }"#;

    async fn create_test_service() -> (ImportService, Repository) {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        initialize_database(&pool).await.unwrap();

        let repo = Repository::new(pool);
        (ImportService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_import_fixture() {
        let (service, repo) = create_test_service().await;
        let fixture: Fixture = serde_json::from_str(FIXTURE).unwrap();

        let summary = service.import(fixture).await.unwrap();

        assert_eq!(
            summary,
            ImportSummary {
                users: 1,
                collections: 1,
                moments: 2
            }
        );

        let moments = repo.list_moments("c1").await.unwrap();
        assert_eq!(moments[0].id, "m1");
        assert_eq!(moments[0].category.as_deref(), Some("Milestone"));
        assert_eq!(moments[1].title, "Croissants");
        assert!(!moments[1].id.is_empty());
        assert!(moments[1].completed_at.is_some());
    }

    #[tokio::test]
    async fn test_import_file() {
        let (service, repo) = create_test_service().await;
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("fixture.json");
        std::fs::write(&path, FIXTURE).unwrap();

        service.import_file(&path).await.unwrap();

        assert_eq!(repo.list_collection_ids().await.unwrap(), vec!["c1"]);
    }

    #[tokio::test]
    async fn test_dangling_collection_names_row() {
        let (service, _repo) = create_test_service().await;
        let fixture: Fixture = serde_json::from_str(
            r#"{ "collections": [{ "id": "lonely", "name": "x", "user_id": "ghost" }] }"#,
        )
        .unwrap();

        let err = service.import(fixture).await.unwrap_err();

        assert!(matches!(&err, AppError::Import(msg) if msg.starts_with("collection lonely")));
    }

    #[tokio::test]
    async fn test_failed_import_leaves_no_rows() {
        let (service, repo) = create_test_service().await;
        let broken: Fixture = serde_json::from_str(
            r#"{
                "users": [{ "id": "u1", "name": "Ada" }],
                "collections": [
                    { "id": "c1", "name": "Paris", "user_id": "u1" },
                    { "id": "c2", "name": "Rome", "user_id": "ghost" }
                ]
            }"#,
        )
        .unwrap();

        let err = service.import(broken).await.unwrap_err();
        assert!(matches!(&err, AppError::Import(msg) if msg.starts_with("collection c2")));

        assert!(repo.get_user("u1").await.unwrap().is_none());
        assert!(repo.get_collection("c1").await.unwrap().is_none());
        assert!(repo.list_collection_ids().await.unwrap().is_empty());

        // A corrected fixture imports cleanly afterwards
        let fixed: Fixture = serde_json::from_str(FIXTURE).unwrap();
        let summary = service.import(fixed).await.unwrap();
        assert_eq!(summary.users, 1);
        assert_eq!(repo.list_collection_ids().await.unwrap(), vec!["c1"]);
    }

    #[tokio::test]
    async fn test_invalid_json_is_import_error() {
        let (service, _repo) = create_test_service().await;
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        std::fs::write(&path, "[1, 2").unwrap();

        let result = service.import_file(&path).await;

        assert!(matches!(result, Err(AppError::Import(_))));
    }
}
