//! # newsrank-storage
//!
//! Implementations of [`ScoreStore`](newsrank_core::traits::ScoreStore) and
//! [`ArticleSource`](newsrank_core::traits::ArticleSource):
//! a concurrent in-memory store for tests and embedding, and a SQLite store with
//! versioned migrations for persistent deployments.

pub mod memory;
pub mod sqlite;

use std::path::Path;
use std::sync::Arc;

use newsrank_core::config::{StorageBackend, StorageConfig};
use newsrank_core::errors::{RankError, RankResult, StoreError};
use newsrank_core::traits::{ArticleSource, ScoreStore};

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Shared handles onto one opened backend.
#[derive(Clone)]
pub struct StoreHandle {
    pub scores: Arc<dyn ScoreStore>,
    pub articles: Arc<dyn ArticleSource>,
}

impl StoreHandle {
    fn from_store<S>(store: Arc<S>) -> Self
    where
        S: ScoreStore + ArticleSource + 'static,
    {
        Self {
            scores: store.clone(),
            articles: store,
        }
    }
}

/// Open the backend selected by `config`, seeding default outlet ratings.
pub async fn open_store(config: &StorageConfig) -> RankResult<StoreHandle> {
    match config.backend {
        StorageBackend::Memory => {
            let store = MemoryStore::new();
            store.seed_default_credibility();
            Ok(StoreHandle::from_store(Arc::new(store)))
        }
        StorageBackend::Sqlite => {
            let store = SqliteStore::open(Path::new(&config.db_path))?;
            store.seed_default_credibility().await?;
            Ok(StoreHandle::from_store(Arc::new(store)))
        }
    }
}

/// Wrap a backend failure message as a `RankError`.
pub(crate) fn to_store_err(message: impl Into<String>) -> RankError {
    RankError::Store(StoreError::Backend {
        message: message.into(),
    })
}
