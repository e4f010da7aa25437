use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::entities::TowerRecord;
use crate::error::{duplicate_id_error, Error};

/// Backing collection of tower records, in submission order.
#[async_trait]
pub trait TowerStore {
    /// Appends a record. On error the collection is left untouched.
    async fn insert(&self, tower: TowerRecord) -> Result<(), Error>;

    async fn all(&self) -> Result<Vec<TowerRecord>, Error>;

    async fn find(&self, id: &str) -> Result<Option<TowerRecord>, Error>;

    /// Re-reads the authoritative collection, where there is one.
    async fn refresh(&self) -> Result<Vec<TowerRecord>, Error>;
}

pub type DynStore = Arc<dyn TowerStore + Send + Sync>;

#[derive(Debug, Default)]
pub struct MemoryStore {
    towers: RwLock<Vec<TowerRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_towers(towers: Vec<TowerRecord>) -> Self {
        Self {
            towers: RwLock::new(towers),
        }
    }
}

#[async_trait]
impl TowerStore for MemoryStore {
    #[tracing::instrument(skip(self, tower), fields(id = %tower.id))]
    async fn insert(&self, tower: TowerRecord) -> Result<(), Error> {
        let mut towers = self.towers.write().await;

        if towers.iter().any(|t| t.id == tower.id) {
            return Err(duplicate_id_error(&tower.id));
        }

        towers.push(tower);

        Ok(())
    }

    async fn all(&self) -> Result<Vec<TowerRecord>, Error> {
        Ok(self.towers.read().await.clone())
    }

    async fn find(&self, id: &str) -> Result<Option<TowerRecord>, Error> {
        let towers = self.towers.read().await;

        Ok(towers.iter().find(|t| t.id == id).cloned())
    }

    async fn refresh(&self) -> Result<Vec<TowerRecord>, Error> {
        self.all().await
    }
}
