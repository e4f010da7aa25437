use async_trait::async_trait;
use reqwest::Response;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use crate::{
    entities::{ApiResponse, TowerRecord},
    error::{submission_rejected_error, upstream_error, Error},
    store::TowerStore,
};

/// Tower store backed by a remote `/towers` API.
///
/// The server owns the collection; this keeps the last successfully fetched
/// copy and only replaces it after a successful refresh. A record the server
/// accepted is appended to the copy even when the refresh after it fails, and
/// a rejected or abandoned submission never changes what callers see.
#[derive(Debug)]
pub struct RemoteStore {
    client: reqwest::Client,
    base_url: String,
    towers: RwLock<Vec<TowerRecord>>,
}

impl RemoteStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            towers: RwLock::new(Vec::new()),
        }
    }

    /// Builds the store and loads the current collection.
    pub async fn connect(base_url: impl Into<String>) -> Result<Self, Error> {
        let store = Self::new(base_url);
        store.refresh().await?;

        Ok(store)
    }

    fn url(&self) -> String {
        format!("{}/towers", self.base_url)
    }
}

#[async_trait]
impl TowerStore for RemoteStore {
    #[tracing::instrument(skip(self, tower), fields(id = %tower.id))]
    async fn insert(&self, tower: TowerRecord) -> Result<(), Error> {
        let res = self.client.post(self.url()).json(&tower).send().await?;

        let stored: TowerRecord = read_envelope(res).await?;

        {
            let mut towers = self.towers.write().await;
            if !towers.iter().any(|t| t.id == stored.id) {
                towers.push(stored);
            }
        }

        // stored upstream from here on
        if let Err(err) = self.refresh().await {
            tracing::warn!("refresh after insert failed: {}", err.message);
        }

        Ok(())
    }

    async fn all(&self) -> Result<Vec<TowerRecord>, Error> {
        Ok(self.towers.read().await.clone())
    }

    async fn find(&self, id: &str) -> Result<Option<TowerRecord>, Error> {
        let towers = self.towers.read().await;

        Ok(towers.iter().find(|t| t.id == id).cloned())
    }

    #[tracing::instrument(skip(self))]
    async fn refresh(&self) -> Result<Vec<TowerRecord>, Error> {
        let res = self.client.get(self.url()).send().await?;

        let towers: Vec<TowerRecord> = read_envelope(res).await?;

        *self.towers.write().await = towers.clone();

        tracing::info!("loaded {} towers from {}", towers.len(), self.base_url);

        Ok(towers)
    }
}

async fn read_envelope<T: DeserializeOwned>(res: Response) -> Result<T, Error> {
    let status_code = res.status().as_u16();

    let envelope: ApiResponse<T> = match res.json().await {
        Ok(envelope) => envelope,
        Err(err) => {
            tracing::warn!("unreadable response (status {}): {}", status_code, err);
            return Err(upstream_error());
        }
    };

    if !envelope.success {
        tracing::warn!("server rejected request: {}", envelope.message);

        if status_code >= 500 {
            return Err(upstream_error());
        }
        return Err(submission_rejected_error(envelope.message));
    }

    envelope.data.ok_or_else(|| upstream_error())
}
