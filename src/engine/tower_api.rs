use async_trait::async_trait;
use uuid::Uuid;

use super::Engine;

use crate::{
    api::TowerAPI,
    entities::{TowerPayload, TowerRecord},
    error::{duplicate_id_error, not_found_error, Error},
    views,
};

#[async_trait]
impl TowerAPI for Engine {
    #[tracing::instrument(skip(self, payload))]
    async fn submit_tower(&self, payload: TowerPayload) -> Result<TowerRecord, Error> {
        let tower = match payload.validate() {
            Ok(tower) => tower,
            Err(err) => {
                tracing::warn!("rejected submission: {}", err.message);
                return Err(err);
            }
        };

        let _guard = self.submission.lock().await;

        let id = match payload.client_id() {
            Some(id) => {
                if let Some(existing) = self.store.find(id).await? {
                    if existing.matches(&tower) {
                        tracing::info!("submission {} already stored", id);
                        return Ok(existing);
                    }
                    tracing::warn!("rejected submission: id {} is taken", id);
                    return Err(duplicate_id_error(id));
                }
                id.to_string()
            }
            None => Uuid::new_v4().to_string(),
        };

        let tower = TowerRecord::new(id, tower);
        self.store.insert(tower.clone()).await?;

        tracing::info!(id = %tower.id, carrier = %tower.carrier, "tower submitted");

        Ok(tower)
    }

    async fn list_towers(&self) -> Result<Vec<TowerRecord>, Error> {
        self.store.all().await
    }

    #[tracing::instrument(skip(self))]
    async fn find_tower(&self, id: &str) -> Result<TowerRecord, Error> {
        self.store
            .find(id)
            .await?
            .ok_or_else(|| not_found_error(id))
    }

    async fn recent_towers(&self, limit: Option<usize>) -> Result<Vec<TowerRecord>, Error> {
        let towers = self.store.all().await?;
        let limit = limit.unwrap_or(self.recent_limit);

        Ok(views::recent(&towers, limit).into_iter().cloned().collect())
    }

    #[tracing::instrument(skip(self))]
    async fn refresh_towers(&self) -> Result<Vec<TowerRecord>, Error> {
        let towers = self.store.refresh().await?;

        let mut selection = self.selection.write().await;
        if let Some(selected) = selection.as_ref() {
            if !towers.iter().any(|t| t.id == selected.id) {
                tracing::info!("selected tower {} is gone, clearing selection", selected.id);
                *selection = None;
            }
        }

        Ok(towers)
    }
}
